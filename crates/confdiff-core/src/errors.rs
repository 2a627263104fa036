use confdiff_core_types::{RunId, TraceId};
use thiserror::Error;

/// Result type alias using ConfDiffError
pub type Result<T> = std::result::Result<T, ConfDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the confdiff system. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and external API responses.
///
/// The diff engine itself is infallible; these kinds classify failures at the
/// surfaces around it (today, the snapshot JSON codec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdErrorKind {
    // Snapshot decoding
    /// Snapshot bytes are not valid UTF-8 JSON, the root is not an object,
    /// or `version` is the wrong type
    InvalidSnapshot,

    // Integration/IO
    Serialization,
    Io,

    // Internal
    Internal,
}

impl CdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            CdErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            CdErrorKind::Serialization => "ERR_SERIALIZATION",
            CdErrorKind::Io => "ERR_IO",
            CdErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct CdError {
    kind: CdErrorKind,
    op: Option<String>,
    object_id: Option<String>,
    run_id: Option<RunId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<CdError>>,
}

impl CdError {
    /// Create a new error with the specified kind
    pub fn new(kind: CdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            object_id: None,
            run_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add object ID context
    pub fn with_object_id(mut self, id: impl Into<String>) -> Self {
        self.object_id = Some(id.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: CdError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> CdErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the object ID context, if any
    pub fn object_id(&self) -> Option<&str> {
        self.object_id.as_deref()
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&CdError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for CdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(object_id) = &self.object_id {
            write!(f, " (object_id: {})", object_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for CdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for confdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfDiffError {
    // ===== Snapshot Decoding Errors =====
    /// Snapshot bytes could not be understood as a configuration export
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    // ===== Integration Errors =====
    /// Serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O failure reported by an embedding application
    #[error("I/O error: {message}")]
    Io { message: String },

    // ===== Internal Errors =====
    /// Invariant violation that indicates a bug
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<serde_json::Error> for ConfDiffError {
    fn from(err: serde_json::Error) -> Self {
        ConfDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Map the public error taxonomy onto the structured error facility
impl From<ConfDiffError> for CdError {
    fn from(err: ConfDiffError) -> Self {
        match &err {
            ConfDiffError::InvalidSnapshot { message } => {
                CdError::new(CdErrorKind::InvalidSnapshot).with_message(message.clone())
            }
            ConfDiffError::Serialization { message } => {
                CdError::new(CdErrorKind::Serialization).with_message(message.clone())
            }
            ConfDiffError::Io { message } => {
                CdError::new(CdErrorKind::Io).with_message(message.clone())
            }
            ConfDiffError::Internal { message } => {
                CdError::new(CdErrorKind::Internal).with_message(message.clone())
            }
        }
    }
}
