//! Configuration diff engine for document management system exports
//!
//! This crate compares two JSON configuration snapshots and reports every
//! added, removed, and modified entity, including:
//! - Multi-strategy entity matching (string id, numeric key, name)
//! - Declarative per-kind field comparison tables
//! - Nested comparison for category fields, workflow tasks and transitions,
//!   and dictionary keywords
//! - Deterministic set diffs for object security grants
//! - A structured, serializable result model plus a Markdown renderer
//!
//! Matching never fails: snapshots of arbitrary shape produce a result, and
//! errors only arise when decoding snapshot bytes.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{compare_snapshots, compare_snapshots_with_labels, render_human_summary};
pub use diff::{ChangeKind, DiffResult, DiffSummary, FieldChange, FieldValue, ObjectChange};
pub use errors::{CdError, CdErrorKind, ConfDiffError, Result};
pub use model::Snapshot;
