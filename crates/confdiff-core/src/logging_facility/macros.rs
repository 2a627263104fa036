//! Canonical logging macros.
//!
//! Every operation logs through these three macros so that all events
//! carry the same field set (`component`, `op`, `event`) and remain
//! queryable regardless of which module emitted them.

/// Log the start of an operation.
///
/// # Example
///
/// ```
/// # use confdiff_core::log_op_start;
/// log_op_start!("compare_snapshots");
/// log_op_start!("compare_snapshots", entity_count_a = 42_usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation. Requires `duration_ms` as
/// the first extra field.
///
/// # Example
///
/// ```
/// # use confdiff_core::log_op_end;
/// log_op_end!("compare_snapshots", duration_ms = 12_u64);
/// log_op_end!("compare_snapshots", duration_ms = 12_u64, change_count = 3_usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation. Converts the error into [`CdError`] so the
/// kind and stable code are always present on the event.
///
/// [`CdError`]: crate::errors::CdError
///
/// # Example
///
/// ```ignore
/// log_op_error!("load_snapshot", err);
/// log_op_error!("load_snapshot", err, object_id = "cat-7");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        use $crate::errors::CdError;
        let cd_err: CdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_END_ERROR,
            err.kind = ?cd_err.kind(),
            err.code = cd_err.code(),
            error = %cd_err,
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        use $crate::errors::CdError;
        let cd_err: CdError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = confdiff_core_types::schema::EVENT_END_ERROR,
            err.kind = ?cd_err.kind(),
            err.code = cd_err.code(),
            error = %cd_err,
            $($field)*
        );
    }};
}
