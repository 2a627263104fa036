//! Logging facility for confdiff
//!
//! Provides structured, profile-based logging built on `tracing`:
//!
//! - **Profiles**: Development (human-readable), Production (JSON), Test (capture)
//! - **Canonical macros**: `log_op_start!`, `log_op_end!`, `log_op_error!`
//! - **Test capture**: in-memory event capture for deterministic assertions
//!
//! All events carry the canonical fields from `confdiff_core_types::schema`
//! (`component`, `op`, `event`, …) so logs stay machine-parseable across
//! every surface.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture, TestCaptureLayer};
