//! Configuration diff engine.
//!
//! Compares two parsed configuration snapshots and produces a structured,
//! deterministic diff suitable for downstream renderers and review tools.
//!
//! ## Entry point
//!
//! ```ignore
//! use confdiff_core::diff::engine::compare_snapshots;
//!
//! let diff = compare_snapshots(&snapshot_a, &snapshot_b);
//! let summary = confdiff_core::diff::human_summary::render_human_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical structured
//!   output; set-keyed comparisons iterate in sorted key order.
//! - **Blank-noise suppression**: a field going between empty string and
//!   unset is never reported as a change.
//! - **No empty modified records**: a matched pair with no field or nested
//!   differences produces no change record at all.
//! - **Graceful matching**: an entity that matches by none of the key
//!   strategies is reported as removed or added, never as an error.

pub mod comparators;
pub mod engine;
pub mod fields;
pub mod human_summary;
pub mod matcher;
pub mod model;

pub use engine::{compare_snapshots, compare_snapshots_with_labels};
pub use human_summary::render_human_summary;
pub use model::{ChangeKind, DiffResult, DiffSummary, FieldChange, FieldValue, ObjectChange};
