//! Snapshot comparison entry points.
//!
//! The engine runs every kind comparator in a fixed order, so the change
//! list of a [`DiffResult`] is deterministic for a given input pair. Object
//! security grants run last: their names resolve against accounts and roles
//! that earlier sections may have already reported.

use std::time::Instant;

use confdiff_core_types::RunId;

use crate::diff::comparators::{category, content, security, workflow};
use crate::diff::model::DiffResult;
use crate::model::Snapshot;
use crate::{log_op_end, log_op_start};

const LABEL_A: &str = "Configuration A";
const LABEL_B: &str = "Configuration B";

/// Compare two snapshots under the default side labels.
pub fn compare_snapshots(a: &Snapshot, b: &Snapshot) -> DiffResult {
    compare_snapshots_with_labels(a, b, LABEL_A, LABEL_B)
}

/// Compare two snapshots, labeling the sides for reports.
///
/// Labels are typically the export file names. They flow into the result
/// verbatim and never affect matching.
pub fn compare_snapshots_with_labels(
    a: &Snapshot,
    b: &Snapshot,
    label_a: &str,
    label_b: &str,
) -> DiffResult {
    let run_id = RunId::new();
    let started = Instant::now();
    let stats_a = a.statistics();
    let stats_b = b.statistics();
    log_op_start!(
        "compare_snapshots",
        run_id = %run_id,
        label_a = label_a,
        label_b = label_b,
        entity_count_a = stats_a.total_entities(),
        entity_count_b = stats_b.total_entities()
    );

    let mut changes = Vec::new();
    changes.extend(category::compare_categories(a, b));
    changes.extend(category::compare_case_definitions(a, b));
    changes.extend(workflow::compare_workflows(a, b));
    changes.extend(security::compare_roles(a, b));
    changes.extend(security::compare_users(a, b));
    changes.extend(content::compare_folders(a, b));
    changes.extend(content::compare_eforms(a, b));
    changes.extend(content::compare_queries(a, b));
    changes.extend(content::compare_dictionaries(a, b));
    changes.extend(content::compare_tree_views(a, b));
    changes.extend(content::compare_counters(a, b));
    changes.extend(content::compare_data_types(a, b));
    changes.extend(content::compare_stamps(a, b));
    changes.extend(content::compare_retention_policies(a, b));
    changes.extend(security::compare_role_assignments(a, b));

    let result = DiffResult::new(label_a, label_b, changes);

    log_op_end!(
        "compare_snapshots",
        duration_ms = started.elapsed().as_millis() as u64,
        run_id = %run_id,
        change_count = result.total_changes()
    );
    result
}
