//! Human-readable summary renderer for configuration diffs.

use serde_json::Value;

use crate::diff::model::{ChangeKind, DiffResult, ObjectChange};

/// Render a human-readable Markdown summary of a [`DiffResult`].
///
/// The summary is intended for review workflows and report headers. It is
/// informational only and carries strictly less detail than the structured
/// result. Output is a pure function of the input.
pub fn render_human_summary(diff: &DiffResult) -> String {
    let mut out = String::new();

    // Header
    out.push_str("## Configuration Diff\n\n");
    out.push_str(&format!(
        "**A**: {}  \n**B**: {}\n\n",
        diff.file_a_name, diff.file_b_name
    ));

    if !diff.has_changes() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    // Totals across all kinds
    let total_added: usize = diff.summary().values().map(|s| s.added).sum();
    let total_removed: usize = diff.summary().values().map(|s| s.removed).sum();
    let total_modified: usize = diff.summary().values().map(|s| s.modified).sum();
    out.push_str(&format!(
        "**Totals**: +{total_added} added, -{total_removed} removed, ~{total_modified} modified\n\n"
    ));

    // One section per kind, in presentation order
    for object_type in diff.object_types_with_changes() {
        let changes = diff.changes_by_type(&object_type);
        out.push_str(&format!(
            "### {} ({})\n\n",
            section_title(&object_type),
            changes.len()
        ));
        for change in &changes {
            push_change(&mut out, change);
        }
        out.push('\n');
    }

    out
}

fn push_change(out: &mut String, change: &ObjectChange) {
    match change.change_type {
        ChangeKind::Added => {
            out.push_str(&format!("- [+] **{}**{}\n", change.object_name, badges(change)));
        }
        ChangeKind::Removed => {
            out.push_str(&format!("- [-] **{}**{}\n", change.object_name, badges(change)));
        }
        ChangeKind::Modified => {
            out.push_str(&format!(
                "- [~] **{}** ({})\n",
                change.object_name,
                change_count_label(change.total_changes())
            ));
            push_details(out, change, 1);
        }
    }
}

/// Field transitions, then nested records grouped by change kind. Modified
/// nested records recurse, so a changed transition shows up under its task.
fn push_details(out: &mut String, change: &ObjectChange, depth: usize) {
    let pad = "  ".repeat(depth);
    for field_change in &change.field_changes {
        out.push_str(&format!(
            "{pad}- {}: {} → {}\n",
            field_change.field_name,
            field_change.display_old_value(),
            field_change.display_new_value()
        ));
    }

    let groups = [
        ("Added", change.nested_added()),
        ("Removed", change.nested_removed()),
        ("Modified", change.nested_modified()),
    ];
    for (label, group) in groups {
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "{pad}- {label} {}s ({}):\n",
            group[0].object_type,
            group.len()
        ));
        for nested in group {
            if nested.change_type == ChangeKind::Modified {
                out.push_str(&format!(
                    "{pad}  - **{}** ({})\n",
                    nested.object_name,
                    change_count_label(nested.total_changes())
                ));
                push_details(out, nested, depth + 2);
            } else {
                out.push_str(&format!("{pad}  - **{}**{}\n", nested.object_name, badges(nested)));
            }
        }
    }
}

fn change_count_label(count: usize) -> String {
    if count == 1 {
        "1 change".to_string()
    } else {
        format!("{count} changes")
    }
}

/// Compact parenthesized annotations from a record's extra info, e.g.
/// `(type: Cabinet)` or `(3 permissions)`. Grant target coordinates are
/// already encoded in the record id and are skipped, as is anything empty.
fn badges(change: &ObjectChange) -> String {
    let mut parts = Vec::new();
    for (key, value) in &change.extra_info {
        if key == "obj_type" || key == "obj_no" {
            continue;
        }
        match value {
            Value::Bool(true) => parts.push(key.clone()),
            Value::String(text) if !text.is_empty() => parts.push(format!("{key}: {text}")),
            Value::Array(items) if !items.is_empty() => {
                parts.push(format!("{} {}", items.len(), key));
            }
            Value::Number(number) if number.as_i64() != Some(0) => {
                parts.push(format!("{key}: {number}"));
            }
            _ => {}
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Section title for one entity kind. Unrecognized kinds render verbatim.
fn section_title(object_type: &str) -> &str {
    match object_type {
        "Category" => "Categories",
        "CaseDefinition" => "Case Definitions",
        "Workflow" => "Workflows",
        "Role" => "Roles",
        "User" => "Users",
        "Group" => "Groups",
        "Folder" => "Folders",
        "EForm" => "EForms",
        "Query" => "Queries",
        "Dictionary" => "Dictionaries",
        "TreeView" => "Tree Views",
        "Counter" => "Counters",
        "DataType" => "Data Types",
        "Stamp" => "Stamps",
        "RetentionPolicy" => "Retention Policies",
        "RoleAssignment" => "Security Assignments",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compare_snapshots_with_labels;
    use crate::diff::model::{FieldChange, FieldValue};
    use crate::model::Snapshot;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> Snapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn identical_snapshots_render_the_quiet_line() {
        let a = snapshot(json!({
            "version": "1.0",
            "categories": [{"category_no": 1, "name": "Invoices"}]
        }));
        let diff = compare_snapshots_with_labels(&a, &a, "prod.json", "dev.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("## Configuration Diff"));
        assert!(s.contains("**A**: prod.json"));
        assert!(s.contains("**B**: dev.json"));
        assert!(s.contains("_No differences detected._"));
        assert!(!s.contains("Totals"));
    }

    #[test]
    fn totals_line_sums_all_kinds() {
        let a = snapshot(json!({
            "version": "1.0",
            "users": [{"user_no": 7, "user_name": "jsmith", "user_type": 1}]
        }));
        let b = snapshot(json!({
            "version": "1.0",
            "categories": [{"category_no": 1, "name": "Invoices"}]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("**Totals**: +1 added, -1 removed, ~0 modified"));
    }

    #[test]
    fn sections_appear_in_presentation_order_with_plural_titles() {
        let a = snapshot(json!({"version": "1.0"}));
        let b = snapshot(json!({
            "version": "1.0",
            "categories": [{"category_no": 1, "name": "Invoices"}],
            "workflows": [{"process_no": 2, "name": "Approval"}],
            "role_assignments": [{
                "role_no": 3, "obj_type": 1, "obj_no": 1, "user_no": 7,
                "role_name": "Editor", "user_name": "jsmith"
            }]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);

        let categories = s.find("### Categories (1)").unwrap();
        let workflows = s.find("### Workflows (1)").unwrap();
        let assignments = s.find("### Security Assignments (1)").unwrap();
        assert!(categories < workflows);
        assert!(workflows < assignments);
        assert!(s.contains("- [+] **Editor → jsmith**"));
    }

    #[test]
    fn modified_entries_list_field_transitions() {
        let a = snapshot(json!({
            "version": "1.0",
            "categories": [{"category_no": 1, "name": "Contracts", "checkin_mode": 1}]
        }));
        let b = snapshot(json!({
            "version": "1.0",
            "categories": [{"category_no": 1, "name": "Contracts", "checkin_mode": 2}]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("- [~] **Contracts** (1 change)"));
        assert!(s.contains("  - Check-in Mode: 1 → 2"));
    }

    #[test]
    fn added_entries_carry_extra_badges() {
        let a = snapshot(json!({"version": "1.0"}));
        let b = snapshot(json!({
            "version": "1.0",
            "roles": [{
                "role_no": 1, "name": "Approvers", "is_deny": true,
                "permission_names": ["Read", "Write", "Delete"]
            }],
            "counters": [{
                "counter_no": 4, "name": "Invoice Number",
                "counter_type_name": "Yearly", "format_string": "INV-{Y}-{N}"
            }]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("- [+] **Approvers** (is_deny, 3 permissions)"));
        assert!(s.contains("- [+] **Invoice Number** (format: INV-{Y}-{N}, type: Yearly)"));
    }

    #[test]
    fn nested_changes_group_under_their_parent() {
        let a = snapshot(json!({
            "version": "1.0",
            "workflows": [{
                "process_no": 1, "name": "Approval",
                "tasks": [{"task_no": 1, "name": "Review", "seq_pos": 1}]
            }]
        }));
        let b = snapshot(json!({
            "version": "1.0",
            "workflows": [{
                "process_no": 1, "name": "Approval",
                "tasks": [
                    {"task_no": 1, "name": "Review", "seq_pos": 2},
                    {"task_no": 2, "name": "Escalate", "type_name": "Automatic"}
                ]
            }]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("- Added Tasks (1):"));
        assert!(s.contains("- **Escalate** (type: Automatic)"));
        assert!(s.contains("- Modified Tasks (1):"));
        assert!(s.contains("- **Review** (1 change)"));
        assert!(s.contains("- Position: 1 → 2"));
    }

    #[test]
    fn transition_changes_render_beneath_their_task() {
        let a = snapshot(json!({
            "version": "1.0",
            "workflows": [{
                "process_no": 1, "name": "Approval",
                "tasks": [{
                    "task_no": 1, "name": "Review",
                    "transitions": [{"action_text": "Approve", "task_to_no": 2}]
                }]
            }]
        }));
        let b = snapshot(json!({
            "version": "1.0",
            "workflows": [{
                "process_no": 1, "name": "Approval",
                "tasks": [{
                    "task_no": 1, "name": "Review",
                    "transitions": [
                        {"action_text": "Approve", "task_to_no": 2},
                        {"action_text": "Reject", "task_to_no": 3}
                    ]
                }]
            }]
        }));
        let diff = compare_snapshots_with_labels(&a, &b, "a.json", "b.json");
        let s = render_human_summary(&diff);
        assert!(s.contains("- Modified Tasks (1):"));
        assert!(s.contains("- Added Transitions (1):"));
        assert!(s.contains("- **Reject**"));
    }

    #[test]
    fn unknown_kinds_render_verbatim() {
        let diff = DiffResult::new(
            "a.json",
            "b.json",
            vec![ObjectChange::added(
                "Widget",
                "Gadget".to_string(),
                "w1".to_string(),
            )],
        );
        let s = render_human_summary(&diff);
        assert!(s.contains("### Widget (1)"));
    }

    #[test]
    fn long_values_render_truncated() {
        let long = "x".repeat(150);
        let change = ObjectChange::modified("Query", "Search".to_string(), "q1".to_string())
            .with_field_changes(vec![FieldChange::modified(
                "description",
                FieldValue::None,
                FieldValue::text(&long),
            )]);
        let diff = DiffResult::new("a.json", "b.json", vec![change]);
        let s = render_human_summary(&diff);
        let expected = format!("  - description: (none) → {}...", "x".repeat(100));
        assert!(s.contains(&expected));
    }
}
