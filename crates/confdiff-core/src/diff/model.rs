//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections use `BTreeMap` and sorted `Vec`s wherever ordering is
//! observable, for deterministic serialization.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

/// Kind labels for [`ObjectChange::object_type`].
///
/// The set is open: `object_type` is a plain string so embedders can diff
/// kinds this crate does not know about. Unknown kinds sort after the
/// known ones in presentation order.
pub mod kind {
    pub const CATEGORY: &str = "Category";
    pub const FIELD: &str = "Field";
    pub const CASE_DEFINITION: &str = "CaseDefinition";
    pub const WORKFLOW: &str = "Workflow";
    pub const TASK: &str = "Task";
    pub const TRANSITION: &str = "Transition";
    pub const ROLE: &str = "Role";
    pub const USER: &str = "User";
    pub const GROUP: &str = "Group";
    pub const FOLDER: &str = "Folder";
    pub const EFORM: &str = "EForm";
    pub const QUERY: &str = "Query";
    pub const DICTIONARY: &str = "Dictionary";
    pub const KEYWORD: &str = "Keyword";
    pub const TREE_VIEW: &str = "TreeView";
    pub const COUNTER: &str = "Counter";
    pub const DATA_TYPE: &str = "DataType";
    pub const STAMP: &str = "Stamp";
    pub const RETENTION_POLICY: &str = "RetentionPolicy";
    pub const ROLE_ASSIGNMENT: &str = "RoleAssignment";

    /// Presentation order for top-level kinds.
    pub const DISPLAY_ORDER: [&str; 16] = [
        CATEGORY,
        CASE_DEFINITION,
        WORKFLOW,
        ROLE,
        USER,
        GROUP,
        FOLDER,
        EFORM,
        QUERY,
        DICTIONARY,
        TREE_VIEW,
        COUNTER,
        DATA_TYPE,
        STAMP,
        RETENTION_POLICY,
        ROLE_ASSIGNMENT,
    ];
}

/// Kind-specific context attached to added/removed records
/// (e.g. a removed category's field count).
pub type ExtraInfo = BTreeMap<String, serde_json::Value>;

/// How an object or field differs between the two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        };
        f.write_str(label)
    }
}

/// A field value captured for comparison and display.
///
/// Serializes untagged: values appear as plain JSON null/bool/number/
/// string/array, which keeps diff output readable for other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    None,
    Bool(bool),
    Int(i64),
    Text(String),
    TextList(Vec<String>),
}

impl FieldValue {
    /// Text value from a borrowed string.
    pub fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    /// Optional numeric reference; absent becomes [`FieldValue::None`].
    pub fn opt_int(value: Option<i64>) -> FieldValue {
        match value {
            Some(value) => FieldValue::Int(value),
            None => FieldValue::None,
        }
    }

    /// Render this value for human-readable output. Long text is
    /// truncated, lists are summarized past three entries.
    pub fn display(&self) -> String {
        match self {
            FieldValue::None => "(none)".to_string(),
            FieldValue::Bool(true) => "Yes".to_string(),
            FieldValue::Bool(false) => "No".to_string(),
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Text(value) => {
                if value.chars().count() > 100 {
                    let prefix: String = value.chars().take(100).collect();
                    format!("{}...", prefix)
                } else {
                    value.clone()
                }
            }
            FieldValue::TextList(values) => match values.len() {
                0 => "(empty list)".to_string(),
                1..=3 => values.join(", "),
                n => format!("{} items", n),
            },
        }
    }
}

/// One changed attribute of a matched pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Display name of the field
    pub field_name: String,
    /// Normalized value on the A side
    pub old_value: FieldValue,
    /// Normalized value on the B side
    pub new_value: FieldValue,
    /// Always `Modified`: a field change only exists on matched pairs
    pub change_type: ChangeKind,
}

impl FieldChange {
    pub fn modified(field_name: &str, old_value: FieldValue, new_value: FieldValue) -> Self {
        Self {
            field_name: field_name.to_string(),
            old_value,
            new_value,
            change_type: ChangeKind::Modified,
        }
    }

    pub fn display_old_value(&self) -> String {
        self.old_value.display()
    }

    pub fn display_new_value(&self) -> String {
        self.new_value.display()
    }
}

/// The unit of reported difference for one entity instance.
///
/// `nested_changes` makes the tree arbitrarily deep: a category change
/// nests field changes, a workflow change nests task changes which nest
/// transition changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectChange {
    /// Entity kind label, see [`kind`]
    pub object_type: String,
    /// Human-readable name of the affected object
    pub object_name: String,
    /// Stable identifier of the affected object
    pub object_id: String,
    pub change_type: ChangeKind,
    /// Field-level changes (only on modified records)
    pub field_changes: Vec<FieldChange>,
    /// Changes within nested collections (only on modified records)
    pub nested_changes: Vec<ObjectChange>,
    /// Kind-specific context (only on added/removed records)
    pub extra_info: ExtraInfo,
}

impl ObjectChange {
    pub fn added(object_type: &str, object_name: String, object_id: String) -> Self {
        Self::new(object_type, object_name, object_id, ChangeKind::Added)
    }

    pub fn removed(object_type: &str, object_name: String, object_id: String) -> Self {
        Self::new(object_type, object_name, object_id, ChangeKind::Removed)
    }

    pub fn modified(object_type: &str, object_name: String, object_id: String) -> Self {
        Self::new(object_type, object_name, object_id, ChangeKind::Modified)
    }

    fn new(object_type: &str, object_name: String, object_id: String, change_type: ChangeKind) -> Self {
        Self {
            object_type: object_type.to_string(),
            object_name,
            object_id,
            change_type,
            field_changes: Vec::new(),
            nested_changes: Vec::new(),
            extra_info: ExtraInfo::new(),
        }
    }

    pub fn with_extra_info(mut self, extra_info: ExtraInfo) -> Self {
        self.extra_info = extra_info;
        self
    }

    pub fn with_field_changes(mut self, field_changes: Vec<FieldChange>) -> Self {
        self.field_changes = field_changes;
        self
    }

    pub fn with_nested_changes(mut self, nested_changes: Vec<ObjectChange>) -> Self {
        self.nested_changes = nested_changes;
        self
    }

    /// True if this record carries any field or nested change.
    pub fn has_changes(&self) -> bool {
        !self.field_changes.is_empty() || !self.nested_changes.is_empty()
    }

    /// Recursive change weight: own field changes, plus one per nested
    /// change, plus the nested weight of every nested modified record.
    pub fn total_changes(&self) -> usize {
        let mut total = self.field_changes.len();
        for nested in &self.nested_changes {
            total += 1;
            if nested.change_type == ChangeKind::Modified {
                total += nested.total_changes();
            }
        }
        total
    }

    pub fn nested_added(&self) -> Vec<&ObjectChange> {
        self.nested_by_kind(ChangeKind::Added)
    }

    pub fn nested_removed(&self) -> Vec<&ObjectChange> {
        self.nested_by_kind(ChangeKind::Removed)
    }

    pub fn nested_modified(&self) -> Vec<&ObjectChange> {
        self.nested_by_kind(ChangeKind::Modified)
    }

    fn nested_by_kind(&self, change_type: ChangeKind) -> Vec<&ObjectChange> {
        self.nested_changes
            .iter()
            .filter(|c| c.change_type == change_type)
            .collect()
    }
}

/// Added/removed/modified counters for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }
}

/// The complete diff between two snapshots.
///
/// The per-kind summary is derived from `changes` on first access and
/// memoized; it is skipped by serde and ignored by equality, so two
/// results with equal changes are equal regardless of whether either
/// has computed its summary yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    /// Label for the "before" snapshot
    pub file_a_name: String,
    /// Label for the "after" snapshot
    pub file_b_name: String,
    /// Every detected change, grouped by kind in engine order
    pub changes: Vec<ObjectChange>,
    #[serde(skip)]
    summary: OnceLock<BTreeMap<String, DiffSummary>>,
}

impl PartialEq for DiffResult {
    fn eq(&self, other: &Self) -> bool {
        self.file_a_name == other.file_a_name
            && self.file_b_name == other.file_b_name
            && self.changes == other.changes
    }
}

impl DiffResult {
    pub fn new(file_a_name: &str, file_b_name: &str, changes: Vec<ObjectChange>) -> Self {
        Self {
            file_a_name: file_a_name.to_string(),
            file_b_name: file_b_name.to_string(),
            changes,
            summary: OnceLock::new(),
        }
    }

    /// Per-kind change counters, keyed by `object_type`.
    pub fn summary(&self) -> &BTreeMap<String, DiffSummary> {
        self.summary.get_or_init(|| {
            let mut summary: BTreeMap<String, DiffSummary> = BTreeMap::new();
            for change in &self.changes {
                let entry = summary.entry(change.object_type.clone()).or_default();
                match change.change_type {
                    ChangeKind::Added => entry.added += 1,
                    ChangeKind::Removed => entry.removed += 1,
                    ChangeKind::Modified => entry.modified += 1,
                }
            }
            summary
        })
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Number of top-level change records.
    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    /// All changes for one entity kind, in emission order.
    pub fn changes_by_type(&self, object_type: &str) -> Vec<&ObjectChange> {
        self.changes
            .iter()
            .filter(|c| c.object_type == object_type)
            .collect()
    }

    /// All changes of one change kind, in emission order.
    pub fn changes_by_change_type(&self, change_type: ChangeKind) -> Vec<&ObjectChange> {
        self.changes
            .iter()
            .filter(|c| c.change_type == change_type)
            .collect()
    }

    /// Entity kinds that have changes, in presentation order: the fixed
    /// [`kind::DISPLAY_ORDER`] first, then unrecognized kinds
    /// alphabetically.
    pub fn object_types_with_changes(&self) -> Vec<String> {
        let present: BTreeSet<&str> = self
            .changes
            .iter()
            .map(|c| c.object_type.as_str())
            .collect();

        let mut ordered: Vec<String> = kind::DISPLAY_ORDER
            .iter()
            .filter(|k| present.contains(*k))
            .map(|k| k.to_string())
            .collect();

        // BTreeSet iterates ascending, so the unrecognized tail is sorted
        for object_type in &present {
            if !kind::DISPLAY_ORDER.contains(object_type) {
                ordered.push(object_type.to_string());
            }
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_scalars() {
        assert_eq!(FieldValue::None.display(), "(none)");
        assert_eq!(FieldValue::Bool(true).display(), "Yes");
        assert_eq!(FieldValue::Bool(false).display(), "No");
        assert_eq!(FieldValue::Int(-42).display(), "-42");
        assert_eq!(FieldValue::text("Invoices").display(), "Invoices");
    }

    #[test]
    fn display_summarizes_lists() {
        assert_eq!(FieldValue::TextList(vec![]).display(), "(empty list)");
        assert_eq!(
            FieldValue::TextList(vec!["a".to_string(), "b".to_string()]).display(),
            "a, b"
        );
        let long = FieldValue::TextList(vec!["a".to_string(); 4]);
        assert_eq!(long.display(), "4 items");
    }

    #[test]
    fn display_truncates_long_text() {
        let text = "x".repeat(150);
        let display = FieldValue::text(&text).display();
        assert_eq!(display.len(), 103);
        assert!(display.ends_with("..."));
    }

    #[test]
    fn field_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&FieldValue::None).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FieldValue::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&FieldValue::text("a")).unwrap(),
            "\"a\""
        );
        let round: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(round, FieldValue::None);
    }

    #[test]
    fn change_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChangeKind::Added).unwrap(), "\"added\"");
        assert_eq!(format!("{}", ChangeKind::Modified), "modified");
    }

    #[test]
    fn total_changes_weighs_nested_modified_records() {
        let nested_modified = ObjectChange::modified("Task", "Review".to_string(), "t1".to_string())
            .with_field_changes(vec![FieldChange::modified(
                "duration",
                FieldValue::Int(60),
                FieldValue::Int(120),
            )]);
        let change = ObjectChange::modified("Workflow", "Approval".to_string(), "w1".to_string())
            .with_field_changes(vec![FieldChange::modified(
                "name",
                FieldValue::text("Old"),
                FieldValue::text("Approval"),
            )])
            .with_nested_changes(vec![
                ObjectChange::added("Task", "Notify".to_string(), "t2".to_string()),
                nested_modified,
            ]);

        // 1 own field + 2 nested + 1 field inside the nested modified
        assert_eq!(change.total_changes(), 4);
        assert_eq!(change.nested_added().len(), 1);
        assert_eq!(change.nested_modified().len(), 1);
    }

    #[test]
    fn summary_counts_match_changes() {
        let result = DiffResult::new(
            "a.json",
            "b.json",
            vec![
                ObjectChange::added("Category", "New".to_string(), "c1".to_string()),
                ObjectChange::removed("Category", "Old".to_string(), "c2".to_string()),
                ObjectChange::modified("Role", "Admins".to_string(), "r1".to_string()),
            ],
        );

        let summary = result.summary();
        assert_eq!(summary["Category"].added, 1);
        assert_eq!(summary["Category"].removed, 1);
        assert_eq!(summary["Category"].total(), 2);
        assert_eq!(summary["Role"].modified, 1);
        assert_eq!(result.total_changes(), 3);
    }

    #[test]
    fn equality_ignores_the_summary_memo() {
        let changes = vec![ObjectChange::added(
            "Stamp",
            "Paid".to_string(),
            "s1".to_string(),
        )];
        let left = DiffResult::new("a", "b", changes.clone());
        let right = DiffResult::new("a", "b", changes);
        let _ = left.summary();
        assert_eq!(left, right);
    }

    #[test]
    fn summary_recomputes_after_deserialization() {
        let result = DiffResult::new(
            "a",
            "b",
            vec![ObjectChange::added(
                "Counter",
                "Invoice No".to_string(),
                "n1".to_string(),
            )],
        );
        let _ = result.summary();

        let json = serde_json::to_string(&result).unwrap();
        let decoded: DiffResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
        assert_eq!(decoded.summary()["Counter"].added, 1);
    }

    #[test]
    fn unknown_kinds_sort_after_known_ones() {
        let result = DiffResult::new(
            "a",
            "b",
            vec![
                ObjectChange::added("Zeppelin", "z".to_string(), "z1".to_string()),
                ObjectChange::added("Category", "c".to_string(), "c1".to_string()),
                ObjectChange::added("Aardvark", "a".to_string(), "a1".to_string()),
                ObjectChange::added("Stamp", "s".to_string(), "s1".to_string()),
            ],
        );
        assert_eq!(
            result.object_types_with_changes(),
            vec!["Category", "Stamp", "Aardvark", "Zeppelin"]
        );
    }
}
