//! Comparators for the content-layer kinds: folders, forms, queries,
//! dictionaries, tree views, counters, data types, stamps, and retention
//! policies.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::diff::comparators::{no_extra, EntityCompare};
use crate::diff::fields::FieldSpec;
use crate::diff::matcher::{MatchKeyed, MatchKeys};
use crate::diff::model::{kind, ExtraInfo, FieldChange, FieldValue, ObjectChange};
use crate::model::{
    Counter, DataType, EForm, Folder, KeywordDictionary, Query, RetentionPolicy, Snapshot, Stamp,
    TreeView,
};

impl MatchKeyed for Folder {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.folder_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for EForm {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.form_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for Query {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.query_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for KeywordDictionary {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.dictionary_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for TreeView {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.treeview_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for Counter {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.counter_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for DataType {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.datatype_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for Stamp {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.stamp_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for RetentionPolicy {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.policy_no),
            name: Some(&self.name),
        }
    }
}

const FOLDER_FIELDS: &[FieldSpec<Folder>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |f| FieldValue::text(&f.name),
    },
    FieldSpec {
        name: "folder_type",
        display: Some("Type"),
        get: |f| FieldValue::Int(f.folder_type),
    },
    FieldSpec {
        name: "parent_no",
        display: Some("Parent Folder"),
        get: |f| FieldValue::opt_int(f.parent_no),
    },
];

const EFORM_FIELDS: &[FieldSpec<EForm>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |e| FieldValue::text(&e.name),
    },
    FieldSpec {
        name: "version",
        display: None,
        get: |e| FieldValue::Int(e.version),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |e| FieldValue::opt_int(e.folder_no),
    },
];

const QUERY_FIELDS: &[FieldSpec<Query>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |q| FieldValue::text(&q.name),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |q| FieldValue::text(&q.description),
    },
    FieldSpec {
        name: "category_no",
        display: Some("Category"),
        get: |q| FieldValue::opt_int(q.category_no),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |q| FieldValue::opt_int(q.folder_no),
    },
];

const DICTIONARY_FIELDS: &[FieldSpec<KeywordDictionary>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |d| FieldValue::text(&d.name),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |d| FieldValue::text(&d.description),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |d| FieldValue::opt_int(d.folder_no),
    },
];

const TREE_VIEW_FIELDS: &[FieldSpec<TreeView>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |t| FieldValue::text(&t.name),
    },
    FieldSpec {
        name: "category_no",
        display: Some("Category"),
        get: |t| FieldValue::opt_int(t.category_no),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |t| FieldValue::opt_int(t.folder_no),
    },
];

const COUNTER_FIELDS: &[FieldSpec<Counter>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |c| FieldValue::text(&c.name),
    },
    FieldSpec {
        name: "counter_type",
        display: Some("Type"),
        get: |c| FieldValue::Int(c.counter_type),
    },
    FieldSpec {
        name: "format_string",
        display: Some("Format"),
        get: |c| FieldValue::text(&c.format_string),
    },
];

const DATA_TYPE_FIELDS: &[FieldSpec<DataType>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |d| FieldValue::text(&d.name),
    },
    FieldSpec {
        name: "table_name",
        display: Some("Table"),
        get: |d| FieldValue::text(&d.table_name),
    },
    FieldSpec {
        name: "type_group",
        display: Some("Type Group"),
        get: |d| FieldValue::Int(d.type_group),
    },
];

const STAMP_FIELDS: &[FieldSpec<Stamp>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |s| FieldValue::text(&s.name),
    },
    FieldSpec {
        name: "stamp_type",
        display: Some("Type"),
        get: |s| FieldValue::Int(s.stamp_type),
    },
    FieldSpec {
        name: "filename",
        display: Some("Filename"),
        get: |s| FieldValue::text(&s.filename),
    },
];

const RETENTION_FIELDS: &[FieldSpec<RetentionPolicy>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |r| FieldValue::text(&r.name),
    },
    FieldSpec {
        name: "months",
        display: Some("Retention (months)"),
        get: |r| FieldValue::Int(r.months),
    },
    FieldSpec {
        name: "starting",
        display: Some("Starting From"),
        get: |r| FieldValue::text(&r.starting),
    },
    FieldSpec {
        name: "purge",
        display: Some("Purge"),
        get: |r| FieldValue::Bool(r.purge),
    },
    FieldSpec {
        name: "delete_disk",
        display: Some("Delete from Disk"),
        get: |r| FieldValue::Bool(r.delete_disk),
    },
];

/// Copy of a folder record without its subtree. The folder diff runs over
/// the flattened tree, and keeping `children` would double-report every
/// level below a moved branch.
fn detached(folder: &Folder) -> Folder {
    Folder {
        folder_no: folder.folder_no,
        name: folder.name.clone(),
        parent_no: folder.parent_no,
        folder_type: folder.folder_type,
        folder_type_name: folder.folder_type_name.clone(),
        id: folder.id.clone(),
        children: Vec::new(),
    }
}

fn eform_component_changes(a: &EForm, b: &EForm) -> Vec<FieldChange> {
    let count_a = a.component_count();
    let count_b = b.component_count();
    if count_a == count_b {
        return Vec::new();
    }
    vec![FieldChange::modified(
        "Component Count",
        FieldValue::Int(count_a as i64),
        FieldValue::Int(count_b as i64),
    )]
}

/// Keyword lists run to the tens of thousands, so matched dictionaries
/// report membership deltas as nested records rather than field noise.
fn keyword_changes(a: &KeywordDictionary, b: &KeywordDictionary) -> Vec<ObjectChange> {
    let values_a: BTreeSet<&str> = a.keywords.iter().map(|k| k.value.as_str()).collect();
    let values_b: BTreeSet<&str> = b.keywords.iter().map(|k| k.value.as_str()).collect();

    let mut changes = Vec::new();
    for value in values_b.difference(&values_a) {
        changes.push(ObjectChange::added(
            kind::KEYWORD,
            value.to_string(),
            value.to_string(),
        ));
    }
    for value in values_a.difference(&values_b) {
        changes.push(ObjectChange::removed(
            kind::KEYWORD,
            value.to_string(),
            value.to_string(),
        ));
    }
    changes
}

fn tree_view_level_changes(a: &TreeView, b: &TreeView) -> Vec<FieldChange> {
    if a.levels.len() == b.levels.len() {
        return Vec::new();
    }
    vec![FieldChange::modified(
        "Level Count",
        FieldValue::Int(a.levels.len() as i64),
        FieldValue::Int(b.levels.len() as i64),
    )]
}

fn data_type_column_changes(a: &DataType, b: &DataType) -> Vec<FieldChange> {
    let columns_a: BTreeSet<&str> = a.columns.iter().map(|c| c.col_name.as_str()).collect();
    let columns_b: BTreeSet<&str> = b.columns.iter().map(|c| c.col_name.as_str()).collect();
    if columns_a == columns_b {
        return Vec::new();
    }
    vec![FieldChange::modified(
        "Columns",
        FieldValue::TextList(columns_a.iter().map(|c| c.to_string()).collect()),
        FieldValue::TextList(columns_b.iter().map(|c| c.to_string()).collect()),
    )]
}

fn retention_category_changes(a: &RetentionPolicy, b: &RetentionPolicy) -> Vec<FieldChange> {
    let count_a = a.distinct_category_count();
    let count_b = b.distinct_category_count();
    if count_a == count_b {
        return Vec::new();
    }
    vec![FieldChange::modified(
        "Assigned Categories",
        FieldValue::Int(count_a as i64),
        FieldValue::Int(count_b as i64),
    )]
}

const FOLDER_COMPARE: EntityCompare<Folder> = EntityCompare {
    kind: kind::FOLDER,
    fields: FOLDER_FIELDS,
    object_name: |f| f.name.clone(),
    object_id: Folder::object_id,
    extra_info: |f| {
        ExtraInfo::from([("type".to_string(), Value::String(f.folder_type_name.clone()))])
    },
    pair_fields: None,
    nested: None,
};

const EFORM_COMPARE: EntityCompare<EForm> = EntityCompare {
    kind: kind::EFORM,
    fields: EFORM_FIELDS,
    object_name: |e| e.name.clone(),
    object_id: EForm::object_id,
    extra_info: |e| ExtraInfo::from([("version".to_string(), Value::from(e.version))]),
    pair_fields: Some(eform_component_changes),
    nested: None,
};

const QUERY_COMPARE: EntityCompare<Query> = EntityCompare {
    kind: kind::QUERY,
    fields: QUERY_FIELDS,
    object_name: |q| q.name.clone(),
    object_id: Query::object_id,
    extra_info: no_extra,
    pair_fields: None,
    nested: None,
};

const DICTIONARY_COMPARE: EntityCompare<KeywordDictionary> = EntityCompare {
    kind: kind::DICTIONARY,
    fields: DICTIONARY_FIELDS,
    object_name: |d| d.name.clone(),
    object_id: KeywordDictionary::object_id,
    extra_info: |d| {
        ExtraInfo::from([("keyword_count".to_string(), Value::from(d.keywords.len()))])
    },
    pair_fields: None,
    nested: Some(keyword_changes),
};

const TREE_VIEW_COMPARE: EntityCompare<TreeView> = EntityCompare {
    kind: kind::TREE_VIEW,
    fields: TREE_VIEW_FIELDS,
    object_name: |t| t.name.clone(),
    object_id: TreeView::object_id,
    extra_info: |t| ExtraInfo::from([("level_count".to_string(), Value::from(t.levels.len()))]),
    pair_fields: Some(tree_view_level_changes),
    nested: None,
};

const COUNTER_COMPARE: EntityCompare<Counter> = EntityCompare {
    kind: kind::COUNTER,
    fields: COUNTER_FIELDS,
    object_name: |c| c.name.clone(),
    object_id: Counter::object_id,
    extra_info: |c| {
        ExtraInfo::from([
            ("type".to_string(), Value::String(c.counter_type_name.clone())),
            ("format".to_string(), Value::String(c.format_string.clone())),
        ])
    },
    pair_fields: None,
    nested: None,
};

const DATA_TYPE_COMPARE: EntityCompare<DataType> = EntityCompare {
    kind: kind::DATA_TYPE,
    fields: DATA_TYPE_FIELDS,
    object_name: |d| d.name.clone(),
    object_id: DataType::object_id,
    extra_info: |d| {
        ExtraInfo::from([
            ("table".to_string(), Value::String(d.table_name.clone())),
            ("column_count".to_string(), Value::from(d.columns.len())),
        ])
    },
    pair_fields: Some(data_type_column_changes),
    nested: None,
};

const STAMP_COMPARE: EntityCompare<Stamp> = EntityCompare {
    kind: kind::STAMP,
    fields: STAMP_FIELDS,
    object_name: |s| s.name.clone(),
    object_id: Stamp::object_id,
    extra_info: |s| {
        ExtraInfo::from([("type".to_string(), Value::String(s.stamp_type_name.clone()))])
    },
    pair_fields: None,
    nested: None,
};

const RETENTION_COMPARE: EntityCompare<RetentionPolicy> = EntityCompare {
    kind: kind::RETENTION_POLICY,
    fields: RETENTION_FIELDS,
    object_name: |r| r.name.clone(),
    object_id: RetentionPolicy::object_id,
    extra_info: |r| ExtraInfo::from([("months".to_string(), Value::from(r.months))]),
    pair_fields: Some(retention_category_changes),
    nested: None,
};

pub fn compare_folders(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    let flat_a: Vec<Folder> = a.flattened_folders().into_iter().map(detached).collect();
    let flat_b: Vec<Folder> = b.flattened_folders().into_iter().map(detached).collect();
    FOLDER_COMPARE.run(&flat_a, &flat_b)
}

pub fn compare_eforms(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    EFORM_COMPARE.run(&a.eforms, &b.eforms)
}

pub fn compare_queries(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    QUERY_COMPARE.run(&a.queries, &b.queries)
}

pub fn compare_dictionaries(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    DICTIONARY_COMPARE.run(&a.keyword_dictionaries, &b.keyword_dictionaries)
}

pub fn compare_tree_views(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    TREE_VIEW_COMPARE.run(&a.tree_views, &b.tree_views)
}

pub fn compare_counters(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    COUNTER_COMPARE.run(&a.counters, &b.counters)
}

pub fn compare_data_types(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    DATA_TYPE_COMPARE.run(&a.data_types, &b.data_types)
}

pub fn compare_stamps(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    STAMP_COMPARE.run(&a.stamps, &b.stamps)
}

pub fn compare_retention_policies(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    RETENTION_COMPARE.run(&a.retention_policies, &b.retention_policies)
}
