//! Category and case definition comparators, including the shared Field
//! comparator for their nested field definitions.

use serde_json::Value;

use crate::diff::comparators::EntityCompare;
use crate::diff::matcher::{MatchKeyed, MatchKeys};
use crate::diff::model::{kind, ExtraInfo, FieldValue, ObjectChange};
use crate::diff::fields::FieldSpec;
use crate::model::{CaseDefinition, Category, CategoryField, Snapshot};

impl MatchKeyed for Category {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.category_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for CaseDefinition {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.case_def_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for CategoryField {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.field_no),
            name: Some(&self.caption),
        }
    }
}

const CATEGORY_FIELDS: &[FieldSpec<Category>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |c| FieldValue::text(&c.name),
    },
    FieldSpec {
        name: "title",
        display: None,
        get: |c| FieldValue::text(&c.title),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |c| FieldValue::text(&c.description),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |c| FieldValue::opt_int(c.folder_no),
    },
    FieldSpec {
        name: "fulltext_mode",
        display: Some("Full-text Mode"),
        get: |c| FieldValue::Int(c.fulltext_mode),
    },
    FieldSpec {
        name: "checkin_mode",
        display: Some("Check-in Mode"),
        get: |c| FieldValue::Int(c.checkin_mode),
    },
    FieldSpec {
        name: "empty_doc_mode",
        display: Some("Empty Document Mode"),
        get: |c| FieldValue::Int(c.empty_doc_mode),
    },
];

const CASE_DEFINITION_FIELDS: &[FieldSpec<CaseDefinition>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |c| FieldValue::text(&c.name),
    },
    FieldSpec {
        name: "title",
        display: None,
        get: |c| FieldValue::text(&c.title),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |c| FieldValue::text(&c.description),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |c| FieldValue::opt_int(c.folder_no),
    },
    FieldSpec {
        name: "checkin_mode",
        display: Some("Check-in Mode"),
        get: |c| FieldValue::Int(c.checkin_mode),
    },
    FieldSpec {
        name: "auto_append_mode",
        display: Some("Auto-append Mode"),
        get: |c| FieldValue::Int(c.auto_append_mode),
    },
];

const FIELD_FIELDS: &[FieldSpec<CategoryField>] = &[
    FieldSpec {
        name: "caption",
        display: None,
        get: |f| FieldValue::text(&f.caption),
    },
    FieldSpec {
        name: "type_no",
        display: Some("Type"),
        get: |f| FieldValue::Int(f.type_no),
    },
    FieldSpec {
        name: "length",
        display: None,
        get: |f| FieldValue::Int(f.length),
    },
    FieldSpec {
        name: "index_type",
        display: Some("Index"),
        get: |f| FieldValue::Int(f.index_type),
    },
    FieldSpec {
        name: "is_mandatory",
        display: Some("Mandatory"),
        get: |f| FieldValue::Bool(f.is_mandatory),
    },
];

fn field_count_extra(count: usize) -> ExtraInfo {
    ExtraInfo::from([("field_count".to_string(), Value::from(count))])
}

fn field_extra(field: &CategoryField) -> ExtraInfo {
    ExtraInfo::from([("type".to_string(), Value::String(field.type_name.clone()))])
}

const FIELD_COMPARE: EntityCompare<CategoryField> = EntityCompare {
    kind: kind::FIELD,
    fields: FIELD_FIELDS,
    object_name: |f| f.caption.clone(),
    object_id: CategoryField::object_id,
    extra_info: field_extra,
    pair_fields: None,
    nested: None,
};

const CATEGORY_COMPARE: EntityCompare<Category> = EntityCompare {
    kind: kind::CATEGORY,
    fields: CATEGORY_FIELDS,
    object_name: |c| c.name.clone(),
    object_id: Category::object_id,
    extra_info: |c| field_count_extra(c.fields.len()),
    pair_fields: None,
    nested: Some(|a, b| FIELD_COMPARE.run(&a.fields, &b.fields)),
};

const CASE_DEFINITION_COMPARE: EntityCompare<CaseDefinition> = EntityCompare {
    kind: kind::CASE_DEFINITION,
    fields: CASE_DEFINITION_FIELDS,
    object_name: |c| c.display_title().to_string(),
    object_id: CaseDefinition::object_id,
    extra_info: |c| field_count_extra(c.fields.len()),
    pair_fields: None,
    nested: Some(|a, b| FIELD_COMPARE.run(&a.fields, &b.fields)),
};

pub fn compare_categories(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    CATEGORY_COMPARE.run(&a.categories, &b.categories)
}

pub fn compare_case_definitions(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    CASE_DEFINITION_COMPARE.run(&a.case_definitions, &b.case_definitions)
}
