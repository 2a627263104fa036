//! Declarative field comparison for matched entity pairs.
//!
//! Each entity kind declares a `const` table of [`FieldSpec`]s; the differ
//! walks the table and reports every field whose normalized values differ.
//! Display formatting never happens here, only at render time.

use crate::diff::model::{FieldChange, FieldValue};

/// One comparable field of an entity type.
pub struct FieldSpec<T> {
    /// Declared field name
    pub name: &'static str,
    /// Display-name override for change records
    pub display: Option<&'static str>,
    /// Accessor producing the comparable value
    pub get: fn(&T) -> FieldValue,
}

impl<T> FieldSpec<T> {
    /// Name reported on change records.
    pub fn label(&self) -> &'static str {
        self.display.unwrap_or(self.name)
    }
}

/// Blank text counts as absent: a field going between empty string and
/// unset is not a change.
fn normalize(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(ref text) if text.is_empty() => FieldValue::None,
        other => other,
    }
}

/// Compare every declared field of a matched pair. The stored old/new
/// values are the normalized ones.
pub fn diff_fields<T>(a: &T, b: &T, fields: &[FieldSpec<T>]) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    for spec in fields {
        let old_value = normalize((spec.get)(a));
        let new_value = normalize((spec.get)(b));
        if old_value != new_value {
            changes.push(FieldChange::modified(spec.label(), old_value, new_value));
        }
    }
    changes
}
