//! Per-kind entity comparators.
//!
//! Every comparator follows one shape: match the two entity slices, emit
//! added records for B-only entities and removed records for A-only
//! entities, then diff the declared fields of every matched pair and emit
//! a modified record when anything differs. Set-valued collections follow
//! a declared policy: collapse into one summary field change, explode
//! into nested added/removed records, or compare counts only.

pub mod category;
pub mod content;
pub mod security;
pub mod workflow;

use crate::diff::fields::{diff_fields, FieldSpec};
use crate::diff::matcher::{match_entities, MatchKeyed};
use crate::diff::model::{ExtraInfo, FieldChange, ObjectChange};

fn no_extra<T>(_: &T) -> ExtraInfo {
    ExtraInfo::new()
}

/// Shared comparator driver for one entity kind.
///
/// The optional hooks cover kinds that compare more than their scalar
/// fields: `pair_fields` appends set-summary field changes (assigned
/// users, data type columns, component counts), `nested` recurses into
/// child collections (category fields, workflow tasks, dictionary
/// keywords).
pub struct EntityCompare<T: 'static> {
    pub kind: &'static str,
    pub fields: &'static [FieldSpec<T>],
    pub object_name: fn(&T) -> String,
    pub object_id: fn(&T) -> String,
    pub extra_info: fn(&T) -> ExtraInfo,
    pub pair_fields: Option<fn(&T, &T) -> Vec<FieldChange>>,
    pub nested: Option<fn(&T, &T) -> Vec<ObjectChange>>,
}

impl<T: MatchKeyed> EntityCompare<T> {
    /// Compare two same-kind entity slices and emit their change records:
    /// all added, then all removed, then all modified, in input order.
    /// Modified records take their name and id from the B side.
    pub fn run(&self, a: &[T], b: &[T]) -> Vec<ObjectChange> {
        let outcome = match_entities(a, b);
        let mut changes = Vec::new();

        for &entity in &outcome.only_in_b {
            changes.push(
                ObjectChange::added(
                    self.kind,
                    (self.object_name)(entity),
                    (self.object_id)(entity),
                )
                .with_extra_info((self.extra_info)(entity)),
            );
        }

        for &entity in &outcome.only_in_a {
            changes.push(
                ObjectChange::removed(
                    self.kind,
                    (self.object_name)(entity),
                    (self.object_id)(entity),
                )
                .with_extra_info((self.extra_info)(entity)),
            );
        }

        for &(entity_a, entity_b) in &outcome.matched {
            let mut field_changes = diff_fields(entity_a, entity_b, self.fields);
            if let Some(pair_fields) = self.pair_fields {
                field_changes.extend(pair_fields(entity_a, entity_b));
            }
            let nested_changes = match self.nested {
                Some(nested) => nested(entity_a, entity_b),
                None => Vec::new(),
            };

            if field_changes.is_empty() && nested_changes.is_empty() {
                continue;
            }

            changes.push(
                ObjectChange::modified(
                    self.kind,
                    (self.object_name)(entity_b),
                    (self.object_id)(entity_b),
                )
                .with_field_changes(field_changes)
                .with_nested_changes(nested_changes),
            );
        }

        changes
    }
}
