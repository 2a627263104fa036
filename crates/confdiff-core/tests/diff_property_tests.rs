//! Property tests for the diff engine.
//!
//! Random snapshots with heavy key collisions exercise the matcher and
//! the per-kind comparators far beyond the hand-written cases.

mod common;

use common::*;
use confdiff_core::diff::matcher::match_entities;
use confdiff_core::model::{Category, CategoryField, RoleAssignment, Snapshot, User};
use confdiff_core::{compare_snapshots, ChangeKind, ObjectChange};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

const NAMES: [&str; 6] = ["Invoices", "Contracts", "Claims", "Orders", "Archive", "Intake"];
const IDS: [&str; 4] = ["", "G1", "G2", "G3"];

fn arb_field() -> impl Strategy<Value = CategoryField> {
    (0..6i64, prop::sample::select(&NAMES[..]), 0..4i64, any::<bool>()).prop_map(
        |(field_no, caption, type_no, is_mandatory)| CategoryField {
            field_no,
            caption: caption.to_string(),
            type_no,
            is_mandatory,
            ..Default::default()
        },
    )
}

fn arb_category() -> impl Strategy<Value = Category> {
    (
        prop::sample::select(&IDS[..]),
        0..8i64,
        prop::sample::select(&NAMES[..]),
        0..3i64,
        prop::collection::vec(arb_field(), 0..3),
    )
        .prop_map(|(id, category_no, name, checkin_mode, fields)| Category {
            id: id.to_string(),
            category_no,
            name: name.to_string(),
            checkin_mode,
            fields,
            ..Default::default()
        })
}

fn arb_user() -> impl Strategy<Value = User> {
    (0..8i64, prop::sample::select(&NAMES[..]), any::<bool>()).prop_map(
        |(user_no, user_name, flip_email)| {
            let mut account = user(user_no, user_name);
            if flip_email {
                account.email = format!("{}@example.com", user_name.to_lowercase());
            }
            account
        },
    )
}

fn arb_grant() -> impl Strategy<Value = RoleAssignment> {
    (0..3i64, 0..4i64, 0..3i64, 0..4i64)
        .prop_map(|(obj_type, obj_no, role_no, user_no)| grant(obj_type, obj_no, role_no, user_no))
}

fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    (
        prop::collection::vec(arb_category(), 0..4),
        prop::collection::vec(arb_user(), 0..4),
        prop::collection::vec(arb_grant(), 0..6),
        prop::collection::vec(prop::sample::select(&NAMES[..]), 0..5),
    )
        .prop_map(|(categories, users, role_assignments, keywords)| {
            let mut snapshot = empty_snapshot();
            snapshot.categories = categories;
            snapshot.users = users;
            snapshot.role_assignments = role_assignments;
            snapshot
                .keyword_dictionaries
                .push(dictionary(1, "Status", &keywords));
            snapshot
        })
}

/// Added and removed records carry no change payload; modified records
/// always carry one. Applies at every nesting depth.
fn assert_change_payload_shape(change: &ObjectChange) {
    match change.change_type {
        ChangeKind::Added | ChangeKind::Removed => {
            assert!(change.field_changes.is_empty());
            assert!(change.nested_changes.is_empty());
        }
        ChangeKind::Modified => {
            assert!(
                !change.field_changes.is_empty() || !change.nested_changes.is_empty(),
                "modified record without any changes: {change:?}"
            );
        }
    }
    for nested in &change.nested_changes {
        assert_change_payload_shape(nested);
    }
}

proptest! {
    #[test]
    fn prop_self_comparison_is_silent(snapshot in arb_snapshot()) {
        let diff = compare_snapshots(&snapshot, &snapshot.clone());
        prop_assert!(!diff.has_changes());
    }

    #[test]
    fn prop_repeated_runs_serialize_identically(a in arb_snapshot(), b in arb_snapshot()) {
        let first = serde_json::to_string(&compare_snapshots(&a, &b)).expect("serialize");
        let second = serde_json::to_string(&compare_snapshots(&a, &b)).expect("serialize");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_summary_counts_match_changes(a in arb_snapshot(), b in arb_snapshot()) {
        let diff = compare_snapshots(&a, &b);
        let mut total = 0;
        for (object_type, counts) in diff.summary() {
            prop_assert_eq!(counts.total(), diff.changes_by_type(object_type).len());
            total += counts.total();
        }
        prop_assert_eq!(total, diff.total_changes());
    }

    #[test]
    fn prop_records_carry_payload_matching_their_kind(a in arb_snapshot(), b in arb_snapshot()) {
        let diff = compare_snapshots(&a, &b);
        for change in &diff.changes {
            assert_change_payload_shape(change);
        }
    }

    #[test]
    fn prop_matching_accounts_for_every_entity(
        a in prop::collection::vec(arb_category(), 0..6),
        b in prop::collection::vec(arb_category(), 0..6),
    ) {
        let outcome = match_entities(&a, &b);

        // Every A entity lands in exactly one bucket
        prop_assert_eq!(outcome.matched.len() + outcome.only_in_a.len(), a.len());

        // Every B entity is either claimed by a match or reported as added,
        // never both (one B entity may back several matches)
        let claimed: HashSet<*const Category> = outcome
            .matched
            .iter()
            .map(|(_, matched_b)| *matched_b as *const Category)
            .collect();
        let added: HashSet<*const Category> = outcome
            .only_in_b
            .iter()
            .map(|entity| *entity as *const Category)
            .collect();
        prop_assert!(claimed.is_disjoint(&added));
        prop_assert_eq!(claimed.len() + added.len(), b.len());
    }

    #[test]
    fn prop_added_and_removed_are_bounded_by_the_inputs(a in arb_snapshot(), b in arb_snapshot()) {
        let diff = compare_snapshots(&a, &b);
        let categories = diff.changes_by_type("Category");
        let added = categories
            .iter()
            .filter(|c| c.change_type == ChangeKind::Added)
            .count();
        let removed = categories
            .iter()
            .filter(|c| c.change_type == ChangeKind::Removed)
            .count();
        prop_assert!(added <= b.categories.len());
        prop_assert!(removed <= a.categories.len());
    }

    #[test]
    fn prop_grant_diff_is_exactly_the_set_difference(a in arb_snapshot(), b in arb_snapshot()) {
        let key = |g: &RoleAssignment| (g.obj_type, g.obj_no, g.role_no, g.user_no);
        let set_a: BTreeSet<_> = a.role_assignments.iter().map(key).collect();
        let set_b: BTreeSet<_> = b.role_assignments.iter().map(key).collect();

        let diff = compare_snapshots(&a, &b);
        let grants = diff.changes_by_type("RoleAssignment");
        let added = grants
            .iter()
            .filter(|c| c.change_type == ChangeKind::Added)
            .count();
        let removed = grants
            .iter()
            .filter(|c| c.change_type == ChangeKind::Removed)
            .count();

        prop_assert_eq!(added, set_b.difference(&set_a).count());
        prop_assert_eq!(removed, set_a.difference(&set_b).count());
        prop_assert_eq!(added + removed, grants.len());
    }

    #[test]
    fn prop_keyword_diff_is_exactly_the_set_difference(
        a_words in prop::collection::vec(prop::sample::select(&NAMES[..]), 0..5),
        b_words in prop::collection::vec(prop::sample::select(&NAMES[..]), 0..5),
    ) {
        let mut a = empty_snapshot();
        a.keyword_dictionaries.push(dictionary(1, "Status", &a_words));
        let mut b = empty_snapshot();
        b.keyword_dictionaries.push(dictionary(1, "Status", &b_words));

        let set_a: BTreeSet<&str> = a_words.iter().copied().collect();
        let set_b: BTreeSet<&str> = b_words.iter().copied().collect();
        let expected = set_b.difference(&set_a).count() + set_a.difference(&set_b).count();

        let diff = compare_snapshots(&a, &b);
        let nested = match diff.changes.first() {
            Some(change) => change.nested_changes.len(),
            None => 0,
        };
        prop_assert_eq!(nested, expected);
    }

    #[test]
    fn prop_decode_never_panics_on_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        // Either outcome is fine; reaching it without panicking is the point
        let _ = Snapshot::from_json_bytes(&bytes);
    }

    #[test]
    fn prop_decode_never_panics_on_arbitrary_text(text in ".{0,120}") {
        let _ = Snapshot::from_json_bytes(text.as_bytes());
    }
}
