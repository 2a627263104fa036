//! Accounts, roles, and object-level security grants.
//!
//! Users and groups come out of one export list and split into two change
//! kinds here. Security grants carry no identity at all, so they diff as a
//! pure set keyed by (object, role, account).

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::diff::comparators::EntityCompare;
use crate::diff::fields::{diff_fields, FieldSpec};
use crate::diff::matcher::{match_entities, MatchKeyed, MatchKeys};
use crate::diff::model::{kind, ExtraInfo, FieldChange, FieldValue, ObjectChange};
use crate::model::{Role, RoleAssignment, Snapshot, User};

impl MatchKeyed for Role {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.role_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for User {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.user_no),
            name: Some(&self.user_name),
        }
    }
}

const ROLE_FIELDS: &[FieldSpec<Role>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |r| FieldValue::text(&r.name),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |r| FieldValue::text(&r.description),
    },
    FieldSpec {
        name: "is_deny",
        display: Some("Is Deny Role"),
        get: |r| FieldValue::Bool(r.is_deny),
    },
];

const USER_FIELDS: &[FieldSpec<User>] = &[
    FieldSpec {
        name: "user_name",
        display: None,
        get: |u| FieldValue::text(&u.user_name),
    },
    FieldSpec {
        name: "display_name",
        display: None,
        get: |u| FieldValue::text(&u.display_name),
    },
    FieldSpec {
        name: "email",
        display: None,
        get: |u| FieldValue::text(&u.email),
    },
    FieldSpec {
        name: "domain",
        display: None,
        get: |u| FieldValue::text(&u.domain),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |u| FieldValue::text(&u.description),
    },
];

fn sorted_names(names: &BTreeSet<&str>) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Permission grids change as a whole, so assigned users collapse into one
/// list-valued field instead of one nested record per account.
fn role_user_changes(a: &Role, b: &Role) -> Vec<FieldChange> {
    let users_a: BTreeSet<&str> = a.users.iter().map(|u| u.user_name.as_str()).collect();
    let users_b: BTreeSet<&str> = b.users.iter().map(|u| u.user_name.as_str()).collect();
    if users_a == users_b {
        return Vec::new();
    }
    vec![FieldChange::modified(
        "Assigned Users",
        FieldValue::TextList(sorted_names(&users_a)),
        FieldValue::TextList(sorted_names(&users_b)),
    )]
}

fn role_extra(role: &Role) -> ExtraInfo {
    ExtraInfo::from([
        ("is_deny".to_string(), Value::Bool(role.is_deny)),
        (
            "permissions".to_string(),
            Value::from(role.permission_names.clone()),
        ),
    ])
}

const ROLE_COMPARE: EntityCompare<Role> = EntityCompare {
    kind: kind::ROLE,
    fields: ROLE_FIELDS,
    object_name: |r| r.name.clone(),
    object_id: Role::object_id,
    extra_info: role_extra,
    pair_fields: Some(role_user_changes),
    nested: None,
};

pub fn compare_roles(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    ROLE_COMPARE.run(&a.roles, &b.roles)
}

fn user_kind(user: &User) -> &'static str {
    if user.is_group() {
        kind::GROUP
    } else {
        kind::USER
    }
}

fn user_extra(user: &User) -> ExtraInfo {
    ExtraInfo::from([("email".to_string(), Value::String(user.email.clone()))])
}

fn member_names(user: &User) -> BTreeSet<&str> {
    user.members.iter().map(|m| m.user_name.as_str()).collect()
}

/// Users and groups share the export list but report under separate kinds,
/// resolved per entity. A record that flips `user_type` between exports
/// reports under its B-side kind.
pub fn compare_users(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    let outcome = match_entities(&a.users, &b.users);
    let mut changes = Vec::new();

    for &user in &outcome.only_in_b {
        changes.push(
            ObjectChange::added(user_kind(user), user.display_label().to_string(), user.object_id())
                .with_extra_info(user_extra(user)),
        );
    }
    for &user in &outcome.only_in_a {
        changes.push(
            ObjectChange::removed(user_kind(user), user.display_label().to_string(), user.object_id())
                .with_extra_info(user_extra(user)),
        );
    }
    for &(user_a, user_b) in &outcome.matched {
        let mut field_changes = diff_fields(user_a, user_b, USER_FIELDS);
        let members_a = member_names(user_a);
        let members_b = member_names(user_b);
        if members_a != members_b {
            field_changes.push(FieldChange::modified(
                "Members",
                FieldValue::TextList(sorted_names(&members_a)),
                FieldValue::TextList(sorted_names(&members_b)),
            ));
        }
        if field_changes.is_empty() {
            continue;
        }
        changes.push(
            ObjectChange::modified(
                user_kind(user_b),
                user_b.display_label().to_string(),
                user_b.object_id(),
            )
            .with_field_changes(field_changes),
        );
    }
    changes
}

type GrantKey = (i64, i64, i64, i64);

fn grant_key(grant: &RoleAssignment) -> GrantKey {
    (grant.obj_type, grant.obj_no, grant.role_no, grant.user_no)
}

fn grant_name(grant: &RoleAssignment) -> String {
    let role = if grant.role_name.is_empty() {
        format!("Role #{}", grant.role_no)
    } else {
        grant.role_name.clone()
    };
    let account = if grant.user_name.is_empty() {
        format!("User #{}", grant.user_no)
    } else {
        grant.user_name.clone()
    };
    format!("{} → {}", role, account)
}

fn grant_id(grant: &RoleAssignment) -> String {
    format!(
        "{}:{}:{}:{}",
        grant.obj_type, grant.obj_no, grant.role_no, grant.user_no
    )
}

fn grant_extra(grant: &RoleAssignment) -> ExtraInfo {
    ExtraInfo::from([
        ("obj_type".to_string(), Value::from(grant.obj_type)),
        ("obj_no".to_string(), Value::from(grant.obj_no)),
    ])
}

/// Grants have no identity to modify under, so the diff is set membership
/// only: a changed grant surfaces as one removal plus one addition.
pub fn compare_role_assignments(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    let index_a: BTreeMap<GrantKey, &RoleAssignment> = a
        .role_assignments
        .iter()
        .map(|g| (grant_key(g), g))
        .collect();
    let index_b: BTreeMap<GrantKey, &RoleAssignment> = b
        .role_assignments
        .iter()
        .map(|g| (grant_key(g), g))
        .collect();

    let mut changes = Vec::new();
    for (key, grant) in &index_b {
        if !index_a.contains_key(key) {
            changes.push(
                ObjectChange::added(kind::ROLE_ASSIGNMENT, grant_name(grant), grant_id(grant))
                    .with_extra_info(grant_extra(grant)),
            );
        }
    }
    for (key, grant) in &index_a {
        if !index_b.contains_key(key) {
            changes.push(
                ObjectChange::removed(kind::ROLE_ASSIGNMENT, grant_name(grant), grant_id(grant))
                    .with_extra_info(grant_extra(grant)),
            );
        }
    }
    changes
}
