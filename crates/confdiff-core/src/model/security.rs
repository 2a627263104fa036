use serde::{Deserialize, Serialize};

/// Account type value for a regular user.
pub const USER_TYPE_USER: i64 = 1;
/// Account type value for a group.
pub const USER_TYPE_GROUP: i64 = 2;
/// Account type value for built-in system accounts.
pub const USER_TYPE_SYSTEM: i64 = 3;

/// A user or group account.
///
/// Users and groups share one record shape; `user_type` distinguishes them,
/// and a group's direct members are listed in `members`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Numeric account key (system accounts use negative numbers)
    pub user_no: i64,
    /// Login name
    pub user_name: String,
    /// Display name (may be empty)
    pub display_name: String,
    /// Account type, see the `USER_TYPE_*` constants
    pub user_type: i64,
    /// String identifier from the export (may be empty)
    pub id: String,
    pub domain: String,
    pub email: String,
    pub description: String,
    /// Direct members when this account is a group
    pub members: Vec<User>,
}

impl User {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.user_no.to_string()
        } else {
            self.id.clone()
        }
    }

    pub fn is_group(&self) -> bool {
        self.user_type == USER_TYPE_GROUP
    }

    /// Name shown in change records: the display name, falling back to
    /// the login name.
    pub fn display_label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.user_name
        } else {
            &self.display_name
        }
    }
}

/// An object a role is assigned to, as listed on the role itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleObjectAssignment {
    /// Target object type number
    pub object_type: i64,
    /// Resolved target object type name
    pub object_type_name: String,
    /// Target object number
    pub object_no: i64,
    /// Resolved target object name
    pub object_name: String,
    /// Sub-object number (e.g. a keyword for sub-category security)
    pub sub_obj_no: i64,
}

/// A permission role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Numeric role key
    pub role_no: i64,
    pub name: String,
    pub description: String,
    /// Raw permission bitmask
    pub permission: i64,
    /// Resolved permission names, in bitmask order
    pub permission_names: Vec<String>,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// True if this role denies rather than grants its permissions
    pub is_deny: bool,
    /// Objects this role is assigned to (context, not diffed per entry)
    pub assignments: Vec<RoleObjectAssignment>,
    /// Accounts holding this role
    pub users: Vec<User>,
}

impl Role {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.role_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A flat security grant: one role granted to one account on one object.
///
/// Grants have no identity of their own; the diff layer treats them as a
/// set keyed by `(obj_type, obj_no, role_no, user_no)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleAssignment {
    /// Granted role number
    pub role_no: i64,
    /// Target object type number
    pub obj_type: i64,
    /// Resolved target object type name
    pub obj_type_name: String,
    /// Target object number
    pub obj_no: i64,
    /// Sub-object number (0 = whole object)
    pub sub_obj_no: i64,
    /// Account the role is granted to
    pub user_no: i64,
    /// Resolved account name
    pub user_name: String,
    /// Resolved role name
    pub role_name: String,
    /// Grant condition expression (empty = unconditional)
    pub condition: String,
    /// True if permission inheritance stops at this object
    pub stop_inheritance: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_classification_uses_user_type() {
        let group = User {
            user_no: 20,
            user_type: USER_TYPE_GROUP,
            ..Default::default()
        };
        assert!(group.is_group());

        let user = User {
            user_no: 21,
            user_type: USER_TYPE_USER,
            ..Default::default()
        };
        assert!(!user.is_group());
    }

    #[test]
    fn display_label_falls_back_to_login_name() {
        let mut user = User {
            user_name: "jsmith".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_label(), "jsmith");

        user.display_name = "Jane Smith".to_string();
        assert_eq!(user.display_label(), "Jane Smith");
    }
}
