use confdiff_core::model::{
    Category, CategoryField, Counter, DataType, DataTypeColumn, EForm, EFormComponent, Folder,
    Keyword, KeywordDictionary, Query, RetentionPolicy, RetentionPolicyCategory, Role,
    RoleAssignment, Snapshot, Stamp, TreeView, TreeViewLevel, User, Workflow, WorkflowTask,
    WorkflowTransition, USER_TYPE_GROUP, USER_TYPE_USER,
};

/// Snapshot with only a version marker and no entities
#[allow(dead_code)]
pub fn empty_snapshot() -> Snapshot {
    Snapshot {
        version: "1.0".to_string(),
        ..Default::default()
    }
}

/// Category with a numeric key and name, no string id
#[allow(dead_code)]
pub fn category(category_no: i64, name: &str) -> Category {
    Category {
        category_no,
        name: name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn category_field(field_no: i64, caption: &str) -> CategoryField {
    CategoryField {
        field_no,
        caption: caption.to_string(),
        ..Default::default()
    }
}

/// Workflow with a numeric key and name; `enabled` defaults to true
#[allow(dead_code)]
pub fn workflow(process_no: i64, name: &str) -> Workflow {
    Workflow {
        process_no,
        name: name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn task(task_no: i64, name: &str) -> WorkflowTask {
    WorkflowTask {
        task_no,
        name: name.to_string(),
        ..Default::default()
    }
}

/// Transition identified by its action label and destination task
#[allow(dead_code)]
pub fn transition(action_text: &str, task_to_no: i64, condition: &str) -> WorkflowTransition {
    WorkflowTransition {
        action_text: action_text.to_string(),
        task_to_no,
        condition: condition.to_string(),
        ..Default::default()
    }
}

/// Regular (non-group) account
#[allow(dead_code)]
pub fn user(user_no: i64, user_name: &str) -> User {
    User {
        user_no,
        user_name: user_name.to_string(),
        user_type: USER_TYPE_USER,
        ..Default::default()
    }
}

/// Group account with direct members
#[allow(dead_code)]
pub fn group(user_no: i64, user_name: &str, members: Vec<User>) -> User {
    User {
        user_no,
        user_name: user_name.to_string(),
        user_type: USER_TYPE_GROUP,
        members,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn role(role_no: i64, name: &str) -> Role {
    Role {
        role_no,
        name: name.to_string(),
        ..Default::default()
    }
}

/// Object-level security grant; names resolve separately via
/// `role_name`/`user_name` on the returned value
#[allow(dead_code)]
pub fn grant(obj_type: i64, obj_no: i64, role_no: i64, user_no: i64) -> RoleAssignment {
    RoleAssignment {
        obj_type,
        obj_no,
        role_no,
        user_no,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn folder(folder_no: i64, name: &str, parent_no: Option<i64>) -> Folder {
    Folder {
        folder_no,
        name: name.to_string(),
        parent_no,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn eform(form_no: i64, name: &str, components: Vec<EFormComponent>) -> EForm {
    EForm {
        form_no,
        name: name.to_string(),
        components,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn component(key: &str, children: Vec<EFormComponent>) -> EFormComponent {
    EFormComponent {
        key: key.to_string(),
        children,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn query(query_no: i64, name: &str) -> Query {
    Query {
        query_no,
        name: name.to_string(),
        ..Default::default()
    }
}

/// Dictionary whose keywords are built from plain values
#[allow(dead_code)]
pub fn dictionary(dictionary_no: i64, name: &str, keywords: &[&str]) -> KeywordDictionary {
    KeywordDictionary {
        dictionary_no,
        name: name.to_string(),
        keywords: keywords
            .iter()
            .enumerate()
            .map(|(i, value)| Keyword {
                keyword_no: i as i64 + 1,
                value: value.to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tree_view(treeview_no: i64, name: &str, levels: Vec<TreeViewLevel>) -> TreeView {
    TreeView {
        treeview_no,
        name: name.to_string(),
        levels,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tree_level(level_no: i64, field_name: &str) -> TreeViewLevel {
    TreeViewLevel {
        level_no,
        field_name: field_name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn counter(counter_no: i64, name: &str, format_string: &str) -> Counter {
    Counter {
        counter_no,
        name: name.to_string(),
        format_string: format_string.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn data_type(datatype_no: i64, name: &str, columns: &[&str]) -> DataType {
    DataType {
        datatype_no,
        name: name.to_string(),
        columns: columns
            .iter()
            .enumerate()
            .map(|(i, col_name)| DataTypeColumn {
                col_no: i as i64 + 1,
                col_name: col_name.to_string(),
            })
            .collect(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn stamp(stamp_no: i64, name: &str) -> Stamp {
    Stamp {
        stamp_no,
        name: name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn retention_policy(policy_no: i64, name: &str, months: i64) -> RetentionPolicy {
    RetentionPolicy {
        policy_no,
        name: name.to_string(),
        months,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn retention_category(category_no: i64, sub_category_no: i64) -> RetentionPolicyCategory {
    RetentionPolicyCategory {
        category_no,
        sub_category_no,
        ..Default::default()
    }
}
