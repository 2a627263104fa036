pub mod category;
pub mod content;
pub mod security;
pub mod snapshot;
pub mod workflow;

pub use category::{CaseDefinition, Category, CategoryField};
pub use content::{
    Counter, DataType, DataTypeColumn, EForm, EFormComponent, Folder, Keyword, KeywordDictionary,
    Query, RetentionPolicy, RetentionPolicyCategory, Stamp, TreeView, TreeViewLevel,
};
pub use security::{
    Role, RoleAssignment, RoleObjectAssignment, User, USER_TYPE_GROUP, USER_TYPE_SYSTEM,
    USER_TYPE_USER,
};
pub use snapshot::{Snapshot, SnapshotStatistics};
pub use workflow::{Workflow, WorkflowTask, WorkflowTransition};
