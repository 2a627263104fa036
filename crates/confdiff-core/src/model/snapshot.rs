//! The snapshot container: one parsed configuration export.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ConfDiffError, Result};
use crate::model::category::{CaseDefinition, Category};
use crate::model::content::{
    Counter, DataType, EForm, Folder, KeywordDictionary, Query, RetentionPolicy, Stamp, TreeView,
};
use crate::model::security::{Role, RoleAssignment, User, USER_TYPE_GROUP, USER_TYPE_USER};
use crate::model::workflow::Workflow;

/// A complete configuration snapshot at one point in time.
///
/// All entity lists preserve export order. Absent lists deserialize to
/// empty, so partial exports load without errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Export schema version string (empty if the export did not carry one)
    pub version: String,
    pub categories: Vec<Category>,
    pub case_definitions: Vec<CaseDefinition>,
    pub workflows: Vec<Workflow>,
    /// Top-level folders; children nest inside their parents
    pub folders: Vec<Folder>,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub role_assignments: Vec<RoleAssignment>,
    pub eforms: Vec<EForm>,
    pub queries: Vec<Query>,
    pub keyword_dictionaries: Vec<KeywordDictionary>,
    pub tree_views: Vec<TreeView>,
    pub counters: Vec<Counter>,
    pub data_types: Vec<DataType>,
    pub stamps: Vec<Stamp>,
    pub retention_policies: Vec<RetentionPolicy>,
}

/// Entity counts for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotStatistics {
    pub categories: usize,
    pub case_definitions: usize,
    /// Fields across all categories
    pub fields: usize,
    pub workflows: usize,
    /// Tasks across all workflows
    pub workflow_tasks: usize,
    /// Folders at every nesting level
    pub folders: usize,
    pub users: usize,
    pub groups: usize,
    pub roles: usize,
    pub eforms: usize,
    pub queries: usize,
    pub keyword_dictionaries: usize,
    pub tree_views: usize,
    pub counters: usize,
    pub data_types: usize,
    pub stamps: usize,
    pub retention_policies: usize,
}

impl SnapshotStatistics {
    /// Sum of all entity counts.
    pub fn total_entities(&self) -> usize {
        self.categories
            + self.case_definitions
            + self.fields
            + self.workflows
            + self.workflow_tasks
            + self.folders
            + self.users
            + self.groups
            + self.roles
            + self.eforms
            + self.queries
            + self.keyword_dictionaries
            + self.tree_views
            + self.counters
            + self.data_types
            + self.stamps
            + self.retention_policies
    }
}

impl Snapshot {
    /// Flatten the folder hierarchy into a preorder list (each folder
    /// before its children).
    pub fn flattened_folders(&self) -> Vec<&Folder> {
        fn walk<'a>(folders: &'a [Folder], out: &mut Vec<&'a Folder>) {
            for folder in folders {
                out.push(folder);
                walk(&folder.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.folders, &mut out);
        out
    }

    /// Count the entities in this snapshot.
    pub fn statistics(&self) -> SnapshotStatistics {
        SnapshotStatistics {
            categories: self.categories.len(),
            case_definitions: self.case_definitions.len(),
            fields: self.categories.iter().map(|c| c.fields.len()).sum(),
            workflows: self.workflows.len(),
            workflow_tasks: self.workflows.iter().map(|w| w.tasks.len()).sum(),
            folders: self.flattened_folders().len(),
            users: self
                .users
                .iter()
                .filter(|u| u.user_type == USER_TYPE_USER)
                .count(),
            groups: self
                .users
                .iter()
                .filter(|u| u.user_type == USER_TYPE_GROUP)
                .count(),
            roles: self.roles.len(),
            eforms: self.eforms.len(),
            queries: self.queries.len(),
            keyword_dictionaries: self.keyword_dictionaries.len(),
            tree_views: self.tree_views.len(),
            counters: self.counters.len(),
            data_types: self.data_types.len(),
            stamps: self.stamps.len(),
            retention_policies: self.retention_policies.len(),
        }
    }

    /// Decode a snapshot from JSON bytes.
    ///
    /// # Errors
    ///
    /// `InvalidSnapshot` if the bytes are not valid UTF-8, not valid JSON,
    /// the JSON root is not an object, or `version` is present but not a
    /// string.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Snapshot> {
        let text = std::str::from_utf8(bytes).map_err(|e| ConfDiffError::InvalidSnapshot {
            message: format!("snapshot is not valid UTF-8: {}", e),
        })?;

        let raw: Value = serde_json::from_str(text).map_err(|e| ConfDiffError::InvalidSnapshot {
            message: format!("snapshot is not valid JSON: {}", e),
        })?;

        let obj = raw.as_object().ok_or_else(|| ConfDiffError::InvalidSnapshot {
            message: "snapshot JSON root must be an object".to_string(),
        })?;

        if let Some(version) = obj.get("version") {
            if !version.is_string() {
                return Err(ConfDiffError::InvalidSnapshot {
                    message: format!("`version` must be a string, got: {}", version),
                });
            }
        }

        serde_json::from_value(raw).map_err(|e| ConfDiffError::InvalidSnapshot {
            message: format!("failed to deserialize snapshot: {}", e),
        })
    }

    /// Encode this snapshot as JSON bytes.
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| ConfDiffError::Serialization {
            message: format!("failed to serialize snapshot: {}", e),
        })
    }
}
