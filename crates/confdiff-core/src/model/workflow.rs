use serde::{Deserialize, Serialize};

/// A transition between two workflow tasks.
///
/// Transitions carry no stable identifier across exports; the diff layer
/// matches them by their action label and destination task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowTransition {
    /// Numeric transition key (not stable across exports)
    pub transition_no: i64,
    pub name: String,
    /// Destination task number
    pub task_to_no: i64,
    /// Routing condition expression (empty = unconditional)
    pub condition: String,
    /// Button/action label shown to the user
    pub action_text: String,
    /// String identifier from the export (may be empty)
    pub id: String,
}

/// A task within a workflow process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowTask {
    /// Numeric task key
    pub task_no: i64,
    pub name: String,
    /// Task type number
    pub type_no: i64,
    /// Resolved task type name
    pub type_name: String,
    /// Task duration in minutes (0 = none)
    pub duration: i64,
    /// Sequence position for ordering
    pub seq_pos: i64,
    /// True if delegation is disabled for this task
    pub disable_delegation: bool,
    /// Automatic action type (empty for manual tasks)
    pub action_type: String,
    /// Initialization script extracted from the task parameters
    pub init_script: String,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Outgoing transitions, in export order
    pub transitions: Vec<WorkflowTransition>,
}

impl WorkflowTask {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.task_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A workflow process with its task graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    /// Numeric process key
    pub process_no: i64,
    pub name: String,
    pub description: String,
    /// Whether the workflow is active (absent in exports = enabled)
    pub enabled: bool,
    /// Category this workflow is bound to, if any
    pub category_no: Option<i64>,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// Process duration in minutes (0 = none)
    pub duration: i64,
    /// Delete finished instances after this many days (0 = never)
    pub del_inst_days: i64,
    /// True if users may start instances manually
    pub allow_manual: bool,
    /// True if the workflow history is attached to the document
    pub attach_history: bool,
    /// Error notification address (empty = none)
    pub notify_on_error: String,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Tasks, in export order
    pub tasks: Vec<WorkflowTask>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            process_no: 0,
            name: String::new(),
            description: String::new(),
            enabled: true,
            category_no: None,
            folder_no: None,
            duration: 0,
            del_inst_days: 0,
            allow_manual: false,
            attach_history: false,
            notify_on_error: String::new(),
            id: String::new(),
            tasks: Vec::new(),
        }
    }
}

impl Workflow {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.process_no.to_string()
        } else {
            self.id.clone()
        }
    }
}
