//! Workflow comparator with nested tasks and transitions.
//!
//! Transitions are the one entity without any stable key: exports renumber
//! them freely. They are matched by the pair (action label, destination
//! task) instead, and only the routing condition is compared.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::diff::comparators::EntityCompare;
use crate::diff::fields::FieldSpec;
use crate::diff::matcher::{MatchKeyed, MatchKeys};
use crate::diff::model::{kind, ExtraInfo, FieldChange, FieldValue, ObjectChange};
use crate::model::{Snapshot, Workflow, WorkflowTask, WorkflowTransition};

impl MatchKeyed for Workflow {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.process_no),
            name: Some(&self.name),
        }
    }
}

impl MatchKeyed for WorkflowTask {
    fn match_keys(&self) -> MatchKeys<'_> {
        MatchKeys {
            id: Some(&self.id),
            numeric: Some(self.task_no),
            name: Some(&self.name),
        }
    }
}

const WORKFLOW_FIELDS: &[FieldSpec<Workflow>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |w| FieldValue::text(&w.name),
    },
    FieldSpec {
        name: "description",
        display: None,
        get: |w| FieldValue::text(&w.description),
    },
    FieldSpec {
        name: "enabled",
        display: Some("Enabled"),
        get: |w| FieldValue::Bool(w.enabled),
    },
    FieldSpec {
        name: "category_no",
        display: Some("Category"),
        get: |w| FieldValue::opt_int(w.category_no),
    },
    FieldSpec {
        name: "folder_no",
        display: Some("Folder"),
        get: |w| FieldValue::opt_int(w.folder_no),
    },
    FieldSpec {
        name: "duration",
        display: None,
        get: |w| FieldValue::Int(w.duration),
    },
    FieldSpec {
        name: "del_inst_days",
        display: Some("Delete After (days)"),
        get: |w| FieldValue::Int(w.del_inst_days),
    },
    FieldSpec {
        name: "allow_manual",
        display: Some("Manual Start"),
        get: |w| FieldValue::Bool(w.allow_manual),
    },
    FieldSpec {
        name: "attach_history",
        display: Some("Attach History"),
        get: |w| FieldValue::Bool(w.attach_history),
    },
    FieldSpec {
        name: "notify_on_error",
        display: Some("Error Notification"),
        get: |w| FieldValue::text(&w.notify_on_error),
    },
];

const TASK_FIELDS: &[FieldSpec<WorkflowTask>] = &[
    FieldSpec {
        name: "name",
        display: None,
        get: |t| FieldValue::text(&t.name),
    },
    FieldSpec {
        name: "type_no",
        display: Some("Type"),
        get: |t| FieldValue::Int(t.type_no),
    },
    FieldSpec {
        name: "duration",
        display: None,
        get: |t| FieldValue::Int(t.duration),
    },
    FieldSpec {
        name: "seq_pos",
        display: Some("Position"),
        get: |t| FieldValue::Int(t.seq_pos),
    },
    FieldSpec {
        name: "disable_delegation",
        display: Some("Delegation Disabled"),
        get: |t| FieldValue::Bool(t.disable_delegation),
    },
    FieldSpec {
        name: "action_type",
        display: Some("Action Type"),
        get: |t| FieldValue::text(&t.action_type),
    },
    FieldSpec {
        name: "init_script",
        display: Some("Init Script"),
        get: |t| FieldValue::text(&t.init_script),
    },
];

/// Composite match key for a transition. The action label falls back to
/// the transition name so unlabeled routes still distinguish themselves.
fn transition_key(transition: &WorkflowTransition) -> (String, i64) {
    let label = if transition.action_text.is_empty() {
        &transition.name
    } else {
        &transition.action_text
    };
    (label.clone(), transition.task_to_no)
}

fn transition_name(transition: &WorkflowTransition) -> String {
    if !transition.name.is_empty() {
        transition.name.clone()
    } else if !transition.action_text.is_empty() {
        transition.action_text.clone()
    } else {
        format!("→ Task {}", transition.task_to_no)
    }
}

fn transition_id(transition: &WorkflowTransition) -> String {
    format!("{}:{}", transition.action_text, transition.task_to_no)
}

fn condition_value(transition: &WorkflowTransition) -> FieldValue {
    if transition.condition.is_empty() {
        FieldValue::None
    } else {
        FieldValue::text(&transition.condition)
    }
}

/// Diff two transition sets. Duplicate keys within one side collapse to
/// the last occurrence, matching the export round-trip behavior.
fn compare_transitions(a: &WorkflowTask, b: &WorkflowTask) -> Vec<ObjectChange> {
    let index_a: BTreeMap<(String, i64), &WorkflowTransition> = a
        .transitions
        .iter()
        .map(|t| (transition_key(t), t))
        .collect();
    let index_b: BTreeMap<(String, i64), &WorkflowTransition> = b
        .transitions
        .iter()
        .map(|t| (transition_key(t), t))
        .collect();

    let mut changes = Vec::new();
    for (key, transition) in &index_b {
        if !index_a.contains_key(key) {
            changes.push(ObjectChange::added(
                kind::TRANSITION,
                transition_name(transition),
                transition_id(transition),
            ));
        }
    }
    for (key, transition) in &index_a {
        if !index_b.contains_key(key) {
            changes.push(ObjectChange::removed(
                kind::TRANSITION,
                transition_name(transition),
                transition_id(transition),
            ));
        }
    }
    for (key, transition_b) in &index_b {
        let Some(transition_a) = index_a.get(key) else {
            continue;
        };
        let old_value = condition_value(transition_a);
        let new_value = condition_value(transition_b);
        if old_value != new_value {
            changes.push(
                ObjectChange::modified(
                    kind::TRANSITION,
                    transition_name(transition_b),
                    transition_id(transition_b),
                )
                .with_field_changes(vec![FieldChange::modified(
                    "Condition",
                    old_value,
                    new_value,
                )]),
            );
        }
    }
    changes
}

const TASK_COMPARE: EntityCompare<WorkflowTask> = EntityCompare {
    kind: kind::TASK,
    fields: TASK_FIELDS,
    object_name: |t| t.name.clone(),
    object_id: WorkflowTask::object_id,
    extra_info: |t| ExtraInfo::from([("type".to_string(), Value::String(t.type_name.clone()))]),
    pair_fields: None,
    nested: Some(compare_transitions),
};

const WORKFLOW_COMPARE: EntityCompare<Workflow> = EntityCompare {
    kind: kind::WORKFLOW,
    fields: WORKFLOW_FIELDS,
    object_name: |w| w.name.clone(),
    object_id: Workflow::object_id,
    extra_info: |w| ExtraInfo::from([("task_count".to_string(), Value::from(w.tasks.len()))]),
    pair_fields: None,
    nested: Some(|a, b| TASK_COMPARE.run(&a.tasks, &b.tasks)),
};

pub fn compare_workflows(a: &Snapshot, b: &Snapshot) -> Vec<ObjectChange> {
    WORKFLOW_COMPARE.run(&a.workflows, &b.workflows)
}
