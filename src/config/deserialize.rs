// ABOUTME: Custom serde shapes for scenario samples.
// ABOUTME: Tasks and failures may be written as a bare ARN or as a full record.

use serde::Deserialize;

use crate::types::{Failure, Task, TaskDefinition};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TaskEntry {
    Simple(String),
    Detailed(Task),
}

impl TaskEntry {
    /// Tasks that don't name a task definition run the scenario's own.
    pub fn into_task(self, task_definition: &TaskDefinition) -> Task {
        match self {
            TaskEntry::Simple(arn) => Task::new(arn, task_definition.as_str()),
            TaskEntry::Detailed(mut task) => {
                if task.task_definition.is_empty() {
                    task.task_definition = task_definition.to_string();
                }
                task
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FailureEntry {
    Simple(String),
    Detailed(Failure),
}

impl From<FailureEntry> for Failure {
    fn from(entry: FailureEntry) -> Self {
        match entry {
            FailureEntry::Simple(arn) => Failure::new(arn),
            FailureEntry::Detailed(failure) => failure,
        }
    }
}

pub fn resolve_tasks(entries: &[TaskEntry], task_definition: &TaskDefinition) -> Vec<Task> {
    entries
        .iter()
        .cloned()
        .map(|entry| entry.into_task(task_definition))
        .collect()
}

pub fn resolve_failures(entries: &[FailureEntry]) -> Vec<Failure> {
    entries.iter().cloned().map(Failure::from).collect()
}
