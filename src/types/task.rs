// ABOUTME: Descriptors for running tasks and failed launch attempts.
// ABOUTME: Opaque pass-through records sampled from the cluster by the reconciliation loop.

use serde::{Deserialize, Serialize};

use super::{InstanceArn, TaskArn};

/// One running copy of a task definition on a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub arn: TaskArn,
    #[serde(default)]
    pub task_definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<InstanceArn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
}

impl Task {
    pub fn new(arn: impl Into<String>, task_definition: impl Into<String>) -> Self {
        Self {
            arn: TaskArn::new(arn),
            task_definition: task_definition.into(),
            container_instance: None,
            last_status: None,
        }
    }

    /// Record the host this task was placed on.
    pub fn on_instance(mut self, instance: impl Into<String>) -> Self {
        self.container_instance = Some(InstanceArn::new(instance));
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.last_status = Some(status.into());
        self
    }
}

/// A host that failed to launch a task during the latest sampling cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub arn: InstanceArn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Failure {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: InstanceArn::new(arn),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
