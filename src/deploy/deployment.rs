// ABOUTME: The Deployment record: one tracked rollout of a task definition.
// ABOUTME: Construction and read access; transitions live in transitions.rs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DeploymentId, Failure, Task, TaskDefinition};

use super::clock::{Clock, SystemClock};
use super::error::DeployError;
use super::ids::{IdGenerator, UuidGenerator};
use super::state::{DeploymentHealth, DeploymentStatus};

/// A rollout of one task definition across the cluster.
///
/// Fields are not public: status only changes through [`Deployment::advance`] and
/// [`Deployment::complete`], and health is recomputed by those transitions
/// rather than set directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub(crate) id: DeploymentId,
    pub(crate) task_definition: TaskDefinition,
    pub(crate) status: DeploymentStatus,
    pub(crate) health: DeploymentHealth,
    pub(crate) desired_task_count: u64,
    pub(crate) current_tasks: Vec<Task>,
    pub(crate) failed_instances: Vec<Failure>,
    pub(crate) start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) end_time: Option<DateTime<Utc>>,
}

impl Deployment {
    /// Create a pending deployment for `task_definition`.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::InvalidArgument` if the task definition is empty
    /// or the generator hands back an empty ID.
    pub fn new<G, C>(task_definition: &str, ids: &G, clock: &C) -> Result<Self, DeployError>
    where
        G: IdGenerator + ?Sized,
        C: Clock + ?Sized,
    {
        let task_definition = TaskDefinition::new(task_definition)?;

        let id = ids.next_id();
        if id.is_empty() {
            return Err(DeployError::InvalidArgument(
                "generated deployment ID is empty".to_string(),
            ));
        }

        let deployment = Deployment {
            id,
            task_definition,
            status: DeploymentStatus::Pending,
            health: DeploymentHealth::Healthy,
            desired_task_count: 0,
            current_tasks: Vec::new(),
            failed_instances: Vec::new(),
            start_time: clock.now(),
            end_time: None,
        };

        tracing::debug!(
            deployment = %deployment.id,
            task_definition = %deployment.task_definition,
            "created deployment"
        );

        Ok(deployment)
    }

    /// Create a deployment with a random UUID and the wall clock.
    pub fn create(task_definition: &str) -> Result<Self, DeployError> {
        Self::new(task_definition, &UuidGenerator, &SystemClock)
    }

    pub fn id(&self) -> &DeploymentId {
        &self.id
    }

    pub fn task_definition(&self) -> &TaskDefinition {
        &self.task_definition
    }

    pub fn status(&self) -> DeploymentStatus {
        self.status
    }

    pub fn health(&self) -> DeploymentHealth {
        self.health
    }

    pub fn desired_task_count(&self) -> u64 {
        self.desired_task_count
    }

    pub fn current_tasks(&self) -> &[Task] {
        &self.current_tasks
    }

    pub fn failed_instances(&self) -> &[Failure] {
        &self.failed_instances
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Set once the deployment completes.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn running_task_count(&self) -> u64 {
        self.current_tasks.len() as u64
    }

    /// Tasks still missing to reach the desired count.
    pub fn pending_task_count(&self) -> u64 {
        self.desired_task_count
            .saturating_sub(self.running_task_count())
    }

    /// In progress with at least as many running tasks as desired.
    ///
    /// This is the point at which the reconciliation loop would normally call
    /// `complete`.
    pub fn is_converged(&self) -> bool {
        self.status == DeploymentStatus::InProgress && self.pending_task_count() == 0
    }

    /// Time spent so far, or the total once completed.
    pub fn duration<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        let end = self.end_time.unwrap_or_else(|| clock.now());
        end - self.start_time
    }
}
