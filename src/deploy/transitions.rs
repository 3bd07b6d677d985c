// ABOUTME: State transitions for a deployment: advance on each sample, complete at the end.
// ABOUTME: Every transition overwrites the sampled fields and recomputes health.

use crate::types::{Failure, Task};

use super::Deployment;
use super::clock::{Clock, SystemClock};
use super::error::DeployError;
use super::state::{DeploymentHealth, DeploymentStatus};

/// Health for a given failure list: any failure makes the deployment unhealthy.
pub fn derive_health(failed_instances: &[Failure]) -> DeploymentHealth {
    if failed_instances.is_empty() {
        DeploymentHealth::Healthy
    } else {
        DeploymentHealth::Unhealthy
    }
}

// =============================================================================
// Pending | InProgress -> InProgress
// =============================================================================

impl Deployment {
    /// Apply one full sample of cluster state.
    ///
    /// The desired count, running tasks and failures replace the previous
    /// values; nothing carries over from earlier samples.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::TerminalStateViolation` if the deployment is
    /// already completed. The deployment is left unchanged.
    pub fn advance(
        &mut self,
        desired_task_count: u64,
        current_tasks: Vec<Task>,
        failed_instances: Vec<Failure>,
    ) -> Result<&mut Self, DeployError> {
        if self.status.is_terminal() {
            tracing::error!(deployment = %self.id, "advance called on completed deployment");
            return Err(DeployError::TerminalStateViolation {
                id: self.id.clone(),
            });
        }

        let previous = self.status;
        self.status = DeploymentStatus::InProgress;
        self.desired_task_count = desired_task_count;
        self.current_tasks = current_tasks;
        self.failed_instances = failed_instances;
        self.health = derive_health(&self.failed_instances);

        tracing::debug!(
            deployment = %self.id,
            from = %previous,
            desired = self.desired_task_count,
            running = self.current_tasks.len(),
            failed = self.failed_instances.len(),
            health = %self.health,
            "advanced deployment"
        );
        if self.health == DeploymentHealth::Unhealthy {
            tracing::warn!(
                deployment = %self.id,
                failed = self.failed_instances.len(),
                "deployment has failed instances"
            );
        }

        Ok(self)
    }
}

// =============================================================================
// Pending | InProgress | Completed -> Completed
// =============================================================================

impl Deployment {
    /// Mark the rollout finished with its final set of running tasks.
    ///
    /// Completion is a success marker: health becomes healthy and the failure
    /// list is cleared whatever the last sample reported. The end time is
    /// stamped on the first completion only.
    pub fn complete<C: Clock + ?Sized>(
        &mut self,
        current_tasks: Vec<Task>,
        clock: &C,
    ) -> &mut Self {
        let previous = self.status;
        self.status = DeploymentStatus::Completed;
        self.current_tasks = current_tasks;
        self.failed_instances = Vec::new();
        self.health = DeploymentHealth::Healthy;

        match self.end_time {
            Some(end_time) => {
                tracing::debug!(
                    deployment = %self.id,
                    %end_time,
                    "deployment already completed, keeping end time"
                );
            }
            None => {
                let end_time = clock.now();
                self.end_time = Some(end_time);
                tracing::info!(
                    deployment = %self.id,
                    from = %previous,
                    running = self.current_tasks.len(),
                    %end_time,
                    "completed deployment"
                );
            }
        }

        self
    }

    /// `complete` against the wall clock.
    pub fn complete_now(&mut self, current_tasks: Vec<Task>) -> &mut Self {
        self.complete(current_tasks, &SystemClock)
    }
}
