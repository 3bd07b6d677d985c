// ABOUTME: Thread-safe handle around a single Deployment.
// ABOUTME: Writers hold the lock for a whole transition; readers get consistent snapshots.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::types::{DeploymentId, Failure, Task};

use super::Deployment;
use super::clock::Clock;
use super::error::DeployError;
use super::state::{DeploymentHealth, DeploymentStatus};

/// What a `complete` call does on a deployment that is already completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Forward to the deployment; tasks are replaced, the end time is kept.
    #[default]
    Lenient,
    /// Reject with `DeployError::AlreadyCompleted`.
    Strict,
}

/// A deployment shared between the reconciliation loop and any readers.
///
/// Cloning the handle shares the underlying deployment.
#[derive(Debug, Clone)]
pub struct SharedDeployment {
    inner: Arc<RwLock<Deployment>>,
    policy: CompletionPolicy,
}

impl SharedDeployment {
    pub fn new(deployment: Deployment) -> Self {
        Self::with_policy(deployment, CompletionPolicy::default())
    }

    pub fn with_policy(deployment: Deployment, policy: CompletionPolicy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(deployment)),
            policy,
        }
    }

    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Apply a sample under the write lock, returning the resulting state.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::TerminalStateViolation` if the deployment is
    /// already completed.
    pub fn advance(
        &self,
        desired_task_count: u64,
        current_tasks: Vec<Task>,
        failed_instances: Vec<Failure>,
    ) -> Result<Deployment, DeployError> {
        let mut deployment = self.inner.write();
        deployment
            .advance(desired_task_count, current_tasks, failed_instances)
            .map(|d| d.clone())
    }

    /// Complete under the write lock, honouring the completion policy.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::AlreadyCompleted` for a repeated call under
    /// `CompletionPolicy::Strict`.
    pub fn complete<C: Clock + ?Sized>(
        &self,
        current_tasks: Vec<Task>,
        clock: &C,
    ) -> Result<Deployment, DeployError> {
        let mut deployment = self.inner.write();

        if self.policy == CompletionPolicy::Strict && deployment.is_terminal() {
            tracing::warn!(deployment = %deployment.id, "rejecting repeated completion");
            return Err(DeployError::AlreadyCompleted {
                id: deployment.id.clone(),
            });
        }

        Ok(deployment.complete(current_tasks, clock).clone())
    }

    /// A copy of the deployment as of the last finished transition.
    pub fn snapshot(&self) -> Deployment {
        self.inner.read().clone()
    }

    pub fn id(&self) -> DeploymentId {
        self.inner.read().id.clone()
    }

    pub fn status(&self) -> DeploymentStatus {
        self.inner.read().status
    }

    pub fn health(&self) -> DeploymentHealth {
        self.inner.read().health
    }

    /// Run `f` against the deployment under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&Deployment) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Deployment> for SharedDeployment {
    fn from(deployment: Deployment) -> Self {
        Self::new(deployment)
    }
}
