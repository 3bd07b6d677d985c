// ABOUTME: Error types for deployment state transitions.
// ABOUTME: Covers invalid construction input and transitions out of the terminal state.

use crate::types::DeploymentId;

/// Errors returned by the deployment state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    /// Construction input was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `advance` was called after the deployment completed.
    #[error("deployment {id} is completed and cannot be advanced")]
    TerminalStateViolation { id: DeploymentId },

    /// A second `complete` under the strict completion policy.
    #[error("deployment {id} is already completed")]
    AlreadyCompleted { id: DeploymentId },
}

/// Payload-free classification of [`DeployError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    InvalidArgument,
    TerminalStateViolation,
    AlreadyCompleted,
}

impl DeployError {
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::InvalidArgument(_) => DeployErrorKind::InvalidArgument,
            DeployError::TerminalStateViolation { .. } => DeployErrorKind::TerminalStateViolation,
            DeployError::AlreadyCompleted { .. } => DeployErrorKind::AlreadyCompleted,
        }
    }
}

impl From<crate::types::TaskDefinitionError> for DeployError {
    fn from(err: crate::types::TaskDefinitionError) -> Self {
        DeployError::InvalidArgument(err.to_string())
    }
}
