// ABOUTME: Identifiers and validated domain types for deployment tracking.
// ABOUTME: Phantom-typed IDs keep deployment, task, and instance ARNs apart.

mod id;
mod task;
mod task_definition;

pub use id::{DeploymentId, Id, InstanceArn, TaskArn};
pub use task::{Failure, Task};
pub use task_definition::{TaskDefinition, TaskDefinitionError};
