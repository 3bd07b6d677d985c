// ABOUTME: Deployment tracking: the Deployment record and its state machine.
// ABOUTME: Exports the entity, status/health enums, injected ID and clock seams, and the shared handle.

mod clock;
mod deployment;
mod error;
mod ids;
mod shared;
mod state;
mod transitions;

pub use clock::{Clock, ManualClock, SystemClock};
pub use deployment::Deployment;
pub use error::{DeployError, DeployErrorKind};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use shared::{CompletionPolicy, SharedDeployment};
pub use state::{DeploymentHealth, DeploymentStatus};
pub use transitions::derive_health;
