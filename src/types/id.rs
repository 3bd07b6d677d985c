// ABOUTME: Phantom-typed identifiers for deployments and the cluster objects they track.
// ABOUTME: A task ARN can never be passed where an instance ARN or deployment ID is expected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
/// Empty enums cannot be instantiated and need no trait bounds.
pub enum DeploymentMarker {}
pub enum TaskMarker {}
pub enum InstanceMarker {}

/// An opaque string identifier tagged with the kind of object it names.
#[must_use = "IDs reference tracked objects and should not be ignored"]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

// T is only a marker, so none of these impls may require bounds on it.

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Unique identifier of one tracked rollout.
pub type DeploymentId = Id<DeploymentMarker>;
/// ARN of a running task.
pub type TaskArn = Id<TaskMarker>;
/// ARN of the container instance (host) a task runs on or failed to launch on.
pub type InstanceArn = Id<InstanceMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let arn = TaskArn::new("arn:aws:ecs:us-east-1:123:task/abc");
        let json = serde_json::to_string(&arn).unwrap();
        assert_eq!(json, "\"arn:aws:ecs:us-east-1:123:task/abc\"");

        let back: TaskArn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arn);
    }

    #[test]
    fn empty_id_reports_empty() {
        assert!(DeploymentId::new("").is_empty());
        assert!(!DeploymentId::new("d-1").is_empty());
    }
}
