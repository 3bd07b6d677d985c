// ABOUTME: Validated task definition identifier.
// ABOUTME: The only rule is non-emptiness; the name is otherwise opaque.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskDefinitionError {
    #[error("task definition cannot be empty")]
    Empty,
}

/// Name of a versioned workload specification, e.g. `web:12` or a full ARN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskDefinition(String);

impl TaskDefinition {
    pub fn new(value: &str) -> Result<Self, TaskDefinitionError> {
        if value.is_empty() {
            return Err(TaskDefinitionError::Empty);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskDefinition {
    type Err = TaskDefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
