// ABOUTME: Deployment status and health enums.
// ABOUTME: Status only moves forward; health is derived from the latest failure list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle position of a deployment.
///
/// Ordering follows the lifecycle, so `a <= b` means `b` is reachable from `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    /// Created, no cluster sample applied yet.
    /// Available actions: `advance()`, `complete()`
    Pending,
    /// At least one sample applied.
    /// Available actions: `advance()`, `complete()`
    InProgress,
    /// Terminal. `advance()` is rejected.
    Completed,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Pending => "pending",
            DeploymentStatus::InProgress => "in_progress",
            DeploymentStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DeploymentStatus::Completed)
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DeploymentStatus::Pending),
            "in_progress" => Ok(DeploymentStatus::InProgress),
            "completed" => Ok(DeploymentStatus::Completed),
            other => Err(format!("unknown deployment status: {other}")),
        }
    }
}

/// Health signal of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentHealth {
    Healthy,
    Unhealthy,
}

impl DeploymentHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentHealth::Healthy => "healthy",
            DeploymentHealth::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for DeploymentHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentHealth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(DeploymentHealth::Healthy),
            "unhealthy" => Ok(DeploymentHealth::Unhealthy),
            other => Err(format!("unknown deployment health: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            DeploymentStatus::Pending,
            DeploymentStatus::InProgress,
            DeploymentStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<DeploymentStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_order_follows_lifecycle() {
        assert!(DeploymentStatus::Pending < DeploymentStatus::InProgress);
        assert!(DeploymentStatus::InProgress < DeploymentStatus::Completed);
    }

    #[test]
    fn unknown_health_is_rejected() {
        assert!("degraded".parse::<DeploymentHealth>().is_err());
        assert_eq!(
            "unhealthy".parse::<DeploymentHealth>(),
            Ok(DeploymentHealth::Unhealthy)
        );
    }
}
