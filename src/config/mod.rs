// ABOUTME: Scenario files for replaying recorded cluster samples through a deployment.
// ABOUTME: Handles YAML parsing, file discovery, and the init template.

mod deserialize;
mod init;

pub use deserialize::{FailureEntry, TaskEntry, resolve_failures, resolve_tasks};
pub use init::init_scenario;

use crate::deploy::CompletionPolicy;
use crate::error::{Error, Result};
use crate::types::TaskDefinition;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const SCENARIO_FILENAME: &str = "steward.yml";
pub const SCENARIO_FILENAME_ALT: &str = "steward.yaml";
pub const SCENARIO_FILENAME_DIR: &str = ".steward/scenario.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub task_definition: TaskDefinition,

    /// Start time of the replayed deployment. Defaults to the wall clock.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default = "default_sample_interval", with = "humantime_serde")]
    pub sample_interval: Duration,

    #[serde(default)]
    pub completion: CompletionPolicy,

    #[serde(default)]
    pub samples: Vec<Sample>,

    #[serde(default)]
    pub complete: Option<Completion>,
}

/// One sampling cycle of cluster state.
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub desired: u64,

    #[serde(default)]
    pub tasks: Vec<TaskEntry>,

    #[serde(default)]
    pub failures: Vec<FailureEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,

    /// Complete this many times; more than once exercises the completion policy.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_sample_interval() -> Duration {
    Duration::from_secs(30)
}

fn default_repeat() -> u32 {
    1
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(SCENARIO_FILENAME),
            dir.join(SCENARIO_FILENAME_ALT),
            dir.join(SCENARIO_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ScenarioNotFound(dir.to_path_buf()))
    }

    fn validate(&self) -> Result<()> {
        if chrono::Duration::from_std(self.sample_interval).is_err() {
            return Err(Error::InvalidScenario(format!(
                "sample_interval {:?} is out of range",
                self.sample_interval
            )));
        }

        if let Some(complete) = &self.complete
            && complete.repeat == 0
        {
            return Err(Error::InvalidScenario(
                "complete.repeat must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// A three-step rollout of `web:1` with one failed launch along the way.
    pub fn template() -> Self {
        Scenario {
            task_definition: TaskDefinition::new("web:1").expect("template task definition"),
            started_at: None,
            sample_interval: default_sample_interval(),
            completion: CompletionPolicy::default(),
            samples: vec![
                Sample {
                    desired: 2,
                    tasks: vec![],
                    failures: vec![],
                },
                Sample {
                    desired: 2,
                    tasks: vec![TaskEntry::Simple("task/web-1".to_string())],
                    failures: vec![FailureEntry::Simple("container-instance/i-2".to_string())],
                },
                Sample {
                    desired: 2,
                    tasks: vec![
                        TaskEntry::Simple("task/web-1".to_string()),
                        TaskEntry::Simple("task/web-2".to_string()),
                    ],
                    failures: vec![],
                },
            ],
            complete: Some(Completion {
                tasks: vec![
                    TaskEntry::Simple("task/web-1".to_string()),
                    TaskEntry::Simple("task/web-2".to_string()),
                ],
                repeat: 1,
            }),
        }
    }
}
