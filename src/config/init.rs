// ABOUTME: Scenario scaffolding for new projects.
// ABOUTME: Creates steward.yml template files.

use std::path::Path;

use crate::config::{FailureEntry, TaskEntry};
use crate::error::{Error, Result};
use crate::types::TaskDefinition;

use super::{SCENARIO_FILENAME, Scenario};

pub fn init_scenario(dir: &Path, task_definition: Option<&str>, force: bool) -> Result<()> {
    let scenario_path = dir.join(SCENARIO_FILENAME);

    if scenario_path.exists() && !force {
        return Err(Error::AlreadyExists(scenario_path));
    }

    let mut scenario = Scenario::template();

    if let Some(td) = task_definition {
        scenario.task_definition =
            TaskDefinition::new(td).map_err(|e| Error::InvalidScenario(e.to_string()))?;
    }

    let yaml = generate_template_yaml(&scenario)?;
    std::fs::write(&scenario_path, yaml)?;

    tracing::debug!(path = %scenario_path.display(), "wrote scenario template");
    Ok(())
}

fn generate_template_yaml(scenario: &Scenario) -> Result<String> {
    let mut samples = String::new();
    for sample in &scenario.samples {
        samples.push_str(&format!("  - desired: {}\n", sample.desired));
        samples.push_str(&format!(
            "    tasks: [{}]\n",
            arn_list(sample.tasks.iter().map(task_arn))?
        ));
        samples.push_str(&format!(
            "    failures: [{}]\n",
            arn_list(sample.failures.iter().map(failure_arn))?
        ));
    }

    let complete_tasks = match &scenario.complete {
        Some(c) => arn_list(c.tasks.iter().map(task_arn))?,
        None => String::new(),
    };

    Ok(format!(
        r#"task_definition: {}
# Start time of the replayed deployment (default: now)
# started_at: 2024-01-01T00:00:00Z
sample_interval: {}s
# What a repeated completion does: lenient (keep first end time) or strict (reject)
completion: lenient
samples:
{}complete:
  tasks: [{}]
"#,
        quoted(scenario.task_definition.as_str())?,
        scenario.sample_interval.as_secs(),
        samples,
        complete_tasks
    ))
}

/// A JSON string literal is also a valid double-quoted YAML scalar.
fn quoted(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn task_arn(entry: &TaskEntry) -> &str {
    match entry {
        TaskEntry::Simple(arn) => arn,
        TaskEntry::Detailed(task) => task.arn.as_str(),
    }
}

fn failure_arn(entry: &FailureEntry) -> &str {
    match entry {
        FailureEntry::Simple(arn) => arn,
        FailureEntry::Detailed(failure) => failure.arn.as_str(),
    }
}

fn arn_list<'a>(arns: impl Iterator<Item = &'a str>) -> Result<String> {
    Ok(arns.map(quoted).collect::<Result<Vec<_>>>()?.join(", "))
}
