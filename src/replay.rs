// ABOUTME: Offline driver that replays recorded cluster samples through a deployment.
// ABOUTME: Stands in for the reconciliation loop with a manual clock, so runs are deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{Scenario, resolve_failures, resolve_tasks};
use crate::deploy::{
    Clock, Deployment, DeploymentHealth, DeploymentStatus, IdGenerator, ManualClock,
    SharedDeployment,
};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};

/// State of the deployment right after one sample was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub sample: usize,
    pub at: DateTime<Utc>,
    pub status: DeploymentStatus,
    pub health: DeploymentHealth,
    pub desired: u64,
    pub running: u64,
    pub pending: u64,
    pub failed: usize,
}

impl ReplayStep {
    fn capture(sample: usize, at: DateTime<Utc>, deployment: &Deployment) -> Self {
        Self {
            sample,
            at,
            status: deployment.status(),
            health: deployment.health(),
            desired: deployment.desired_task_count(),
            running: deployment.running_task_count(),
            pending: deployment.pending_task_count(),
            failed: deployment.failed_instances().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub deployment: Deployment,
    pub steps: Vec<ReplayStep>,
    pub warnings: Vec<Warning>,
}

/// Replay `scenario` against a fresh deployment.
///
/// The clock starts at `started_at` (or now) and moves forward by
/// `sample_interval` before every sample and before completion.
///
/// # Errors
///
/// Returns `Error::Deploy` if a transition is rejected, which includes a
/// repeated completion under the strict policy.
pub fn replay<G: IdGenerator + ?Sized>(scenario: &Scenario, ids: &G) -> Result<ReplayReport> {
    let interval = chrono::Duration::from_std(scenario.sample_interval)
        .map_err(|e| Error::InvalidScenario(format!("sample_interval: {e}")))?;
    let clock = ManualClock::new(scenario.started_at.unwrap_or_else(Utc::now));

    let deployment = Deployment::new(scenario.task_definition.as_str(), ids, &clock)?;
    let shared = SharedDeployment::with_policy(deployment, scenario.completion);
    let task_definition = &scenario.task_definition;

    tracing::info!(
        deployment = %shared.id(),
        %task_definition,
        samples = scenario.samples.len(),
        "replaying scenario"
    );

    let mut steps = Vec::with_capacity(scenario.samples.len());
    for (index, sample) in scenario.samples.iter().enumerate() {
        clock.advance(interval);
        let state = shared.advance(
            sample.desired,
            resolve_tasks(&sample.tasks, task_definition),
            resolve_failures(&sample.failures),
        )?;
        steps.push(ReplayStep::capture(index, clock.now(), &state));
    }

    let mut diagnostics = Diagnostics::default();
    if let Some(completion) = &scenario.complete {
        clock.advance(interval);
        let tasks = resolve_tasks(&completion.tasks, task_definition);

        for _ in 0..completion.repeat {
            let before = shared.snapshot();
            check_completion(&before, tasks.len() as u64, &mut diagnostics);
            shared.complete(tasks.clone(), &clock)?;
        }
    }

    Ok(ReplayReport {
        deployment: shared.snapshot(),
        steps,
        warnings: diagnostics.into_warnings(),
    })
}

fn check_completion(before: &Deployment, running: u64, diagnostics: &mut Diagnostics) {
    match before.status() {
        DeploymentStatus::Pending => {
            diagnostics.warn(Warning::completed_from_pending(format!(
                "deployment {} completed without any sample applied",
                before.id()
            )));
        }
        DeploymentStatus::Completed => {
            diagnostics.warn(Warning::repeated_completion(format!(
                "deployment {} was already completed",
                before.id()
            )));
            return;
        }
        DeploymentStatus::InProgress => {}
    }

    if running < before.desired_task_count() {
        diagnostics.warn(Warning::completed_below_desired(format!(
            "deployment {} completed with {} of {} desired tasks running",
            before.id(),
            running,
            before.desired_task_count()
        )));
    }
}
