// ABOUTME: Integration tests for replaying scenarios through a deployment.
// ABOUTME: Checks per-sample steps, final state, timestamps, and diagnostics.

mod support;

use chrono::Duration;
use steward::config::Scenario;
use steward::deploy::{DeployError, DeploymentHealth, DeploymentStatus, SequentialIds};
use steward::diagnostics::WarningKind;
use steward::error::Error;
use steward::replay::replay;

fn scenario(yaml: &str) -> Scenario {
    support::init_tracing();
    Scenario::from_yaml(yaml).expect("scenario should parse")
}

/// Test: Each sample produces one step and completion finishes the deployment.
#[test]
fn replay_records_steps_and_completes() {
    let s = scenario(
        r#"
task_definition: "web:4"
started_at: 2024-01-01T00:00:00Z
sample_interval: 1m
samples:
  - desired: 2
  - desired: 2
    tasks: ["task/a"]
    failures: ["container-instance/i-1"]
  - desired: 2
    tasks: ["task/a", "task/b"]
complete:
  tasks: ["task/a", "task/b"]
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();

    assert_eq!(report.steps.len(), 3);
    assert_eq!(report.steps[0].status, DeploymentStatus::InProgress);
    assert_eq!(report.steps[0].pending, 2);
    assert_eq!(report.steps[1].health, DeploymentHealth::Unhealthy);
    assert_eq!(report.steps[1].failed, 1);
    assert_eq!(report.steps[2].health, DeploymentHealth::Healthy);
    assert_eq!(report.steps[2].pending, 0);
    assert_eq!(
        report.steps[2].at,
        support::start_time() + Duration::minutes(3)
    );

    let d = &report.deployment;
    assert_eq!(d.id().as_str(), "dep-1");
    assert_eq!(d.status(), DeploymentStatus::Completed);
    assert_eq!(d.health(), DeploymentHealth::Healthy);
    assert_eq!(d.current_tasks().len(), 2);
    assert_eq!(d.current_tasks()[0].task_definition, "web:4");
    assert_eq!(d.start_time(), support::start_time());
    assert_eq!(
        d.end_time(),
        Some(support::start_time() + Duration::minutes(4))
    );
    assert!(report.warnings.is_empty());
}

/// Test: Without a completion block the deployment stays in progress.
#[test]
fn replay_without_completion_stays_in_progress() {
    let s = scenario(
        r#"
task_definition: "web:4"
samples:
  - desired: 3
    failures: ["container-instance/i-1"]
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();
    assert_eq!(report.deployment.status(), DeploymentStatus::InProgress);
    assert_eq!(report.deployment.health(), DeploymentHealth::Unhealthy);
    assert!(report.deployment.end_time().is_none());
}

/// Test: Completing straight from pending is allowed but flagged.
#[test]
fn completing_from_pending_warns() {
    let s = scenario(
        r#"
task_definition: "web:4"
complete:
  tasks: ["task/a"]
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();
    assert_eq!(report.deployment.status(), DeploymentStatus::Completed);
    let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::CompletedFromPending]);
}

/// Test: Completing with fewer tasks than desired is flagged.
#[test]
fn completing_below_desired_warns() {
    let s = scenario(
        r#"
task_definition: "web:4"
samples:
  - desired: 3
    tasks: ["task/a"]
complete:
  tasks: ["task/a"]
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::CompletedBelowDesired);
    assert!(report.warnings[0].message.contains("1 of 3"));
}

/// Test: Lenient repeated completion keeps the first end time and warns.
#[test]
fn lenient_repeat_keeps_first_end_time() {
    let s = scenario(
        r#"
task_definition: "web:4"
started_at: 2024-01-01T00:00:00Z
sample_interval: 10s
samples:
  - desired: 1
    tasks: ["task/a"]
complete:
  tasks: ["task/a"]
  repeat: 2
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();
    assert_eq!(
        report.deployment.end_time(),
        Some(support::start_time() + Duration::seconds(20))
    );
    let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::RepeatedCompletion]);
}

/// Test: Strict repeated completion aborts the replay.
#[test]
fn strict_repeat_fails_replay() {
    let s = scenario(
        r#"
task_definition: "web:4"
completion: strict
samples:
  - desired: 1
    tasks: ["task/a"]
complete:
  tasks: ["task/a"]
  repeat: 2
"#,
    );

    let err = replay(&s, &SequentialIds::new("dep")).unwrap_err();
    assert!(matches!(
        err,
        Error::Deploy(DeployError::AlreadyCompleted { .. })
    ));
}

/// Test: Detailed task entries keep their own fields.
#[test]
fn detailed_entries_are_passed_through() {
    let s = scenario(
        r#"
task_definition: "web:4"
samples:
  - desired: 1
    tasks:
      - arn: "task/a"
        task_definition: "web:3"
        container_instance: "container-instance/i-9"
        last_status: RUNNING
    failures:
      - arn: "container-instance/i-1"
        reason: "RESOURCE:CPU"
"#,
    );

    let report = replay(&s, &SequentialIds::new("dep")).unwrap();
    let d = &report.deployment;
    let task = &d.current_tasks()[0];
    assert_eq!(task.task_definition, "web:3");
    assert_eq!(
        task.container_instance.as_ref().map(|i| i.as_str()),
        Some("container-instance/i-9")
    );
    assert_eq!(task.last_status.as_deref(), Some("RUNNING"));
    assert_eq!(
        d.failed_instances()[0].reason.as_deref(),
        Some("RESOURCE:CPU")
    );
}
