// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;

use crate::deploy::Deployment;
use crate::replay::{ReplayReport, ReplayStep};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-friendly output with one line per sample
    #[default]
    Normal,
    /// Only the final state, for CI
    Quiet,
    /// The final report as a single JSON object
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    pub fn step(&self, step: &ReplayStep) {
        self.progress(&format!(
            "  → sample {}: {} / {} ({} of {} running, {} failed)",
            step.sample + 1,
            step.status,
            step.health,
            step.running,
            step.desired,
            step.failed
        ));
    }

    /// Print the whole replay: steps, warnings and the final deployment.
    pub fn report(&self, report: &ReplayReport) {
        match self.mode {
            OutputMode::Normal => {
                for step in &report.steps {
                    self.step(step);
                }
                for warning in &report.warnings {
                    eprintln!("  ! {}", warning.message);
                }
                println!("{}", summary(&report.deployment));
            }
            OutputMode::Quiet => {
                println!("{}", summary(&report.deployment));
            }
            OutputMode::Json => self.json(report),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => println!("{json}"),
            Err(e) => self.error(&e.to_string()),
        }
    }
}

fn summary(deployment: &Deployment) -> String {
    let end = deployment
        .end_time()
        .map(|t| format!(", ended {}", t.to_rfc3339()))
        .unwrap_or_default();
    format!(
        "Deployment {} ({}): {} / {}, {} of {} tasks running{}",
        deployment.id(),
        deployment.task_definition(),
        deployment.status(),
        deployment.health(),
        deployment.running_task_count(),
        deployment.desired_task_count(),
        end
    )
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
}
