// ABOUTME: Diagnostics accumulator for non-fatal warnings while driving a deployment.
// ABOUTME: Collects conditions that are legal transitions but worth showing to users.

/// Collects non-fatal warnings during a replay.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn completed_from_pending(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::CompletedFromPending,
            message: message.into(),
        }
    }

    pub fn completed_below_desired(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::CompletedBelowDesired,
            message: message.into(),
        }
    }

    pub fn repeated_completion(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::RepeatedCompletion,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// `complete` reached a deployment no sample was ever applied to.
    CompletedFromPending,
    /// Fewer tasks were running at completion than the last desired count.
    CompletedBelowDesired,
    /// `complete` was called on an already completed deployment.
    RepeatedCompletion,
}
