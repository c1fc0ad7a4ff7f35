use serde::Serialize;

use crate::target::BuildTarget;

/// Captured tool output kept in a diagnostic is cut to this tail length so
/// reports stay readable.
pub const DIAGNOSTIC_TAIL_BYTES: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
    /// Target is not applicable to the current host; distinct from failure.
    Skipped,
}

/// The immutable recorded result of attempting one target once. A re-run
/// produces a new outcome, never an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    pub target: BuildTarget,
    pub status: OutcomeStatus,
    pub diagnostic: String,
}

impl TargetOutcome {
    pub fn succeeded(target: BuildTarget) -> Self {
        Self {
            target,
            status: OutcomeStatus::Succeeded,
            diagnostic: String::new(),
        }
    }

    pub fn failed(target: BuildTarget, diagnostic: impl Into<String>) -> Self {
        Self {
            target,
            status: OutcomeStatus::Failed,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn skipped(target: BuildTarget, diagnostic: impl Into<String>) -> Self {
        Self {
            target,
            status: OutcomeStatus::Skipped,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }

    pub fn is_failure(&self) -> bool {
        self.status == OutcomeStatus::Failed
    }
}

/// Tail of captured tool output bounded to [`DIAGNOSTIC_TAIL_BYTES`], cut on
/// a char boundary.
pub fn diagnostic_tail(text: &str) -> &str {
    if text.len() <= DIAGNOSTIC_TAIL_BYTES {
        return text;
    }
    let mut start = text.len() - DIAGNOSTIC_TAIL_BYTES;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}
