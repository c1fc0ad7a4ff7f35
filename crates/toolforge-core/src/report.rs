use std::fmt;

use serde::Serialize;

use crate::outcome::{OutcomeStatus, TargetOutcome};
use crate::target::BuildTarget;

/// Ordered, append-only collection of per-target outcomes for one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildReport {
    outcomes: Vec<TargetOutcome>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome. The same target must never appear twice within
    /// one run.
    pub fn record(&mut self, outcome: TargetOutcome) -> Result<(), ReportError> {
        if self.outcomes.iter().any(|entry| entry.target == outcome.target) {
            return Err(ReportError::DuplicateTarget(outcome.target));
        }
        self.outcomes.push(outcome);
        Ok(())
    }

    pub fn outcomes(&self) -> &[TargetOutcome] {
        &self.outcomes
    }

    pub fn outcome_for(&self, target: BuildTarget) -> Option<&TargetOutcome> {
        self.outcomes.iter().find(|entry| entry.target == target)
    }

    /// True when no recorded outcome failed. Skips do not count against the
    /// aggregate.
    pub fn succeeded(&self) -> bool {
        !self.outcomes.iter().any(TargetOutcome::is_failure)
    }

    /// Derived capability view, computed purely from the recorded outcomes.
    pub fn support_matrix(&self) -> Vec<SupportEntry> {
        self.outcomes
            .iter()
            .map(|outcome| SupportEntry {
                capability: outcome.target.capability(),
                support: match outcome.status {
                    OutcomeStatus::Succeeded => Support::Yes,
                    OutcomeStatus::Failed => Support::No,
                    OutcomeStatus::Skipped => Support::NotApplicable,
                },
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Support {
    Yes,
    No,
    NotApplicable,
}

impl Support {
    pub fn as_str(self) -> &'static str {
        match self {
            Support::Yes => "supported",
            Support::No => "unsupported",
            Support::NotApplicable => "not applicable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SupportEntry {
    pub capability: &'static str,
    pub support: Support,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportError {
    DuplicateTarget(BuildTarget),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::DuplicateTarget(target) => {
                write!(f, "target '{}' already recorded in this run", target)
            }
        }
    }
}

impl std::error::Error for ReportError {}

const STATUS_WIDTH: usize = 24;

static NEXT_STEPS: &str = "\
Next steps:
  1. Backend deploy: push the server crate to the connected deployment platform
  2. Windows executable: run `toolforge exe` on a Windows host
  3. Android package: install the apk from dist/ on a device
  4. Re-check module availability any time with `toolforge test`";

/// Deterministic, order-preserving rendering of one run. Pure formatting;
/// the caller decides where to print it.
pub fn render(report: &BuildReport) -> String {
    let mut lines = Vec::new();
    lines.push("Build summary".to_string());
    lines.push("=============".to_string());
    for outcome in report.outcomes() {
        let marker = match outcome.status {
            OutcomeStatus::Succeeded => "ok",
            OutcomeStatus::Failed => "FAILED",
            OutcomeStatus::Skipped => "skipped",
        };
        lines.push(format!(
            "{:width$} {}",
            outcome.target.title(),
            marker,
            width = STATUS_WIDTH
        ));
        if !outcome.diagnostic.is_empty() {
            for diagnostic_line in outcome.diagnostic.lines() {
                lines.push(format!("    {}", diagnostic_line));
            }
        }
    }
    lines.push(String::new());
    lines.push("Platform support".to_string());
    lines.push("----------------".to_string());
    for entry in report.support_matrix() {
        lines.push(format!(
            "{:width$} {}",
            entry.capability,
            entry.support.as_str(),
            width = STATUS_WIDTH
        ));
    }
    lines.push(String::new());
    lines.push(NEXT_STEPS.to_string());
    lines.join("\n")
}

/// Renders the `test` command's per-module availability listing.
pub fn render_availability(entries: &[(String, bool)]) -> String {
    let mut lines = Vec::new();
    lines.push("Module availability".to_string());
    lines.push("-------------------".to_string());
    for (name, available) in entries {
        let marker = if *available { "available" } else { "missing" };
        lines.push(format!("{:width$} {}", name, marker, width = STATUS_WIDTH));
    }
    lines.join("\n")
}

/// Machine-readable twin of [`render`], written into the distribution
/// directory by aggregate runs.
pub fn report_json(report: &BuildReport) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct ReportDocument<'a> {
        succeeded: bool,
        outcomes: &'a [TargetOutcome],
        support: Vec<SupportEntry>,
    }

    serde_json::to_string_pretty(&ReportDocument {
        succeeded: report.succeeded(),
        outcomes: report.outcomes(),
        support: report.support_matrix(),
    })
}
