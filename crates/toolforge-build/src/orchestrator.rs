use std::fmt;
use std::path::PathBuf;

use toolforge_core::module;
use toolforge_core::report;
use toolforge_core::target::{all_build_targets, BuildTarget};
use toolforge_core::{BuildReport, CommandResult, Layout, Requirement};
use toolforge_env::prepare::{self, PrepareError};
use toolforge_env::probe::Prober;
use toolforge_env::runner::{Runner, SpawnError};

use crate::context::{builder_for, BuildContext};
use crate::targets::argv;

pub const REPORT_FILE: &str = "toolforge-report.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Cleaning,
    InstallingDependencies,
    Building(BuildTarget),
    Reporting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Cleaning => f.write_str("cleaning"),
            Phase::InstallingDependencies => f.write_str("installing dependencies"),
            Phase::Building(target) => write!(f, "building {}", target),
            Phase::Reporting => f.write_str("reporting"),
        }
    }
}

#[derive(Debug)]
pub enum OrchestratorError {
    /// The dependency manifest cannot be found at all; the sole manifest-
    /// level fatal condition.
    MissingManifest { path: String },
    Spawn(SpawnError),
    Prepare(PrepareError),
    Report {
        path: String,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrchestratorError::MissingManifest { path } => {
                write!(f, "dependency manifest '{}' not found", path)
            }
            OrchestratorError::Spawn(error) => write!(f, "{}", error),
            OrchestratorError::Prepare(error) => write!(f, "{}", error),
            OrchestratorError::Report { path, source } => {
                write!(f, "failed to write report '{}': {}", path, source)
            }
            OrchestratorError::Serialize(error) => {
                write!(f, "failed to serialize report: {}", error)
            }
        }
    }
}

impl std::error::Error for OrchestratorError {}

impl From<SpawnError> for OrchestratorError {
    fn from(error: SpawnError) -> Self {
        OrchestratorError::Spawn(error)
    }
}

impl From<PrepareError> for OrchestratorError {
    fn from(error: PrepareError) -> Self {
        OrchestratorError::Prepare(error)
    }
}

/// Result of an aggregate `all` run. The dependency install result is data;
/// a failed install does not abort the target loop.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub dependency_install: CommandResult,
    pub report: BuildReport,
    pub report_path: PathBuf,
}

/// Top-level driver. Sequences target builders strictly one at a time; a
/// failed target records its outcome and the run advances.
pub struct Orchestrator<'a> {
    layout: &'a Layout,
    prober: &'a dyn Prober,
    runner: &'a dyn Runner,
    phase: Phase,
}

impl<'a> Orchestrator<'a> {
    pub fn new(layout: &'a Layout, prober: &'a dyn Prober, runner: &'a dyn Runner) -> Self {
        Self {
            layout,
            prober,
            runner,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn context(&self) -> BuildContext<'_> {
        BuildContext {
            layout: self.layout,
            prober: self.prober,
            runner: self.runner,
        }
    }

    /// Removes the run-owned directories. Idempotent; an I/O failure here is
    /// an environment fault.
    pub fn clean(&mut self) -> Result<(), OrchestratorError> {
        self.phase = Phase::Cleaning;
        prepare::clean(&self.layout.clean_set())?;
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Installs the dependency manifest via the package installer. A missing
    /// manifest or an unspawnable installer is fatal; a non-zero installer
    /// exit is returned as data.
    pub fn install_dependencies(&mut self) -> Result<CommandResult, OrchestratorError> {
        self.phase = Phase::InstallingDependencies;
        let manifest = self.layout.deps_manifest();
        if !manifest.exists() {
            return Err(OrchestratorError::MissingManifest {
                path: manifest.display().to_string(),
            });
        }
        let fetch = argv(&["cargo", "fetch", "--locked"]);
        let result = self
            .runner
            .run(&fetch, Some(self.layout.project_root()))?;
        self.phase = Phase::Idle;
        Ok(result)
    }

    /// Runs the requested builders in request order, recording exactly one
    /// outcome per distinct target. A duplicate request builds once.
    pub fn build_targets(&mut self, requested: &[BuildTarget]) -> BuildReport {
        let mut report = BuildReport::new();
        for target in requested {
            if report.outcome_for(*target).is_some() {
                continue;
            }
            self.phase = Phase::Building(*target);
            let outcome = builder_for(*target).run(&self.context());
            report
                .record(outcome)
                .expect("duplicate targets are filtered before building");
        }
        self.phase = Phase::Idle;
        report
    }

    /// Per-module availability of every suite module; probes only, no
    /// artifacts.
    pub fn probe_modules(&self) -> Vec<(String, bool)> {
        module::registry()
            .iter()
            .map(|spec| {
                let available = self
                    .prober
                    .requirement(&Requirement::module(spec.name));
                (spec.name.to_string(), available)
            })
            .collect()
    }

    /// The aggregate run: clean, install dependencies, build every target in
    /// the fixed order, drop the machine-readable report into dist.
    pub fn run_all(&mut self) -> Result<AggregateOutcome, OrchestratorError> {
        self.clean()?;
        let dependency_install = self.install_dependencies()?;
        let report = self.build_targets(&all_build_targets());
        self.phase = Phase::Reporting;
        let report_path = self.write_report(&report)?;
        self.phase = Phase::Idle;
        Ok(AggregateOutcome {
            dependency_install,
            report,
            report_path,
        })
    }

    fn write_report(&self, built: &BuildReport) -> Result<PathBuf, OrchestratorError> {
        let json = report::report_json(built).map_err(OrchestratorError::Serialize)?;
        prepare::ensure_dir(self.layout.dist_dir())?;
        let path = self.layout.dist_dir().join(REPORT_FILE);
        std::fs::write(&path, json).map_err(|source| OrchestratorError::Report {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_render_for_progress_lines() {
        assert_eq!(Phase::Cleaning.to_string(), "cleaning");
        assert_eq!(
            Phase::Building(BuildTarget::Android).to_string(),
            "building android"
        );
    }
}
