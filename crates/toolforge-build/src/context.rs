use toolforge_core::target::BuildTarget;
use toolforge_core::{Layout, TargetOutcome};
use toolforge_env::probe::Prober;
use toolforge_env::runner::Runner;

use crate::targets::backend::BackendBuilder;
use crate::targets::desktop::DesktopBuilder;
use crate::targets::exe::ExeBuilder;
use crate::targets::mobile::MobileBuilder;

/// Everything a target builder may touch. Working directories travel through
/// the runner call; builders never mutate ambient process state.
pub struct BuildContext<'a> {
    pub layout: &'a Layout,
    pub prober: &'a dyn Prober,
    pub runner: &'a dyn Runner,
}

/// Result of a builder's precondition pass.
pub enum Preparation {
    Ready,
    /// A requirement is absent and remediation was not attempted or failed.
    MissingDependency(String),
    /// The target does not apply to this host; distinct from failure.
    NotApplicable(String),
}

/// Shared two-phase contract for the closed set of target strategies.
pub trait TargetBuilder {
    fn target(&self) -> BuildTarget;
    fn prepare(&self, ctx: &BuildContext<'_>) -> Preparation;
    fn execute(&self, ctx: &BuildContext<'_>) -> TargetOutcome;

    fn run(&self, ctx: &BuildContext<'_>) -> TargetOutcome {
        match self.prepare(ctx) {
            Preparation::Ready => self.execute(ctx),
            Preparation::MissingDependency(diagnostic) => {
                TargetOutcome::failed(self.target(), diagnostic)
            }
            Preparation::NotApplicable(diagnostic) => {
                TargetOutcome::skipped(self.target(), diagnostic)
            }
        }
    }
}

pub fn builder_for(target: BuildTarget) -> Box<dyn TargetBuilder> {
    match target {
        BuildTarget::Backend => Box::new(BackendBuilder),
        BuildTarget::Desktop => Box::new(DesktopBuilder),
        BuildTarget::Android => Box::new(MobileBuilder),
        BuildTarget::WindowsExe => Box::new(ExeBuilder),
    }
}
