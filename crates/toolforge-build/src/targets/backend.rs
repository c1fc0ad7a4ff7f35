use toolforge_core::module;
use toolforge_core::target::BuildTarget;
use toolforge_core::{Requirement, TargetOutcome};
use toolforge_env::probe::load_module_entry;

use crate::context::{BuildContext, Preparation, TargetBuilder};

/// Cheapest target: validates that the backend service entry point loads.
/// Spawns nothing.
pub struct BackendBuilder;

impl TargetBuilder for BackendBuilder {
    fn target(&self) -> BuildTarget {
        BuildTarget::Backend
    }

    fn prepare(&self, ctx: &BuildContext<'_>) -> Preparation {
        if ctx
            .prober
            .requirement(&Requirement::module(module::SERVER_MODULE))
        {
            Preparation::Ready
        } else {
            Preparation::MissingDependency(format!(
                "module '{}' is not loadable",
                module::SERVER_MODULE
            ))
        }
    }

    fn execute(&self, ctx: &BuildContext<'_>) -> TargetOutcome {
        match load_module_entry(ctx.layout, module::SERVER_MODULE) {
            Ok(_) => TargetOutcome::succeeded(self.target()),
            Err(error) => TargetOutcome::failed(self.target(), error.to_string()),
        }
    }
}
