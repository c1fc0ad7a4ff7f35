use toolforge_core::module;
use toolforge_core::target::BuildTarget;
use toolforge_core::{Requirement, TargetOutcome};
use toolforge_env::probe::load_module_entry;

use crate::context::{BuildContext, Preparation, TargetBuilder};

/// Validates the desktop window entry point and the launcher's desktop-mode
/// entry point. When the desktop framework module is absent, execute is
/// never attempted.
pub struct DesktopBuilder;

impl TargetBuilder for DesktopBuilder {
    fn target(&self) -> BuildTarget {
        BuildTarget::Desktop
    }

    fn prepare(&self, ctx: &BuildContext<'_>) -> Preparation {
        if ctx
            .prober
            .requirement(&Requirement::module(module::DESKTOP_MODULE))
        {
            Preparation::Ready
        } else {
            Preparation::MissingDependency(format!(
                "module '{}' is not loadable",
                module::DESKTOP_MODULE
            ))
        }
    }

    fn execute(&self, ctx: &BuildContext<'_>) -> TargetOutcome {
        for name in [module::DESKTOP_MODULE, module::LAUNCHER_MODULE] {
            if let Err(error) = load_module_entry(ctx.layout, name) {
                return TargetOutcome::failed(self.target(), error.to_string());
            }
        }
        TargetOutcome::succeeded(self.target())
    }
}
