use toolforge_core::module;
use toolforge_core::outcome::diagnostic_tail;
use toolforge_core::target::BuildTarget;
use toolforge_core::{naming, TargetOutcome};
use toolforge_env::prepare;
use toolforge_env::probe::HostPlatform;

use crate::context::{BuildContext, Preparation, TargetBuilder};
use crate::targets::ensure_tool;

pub const PACKAGING_TOOL: &str = "cargo-wix";
pub const PACKAGING_TOOL_VERSION: &str = "0.3.9";
pub const BUNDLE_NAME: &str = "toolbox-setup.msi";

/// Packages the launcher as a Windows installer. Only eligible on a Windows
/// host; anywhere else the outcome is a skip, not a failure.
pub struct ExeBuilder;

impl TargetBuilder for ExeBuilder {
    fn target(&self) -> BuildTarget {
        BuildTarget::WindowsExe
    }

    fn prepare(&self, ctx: &BuildContext<'_>) -> Preparation {
        if ctx.prober.platform() != HostPlatform::Windows {
            return Preparation::NotApplicable(
                "windows executable builds require a windows host".to_string(),
            );
        }
        match ensure_tool(ctx, PACKAGING_TOOL, PACKAGING_TOOL_VERSION) {
            Ok(()) => Preparation::Ready,
            Err(diagnostic) => Preparation::MissingDependency(diagnostic),
        }
    }

    fn execute(&self, ctx: &BuildContext<'_>) -> TargetOutcome {
        let target = self.target();
        if let Err(error) = prepare::ensure_dir(ctx.layout.dist_dir()) {
            return TargetOutcome::failed(target, error.to_string());
        }
        let output = ctx
            .layout
            .dist_dir()
            .join(naming::dist_artifact_name(target, BUNDLE_NAME));
        let package = vec![
            "cargo".to_string(),
            "wix".to_string(),
            "--package".to_string(),
            module::LAUNCHER_MODULE.to_string(),
            "--nocapture".to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        match ctx.runner.run(&package, Some(ctx.layout.project_root())) {
            Err(error) => TargetOutcome::failed(target, error.to_string()),
            Ok(result) if !result.succeeded => {
                TargetOutcome::failed(target, diagnostic_tail(&result.stderr).to_string())
            }
            Ok(_) => TargetOutcome::succeeded(target),
        }
    }
}
