use std::path::{Path, PathBuf};

use toolforge_core::outcome::diagnostic_tail;
use toolforge_core::target::BuildTarget;
use toolforge_core::{checksum, module, naming};
use toolforge_core::{Requirement, TargetOutcome};
use toolforge_env::prepare;

use crate::context::{BuildContext, Preparation, TargetBuilder};
use crate::targets::{argv, ensure_tool};

pub const PACKAGING_TOOL: &str = "cargo-apk";
pub const PACKAGING_TOOL_VERSION: &str = "0.10.0";
pub const ANDROID_RUST_TARGET: &str = "aarch64-linux-android";

/// Produces the Android package in a staged scratch workspace. The external
/// tool's exit code alone is not trusted; the apk must exist afterwards.
pub struct MobileBuilder;

impl TargetBuilder for MobileBuilder {
    fn target(&self) -> BuildTarget {
        BuildTarget::Android
    }

    fn prepare(&self, ctx: &BuildContext<'_>) -> Preparation {
        if !ctx
            .prober
            .requirement(&Requirement::module(module::MOBILE_MODULE))
        {
            return Preparation::MissingDependency(format!(
                "module '{}' is not loadable",
                module::MOBILE_MODULE
            ));
        }
        match ensure_tool(ctx, PACKAGING_TOOL, PACKAGING_TOOL_VERSION) {
            Ok(()) => Preparation::Ready,
            Err(diagnostic) => Preparation::MissingDependency(diagnostic),
        }
    }

    fn execute(&self, ctx: &BuildContext<'_>) -> TargetOutcome {
        let target = self.target();
        let fresh = match prepare::materialize_mobile(ctx.layout) {
            Ok(fresh) => fresh,
            Err(error) => return TargetOutcome::failed(target, error.to_string()),
        };
        let scratch = ctx.layout.scratch_dir(target);

        if fresh {
            let init = argv(&["rustup", "target", "add", ANDROID_RUST_TARGET]);
            match ctx.runner.run(&init, Some(&scratch)) {
                Err(error) => return TargetOutcome::failed(target, error.to_string()),
                Ok(result) if !result.succeeded => {
                    return TargetOutcome::failed(
                        target,
                        diagnostic_tail(&result.stderr).to_string(),
                    );
                }
                Ok(_) => {}
            }
        }

        let package = argv(&["cargo", "apk", "build", "--release"]);
        let packaged = match ctx.runner.run(&package, Some(&scratch)) {
            Err(error) => return TargetOutcome::failed(target, error.to_string()),
            Ok(result) => result,
        };
        if !packaged.succeeded {
            return TargetOutcome::failed(target, diagnostic_tail(&packaged.stderr).to_string());
        }

        let output_dir = ctx.layout.mobile_output_dir();
        let artifact = match find_artifact(&output_dir, "apk") {
            Some(artifact) => artifact,
            None => {
                return TargetOutcome::failed(
                    target,
                    format!(
                        "packaging reported success but no apk was found under '{}'",
                        output_dir.display()
                    ),
                );
            }
        };

        match publish_artifact(ctx, target, &artifact) {
            Ok(()) => TargetOutcome::succeeded(target),
            Err(diagnostic) => TargetOutcome::failed(target, diagnostic),
        }
    }
}

/// Copies the artifact into the shared dist directory under a
/// target-namespaced filename and writes its checksum sidecar.
fn publish_artifact(
    ctx: &BuildContext<'_>,
    target: BuildTarget,
    artifact: &Path,
) -> Result<(), String> {
    let file_name = artifact
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| format!("artifact '{}' has no filename", artifact.display()))?;
    prepare::ensure_dir(ctx.layout.dist_dir()).map_err(|error| error.to_string())?;
    let destination = ctx
        .layout
        .dist_dir()
        .join(naming::dist_artifact_name(target, &file_name));
    std::fs::copy(artifact, &destination).map_err(|error| {
        format!(
            "failed to copy '{}' into dist: {}",
            artifact.display(),
            error
        )
    })?;
    checksum::write_sidecar(&destination).map_err(|error| error.to_string())?;
    Ok(())
}

/// First artifact with the given extension in a directory, by name, so
/// repeated runs pick the same file.
pub fn find_artifact(dir: &Path, extension: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|found| found == extension)
                .unwrap_or(false)
        })
        .collect();
    matches.sort();
    matches.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_artifact_prefers_stable_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("zeta.apk"), b"z").expect("write");
        std::fs::write(dir.path().join("alpha.apk"), b"a").expect("write");
        std::fs::write(dir.path().join("notes.txt"), b"n").expect("write");
        let found = find_artifact(dir.path(), "apk").expect("artifact");
        assert_eq!(found.file_name().unwrap(), "alpha.apk");
    }

    #[test]
    fn find_artifact_handles_missing_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(find_artifact(&dir.path().join("absent"), "apk").is_none());
    }
}
