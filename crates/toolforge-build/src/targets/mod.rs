pub mod backend;
pub mod desktop;
pub mod exe;
pub mod mobile;

use toolforge_core::outcome::diagnostic_tail;
use toolforge_core::Requirement;

use crate::context::BuildContext;

pub(crate) fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

/// Probes for an executable and, when absent, makes exactly one pinned
/// install attempt before re-probing. Never loops.
pub(crate) fn ensure_tool(
    ctx: &BuildContext<'_>,
    tool: &str,
    version: &str,
) -> Result<(), String> {
    let requirement = Requirement::tool(tool);
    if ctx.prober.requirement(&requirement) {
        return Ok(());
    }
    let install = argv(&["cargo", "install", tool, "--version", version, "--locked"]);
    match ctx.runner.run(&install, None) {
        Err(error) => return Err(error.to_string()),
        Ok(result) if !result.succeeded => {
            return Err(format!(
                "failed to install '{}': {}",
                tool,
                diagnostic_tail(&result.stderr)
            ));
        }
        Ok(_) => {}
    }
    if ctx.prober.requirement(&requirement) {
        Ok(())
    } else {
        Err(format!(
            "'{}' is still unavailable after one install attempt",
            tool
        ))
    }
}
