use std::path::PathBuf;

use toolforge_build::Orchestrator;
use toolforge_core::target::BuildTarget;
use toolforge_core::BuildReport;

pub struct TargetArgs {
    pub project_root: PathBuf,
    pub target: BuildTarget,
}

pub fn run(args: TargetArgs) -> Result<BuildReport, String> {
    let session = super::open(&args.project_root)?;
    let mut orchestrator =
        Orchestrator::new(&session.layout, &session.prober, &session.runner);
    Ok(orchestrator.build_targets(&[args.target]))
}
