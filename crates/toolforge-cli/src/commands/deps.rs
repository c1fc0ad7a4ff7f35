use std::path::PathBuf;

use toolforge_build::Orchestrator;
use toolforge_core::CommandResult;

pub struct DepsArgs {
    pub project_root: PathBuf,
}

pub fn run(args: DepsArgs) -> Result<CommandResult, String> {
    let session = super::open(&args.project_root)?;
    let mut orchestrator =
        Orchestrator::new(&session.layout, &session.prober, &session.runner);
    orchestrator
        .install_dependencies()
        .map_err(|error| error.to_string())
}
