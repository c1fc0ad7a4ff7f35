use std::path::PathBuf;

use toolforge_build::orchestrator::AggregateOutcome;
use toolforge_build::Orchestrator;

pub struct AllArgs {
    pub project_root: PathBuf,
}

pub fn run(args: AllArgs) -> Result<AggregateOutcome, String> {
    let session = super::open(&args.project_root)?;
    let mut orchestrator =
        Orchestrator::new(&session.layout, &session.prober, &session.runner);
    orchestrator.run_all().map_err(|error| error.to_string())
}
