use std::path::PathBuf;

use toolforge_build::Orchestrator;

pub struct CleanArgs {
    pub project_root: PathBuf,
}

pub struct CleanOutcome {
    pub removed: Vec<PathBuf>,
}

pub fn run(args: CleanArgs) -> Result<CleanOutcome, String> {
    let session = super::open(&args.project_root)?;
    let removed = session.layout.clean_set();
    let mut orchestrator =
        Orchestrator::new(&session.layout, &session.prober, &session.runner);
    orchestrator.clean().map_err(|error| error.to_string())?;
    Ok(CleanOutcome { removed })
}
