use std::path::PathBuf;

use toolforge_build::Orchestrator;
use toolforge_core::target::BuildTarget;
use toolforge_core::BuildReport;
use toolforge_env::probe::{HostPlatform, Prober};

pub struct TestArgs {
    pub project_root: PathBuf,
}

pub struct TestOutcome {
    pub platform: HostPlatform,
    pub cloud: bool,
    pub availability: Vec<(String, bool)>,
    pub report: BuildReport,
}

/// Probes every suite module and validates the two no-process targets.
/// Builds no artifacts and always completes.
pub fn run(args: TestArgs) -> Result<TestOutcome, String> {
    let session = super::open(&args.project_root)?;
    let platform = session.prober.platform();
    let cloud = session.prober.cloud_detected();
    let mut orchestrator =
        Orchestrator::new(&session.layout, &session.prober, &session.runner);
    let availability = orchestrator.probe_modules();
    let report = orchestrator.build_targets(&[BuildTarget::Backend, BuildTarget::Desktop]);
    Ok(TestOutcome {
        platform,
        cloud,
        availability,
        report,
    })
}
