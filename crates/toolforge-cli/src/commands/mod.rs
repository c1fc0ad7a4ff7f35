pub mod all;
pub mod clean;
pub mod deps;
pub mod target;
pub mod test;

use std::path::Path;

use toolforge_core::{config, Layout};
use toolforge_env::probe::HostProber;
use toolforge_env::runner::ProcessRunner;

/// Shared per-invocation wiring: resolved layout plus the real prober and
/// runner implementations.
pub struct Session {
    pub layout: Layout,
    pub prober: HostProber,
    pub runner: ProcessRunner,
}

pub fn open(project_root: &Path) -> Result<Session, String> {
    let settings = config::load(project_root).map_err(|error| error.to_string())?;
    let layout = Layout::new(project_root, &settings);
    Ok(Session {
        prober: HostProber::new(layout.clone()),
        runner: ProcessRunner::new(),
        layout,
    })
}
