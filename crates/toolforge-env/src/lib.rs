pub mod prepare;
pub mod probe;
pub mod runner;

pub use prepare::{clean, ensure_dir, materialize_mobile, stage_file, stage_tree, PrepareError};
pub use probe::{cloud_detected, load_module_entry, EntryError, HostPlatform, HostProber, Prober};
pub use runner::{ProcessRunner, Runner, SpawnError};
