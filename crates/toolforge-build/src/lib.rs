pub mod context;
pub mod orchestrator;
pub mod targets;

pub use context::{builder_for, BuildContext, Preparation, TargetBuilder};
pub use orchestrator::{Orchestrator, OrchestratorError, Phase};
