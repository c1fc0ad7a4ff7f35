pub mod checksum;
pub mod command;
pub mod config;
pub mod layout;
pub mod module;
pub mod naming;
pub mod outcome;
pub mod report;
pub mod requirement;
pub mod target;

pub use command::CommandResult;
pub use layout::Layout;
pub use outcome::{diagnostic_tail, OutcomeStatus, TargetOutcome};
pub use report::{BuildReport, ReportError, Support};
pub use requirement::Requirement;
pub use target::{all_build_targets, BuildTarget, TargetParseError};
