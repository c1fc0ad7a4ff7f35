use std::fmt;
use std::path::Path;
use std::process::Command;

use toolforge_core::CommandResult;

/// Executes one external process synchronously with both streams captured.
/// A non-zero exit is data; only failure to spawn at all is an error.
pub trait Runner {
    fn run(&self, argv: &[String], cwd: Option<&Path>) -> Result<CommandResult, SpawnError>;
}

#[derive(Clone, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Runner for ProcessRunner {
    fn run(&self, argv: &[String], cwd: Option<&Path>) -> Result<CommandResult, SpawnError> {
        let program = argv.first().ok_or(SpawnError::EmptyCommand)?;
        let mut command = Command::new(program);
        command.args(&argv[1..]);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }
        let output = command.output().map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => SpawnError::NotInstalled {
                program: program.clone(),
            },
            _ => SpawnError::Spawn {
                program: program.clone(),
                source,
            },
        })?;
        Ok(CommandResult::new(
            program.clone(),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[derive(Debug)]
pub enum SpawnError {
    EmptyCommand,
    NotInstalled {
        program: String,
    },
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::EmptyCommand => write!(f, "empty command line"),
            SpawnError::NotInstalled { program } => write!(f, "'{}' is not installed", program),
            SpawnError::Spawn { program, source } => {
                write!(f, "failed to spawn '{}': {}", program, source)
            }
        }
    }
}

impl std::error::Error for SpawnError {}
