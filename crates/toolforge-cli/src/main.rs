use std::path::PathBuf;

use clap::{Parser, Subcommand};

use toolforge_cli::commands;
use toolforge_core::target::BuildTarget;
use toolforge_core::{diagnostic_tail, report};

#[derive(Parser)]
#[command(name = "toolforge", version, about = "Toolbox build orchestrator")]
struct Cli {
    /// Project root containing the suite workspace.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Remove the build and dist directories.
    Clean,
    /// Install the dependency manifest via the package installer.
    Deps,
    /// Probe availability of every suite module without building artifacts.
    Test,
    /// Validate the backend service entry point.
    Backend,
    /// Validate the desktop window and launcher entry points.
    Desktop,
    /// Build the Android package.
    Android,
    /// Package the Windows executable.
    Exe,
    /// Clean, install dependencies, and build every target in order.
    All,
}

fn main() {
    match run_cli() {
        Ok(code) => std::process::exit(code),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

fn run_cli() -> Result<i32, String> {
    let cli = Cli::parse();
    let project_root = cli.project_root;
    match cli.command {
        Some(Command::Clean) => {
            let outcome = commands::clean::run(commands::clean::CleanArgs { project_root })?;
            for path in outcome.removed {
                println!("removed {}", path.display());
            }
            Ok(0)
        }
        Some(Command::Deps) => {
            let result = commands::deps::run(commands::deps::DepsArgs { project_root })?;
            if result.succeeded {
                println!("dependencies fetched");
                Ok(0)
            } else {
                eprintln!("{}", diagnostic_tail(&result.stderr));
                Ok(1)
            }
        }
        Some(Command::Test) | None => {
            let outcome = commands::test::run(commands::test::TestArgs { project_root })?;
            println!("platform: {}", outcome.platform);
            println!(
                "cloud environment: {}",
                if outcome.cloud { "detected" } else { "not detected" }
            );
            println!();
            println!("{}", report::render_availability(&outcome.availability));
            println!();
            println!("{}", report::render(&outcome.report));
            Ok(0)
        }
        Some(Command::Backend) => run_target(project_root, BuildTarget::Backend),
        Some(Command::Desktop) => run_target(project_root, BuildTarget::Desktop),
        Some(Command::Android) => run_target(project_root, BuildTarget::Android),
        Some(Command::Exe) => run_target(project_root, BuildTarget::WindowsExe),
        Some(Command::All) => {
            let outcome = commands::all::run(commands::all::AllArgs { project_root })?;
            if !outcome.dependency_install.succeeded {
                eprintln!(
                    "dependency install failed: {}",
                    diagnostic_tail(&outcome.dependency_install.stderr)
                );
            }
            println!("{}", report::render(&outcome.report));
            println!();
            println!("report: {}", outcome.report_path.display());
            Ok(if outcome.report.succeeded() { 0 } else { 1 })
        }
    }
}

fn run_target(project_root: PathBuf, target: BuildTarget) -> Result<i32, String> {
    let report = commands::target::run(commands::target::TargetArgs {
        project_root,
        target,
    })?;
    println!("{}", report::render(&report));
    let failed = report
        .outcome_for(target)
        .map(|outcome| outcome.is_failure())
        .unwrap_or(true);
    Ok(if failed { 1 } else { 0 })
}
