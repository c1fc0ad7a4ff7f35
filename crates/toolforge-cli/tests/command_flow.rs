use std::fs;
use std::path::{Path, PathBuf};

use toolforge_cli::commands::{clean, target, test};
use toolforge_core::module;
use toolforge_core::report;
use toolforge_core::target::BuildTarget;

fn temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    path.push(format!("toolforge-cli-{}-{}", name, stamp));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

fn write_module(root: &Path, relative_dir: &str, name: &str) {
    let dir = root.join(relative_dir);
    fs::create_dir_all(dir.join("src")).expect("create module dir");
    fs::write(
        dir.join("Cargo.toml"),
        format!("[package]\nname = \"{}\"\nversion = \"0.1.0\"\n", name),
    )
    .expect("write manifest");
    fs::write(dir.join("src/main.rs"), "fn main() {}\n").expect("write entry");
}

#[test]
fn clean_runs_twice_without_error() {
    let root = temp_dir("clean");
    fs::create_dir_all(root.join("build/android")).expect("create build");
    fs::create_dir_all(root.join("dist")).expect("create dist");
    fs::write(root.join("dist/stale.apk"), b"old").expect("write stale artifact");

    let first = clean::run(clean::CleanArgs {
        project_root: root.clone(),
    })
    .expect("first clean");
    assert_eq!(first.removed.len(), 2);
    assert!(!root.join("build").exists());
    assert!(!root.join("dist").exists());

    clean::run(clean::CleanArgs {
        project_root: root.clone(),
    })
    .expect("second clean");
    assert!(!root.join("build").exists());
}

#[test]
fn test_command_reports_availability_and_cheap_targets() {
    let root = temp_dir("probe");
    write_module(&root, "crates/server", "server");
    write_module(&root, "crates/desktop-ui", "desktop-ui");
    write_module(&root, "crates/launcher", "launcher");

    let outcome = test::run(test::TestArgs {
        project_root: root.clone(),
    })
    .expect("test run");

    assert_eq!(outcome.availability.len(), module::registry().len());
    let lookup = |name: &str| {
        outcome
            .availability
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, available)| *available)
            .expect("entry")
    };
    assert!(lookup("server"));
    assert!(lookup("launcher"));
    assert!(!lookup("pdf"));

    let outcomes = outcome.report.outcomes();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].target, BuildTarget::Backend);
    assert!(outcomes[0].is_success());
    assert_eq!(outcomes[1].target, BuildTarget::Desktop);
    assert!(outcomes[1].is_success());

    let text = report::render_availability(&outcome.availability);
    assert!(text.contains("Module availability"));
    assert!(text.contains("server"));
}

#[test]
fn single_target_run_reports_exactly_that_target() {
    let root = temp_dir("single");
    write_module(&root, "crates/server", "server");

    let built = target::run(target::TargetArgs {
        project_root: root.clone(),
        target: BuildTarget::Backend,
    })
    .expect("target run");

    assert_eq!(built.outcomes().len(), 1);
    let outcome = built
        .outcome_for(BuildTarget::Backend)
        .expect("backend outcome");
    assert!(outcome.is_success());
}

#[test]
fn desktop_failure_still_renders_a_full_report() {
    let root = temp_dir("desktop-missing");

    let built = target::run(target::TargetArgs {
        project_root: root.clone(),
        target: BuildTarget::Desktop,
    })
    .expect("target run");

    let outcome = built
        .outcome_for(BuildTarget::Desktop)
        .expect("desktop outcome");
    assert!(outcome.is_failure());

    let text = report::render(&built);
    assert!(text.contains("Desktop bundle"));
    assert!(text.contains("FAILED"));
    assert!(text.contains("Platform support"));
    assert!(text.contains("Next steps:"));
}
