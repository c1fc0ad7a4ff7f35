use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use toolforge_core::module;
use toolforge_core::target::BuildTarget;
use toolforge_core::Layout;

#[derive(Debug)]
pub enum PrepareError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Missing {
        path: String,
    },
}

impl PrepareError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        PrepareError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepareError::Io { path, source } => {
                write!(f, "failed to prepare '{}': {}", path, source)
            }
            PrepareError::Missing { path } => {
                write!(f, "required input '{}' not found", path)
            }
        }
    }
}

impl std::error::Error for PrepareError {}

/// Removes each directory recursively if present. An absent directory is not
/// an error; calling twice leaves identical state.
pub fn clean(paths: &[PathBuf]) -> Result<(), PrepareError> {
    for path in paths {
        if path.exists() {
            std::fs::remove_dir_all(path).map_err(|source| PrepareError::io(path, source))?;
        }
    }
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<(), PrepareError> {
    std::fs::create_dir_all(path).map_err(|source| PrepareError::io(path, source))
}

/// Copies `src` to `dst` unless the destination already exists
/// (first-build-wins). Returns whether a copy happened.
pub fn stage_file(src: &Path, dst: &Path) -> Result<bool, PrepareError> {
    if dst.exists() {
        return Ok(false);
    }
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }
    std::fs::copy(src, dst).map_err(|source| PrepareError::io(src, source))?;
    Ok(true)
}

/// Recursive copy of a directory tree, skipped entirely when the destination
/// directory already exists.
pub fn stage_tree(src: &Path, dst: &Path) -> Result<bool, PrepareError> {
    if dst.exists() {
        return Ok(false);
    }
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|source| PrepareError::Io {
            path: src.display().to_string(),
            source: source
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk failed")),
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .unwrap_or_else(|_| Path::new(""));
        let destination = dst.join(relative);
        if entry.file_type().is_dir() {
            ensure_dir(&destination)?;
        } else {
            if let Some(parent) = destination.parent() {
                ensure_dir(parent)?;
            }
            std::fs::copy(entry.path(), &destination)
                .map_err(|source| PrepareError::io(entry.path(), source))?;
        }
    }
    Ok(true)
}

/// Stages the mobile module's source tree and packaging manifest into the
/// android scratch workspace. Returns whether the workspace was freshly
/// materialized (the packaging manifest was copied by this call).
pub fn materialize_mobile(layout: &Layout) -> Result<bool, PrepareError> {
    let spec = module::find(module::MOBILE_MODULE).ok_or_else(|| PrepareError::Missing {
        path: module::MOBILE_MODULE.to_string(),
    })?;
    let module_dir = layout.module_dir(spec);
    let src = module_dir.join("src");
    if !src.exists() {
        return Err(PrepareError::Missing {
            path: src.display().to_string(),
        });
    }
    let manifest = layout.mobile_packaging_manifest();
    if !manifest.exists() {
        return Err(PrepareError::Missing {
            path: manifest.display().to_string(),
        });
    }
    let scratch = layout.scratch_dir(BuildTarget::Android);
    ensure_dir(&scratch)?;
    stage_tree(&src, &scratch.join("src"))?;
    stage_file(&manifest, &scratch.join("Cargo.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolforge_core::config::ForgeConfig;

    #[test]
    fn clean_is_idempotent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let build = dir.path().join("build");
        std::fs::create_dir_all(build.join("android")).expect("create");
        std::fs::write(build.join("android/stale.apk"), b"old").expect("write");
        let paths = vec![build.clone(), dir.path().join("dist")];
        clean(&paths).expect("first clean");
        assert!(!build.exists());
        clean(&paths).expect("second clean");
        assert!(!build.exists());
    }

    #[test]
    fn ensure_dir_creates_all_ancestors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).expect("first");
        ensure_dir(&nested).expect("second");
        assert!(nested.is_dir());
    }

    #[test]
    fn stage_file_never_overwrites() {
        let dir = tempfile::tempdir().expect("temp dir");
        let src = dir.path().join("manifest.toml");
        let dst = dir.path().join("scratch/manifest.toml");
        std::fs::write(&src, b"first").expect("write");
        assert!(stage_file(&src, &dst).expect("stage"));
        std::fs::write(&src, b"second").expect("rewrite");
        assert!(!stage_file(&src, &dst).expect("stage again"));
        assert_eq!(std::fs::read(&dst).expect("read"), b"first");
    }

    #[test]
    fn stage_tree_copies_nested_files_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("widgets")).expect("create");
        std::fs::write(src.join("main.rs"), b"fn main() {}").expect("write");
        std::fs::write(src.join("widgets/panel.rs"), b"pub struct Panel;").expect("write");
        let dst = dir.path().join("scratch/src");
        assert!(stage_tree(&src, &dst).expect("stage"));
        assert!(dst.join("widgets/panel.rs").exists());
        assert!(!stage_tree(&src, &dst).expect("stage again"));
    }

    #[test]
    fn materialize_reports_freshness_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path();
        let mobile = root.join("crates/mobile-app");
        std::fs::create_dir_all(mobile.join("src")).expect("create");
        std::fs::create_dir_all(mobile.join("apk")).expect("create");
        std::fs::write(mobile.join("src/main.rs"), b"fn main() {}").expect("write");
        std::fs::write(mobile.join("apk/Cargo.toml"), b"[package]\nname = \"toolbox-apk\"\n")
            .expect("write");
        let layout = Layout::new(root, &ForgeConfig::default());
        assert!(materialize_mobile(&layout).expect("materialize"));
        assert!(layout
            .scratch_dir(BuildTarget::Android)
            .join("src/main.rs")
            .exists());
        assert!(!materialize_mobile(&layout).expect("materialize again"));
    }

    #[test]
    fn materialize_requires_the_packaging_manifest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mobile = dir.path().join("crates/mobile-app");
        std::fs::create_dir_all(mobile.join("src")).expect("create");
        let layout = Layout::new(dir.path(), &ForgeConfig::default());
        let error = materialize_mobile(&layout).expect_err("error");
        assert!(matches!(error, PrepareError::Missing { .. }));
    }
}
