use std::path::{Path, PathBuf};

use crate::config::ForgeConfig;
use crate::module::ModuleSpec;
use crate::target::BuildTarget;

/// Filesystem locations owned by one orchestrator run. Derived once from the
/// project root and the optional config; everything else is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    project_root: PathBuf,
    build_dir: PathBuf,
    dist_dir: PathBuf,
}

impl Layout {
    pub fn new(project_root: impl Into<PathBuf>, config: &ForgeConfig) -> Self {
        let project_root = project_root.into();
        let build_dir = project_root.join(config.build_dir());
        let dist_dir = project_root.join(config.dist_dir());
        Self {
            project_root,
            build_dir,
            dist_dir,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Per-target scratch workspace under the build directory.
    pub fn scratch_dir(&self, target: BuildTarget) -> PathBuf {
        self.build_dir.join(target.as_str())
    }

    pub fn module_dir(&self, module: &ModuleSpec) -> PathBuf {
        self.project_root.join(module.relative_dir)
    }

    /// The dependency manifest the `deps` phase installs from.
    pub fn deps_manifest(&self) -> PathBuf {
        self.project_root.join("Cargo.toml")
    }

    /// Canonical packaging manifest staged into the android scratch
    /// workspace on first build.
    pub fn mobile_packaging_manifest(&self) -> PathBuf {
        self.project_root
            .join("crates/mobile-app/apk")
            .join("Cargo.toml")
    }

    /// Where the android packaging tool drops its apk inside the scratch
    /// workspace.
    pub fn mobile_output_dir(&self) -> PathBuf {
        self.scratch_dir(BuildTarget::Android)
            .join("target/release/apk")
    }

    /// Directories removed by the `clean` phase.
    pub fn clean_set(&self) -> Vec<PathBuf> {
        vec![self.build_dir.clone(), self.dist_dir.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module;

    #[test]
    fn defaults_hang_off_the_project_root() {
        let layout = Layout::new("/srv/toolbox", &ForgeConfig::default());
        assert_eq!(layout.build_dir(), Path::new("/srv/toolbox/build"));
        assert_eq!(layout.dist_dir(), Path::new("/srv/toolbox/dist"));
        assert_eq!(
            layout.scratch_dir(BuildTarget::Android),
            Path::new("/srv/toolbox/build/android")
        );
    }

    #[test]
    fn config_overrides_are_respected() {
        let config = ForgeConfig {
            build_dir: Some("out/build".to_string()),
            dist_dir: Some("out/dist".to_string()),
        };
        let layout = Layout::new("/srv/toolbox", &config);
        assert_eq!(layout.build_dir(), Path::new("/srv/toolbox/out/build"));
        assert_eq!(layout.dist_dir(), Path::new("/srv/toolbox/out/dist"));
    }

    #[test]
    fn module_dirs_resolve_relative_to_root() {
        let layout = Layout::new("/srv/toolbox", &ForgeConfig::default());
        let spec = module::find(module::SERVER_MODULE).expect("server module");
        assert_eq!(
            layout.module_dir(spec),
            Path::new("/srv/toolbox/crates/server")
        );
    }

    #[test]
    fn clean_set_covers_build_and_dist() {
        let layout = Layout::new("/srv/toolbox", &ForgeConfig::default());
        let set = layout.clean_set();
        assert!(set.contains(&PathBuf::from("/srv/toolbox/build")));
        assert!(set.contains(&PathBuf::from("/srv/toolbox/dist")));
    }
}
