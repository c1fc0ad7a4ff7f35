use std::path::Path;

use serde::Deserialize;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "failed to read config: {}", error),
            ConfigError::Yaml(error) => write!(f, "failed to parse config: {}", error),
        }
    }
}

impl std::error::Error for ConfigError {}

pub const DEFAULT_BUILD_DIR: &str = "build";
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Optional `toolforge.yaml` at the project root. Missing file means
/// defaults; a malformed file is an error, not a fallback.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForgeConfig {
    #[serde(default)]
    pub build_dir: Option<String>,
    #[serde(default)]
    pub dist_dir: Option<String>,
}

impl ForgeConfig {
    pub fn build_dir(&self) -> &str {
        self.build_dir.as_deref().unwrap_or(DEFAULT_BUILD_DIR)
    }

    pub fn dist_dir(&self) -> &str {
        self.dist_dir.as_deref().unwrap_or(DEFAULT_DIST_DIR)
    }
}

pub fn load(project_root: &Path) -> Result<ForgeConfig, ConfigError> {
    let path = project_root.join("toolforge.yaml");
    if !path.exists() {
        return Ok(ForgeConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(ConfigError::Io)?;
    serde_yaml::from_str(&contents).map_err(ConfigError::Yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("toolforge-core-{}-{}", name, stamp));
        std::fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = temp_dir("missing-config");
        let config = load(&dir).expect("config");
        assert_eq!(config.build_dir(), DEFAULT_BUILD_DIR);
        assert_eq!(config.dist_dir(), DEFAULT_DIST_DIR);
    }

    #[test]
    fn reads_overrides_from_yaml() {
        let dir = temp_dir("yaml-config");
        std::fs::write(
            dir.join("toolforge.yaml"),
            "buildDir: out/build\ndistDir: out/dist\n",
        )
        .expect("write config");
        let config = load(&dir).expect("config");
        assert_eq!(config.build_dir(), "out/build");
        assert_eq!(config.dist_dir(), "out/dist");
    }

    #[test]
    fn malformed_config_is_rejected() {
        let dir = temp_dir("bad-config");
        std::fs::write(dir.join("toolforge.yaml"), "buildDir: [unclosed\n").expect("write config");
        let error = load(&dir).expect_err("error");
        assert!(error.to_string().contains("failed to parse config"));
    }
}
