use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use toolforge_core::module;
use toolforge_core::requirement::Requirement;
use toolforge_core::Layout;

/// Environment variables whose presence marks a cloud deployment host. The
/// external launcher uses this signal to pick backend mode.
const CLOUD_ENV_VARS: &[&str] = &["RAILWAY", "DYNO", "PORT"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Linux,
    Macos,
    Android,
    Unknown,
}

impl HostPlatform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => HostPlatform::Windows,
            "linux" => HostPlatform::Linux,
            "macos" => HostPlatform::Macos,
            "android" => HostPlatform::Android,
            _ => HostPlatform::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HostPlatform::Windows => "windows",
            HostPlatform::Linux => "linux",
            HostPlatform::Macos => "macos",
            HostPlatform::Android => "android",
            HostPlatform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host capability queries. Pure; probing failure of any kind collapses to
/// `false`, never an error.
pub trait Prober {
    fn requirement(&self, requirement: &Requirement) -> bool;
    fn platform(&self) -> HostPlatform;
    fn cloud_detected(&self) -> bool;
}

pub struct HostProber {
    layout: Layout,
}

impl HostProber {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl Prober for HostProber {
    fn requirement(&self, requirement: &Requirement) -> bool {
        match requirement {
            Requirement::Module(name) => load_module_entry(&self.layout, name).is_ok(),
            Requirement::Tool(name) => which::which(name).is_ok(),
        }
    }

    fn platform(&self) -> HostPlatform {
        HostPlatform::detect()
    }

    fn cloud_detected(&self) -> bool {
        cloud_detected()
    }
}

pub fn cloud_detected() -> bool {
    CLOUD_ENV_VARS
        .iter()
        .any(|name| std::env::var_os(name).is_some())
}

#[derive(Debug)]
pub enum EntryError {
    UnknownModule(String),
    MissingManifest {
        path: String,
    },
    Manifest {
        path: String,
        source: toml::de::Error,
    },
    Io {
        path: String,
        source: std::io::Error,
    },
    MissingEntry {
        dir: String,
    },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::UnknownModule(name) => write!(f, "unknown suite module '{}'", name),
            EntryError::MissingManifest { path } => {
                write!(f, "module manifest '{}' not found", path)
            }
            EntryError::Manifest { path, source } => {
                write!(f, "failed to parse module manifest '{}': {}", path, source)
            }
            EntryError::Io { path, source } => {
                write!(f, "failed to read module manifest '{}': {}", path, source)
            }
            EntryError::MissingEntry { dir } => {
                write!(f, "module '{}' declares no entry source file", dir)
            }
        }
    }
}

impl std::error::Error for EntryError {}

#[derive(Deserialize)]
struct ModuleManifest {
    #[serde(default)]
    lib: Option<EntrySection>,
    #[serde(default)]
    bin: Option<Vec<EntrySection>>,
}

#[derive(Deserialize)]
struct EntrySection {
    #[serde(default)]
    path: Option<String>,
}

/// Resolves a registered module's entry source file: the declared `[lib]` or
/// first `[[bin]]` path, falling back to the conventional locations. This is
/// the "is it importable" check for workspace collaborators.
pub fn load_module_entry(layout: &Layout, name: &str) -> Result<PathBuf, EntryError> {
    let spec = module::find(name).ok_or_else(|| EntryError::UnknownModule(name.to_string()))?;
    let dir = layout.module_dir(spec);
    let manifest_path = dir.join("Cargo.toml");
    if !manifest_path.exists() {
        return Err(EntryError::MissingManifest {
            path: manifest_path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(&manifest_path).map_err(|source| EntryError::Io {
        path: manifest_path.display().to_string(),
        source,
    })?;
    let manifest: ModuleManifest =
        toml::from_str(&contents).map_err(|source| EntryError::Manifest {
            path: manifest_path.display().to_string(),
            source,
        })?;

    let mut candidates = Vec::new();
    if let Some(path) = manifest.lib.and_then(|section| section.path) {
        candidates.push(dir.join(path));
    }
    if let Some(path) = manifest
        .bin
        .and_then(|sections| sections.into_iter().next())
        .and_then(|section| section.path)
    {
        candidates.push(dir.join(path));
    }
    candidates.push(dir.join("src/lib.rs"));
    candidates.push(dir.join("src/main.rs"));

    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .ok_or_else(|| EntryError::MissingEntry {
            dir: dir.display().to_string(),
        })
}
