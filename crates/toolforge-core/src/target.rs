use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTarget {
    Backend,
    Desktop,
    Android,
    WindowsExe,
}

impl BuildTarget {
    pub fn as_str(self) -> &'static str {
        self.descriptor().key_str
    }

    /// Human heading used in report lines.
    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    /// Support-matrix capability label.
    pub fn capability(self) -> &'static str {
        self.descriptor().capability
    }

    pub fn descriptor(self) -> &'static TargetDescriptor {
        registry()
            .iter()
            .find(|entry| entry.target == self)
            .expect("build target missing from registry")
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTarget {
    type Err = TargetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        registry()
            .iter()
            .find(|entry| entry.key_str == value)
            .map(|entry| entry.target)
            .ok_or_else(|| TargetParseError::UnknownTarget(value.to_string()))
    }
}

pub struct TargetDescriptor {
    pub target: BuildTarget,
    pub key_str: &'static str,
    pub title: &'static str,
    pub capability: &'static str,
}

static TARGET_REGISTRY: &[TargetDescriptor] = &[
    TargetDescriptor {
        target: BuildTarget::Backend,
        key_str: "backend",
        title: "Backend service",
        capability: "backend service",
    },
    TargetDescriptor {
        target: BuildTarget::Desktop,
        key_str: "desktop",
        title: "Desktop bundle",
        capability: "desktop bundle",
    },
    TargetDescriptor {
        target: BuildTarget::Android,
        key_str: "android",
        title: "Android package",
        capability: "android package",
    },
    TargetDescriptor {
        target: BuildTarget::WindowsExe,
        key_str: "exe",
        title: "Windows executable",
        capability: "windows executable",
    },
];

pub fn registry() -> &'static [TargetDescriptor] {
    TARGET_REGISTRY
}

/// Every target in the fixed build order.
pub fn all_build_targets() -> Vec<BuildTarget> {
    registry().iter().map(|entry| entry.target).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetParseError {
    UnknownTarget(String),
}

impl fmt::Display for TargetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetParseError::UnknownTarget(value) => {
                write!(f, "unknown build target '{}'", value)
            }
        }
    }
}

impl std::error::Error for TargetParseError {}
