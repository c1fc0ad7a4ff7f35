use std::fmt;

/// A named external dependency whose presence is checked, never its version.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// A suite module that must be loadable from the workspace.
    Module(String),
    /// An executable resolvable on the search path.
    Tool(String),
}

impl Requirement {
    pub fn module(name: impl Into<String>) -> Self {
        Requirement::Module(name.into())
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Requirement::Tool(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Requirement::Module(name) => name,
            Requirement::Tool(name) => name,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Module(name) => write!(f, "module '{}'", name),
            Requirement::Tool(name) => write!(f, "tool '{}'", name),
        }
    }
}
