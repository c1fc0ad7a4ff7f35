/// One importable collaborator module of the suite, addressed by name and
/// resolved against the project root.
pub struct ModuleSpec {
    pub name: &'static str,
    pub relative_dir: &'static str,
}

pub const SERVER_MODULE: &str = "server";
pub const DESKTOP_MODULE: &str = "desktop-ui";
pub const LAUNCHER_MODULE: &str = "launcher";
pub const MOBILE_MODULE: &str = "mobile-app";

pub const TOOL_MODULES: &[&str] = &["pdf", "qr", "image", "convert", "hash", "net"];

static MODULE_REGISTRY: &[ModuleSpec] = &[
    ModuleSpec {
        name: SERVER_MODULE,
        relative_dir: "crates/server",
    },
    ModuleSpec {
        name: DESKTOP_MODULE,
        relative_dir: "crates/desktop-ui",
    },
    ModuleSpec {
        name: LAUNCHER_MODULE,
        relative_dir: "crates/launcher",
    },
    ModuleSpec {
        name: MOBILE_MODULE,
        relative_dir: "crates/mobile-app",
    },
    ModuleSpec {
        name: "pdf",
        relative_dir: "crates/tools/pdf",
    },
    ModuleSpec {
        name: "qr",
        relative_dir: "crates/tools/qr",
    },
    ModuleSpec {
        name: "image",
        relative_dir: "crates/tools/image",
    },
    ModuleSpec {
        name: "convert",
        relative_dir: "crates/tools/convert",
    },
    ModuleSpec {
        name: "hash",
        relative_dir: "crates/tools/hash",
    },
    ModuleSpec {
        name: "net",
        relative_dir: "crates/tools/net",
    },
];

pub fn registry() -> &'static [ModuleSpec] {
    MODULE_REGISTRY
}

pub fn find(name: &str) -> Option<&'static ModuleSpec> {
    registry().iter().find(|entry| entry.name == name)
}
