use crate::target::BuildTarget;

/// Distribution filename for an artifact produced by `target`. Namespacing
/// by target key keeps two targets with the same base filename from
/// overwriting each other in the shared dist directory.
pub fn dist_artifact_name(target: BuildTarget, file_name: &str) -> String {
    format!("{}-{}", target.as_str(), file_name)
}

pub fn checksum_name(artifact_name: &str) -> String {
    format!("{}.sha256", artifact_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_are_target_namespaced() {
        assert_eq!(
            dist_artifact_name(BuildTarget::Android, "toolbox.apk"),
            "android-toolbox.apk"
        );
    }

    #[test]
    fn same_base_name_never_collides_across_targets() {
        let android = dist_artifact_name(BuildTarget::Android, "toolbox.bin");
        let exe = dist_artifact_name(BuildTarget::WindowsExe, "toolbox.bin");
        assert_ne!(android, exe);
    }

    #[test]
    fn checksum_sidecar_extends_the_artifact_name() {
        assert_eq!(checksum_name("android-toolbox.apk"), "android-toolbox.apk.sha256");
    }
}
