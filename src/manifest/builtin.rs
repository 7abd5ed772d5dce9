//! Built-in macOS manifest.
//!
//! The ordered list of tools a laptop is certified against. Homebrew comes
//! first so that an install run bootstraps the package manager before any
//! formula or cask.

use std::path::PathBuf;

use super::{Mechanism, Profile, ProfileSet, ToolDefinition};

/// Homebrew bootstrap script invocation.
const BREW_BOOTSTRAP: &str = "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

fn cli(id: &str, name: &str, package: &str, profiles: ProfileSet) -> ToolDefinition {
    ToolDefinition::new(
        id,
        name,
        Mechanism::PackageCli {
            package: package.to_string(),
        },
        profiles,
    )
}

fn cask(id: &str, name: &str, package: &str, app: &str, profiles: ProfileSet) -> ToolDefinition {
    ToolDefinition::new(
        id,
        name,
        Mechanism::PackageCask {
            package: package.to_string(),
            app_paths: vec![PathBuf::from(format!("/Applications/{}.app", app))],
        },
        profiles,
    )
}

/// The macOS tool manifest, in install order.
pub fn macos_manifest() -> Vec<ToolDefinition> {
    let eng = || ProfileSet::only(&[Profile::Engineering]);
    let eng_data = || ProfileSet::only(&[Profile::Engineering, Profile::Data]);
    let data = || ProfileSet::only(&[Profile::Data]);

    vec![
        ToolDefinition::new(
            "homebrew",
            "Homebrew",
            Mechanism::PackageManager {
                version_command: "brew --version".to_string(),
                bootstrap_command: BREW_BOOTSTRAP.to_string(),
            },
            ProfileSet::All,
        ),
        cli("git", "Git", "git", ProfileSet::All),
        cli("awscli", "AWS CLI", "awscli", eng_data()),
        cli("jq", "jq", "jq", eng()),
        cli("terraform", "Terraform", "terraform", eng()),
        cli(
            "session-manager-plugin",
            "AWS Session Manager Plugin",
            "session-manager-plugin",
            eng(),
        ),
        cli("pyenv", "pyenv", "pyenv", data()),
        cask("docker", "Docker Desktop", "docker", "Docker", eng()),
        cask("slack", "Slack", "slack", "Slack", ProfileSet::All),
        cask(
            "google-chrome",
            "Google Chrome",
            "google-chrome",
            "Google Chrome",
            ProfileSet::All,
        ),
        cask(
            "visual-studio-code",
            "Visual Studio Code",
            "visual-studio-code",
            "Visual Studio Code",
            eng(),
        ),
        cask("zoom", "Zoom", "zoom", "zoom.us", ProfileSet::All),
        cask(
            "dbeaver",
            "DBeaver Community",
            "dbeaver-community",
            "DBeaver",
            data(),
        ),
        ToolDefinition::new(
            "google-cloud-sdk",
            "Google Cloud SDK",
            Mechanism::CloudSdkBase,
            eng_data(),
        ),
        ToolDefinition::new(
            "deployctl",
            "deployctl",
            Mechanism::CloudSdkUtility {
                relative_path: PathBuf::from("bin/deployctl"),
                bucket_uri: "gs://acme-devops-tools/bin/deployctl".to_string(),
                link_name: "deployctl".to_string(),
            },
            eng(),
        ),
        ToolDefinition::new(
            "sentinelone",
            "SentinelOne Agent",
            Mechanism::PathAgent {
                bundle_path: PathBuf::from(
                    "/Applications/SentinelOne/SentinelOne Extensions.app",
                ),
            },
            ProfileSet::All,
        ),
        ToolDefinition::new(
            "automox",
            "Automox Agent",
            Mechanism::ProcessAgent {
                process: "amagent".to_string(),
            },
            ProfileSet::All,
        ),
    ]
}

/// Remote-access applications that must NOT be installed.
///
/// Presence of any of these produces a security warning during
/// certification.
pub fn forbidden_apps() -> Vec<(String, PathBuf)> {
    vec![(
        "TeamViewer".to_string(),
        PathBuf::from("/Applications/TeamViewer.app"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn manifest_ids_are_unique() {
        let manifest = macos_manifest();
        let ids: HashSet<_> = manifest.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), manifest.len());
    }

    #[test]
    fn homebrew_is_first_and_applies_to_all() {
        let manifest = macos_manifest();
        assert_eq!(manifest[0].id, "homebrew");
        assert!(manifest[0].profiles.is_in_scope(Profile::Other));
    }

    #[test]
    fn security_agents_apply_to_every_profile() {
        let manifest = macos_manifest();
        for id in ["sentinelone", "automox"] {
            let tool = manifest.iter().find(|t| t.id == id).unwrap();
            assert_eq!(tool.profiles, ProfileSet::All, "{} should be all", id);
        }
    }

    #[test]
    fn data_profile_gets_cloud_sdk_but_not_terraform() {
        let manifest = macos_manifest();
        let in_scope: Vec<_> = manifest
            .iter()
            .filter(|t| t.profiles.is_in_scope(Profile::Data))
            .map(|t| t.id.as_str())
            .collect();
        assert!(in_scope.contains(&"google-cloud-sdk"));
        assert!(in_scope.contains(&"pyenv"));
        assert!(!in_scope.contains(&"terraform"));
        assert!(!in_scope.contains(&"deployctl"));
    }

    #[test]
    fn other_profile_gets_only_universal_tools() {
        let manifest = macos_manifest();
        let in_scope: Vec<_> = manifest
            .iter()
            .filter(|t| t.profiles.is_in_scope(Profile::Other))
            .collect();
        assert!(in_scope.iter().all(|t| t.profiles == ProfileSet::All));
    }

    #[test]
    fn casks_carry_application_fallback_paths() {
        let manifest = macos_manifest();
        for tool in &manifest {
            if let Mechanism::PackageCask { app_paths, .. } = &tool.mechanism {
                assert!(!app_paths.is_empty(), "{} has no app paths", tool.id);
            }
        }
    }

    #[test]
    fn forbidden_list_includes_teamviewer() {
        let forbidden = forbidden_apps();
        assert!(forbidden.iter().any(|(name, _)| name == "TeamViewer"));
    }
}
