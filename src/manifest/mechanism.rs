//! Installation/verification mechanisms.
//!
//! Each manifest entry carries one mechanism describing how the tool is
//! verified and installed. The enum is closed: adding a mechanism is a
//! compile-time change, and every dispatch site matches exhaustively.

use std::path::PathBuf;

use serde::Serialize;

/// How a tool is verified and installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Mechanism {
    /// Homebrew formula (CLI tool).
    #[serde(rename = "package-manager-cli")]
    PackageCli {
        /// Formula name passed to `brew install`.
        package: String,
    },

    /// Homebrew cask (GUI application). Verification falls back to known
    /// application bundle paths when the cask is not registered.
    #[serde(rename = "package-manager-cask")]
    PackageCask {
        /// Cask name passed to `brew install --cask`.
        package: String,
        /// Application bundle paths that also count as installed.
        app_paths: Vec<PathBuf>,
    },

    /// The foundational package manager itself (Homebrew).
    #[serde(rename = "foundational-package-manager")]
    PackageManager {
        /// Command whose success means the manager is installed.
        version_command: String,
        /// Shell command that bootstraps the manager.
        bootstrap_command: String,
    },

    /// Google Cloud SDK base install (fixed install dir, shell-profile
    /// source lines, sub-components, kubectl symlink).
    #[serde(rename = "cloud-sdk-base")]
    CloudSdkBase,

    /// A helper copied out of an object-storage bucket into the cloud SDK
    /// bin directory and symlinked into /usr/local/bin.
    #[serde(rename = "cloud-sdk-utility")]
    CloudSdkUtility {
        /// Destination path relative to the SDK install directory.
        relative_path: PathBuf,
        /// `gs://` source object.
        bucket_uri: String,
        /// Symlink name under the well-known bin directory.
        link_name: String,
    },

    /// Security agent verified by a fixed application bundle path
    /// (SentinelOne).
    #[serde(rename = "path-based-security-agent")]
    PathAgent {
        /// Bundle path whose existence means the agent is installed.
        bundle_path: PathBuf,
    },

    /// Security agent verified by a running process (Automox).
    #[serde(rename = "process-based-security-agent")]
    ProcessAgent {
        /// Process name to look for.
        process: String,
    },
}

impl Mechanism {
    /// Stable label for reporting, matching the serialized tag.
    pub fn label(&self) -> &'static str {
        match self {
            Mechanism::PackageCli { .. } => "package-manager-cli",
            Mechanism::PackageCask { .. } => "package-manager-cask",
            Mechanism::PackageManager { .. } => "foundational-package-manager",
            Mechanism::CloudSdkBase => "cloud-sdk-base",
            Mechanism::CloudSdkUtility { .. } => "cloud-sdk-utility",
            Mechanism::PathAgent { .. } => "path-based-security-agent",
            Mechanism::ProcessAgent { .. } => "process-based-security-agent",
        }
    }
}
