//! Per-mechanism tool verification.
//!
//! The `ToolChecker` decides installed/missing for each manifest entry,
//! caching results within a run so a tool checked by both the certify loop
//! and the installer's verify-first step only probes the system once.
//!
//! Verification never touches the network. It is read-only with one
//! exception: finding the cloud SDK at a known install location (rather
//! than on PATH) also repairs the shell-profile source lines.

use std::collections::HashMap;

use crate::exec::SystemRunner;
use crate::install::cloud_sdk;
use crate::manifest::{builtin, Mechanism, ToolDefinition};

use super::status::ToolStatus;

/// Checks whether manifest entries are present on the host.
pub struct ToolChecker<'a> {
    runner: &'a dyn SystemRunner,
    cache: HashMap<String, ToolStatus>,
}

impl<'a> ToolChecker<'a> {
    /// Create a checker over the given runner.
    pub fn new(runner: &'a dyn SystemRunner) -> Self {
        Self {
            runner,
            cache: HashMap::new(),
        }
    }

    /// Verify a single tool, using the per-run cache when available.
    pub fn verify(&mut self, tool: &ToolDefinition) -> ToolStatus {
        if let Some(cached) = self.cache.get(&tool.id) {
            return *cached;
        }

        let status = self.evaluate(tool);
        tracing::debug!("verified {}: {:?}", tool.id, status);
        self.cache.insert(tool.id.clone(), status);
        status
    }

    /// Invalidate a cached result, forcing the next verify to re-probe.
    pub fn invalidate(&mut self, tool_id: &str) {
        self.cache.remove(tool_id);
    }

    /// Scan for forbidden remote-access applications.
    ///
    /// Returns the display names of any that are present.
    pub fn scan_forbidden(&self) -> Vec<String> {
        builtin::forbidden_apps()
            .into_iter()
            .filter(|(_, path)| self.runner.path_exists(path))
            .map(|(name, _)| name)
            .collect()
    }

    fn evaluate(&self, tool: &ToolDefinition) -> ToolStatus {
        let installed = match &tool.mechanism {
            Mechanism::PackageCli { package } => self
                .runner
                .succeeds(&format!("brew list --formula {}", package)),

            // Two independent checks, OR-ed: the cask registration or any
            // known application bundle path. First success wins.
            Mechanism::PackageCask { package, app_paths } => {
                self.runner.succeeds(&format!("brew list --cask {}", package))
                    || app_paths.iter().any(|p| self.runner.path_exists(p))
            }

            Mechanism::PackageManager {
                version_command, ..
            } => self.runner.succeeds(version_command),

            Mechanism::CloudSdkBase => self.locate_cloud_sdk(),

            Mechanism::CloudSdkUtility { relative_path, .. } => {
                let dest = cloud_sdk::sdk_root(&self.runner.home_dir()).join(relative_path);
                self.runner.path_exists(&dest)
            }

            Mechanism::PathAgent { bundle_path } => self.runner.path_exists(bundle_path),

            Mechanism::ProcessAgent { process } => self.runner.process_running(process),
        };

        if installed {
            ToolStatus::Installed
        } else {
            ToolStatus::Missing
        }
    }

    fn locate_cloud_sdk(&self) -> bool {
        if self.runner.resolve_command("gcloud").is_some() {
            return true;
        }

        let home = self.runner.home_dir();
        for location in cloud_sdk::known_gcloud_locations(&home) {
            if self.runner.path_exists(&location) {
                // Installed but not on PATH: repair the shell profile so
                // future shells resolve it.
                if let Err(e) = cloud_sdk::repair_shell_profile(&home) {
                    tracing::warn!("could not repair shell profile: {}", e);
                }
                return true;
            }
        }
        false
    }
}
