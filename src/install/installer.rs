//! Verify-first install dispatch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::context::RunContext;
use crate::exec::SystemRunner;
use crate::manifest::{Mechanism, ToolDefinition};
use crate::verify::ToolChecker;

use super::{agents, cloud_sdk, outcome::InstallOutcome};

/// How long to wait for the SentinelOne agent to register after its
/// package lands.
const AGENT_GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Installs missing tools, one mechanism at a time.
///
/// Every install is verify-first: a tool that already verifies is left
/// alone. Package-manager installs re-verify afterwards, so a `brew` that
/// exits 0 without actually delivering the tool still reports `Failed`.
pub struct Installer<'a> {
    runner: &'a dyn SystemRunner,
    context: &'a RunContext,
    grace_period: Duration,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl<'a> Installer<'a> {
    /// Create an installer over the given runner and run context.
    pub fn new(runner: &'a dyn SystemRunner, context: &'a RunContext) -> Self {
        Self {
            runner,
            context,
            grace_period: AGENT_GRACE_PERIOD,
            work_dir: std::env::temp_dir(),
            bin_dir: PathBuf::from(cloud_sdk::BIN_DIR),
        }
    }

    /// Override the agent grace period (tests use zero).
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Override the scratch directory for downloaded packages.
    pub fn with_work_dir(mut self, work_dir: &Path) -> Self {
        self.work_dir = work_dir.to_path_buf();
        self
    }

    /// Override the bin directory that utilities are linked into.
    pub fn with_bin_dir(mut self, bin_dir: &Path) -> Self {
        self.bin_dir = bin_dir.to_path_buf();
        self
    }

    /// Install one tool if verification says it is missing.
    pub fn install(&self, tool: &ToolDefinition, checker: &mut ToolChecker<'_>) -> InstallOutcome {
        if checker.verify(tool).is_installed() {
            return InstallOutcome::AlreadyInstalled;
        }

        tracing::info!("installing {}", tool.id);
        match &tool.mechanism {
            Mechanism::PackageCli { package } => {
                self.brew_install(tool, &format!("brew install {}", package), checker)
            }

            Mechanism::PackageCask { package, .. } => {
                self.brew_install(tool, &format!("brew install --cask {}", package), checker)
            }

            Mechanism::PackageManager {
                bootstrap_command, ..
            } => self.brew_install(tool, bootstrap_command, checker),

            Mechanism::CloudSdkBase => cloud_sdk::install_base(self.runner, &self.bin_dir),

            Mechanism::CloudSdkUtility {
                relative_path,
                bucket_uri,
                link_name,
            } => cloud_sdk::install_utility(
                self.runner,
                relative_path,
                bucket_uri,
                link_name,
                &self.bin_dir,
            ),

            Mechanism::PathAgent { bundle_path } => agents::install_sentinelone(
                self.runner,
                &self.context.secrets,
                bundle_path,
                &self.work_dir,
                self.grace_period,
            ),

            Mechanism::ProcessAgent { process } => {
                agents::install_automox(self.runner, &self.context.secrets, process)
            }
        }
    }

    /// Run a package-manager command, then re-verify the tool.
    fn brew_install(
        &self,
        tool: &ToolDefinition,
        command: &str,
        checker: &mut ToolChecker<'_>,
    ) -> InstallOutcome {
        match self.runner.run(command) {
            Ok(r) if r.success => {}
            Ok(r) => {
                return InstallOutcome::Failed {
                    reason: format!("{} exited {:?}", command, r.exit_code),
                }
            }
            Err(e) => {
                return InstallOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }

        checker.invalidate(&tool.id);
        if checker.verify(tool).is_installed() {
            InstallOutcome::Installed
        } else {
            InstallOutcome::Failed {
                reason: format!("{} still fails verification after install", tool.id),
            }
        }
    }
}
