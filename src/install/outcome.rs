//! Installation outcomes.

use serde::Serialize;

/// The result of attempting to install one tool.
///
/// Failures are per-tool: a `Failed` outcome is reported and the run moves
/// on to the next manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum InstallOutcome {
    /// The install ran and verification now passes.
    Installed,

    /// Verification passed before any work; nothing was done.
    AlreadyInstalled,

    /// Deliberately not attempted (e.g. a required secret was not
    /// supplied). Not an error.
    Skipped { reason: String },

    /// The attempt failed; the run continues with the next tool.
    Failed { reason: String },
}

impl InstallOutcome {
    /// Whether this outcome counts as a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, InstallOutcome::Failed { .. })
    }

    /// Whether the tool ended up installed (either way).
    pub fn is_installed(&self) -> bool {
        matches!(
            self,
            InstallOutcome::Installed | InstallOutcome::AlreadyInstalled
        )
    }
}
