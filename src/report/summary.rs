//! Run reports.

use serde::Serialize;

/// Result of a certification run.
///
/// Exit status is derived from the missing and warning lists alone; a
/// clean run exits 0, anything else exits 1.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CertifyReport {
    /// How many in-scope tools were checked.
    pub checked: usize,

    /// Display names of tools that failed verification.
    pub missing: Vec<String>,

    /// Security warnings (forbidden applications found).
    pub warnings: Vec<String>,
}

impl CertifyReport {
    /// Whether every in-scope tool verified and no warnings fired.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.warnings.is_empty()
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

/// Result of an installation run.
///
/// Install mode is best-effort: individual failures are recorded here and
/// never abort the run, and the process exits 0 regardless.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    /// Tools installed during this run.
    pub installed: Vec<String>,

    /// Tools that verified before any work.
    pub already_installed: Vec<String>,

    /// Tools deliberately skipped, with reasons.
    pub skipped: Vec<(String, String)>,

    /// Tools whose install failed, with reasons.
    pub failed: Vec<(String, String)>,
}

impl InstallReport {
    /// Total number of tools processed.
    pub fn total(&self) -> usize {
        self.installed.len() + self.already_installed.len() + self.skipped.len() + self.failed.len()
    }
}
