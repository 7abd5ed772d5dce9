//! Verification status.

use serde::Serialize;

/// The result of verifying a single tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// The tool is present on the host.
    Installed,
    /// The tool is not present.
    Missing,
}

impl ToolStatus {
    /// Whether the tool is installed.
    pub fn is_installed(&self) -> bool {
        matches!(self, ToolStatus::Installed)
    }
}
