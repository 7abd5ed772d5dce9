//! Tool definitions.

use serde::Serialize;

use super::{Mechanism, ProfileSet};

/// One manifest entry.
///
/// Entries are static: the manifest is built once at process start and
/// never mutated during a run.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Stable identifier, unique within a manifest.
    pub id: String,

    /// Human-readable label for reporting.
    pub display_name: String,

    /// How the tool is verified and installed.
    pub mechanism: Mechanism,

    /// Profiles the tool applies to.
    pub profiles: ProfileSet,
}

impl ToolDefinition {
    /// Create a tool definition.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        mechanism: Mechanism,
        profiles: ProfileSet,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            mechanism,
            profiles,
        }
    }
}
