//! List the manifest entries in scope for a profile.

use crate::cli::args::ListArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::manifest::{builtin, Profile};
use crate::report::in_scope;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    profile: Profile,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(profile: Profile, args: ListArgs) -> Self {
        Self { profile, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools = builtin::macos_manifest();
        let context = RunContext::new(self.profile);
        let scoped = in_scope(&tools, &context);

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&scoped).map_err(anyhow::Error::from)?;
            ui.message(&rendered);
        } else {
            ui.show_header(&format!(
                "{} tools in scope for the {} profile",
                scoped.len(),
                self.profile
            ));
            for tool in &scoped {
                ui.message(&format!(
                    "  {:<24} {:<28} {}",
                    tool.id,
                    tool.display_name,
                    tool.mechanism.label()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
