//! Certification: verify every in-scope tool without installing anything.

use crate::cli::args::CertifyArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::exec::{preflight, HostRunner};
use crate::manifest::{builtin, Profile};
use crate::report;
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};
use crate::verify::ToolChecker;

use super::dispatcher::{Command, CommandResult};

/// The certify command implementation.
pub struct CertifyCommand {
    profile: Profile,
    args: CertifyArgs,
}

impl CertifyCommand {
    /// Create a new certify command.
    pub fn new(profile: Profile, args: CertifyArgs) -> Self {
        Self { profile, args }
    }
}

impl Command for CertifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = HostRunner;
        preflight(&runner)?;

        let context = RunContext::new(self.profile);
        let tools = builtin::macos_manifest();
        let mut checker = ToolChecker::new(&runner);

        // With --json, progress and spinner lines would corrupt the
        // stdout document, so the loop runs against a silent UI.
        let report = if self.args.json {
            let mut silent = NonInteractiveUI::new(OutputMode::Silent);
            report::certify(&tools, &context, &mut checker, &mut silent)
        } else {
            ui.show_header(&format!("Certifying {} profile", self.profile));
            report::certify(&tools, &context, &mut checker, ui)
        };

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&rendered);
        } else if report.is_clean() {
            ui.success(&format!("All {} in-scope tools installed", report.checked));
        } else {
            if !report.missing.is_empty() {
                ui.error(&format!(
                    "{} of {} tools missing: {}",
                    report.missing.len(),
                    report.checked,
                    report.missing.join(", ")
                ));
            }
            if !report.warnings.is_empty() {
                ui.error(&format!(
                    "{} security warning(s): {}",
                    report.warnings.len(),
                    report.warnings.join(", ")
                ));
            }
        }

        if report.exit_code() == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
