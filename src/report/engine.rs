//! The certify and install loops.
//!
//! Both loops walk the manifest in order, filter by the selected profile,
//! and process one tool at a time. Per-tool failures surface in the final
//! report, never as early exits.

use crate::context::RunContext;
use crate::install::{InstallOutcome, Installer};
use crate::manifest::ToolDefinition;
use crate::ui::UserInterface;
use crate::verify::{ToolChecker, ToolStatus};

use super::summary::{CertifyReport, InstallReport};

/// In-scope manifest entries for a context, in manifest order.
pub fn in_scope<'t>(tools: &'t [ToolDefinition], context: &RunContext) -> Vec<&'t ToolDefinition> {
    tools
        .iter()
        .filter(|tool| tool.profiles.is_in_scope(context.profile))
        .collect()
}

/// Verify every in-scope tool and scan for forbidden applications.
pub fn certify(
    tools: &[ToolDefinition],
    context: &RunContext,
    checker: &mut ToolChecker<'_>,
    ui: &mut dyn UserInterface,
) -> CertifyReport {
    let scoped = in_scope(tools, context);
    let mut report = CertifyReport {
        checked: scoped.len(),
        ..Default::default()
    };

    for (index, tool) in scoped.iter().enumerate() {
        ui.show_progress(index + 1, scoped.len());
        let mut spinner = ui.start_spinner(&format!("Checking {}", tool.display_name));
        match checker.verify(tool) {
            ToolStatus::Installed => {
                spinner.finish_success(&format!("{} installed", tool.display_name));
            }
            ToolStatus::Missing => {
                spinner.finish_error(&format!("{} missing", tool.display_name));
                report.missing.push(tool.display_name.clone());
            }
        }
    }

    for name in checker.scan_forbidden() {
        ui.warning(&format!("{} is installed and must be removed", name));
        report.warnings.push(name);
    }

    report
}

/// Install every in-scope tool that fails verification.
pub fn install_all(
    tools: &[ToolDefinition],
    context: &RunContext,
    installer: &Installer<'_>,
    checker: &mut ToolChecker<'_>,
    ui: &mut dyn UserInterface,
) -> InstallReport {
    let scoped = in_scope(tools, context);
    let mut report = InstallReport::default();

    for (index, tool) in scoped.iter().enumerate() {
        ui.show_progress(index + 1, scoped.len());
        let mut spinner = ui.start_spinner(&format!("Installing {}", tool.display_name));
        match installer.install(tool, checker) {
            InstallOutcome::Installed => {
                spinner.finish_success(&format!("{} installed", tool.display_name));
                report.installed.push(tool.display_name.clone());
            }
            InstallOutcome::AlreadyInstalled => {
                spinner.finish_skipped(&format!("{} already installed", tool.display_name));
                report.already_installed.push(tool.display_name.clone());
            }
            InstallOutcome::Skipped { reason } => {
                spinner.finish_skipped(&format!("{} skipped: {}", tool.display_name, reason));
                report.skipped.push((tool.display_name.clone(), reason));
            }
            InstallOutcome::Failed { reason } => {
                spinner.finish_error(&format!("{} failed: {}", tool.display_name, reason));
                report.failed.push((tool.display_name.clone(), reason));
            }
        }
    }

    report
}
