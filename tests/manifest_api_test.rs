//! Library-level tests over the manifest, filter, and certify engine.

use loadout::context::RunContext;
use loadout::exec::MockRunner;
use loadout::install::cloud_sdk;
use loadout::manifest::{builtin, Profile, ProfileSet};
use loadout::report;
use loadout::ui::MockUI;
use loadout::verify::ToolChecker;

use std::path::Path;
use tempfile::TempDir;

#[test]
fn all_profile_tools_are_in_scope_for_every_profile() {
    let tools = builtin::macos_manifest();
    for profile in [Profile::Engineering, Profile::Data, Profile::Other] {
        for tool in tools.iter().filter(|t| t.profiles == ProfileSet::All) {
            assert!(
                tool.profiles.is_in_scope(profile),
                "{} should be in scope for {}",
                tool.id,
                profile
            );
        }
    }
}

#[test]
fn engineering_only_tools_are_out_of_scope_for_data() {
    let tools = builtin::macos_manifest();
    let terraform = tools.iter().find(|t| t.id == "terraform").unwrap();
    assert!(terraform.profiles.is_in_scope(Profile::Engineering));
    assert!(!terraform.profiles.is_in_scope(Profile::Data));
    assert!(!terraform.profiles.is_in_scope(Profile::Other));
}

/// Configure the mock so every engineering-profile tool verifies.
fn fully_provisioned_runner(home: &Path) -> MockRunner {
    let runner = MockRunner::with_home(home);
    runner.mark_succeeding("brew --version");
    runner.mark_succeeding("brew list");
    runner.put_on_path("gcloud", Path::new("/usr/local/bin/gcloud"));
    runner.add_path(&cloud_sdk::sdk_root(home).join("bin/deployctl"));
    runner.add_path(Path::new(
        "/Applications/SentinelOne/SentinelOne Extensions.app",
    ));
    runner.start_process("amagent");
    runner
}

#[test]
fn certify_is_clean_on_a_fully_provisioned_host() {
    let temp = TempDir::new().unwrap();
    let runner = fully_provisioned_runner(temp.path());
    let tools = builtin::macos_manifest();
    let context = RunContext::new(Profile::Engineering);
    let mut checker = ToolChecker::new(&runner);
    let mut ui = MockUI::new();

    let report = report::certify(&tools, &context, &mut checker, &mut ui);

    assert!(report.is_clean(), "missing: {:?}", report.missing);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.checked, report::in_scope(&tools, &context).len());
    // Certification never downloads anything
    assert!(runner.downloads().is_empty());
}

#[test]
fn certify_reports_every_tool_missing_on_a_bare_host() {
    let temp = TempDir::new().unwrap();
    let runner = MockRunner::with_home(temp.path());
    let tools = builtin::macos_manifest();
    let context = RunContext::new(Profile::Other);
    let mut checker = ToolChecker::new(&runner);
    let mut ui = MockUI::new();

    let report = report::certify(&tools, &context, &mut checker, &mut ui);

    // The mock never consults the real filesystem, so this holds on any host
    assert_eq!(report.missing.len(), report.checked);
    assert!(report.missing.contains(&"Homebrew".to_string()));
    assert!(report.missing.contains(&"Git".to_string()));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn certify_scopes_probes_to_the_selected_profile() {
    let temp = TempDir::new().unwrap();
    let runner = MockRunner::with_home(temp.path());
    let tools = builtin::macos_manifest();
    let context = RunContext::new(Profile::Other);
    let mut checker = ToolChecker::new(&runner);
    let mut ui = MockUI::new();

    report::certify(&tools, &context, &mut checker, &mut ui);

    // Engineering-only and data-only tools never get probed
    assert!(!runner.ran_command_containing("terraform"));
    assert!(!runner.ran_command_containing("pyenv"));
    assert!(runner.ran_command_containing("brew list --formula git"));
}

#[test]
fn mechanism_tags_serialize_with_kebab_case_types() {
    let tools = builtin::macos_manifest();
    let rendered = serde_json::to_string(&tools).unwrap();
    assert!(rendered.contains("\"package-manager-cli\""));
    assert!(rendered.contains("\"package-manager-cask\""));
    assert!(rendered.contains("\"foundational-package-manager\""));
    assert!(rendered.contains("\"path-based-security-agent\""));
    assert!(rendered.contains("\"process-based-security-agent\""));
}
