//! Commercial security-agent installers.
//!
//! Both installers are gated on secrets supplied at the command line. A
//! missing secret skips the install with an explanation rather than
//! failing; corporate machines get these agents pushed through MDM, so the
//! secrets are only present on manual runs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::context::Secrets;
use crate::exec::SystemRunner;

use super::outcome::InstallOutcome;

/// Default SentinelOne package URL, used when `--sentinelone-link` is not
/// supplied.
pub const SENTINELONE_PKG_URL: &str =
    "https://storage.googleapis.com/acme-devops-tools/agents/SentinelOne.pkg";

/// Default filename for the downloaded SentinelOne package.
pub const SENTINELONE_PKG_NAME: &str = "SentinelOne.pkg";

/// Registration-token filename the SentinelOne installer reads, placed next
/// to the package.
pub const SENTINELONE_TOKEN_FILE: &str = "com.sentinelone.registration-token";

/// Automox installer endpoint; the access key is appended as a query
/// parameter.
pub const AUTOMOX_INSTALLER_URL: &str = "https://console.automox.com/downloadInstaller";

/// Install the SentinelOne agent.
///
/// Downloads the package into `work_dir`, writes the registration token to
/// a file with owner-read-only permissions, runs the OS installer, waits
/// out `grace_period` for the agent to settle, then re-verifies
/// `bundle_path`. The token file and package are removed regardless of
/// outcome.
///
/// Without a token nothing is downloaded and the outcome is `Skipped`.
pub fn install_sentinelone(
    runner: &dyn SystemRunner,
    secrets: &Secrets,
    bundle_path: &Path,
    work_dir: &Path,
    grace_period: Duration,
) -> InstallOutcome {
    let token = match &secrets.sentinelone_token {
        Some(token) => token,
        None => {
            return InstallOutcome::Skipped {
                reason: "no registration token supplied (--sentinelone-token)".to_string(),
            }
        }
    };

    let url = secrets
        .sentinelone_link
        .as_deref()
        .unwrap_or(SENTINELONE_PKG_URL);
    let pkg_name = secrets
        .sentinelone_pkg_name
        .as_deref()
        .unwrap_or(SENTINELONE_PKG_NAME);
    let pkg_path = work_dir.join(pkg_name);
    let token_path = work_dir.join(SENTINELONE_TOKEN_FILE);

    let outcome = run_sentinelone_install(
        runner,
        token,
        url,
        &pkg_path,
        &token_path,
        bundle_path,
        grace_period,
    );
    cleanup(&[&token_path, &pkg_path]);
    outcome
}

fn run_sentinelone_install(
    runner: &dyn SystemRunner,
    token: &str,
    url: &str,
    pkg_path: &Path,
    token_path: &Path,
    bundle_path: &Path,
    grace_period: Duration,
) -> InstallOutcome {
    if let Err(e) = runner.download(url, pkg_path) {
        return InstallOutcome::Failed {
            reason: e.to_string(),
        };
    }

    if let Err(e) = write_token_file(token_path, token) {
        return InstallOutcome::Failed {
            reason: format!("could not write registration token: {}", e),
        };
    }

    let install = format!("sudo installer -pkg '{}' -target /", pkg_path.display());
    match runner.run(&install) {
        Ok(r) if r.success => {}
        Ok(r) => {
            return InstallOutcome::Failed {
                reason: format!("installer exited {:?}", r.exit_code),
            }
        }
        Err(e) => {
            return InstallOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }

    // The agent registers asynchronously after the package lands.
    std::thread::sleep(grace_period);

    if runner.path_exists(bundle_path) {
        InstallOutcome::Installed
    } else {
        InstallOutcome::Failed {
            reason: format!(
                "agent bundle not present at {} after install",
                bundle_path.display()
            ),
        }
    }
}

/// Install the Automox agent by piping the vendor script through a root
/// shell, then re-verifying the agent process.
///
/// Without an access key the outcome is `Skipped`.
pub fn install_automox(
    runner: &dyn SystemRunner,
    secrets: &Secrets,
    process: &str,
) -> InstallOutcome {
    let key = match &secrets.automox_key {
        Some(key) => key,
        None => {
            return InstallOutcome::Skipped {
                reason: "no access key supplied (--automox-key)".to_string(),
            }
        }
    };

    let install = format!(
        "curl -sS '{}?accesskey={}' | sudo bash",
        AUTOMOX_INSTALLER_URL, key
    );
    match runner.run(&install) {
        Ok(r) if r.success => {}
        Ok(r) => {
            return InstallOutcome::Failed {
                reason: format!("install script exited {:?}", r.exit_code),
            }
        }
        Err(e) => {
            return InstallOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }

    if runner.process_running(process) {
        InstallOutcome::Installed
    } else {
        InstallOutcome::Failed {
            reason: format!("{} process not running after install", process),
        }
    }
}

/// Write the registration token readable only by the owner.
fn write_token_file(path: &Path, token: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, token)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o400))?;
    }

    Ok(())
}

fn cleanup(paths: &[&Path]) {
    for path in paths {
        if path.exists() {
            restore_write_permission(path);
            if let Err(e) = fs::remove_file(path) {
                tracing::warn!("could not remove {}: {}", path.display(), e);
            }
        }
    }
}

// The token file is written 0o400; it needs the write bit back before
// remove_file works everywhere.
fn restore_write_permission(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    #[cfg(not(unix))]
    {
        let _ = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockRunner;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn bundle() -> PathBuf {
        PathBuf::from("/Applications/SentinelOne/SentinelOne Extensions.app")
    }

    #[test]
    fn sentinelone_without_token_is_skipped_and_downloads_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();

        let outcome = install_sentinelone(
            &runner,
            &Secrets::default(),
            &bundle(),
            temp.path(),
            Duration::ZERO,
        );

        match outcome {
            InstallOutcome::Skipped { reason } => assert!(reason.contains("token")),
            other => panic!("expected Skipped, got {:?}", other),
        }
        assert!(runner.downloads().is_empty());
        assert!(runner.executed().is_empty());
    }

    #[test]
    fn sentinelone_install_downloads_registers_and_cleans_up() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.mark_succeeding("sudo installer -pkg");
        runner.add_path(&bundle());
        let secrets = Secrets {
            sentinelone_token: Some("reg-token".into()),
            ..Default::default()
        };

        let outcome =
            install_sentinelone(&runner, &secrets, &bundle(), temp.path(), Duration::ZERO);

        assert_eq!(outcome, InstallOutcome::Installed);
        assert_eq!(runner.downloads().len(), 1);
        assert_eq!(runner.downloads()[0].0, SENTINELONE_PKG_URL);
        assert!(runner.ran_command_containing("installer -pkg"));
        // Token file and package removed after the run
        assert!(!temp.path().join(SENTINELONE_TOKEN_FILE).exists());
        assert!(!temp.path().join(SENTINELONE_PKG_NAME).exists());
    }

    #[test]
    fn sentinelone_link_and_pkg_name_overrides_are_honored() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.mark_succeeding("sudo installer -pkg");
        runner.add_path(&bundle());
        let secrets = Secrets {
            sentinelone_token: Some("reg-token".into()),
            sentinelone_link: Some("https://example.com/custom.pkg".into()),
            sentinelone_pkg_name: Some("custom.pkg".into()),
            ..Default::default()
        };

        let outcome =
            install_sentinelone(&runner, &secrets, &bundle(), temp.path(), Duration::ZERO);

        assert_eq!(outcome, InstallOutcome::Installed);
        assert_eq!(runner.downloads()[0].0, "https://example.com/custom.pkg");
        assert!(runner.ran_command_containing("custom.pkg"));
    }

    #[test]
    fn sentinelone_cleans_up_even_when_installer_fails() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let secrets = Secrets {
            sentinelone_token: Some("reg-token".into()),
            ..Default::default()
        };

        let outcome =
            install_sentinelone(&runner, &secrets, &bundle(), temp.path(), Duration::ZERO);

        assert!(outcome.is_failure());
        assert!(!temp.path().join(SENTINELONE_TOKEN_FILE).exists());
        assert!(!temp.path().join(SENTINELONE_PKG_NAME).exists());
    }

    #[test]
    fn sentinelone_fails_when_download_fails() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().failing_downloads();
        let secrets = Secrets {
            sentinelone_token: Some("reg-token".into()),
            ..Default::default()
        };

        let outcome =
            install_sentinelone(&runner, &secrets, &bundle(), temp.path(), Duration::ZERO);

        assert!(outcome.is_failure());
        // Installer never ran
        assert!(runner.executed().is_empty());
    }

    #[test]
    fn sentinelone_fails_when_bundle_absent_after_install() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.mark_succeeding("sudo installer -pkg");
        let secrets = Secrets {
            sentinelone_token: Some("reg-token".into()),
            ..Default::default()
        };

        let outcome =
            install_sentinelone(&runner, &secrets, &bundle(), temp.path(), Duration::ZERO);

        match outcome {
            InstallOutcome::Failed { reason } => assert!(reason.contains("bundle")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SENTINELONE_TOKEN_FILE);
        write_token_file(&path, "reg-token").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o400);

        cleanup(&[&path]);
        assert!(!path.exists());
    }

    #[test]
    fn automox_without_key_is_skipped() {
        let runner = MockRunner::new();

        let outcome = install_automox(&runner, &Secrets::default(), "amagent");

        match outcome {
            InstallOutcome::Skipped { reason } => assert!(reason.contains("key")),
            other => panic!("expected Skipped, got {:?}", other),
        }
        assert!(runner.executed().is_empty());
    }

    #[test]
    fn automox_runs_vendor_script_and_reverifies_process() {
        let runner = MockRunner::new();
        runner.mark_succeeding("curl -sS 'https://console.automox.com");
        runner.start_process("amagent");
        let secrets = Secrets {
            automox_key: Some("abc123".into()),
            ..Default::default()
        };

        let outcome = install_automox(&runner, &secrets, "amagent");

        assert_eq!(outcome, InstallOutcome::Installed);
        assert!(runner.ran_command_containing("accesskey=abc123"));
        assert!(runner.ran_command_containing("| sudo bash"));
    }

    #[test]
    fn automox_fails_when_process_not_running_after_install() {
        let runner = MockRunner::new();
        runner.mark_succeeding("curl -sS 'https://console.automox.com");
        let secrets = Secrets {
            automox_key: Some("abc123".into()),
            ..Default::default()
        };

        let outcome = install_automox(&runner, &secrets, "amagent");

        match outcome {
            InstallOutcome::Failed { reason } => assert!(reason.contains("amagent")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
