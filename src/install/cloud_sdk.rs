//! Google Cloud SDK installation.
//!
//! The SDK installs into a fixed directory under the user's home. The base
//! install runs the vendor's script, wires the shell profile, installs two
//! sub-components, and links kubectl into the well-known bin directory.
//! Utilities are copied out of an object-storage bucket into the SDK bin
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::exec::SystemRunner;

use super::outcome::InstallOutcome;
use super::shell_profile;

/// Vendor install-script endpoint.
pub const INSTALL_SCRIPT_URL: &str = "https://sdk.cloud.google.com";

/// SDK directory name under the user's home.
pub const SDK_DIR_NAME: &str = "google-cloud-sdk";

/// Sub-components installed alongside the base SDK.
pub const COMPONENTS: &[&str] = &["kubectl", "gke-gcloud-auth-plugin"];

/// Well-known bin directory for utility symlinks.
pub const BIN_DIR: &str = "/usr/local/bin";

/// The SDK install root for a given home directory.
pub fn sdk_root(home: &Path) -> PathBuf {
    home.join(SDK_DIR_NAME)
}

/// Known gcloud locations checked when it is not on PATH, in order.
/// First match wins.
pub fn known_gcloud_locations(home: &Path) -> Vec<PathBuf> {
    vec![
        sdk_root(home).join("bin/gcloud"),
        PathBuf::from("/usr/local/google-cloud-sdk/bin/gcloud"),
        PathBuf::from("/opt/google-cloud-sdk/bin/gcloud"),
    ]
}

/// Shell-profile lines that put the SDK on PATH and enable completion.
pub fn source_lines(home: &Path) -> Vec<String> {
    let root = sdk_root(home);
    vec![
        format!("source \"{}/path.bash.inc\"", root.display()),
        format!("source \"{}/completion.bash.inc\"", root.display()),
    ]
}

/// Ensure the shell profile sources the SDK, deduplicating by line content.
pub fn repair_shell_profile(home: &Path) -> crate::error::Result<usize> {
    let profile = shell_profile::profile_file(home);
    shell_profile::append_missing_lines(&profile, &source_lines(home))
}

/// Install the SDK base: vendor script, shell profile, sub-components,
/// kubectl symlink into `bin_dir`.
///
/// When gcloud already resolves, the vendor-script download is skipped and
/// the run proceeds directly to sub-component installation, which is
/// idempotent on the SDK side.
pub fn install_base(runner: &dyn SystemRunner, bin_dir: &Path) -> InstallOutcome {
    let home = runner.home_dir();

    let gcloud = match runner.resolve_command("gcloud") {
        Some(found) => found,
        None => {
            let bootstrap = format!(
                "curl -fsSL {} | bash -s -- --disable-prompts --install-dir={}",
                INSTALL_SCRIPT_URL,
                home.display()
            );
            let result = match runner.run(&bootstrap) {
                Ok(r) => r,
                Err(e) => {
                    return InstallOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            if !result.success {
                return InstallOutcome::Failed {
                    reason: format!("SDK install script exited {:?}", result.exit_code),
                };
            }

            if let Err(e) = repair_shell_profile(&home) {
                return InstallOutcome::Failed {
                    reason: format!("could not update shell profile: {}", e),
                };
            }

            sdk_root(&home).join("bin/gcloud")
        }
    };
    let components = format!(
        "{} components install {} --quiet",
        gcloud.display(),
        COMPONENTS.join(" ")
    );
    match runner.run(&components) {
        Ok(r) if r.success => {}
        Ok(r) => {
            return InstallOutcome::Failed {
                reason: format!("component install exited {:?}", r.exit_code),
            }
        }
        Err(e) => {
            return InstallOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }

    let kubectl = sdk_root(&home).join("bin/kubectl");
    if let Err(e) = ensure_symlink(&kubectl, &bin_dir.join("kubectl")) {
        return InstallOutcome::Failed {
            reason: format!("could not link kubectl: {}", e),
        };
    }

    InstallOutcome::Installed
}

/// Install a utility from the bucket into the SDK bin directory.
///
/// Requires `gsutil` to already resolve; a missing dependency fails this
/// tool only, the run continues.
pub fn install_utility(
    runner: &dyn SystemRunner,
    relative_path: &Path,
    bucket_uri: &str,
    link_name: &str,
    bin_dir: &Path,
) -> InstallOutcome {
    if runner.resolve_command("gsutil").is_none() {
        return InstallOutcome::Failed {
            reason: "gsutil is not available; install the Google Cloud SDK first".to_string(),
        };
    }

    let dest = sdk_root(&runner.home_dir()).join(relative_path);
    let copy = format!("gsutil cp {} {}", bucket_uri, dest.display());
    match runner.run(&copy) {
        Ok(r) if r.success => {}
        Ok(r) => {
            return InstallOutcome::Failed {
                reason: format!("gsutil cp exited {:?}", r.exit_code),
            }
        }
        Err(e) => {
            return InstallOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }

    if let Err(e) = mark_executable(&dest) {
        return InstallOutcome::Failed {
            reason: format!("could not mark {} executable: {}", dest.display(), e),
        };
    }

    if let Err(e) = ensure_symlink(&dest, &bin_dir.join(link_name)) {
        return InstallOutcome::Failed {
            reason: format!("could not link {}: {}", link_name, e),
        };
    }

    InstallOutcome::Installed
}

fn mark_executable(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(())
    }
}

/// Create the symlink, replacing a stale one that points elsewhere.
fn ensure_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        match fs::read_link(link) {
            Ok(existing) if existing == target => return Ok(()),
            Ok(_) => fs::remove_file(link)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // A regular file in the way gets replaced too
                if link.exists() {
                    fs::remove_file(link)?;
                }
            }
            Err(_) => {
                if link.exists() {
                    fs::remove_file(link)?;
                }
            }
        }
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(not(unix))]
    {
        let _ = (target, link);
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "symlinks unsupported on this platform",
        ))
    }
}
