//! Platform detection and run preconditions.

use crate::error::{LoadoutError, Result};

use super::runner::SystemRunner;

/// Base commands that must resolve before any tool processing.
const REQUIRED_COMMANDS: &[&str] = &["curl"];

/// Current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Verify the environment preconditions for certification or installation.
///
/// Fatal on failure: wrong OS, elevated user, or a missing base command
/// aborts the run before any tool is processed.
pub fn preflight(runner: &dyn SystemRunner) -> Result<()> {
    if Platform::current() != Platform::MacOS {
        return Err(LoadoutError::PreconditionFailed {
            message: "this tool manages a macOS laptop; run it on macOS".to_string(),
        });
    }

    if is_elevated() {
        return Err(LoadoutError::PreconditionFailed {
            message: "refusing to run as root; run as your own user".to_string(),
        });
    }

    for name in REQUIRED_COMMANDS {
        if runner.resolve_command(name).is_none() {
            return Err(LoadoutError::PreconditionFailed {
                message: format!("required base command '{}' not found on PATH", name),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockRunner;

    #[test]
    fn platform_current_returns_valid() {
        assert!(matches!(
            Platform::current(),
            Platform::MacOS | Platform::Linux | Platform::Windows
        ));
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn preflight_rejects_non_macos() {
        let runner = MockRunner::new();
        let err = preflight(&runner).unwrap_err();
        assert!(err.to_string().contains("macOS"));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn preflight_requires_curl_on_path() {
        let runner = MockRunner::new();
        // No curl configured on the mock PATH
        let result = preflight(&runner);
        if !is_elevated() {
            let err = result.unwrap_err();
            assert!(err.to_string().contains("curl"));
        }
    }
}
