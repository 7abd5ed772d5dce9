//! Real system runner.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{LoadoutError, Result};

use super::runner::{CommandResult, SystemRunner};

/// Executes commands against the real host.
#[derive(Debug, Default)]
pub struct HostRunner;

impl HostRunner {
    /// Create a host runner.
    pub fn new() -> Self {
        Self
    }
}

impl SystemRunner for HostRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        let start = Instant::now();

        let shell = detect_shell();
        let mut cmd = Command::new(&shell);
        cmd.arg(shell_flag());
        cmd.arg(command);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().map_err(|_| LoadoutError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn resolve_command(&self, name: &str) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path_var) {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn process_running(&self, name: &str) -> bool {
        self.succeeds(&format!("pgrep -x {}", name))
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = reqwest::blocking::get(url).map_err(|e| LoadoutError::DownloadFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(LoadoutError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }
        let bytes = response.bytes().map_err(|e| LoadoutError::DownloadFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, &bytes)?;
        Ok(())
    }

    fn home_dir(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_default()
    }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_successful_command() {
        let runner = HostRunner::new();
        let result = runner.run("echo hello").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn run_failing_command() {
        let runner = HostRunner::new();
        let result = runner.run("exit 3").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn succeeds_returns_bool() {
        let runner = HostRunner::new();
        assert!(runner.succeeds("exit 0"));
        assert!(!runner.succeeds("exit 1"));
    }

    #[test]
    fn run_captures_stderr() {
        let runner = HostRunner::new();
        let result = runner.run("echo oops >&2").unwrap();
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn path_exists_for_temp_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let runner = HostRunner::new();
        assert!(runner.path_exists(temp.path()));
        assert!(!runner.path_exists(Path::new("/nonexistent/loadout/path")));
    }

    #[test]
    fn resolve_command_finds_sh() {
        let runner = HostRunner::new();
        assert!(runner.resolve_command("sh").is_some());
        assert!(runner.resolve_command("definitely-not-a-command-xyz").is_none());
    }

    #[test]
    fn home_dir_is_not_empty() {
        let runner = HostRunner::new();
        assert!(!runner.home_dir().as_os_str().is_empty());
    }
}
