//! The injectable system runner trait.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Capability interface over the host system.
///
/// Verification and installation dispatch only ever talk to the system
/// through this trait; [`HostRunner`](crate::exec::HostRunner) is the real
/// implementation and [`MockRunner`](crate::exec::MockRunner) the test
/// double.
pub trait SystemRunner {
    /// Run a shell command, capturing output.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Run a shell command and report only success/failure.
    fn succeeds(&self, command: &str) -> bool {
        self.run(command).map(|r| r.success).unwrap_or(false)
    }

    /// Whether a filesystem path exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Resolve a command name on the search path.
    fn resolve_command(&self, name: &str) -> Option<PathBuf>;

    /// Whether a process with the given name is currently running.
    fn process_running(&self, name: &str) -> bool;

    /// Download a URL to a local file.
    fn download(&self, url: &str, dest: &Path) -> Result<()>;

    /// The current user's home directory.
    fn home_dir(&self) -> PathBuf;
}
