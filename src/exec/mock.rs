//! Mock system runner for tests.
//!
//! `MockRunner` implements [`SystemRunner`] and records every interaction
//! for later assertion. It answers from pre-configured command, path, and
//! process sets.
//!
//! # Example
//!
//! ```
//! use loadout::exec::{MockRunner, SystemRunner};
//!
//! let runner = MockRunner::new();
//! runner.mark_succeeding("brew list --formula jq");
//!
//! assert!(runner.succeeds("brew list --formula jq"));
//! assert!(!runner.succeeds("brew list --formula terraform"));
//! assert_eq!(runner.executed().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{LoadoutError, Result};

use super::runner::{CommandResult, SystemRunner};

/// Recording mock implementation of [`SystemRunner`].
#[derive(Debug, Default)]
pub struct MockRunner {
    succeeding: RefCell<HashSet<String>>,
    existing_paths: RefCell<HashSet<PathBuf>>,
    on_path: RefCell<HashMap<String, PathBuf>>,
    running: RefCell<HashSet<String>>,
    executed: RefCell<Vec<String>>,
    downloads: RefCell<Vec<(String, PathBuf)>>,
    fail_downloads: bool,
    home: PathBuf,
}

impl MockRunner {
    /// Create a mock runner with an empty home directory path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock runner rooted at the given home directory.
    pub fn with_home(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            ..Default::default()
        }
    }

    /// Make every download return an error.
    pub fn failing_downloads(mut self) -> Self {
        self.fail_downloads = true;
        self
    }

    /// Mark a command (by prefix) as succeeding.
    pub fn mark_succeeding(&self, command: &str) {
        self.succeeding.borrow_mut().insert(command.to_string());
    }

    /// Mark a filesystem path as existing.
    pub fn add_path(&self, path: &Path) {
        self.existing_paths.borrow_mut().insert(path.to_path_buf());
    }

    /// Put a command on the search path.
    pub fn put_on_path(&self, name: &str, resolved: &Path) {
        self.on_path
            .borrow_mut()
            .insert(name.to_string(), resolved.to_path_buf());
    }

    /// Mark a process as running.
    pub fn start_process(&self, name: &str) {
        self.running.borrow_mut().insert(name.to_string());
    }

    /// All commands that were run, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    /// All downloads that were attempted, in order.
    pub fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.borrow().clone()
    }

    /// Whether any executed command contains the given fragment.
    pub fn ran_command_containing(&self, fragment: &str) -> bool {
        self.executed.borrow().iter().any(|c| c.contains(fragment))
    }
}

impl SystemRunner for MockRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.executed.borrow_mut().push(command.to_string());
        let success = self
            .succeeding
            .borrow()
            .iter()
            .any(|prefix| command.starts_with(prefix.as_str()));
        if success {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandResult::failure(
                Some(1),
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        }
    }

    // Answers only from the configured set. Falling through to the real
    // filesystem would make tests depend on the host's installed software.
    fn path_exists(&self, path: &Path) -> bool {
        self.existing_paths.borrow().contains(path)
    }

    fn resolve_command(&self, name: &str) -> Option<PathBuf> {
        self.on_path.borrow().get(name).cloned()
    }

    fn process_running(&self, name: &str) -> bool {
        self.running.borrow().contains(name)
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        if self.fail_downloads {
            return Err(LoadoutError::DownloadFailed {
                url: url.to_string(),
                message: "mock download failure".to_string(),
            });
        }
        self.downloads
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));
        if let Some(parent) = dest.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(dest, b"mock");
        Ok(())
    }

    fn home_dir(&self) -> PathBuf {
        self.home.clone()
    }
}
