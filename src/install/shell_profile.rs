//! Shell-profile line management.
//!
//! Source lines are appended at most once: appension deduplicates by exact
//! line content, so repeated installs never stack duplicate `source` lines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The shell profile file that install hooks are appended to.
///
/// zsh users get `.zshrc`; everyone else gets `.bash_profile`.
pub fn profile_file(home: &Path) -> PathBuf {
    let shell = std::env::var("SHELL").unwrap_or_default();
    if shell.ends_with("zsh") {
        home.join(".zshrc")
    } else {
        home.join(".bash_profile")
    }
}

/// Append each line that is not already present, returning how many were
/// added. Creates the file if needed.
pub fn append_missing_lines(path: &Path, lines: &[String]) -> Result<usize> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let present: Vec<&str> = existing.lines().collect();

    let mut to_add: Vec<&String> = Vec::new();
    for line in lines {
        if !present.contains(&line.as_str()) && !to_add.iter().any(|l| *l == line) {
            to_add.push(line);
        }
    }

    if to_add.is_empty() {
        return Ok(0);
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for line in &to_add {
        content.push_str(line);
        content.push('\n');
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(to_add.len())
}
