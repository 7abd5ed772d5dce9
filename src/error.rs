//! Error types for loadout operations.
//!
//! This module defines [`LoadoutError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only environment preconditions and invalid CLI input abort a run
//! - Per-tool verification and installation problems are recovered locally
//!   and surfaced in the final report
//! - Use `anyhow::Error` (via `LoadoutError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for loadout operations.
#[derive(Debug, Error)]
pub enum LoadoutError {
    /// An environment precondition is not met (wrong OS, running as root,
    /// missing base command). Fatal — no tool processing happens.
    #[error("Precondition failed: {message}")]
    PreconditionFailed { message: String },

    /// The selected profile is not one of the known profiles.
    #[error("Invalid profile '{value}': expected engineering, data, or other")]
    InvalidProfile { value: String },

    /// Shell command failed to start or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An installer package or script could not be downloaded.
    #[error("Download failed for {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for loadout operations.
pub type Result<T> = std::result::Result<T, LoadoutError>;
