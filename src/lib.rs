//! Loadout - laptop developer-toolkit certification and provisioning.
//!
//! Loadout replaces ad-hoc laptop setup scripts with a single CLI that
//! checks a fixed manifest of developer tools against the host and, on
//! request, installs whatever is missing. Tool applicability is scoped by
//! a user profile (engineering, data, other).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Immutable per-run context (profile, secrets)
//! - [`error`] - Error types and result aliases
//! - [`exec`] - System command execution behind an injectable trait
//! - [`install`] - Per-mechanism installers
//! - [`manifest`] - Tool manifest, mechanisms, and profile filtering
//! - [`report`] - Certification/installation reports and run loops
//! - [`ui`] - Terminal output, spinners, and the mock UI
//! - [`verify`] - Per-mechanism verification
//!
//! # Example
//!
//! ```
//! use loadout::manifest::{builtin, Profile};
//!
//! // Which tools does an engineering laptop need?
//! let manifest = builtin::macos_manifest();
//! let in_scope: Vec<_> = manifest
//!     .iter()
//!     .filter(|t| t.profiles.is_in_scope(Profile::Engineering))
//!     .collect();
//! assert!(in_scope.iter().any(|t| t.id == "homebrew"));
//! ```

pub mod cli;
pub mod context;
pub mod error;
pub mod exec;
pub mod install;
pub mod manifest;
pub mod report;
pub mod ui;
pub mod verify;

pub use error::{LoadoutError, Result};
