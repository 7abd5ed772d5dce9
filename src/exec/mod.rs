//! System command execution.
//!
//! All host interaction goes through the [`SystemRunner`] trait so the
//! verification and installation logic can be tested without touching a
//! real system.

pub mod host;
pub mod mock;
pub mod platform;
pub mod runner;

pub use host::HostRunner;
pub use mock::MockRunner;
pub use platform::{is_ci, is_elevated, preflight, Platform};
pub use runner::{CommandResult, SystemRunner};
