//! Per-mechanism installation.

pub mod agents;
pub mod cloud_sdk;
pub mod installer;
pub mod outcome;
pub mod shell_profile;

pub use installer::Installer;
pub use outcome::InstallOutcome;
