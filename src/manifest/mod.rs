//! Tool manifest: definitions, mechanisms, and profile scoping.

pub mod builtin;
pub mod mechanism;
pub mod profile;
pub mod tool;

pub use mechanism::Mechanism;
pub use profile::{Profile, ProfileSet};
pub use tool::ToolDefinition;
