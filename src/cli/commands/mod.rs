//! Command implementations.

pub mod certify;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
