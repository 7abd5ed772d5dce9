//! Tool verification.

pub mod checker;
pub mod status;

pub use checker::ToolChecker;
pub use status::ToolStatus;
