//! Run reporting and the certify/install loops.

pub mod engine;
pub mod summary;

pub use engine::{certify, in_scope, install_all};
pub use summary::{CertifyReport, InstallReport};
