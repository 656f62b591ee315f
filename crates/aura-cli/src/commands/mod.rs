//! CLI command implementations.

pub mod init;
pub mod phase;
pub mod query;
pub mod refs;
pub mod stats;
