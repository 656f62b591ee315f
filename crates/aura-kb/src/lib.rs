//! # Aura KB
//!
//! Knowledge store for the Aura UX-risk tools.
//!
//! Risk and reference records are read once at startup from two YAML
//! documents. If either source is missing, unreadable, or malformed, the
//! store silently substitutes an embedded curated dataset: the tool must
//! always produce output, even with no filesystem access. The store is
//! immutable after construction.

pub mod embedded;
pub mod store;

pub use store::{resolve_data_path, KnowledgeBase, Source};
