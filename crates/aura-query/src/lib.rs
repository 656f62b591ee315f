//! # Aura Query
//!
//! The query engine: scores risk records against a free-text query or a
//! phase shortcut, classifies the query into a regulatory-risk tier, and
//! renders numbered citations.
//!
//! Retrieval is a deterministic linear scan:
//! 1. If the query contains a phase sentinel (`phase:understand` etc.),
//!    return that phase's records in store order.
//! 2. Otherwise tokenize the query and count, per record, how many tokens
//!    occur as substrings of the record's searchable blob.
//! 3. Stable-sort by score descending (ties keep store order), drop
//!    zero-score records, truncate to `max_items`.
//! 4. If nothing scored, fall back to the first `max_items` store records
//!    so the caller is never left with an empty screen.

pub mod cite;
pub mod classify;
pub mod retrieve;

pub use cite::{cite, Citations};
pub use classify::{classify, framework_notes, scope_advisory, Assessment, RegulatoryTag};
pub use retrieve::{retrieve, tokenize, Match, Query};
