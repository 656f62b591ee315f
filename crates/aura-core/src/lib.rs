//! # Aura Core
//!
//! Shared record types and structured errors for the Aura UX-risk tools.
//!
//! The knowledge base holds two curated, read-only record sets:
//! [`RiskRecord`] entries describing AI-related UX risks tagged by design
//! [`Phase`] and [`Severity`], and [`ReferenceRecord`] entries forming the
//! companion bibliography. Records are loaded once at startup and never
//! mutated afterwards.

pub mod error;
pub mod types;

pub use error::{AuraError, DataError, ReportError, Result};
pub use types::{Phase, ReferenceRecord, RiskRecord, Severity};
