//! # Aura
//!
//! Curated knowledge lookup for AI-related UX risks.
//!
//! Given a free-text query describing a UX-design activity, Aura retrieves
//! matching entries from a small hand-authored knowledge base (title,
//! severity, justification, evidence, mitigations, references), tags the
//! query with an EU AI Act risk tier, and can export the result as a
//! paginated PDF report.
//!
//! ## Quick Start
//!
//! ```rust
//! use aura::prelude::*;
//!
//! // Embedded curated base; external YAML via KnowledgeBase::load.
//! let kb = KnowledgeBase::embedded();
//!
//! let query = Query::new("compile interview results with AI");
//! let matches = retrieve(kb.risks(), &query);
//! let assessment = classify(&query.text);
//!
//! println!("EU AI Act: {}", assessment.tag);
//! for m in &matches {
//!     println!("{} [{}] ({})", m.record.title, m.record.severity, m.record.phase);
//! }
//!
//! // Citation numbering continues across records.
//! let index = kb.reference_index();
//! let mut next = 1;
//! for m in &matches {
//!     let citations = cite(&m.record.references, &index, next);
//!     next += citations.numbers.len();
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`aura_core`] - record types ([`RiskRecord`], [`ReferenceRecord`]) and errors
//! - [`aura_kb`] - knowledge store with embedded fallback dataset
//! - [`aura_query`] - retrieval, regulatory classification, citations
//! - [`aura_report`] - PDF export and query telemetry
//! - [`aura_condense`] - optional text condensing (always skippable)
//!
//! ## Failure model
//!
//! Nothing in the query flow is fatal: missing or corrupt data files fall
//! back to the embedded dataset, unresolved reference ids are skipped,
//! condensing errors return the original text, and telemetry write
//! failures are swallowed.
//!
//! [`RiskRecord`]: aura_core::RiskRecord
//! [`ReferenceRecord`]: aura_core::ReferenceRecord

// Re-export all subcrates
pub use aura_condense as condense;
pub use aura_core as core;
pub use aura_kb as kb;
pub use aura_query as query;
pub use aura_report as report;

/// Prelude module for convenient imports.
///
/// ```rust
/// use aura::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use aura_core::{AuraError, Phase, ReferenceRecord, Result, RiskRecord, Severity};

    // Knowledge store
    pub use aura_kb::{resolve_data_path, KnowledgeBase, Source};

    // Query engine
    pub use aura_query::{
        cite, classify, framework_notes, retrieve, scope_advisory, Assessment, Citations, Match,
        Query, RegulatoryTag,
    };

    // Outputs
    pub use aura_report::{export_pdf, Telemetry};

    // Condensing
    pub use aura_condense::{condense_or_original, CondenseError, Condenser, MockCondenser};

    #[cfg(feature = "api")]
    pub use aura_condense::OpenAiCondenser;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
