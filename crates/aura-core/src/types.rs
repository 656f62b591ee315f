//! Shared record types for the curated risk knowledge base.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stage of the user-centered design process used to tag risk records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Understand,
    Specify,
    Create,
    Evaluate,
}

impl Phase {
    /// All phases, in the order sentinel shortcuts are checked.
    pub const ALL: [Phase; 4] = [
        Phase::Understand,
        Phase::Specify,
        Phase::Create,
        Phase::Evaluate,
    ];

    /// The query sentinel that short-circuits retrieval to this phase.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Phase::Understand => "phase:understand",
            Phase::Specify => "phase:specify",
            Phase::Create => "phase:create",
            Phase::Evaluate => "phase:evaluate",
        }
    }

    /// Parse a bare phase keyword (case-insensitive), e.g. from the CLI.
    pub fn from_keyword(s: &str) -> Option<Phase> {
        match s.to_lowercase().as_str() {
            "understand" => Some(Phase::Understand),
            "specify" => Some(Phase::Specify),
            "create" => Some(Phase::Create),
            "evaluate" => Some(Phase::Evaluate),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Understand => "Understand",
            Phase::Specify => "Specify",
            Phase::Create => "Create",
            Phase::Evaluate => "Evaluate",
        };
        write!(f, "{}", name)
    }
}

/// Ordinal risk level attached to a record (Low < Moderate < High < Very High).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::VeryHigh => "Very High",
        };
        write!(f, "{}", name)
    }
}

/// A curated AI-related UX risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRecord {
    /// Unique key within the store.
    pub id: String,
    pub phase: Phase,
    pub title: String,
    pub severity: Severity,
    pub justification: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub mitigations: Vec<String>,
    /// Opaque foreign keys into the bibliography. Resolved lazily at render
    /// time; unknown ids are skipped, never an error.
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub ai_act_note: Option<String>,
}

/// A bibliography entry referenced by [`RiskRecord::references`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Unique key within the bibliography.
    pub id: String,
    pub authors: String,
    pub year: i32,
    pub title: String,
    pub venue: String,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ReferenceRecord {
    /// Citation link: DOI resolver when a DOI exists, else the plain URL,
    /// else empty.
    pub fn link(&self) -> String {
        match (&self.doi, &self.url) {
            (Some(doi), _) => format!("https://doi.org/{}", doi),
            (None, Some(url)) => url.clone(),
            (None, None) => String::new(),
        }
    }
}
