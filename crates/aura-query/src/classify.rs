//! Regulatory classification and advisory notices.
//!
//! `classify` is an ordered cascade of substring tests over the lowercased
//! query; the first matching rule wins and every input maps to exactly one
//! tag, so the function is total and deterministic.

use serde::Serialize;
use std::fmt;

/// One of four fixed EU AI Act risk tiers inferred from query keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegulatoryTag {
    ProhibitedHighRisk,
    HighRisk,
    LimitedRisk,
    MinimalRisk,
}

impl fmt::Display for RegulatoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RegulatoryTag::ProhibitedHighRisk => "Prohibited / High-Risk",
            RegulatoryTag::HighRisk => "High-Risk",
            RegulatoryTag::LimitedRisk => "Limited-Risk",
            RegulatoryTag::MinimalRisk => "Minimal-Risk",
        };
        write!(f, "{}", label)
    }
}

/// A classification outcome: the tag plus its fixed explanatory note.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Assessment {
    pub tag: RegulatoryTag,
    pub note: &'static str,
}

const PROHIBITED_TERMS: &[&str] = &["biometric", "surveillance", "social scoring"];
const HIGH_RISK_TERMS: &[&str] = &["recruit", "hiring", "credit", "loan", "education", "health"];
const LIMITED_RISK_TERMS: &[&str] = &[
    "chatbot",
    "content generation",
    "assistive",
    "ux writing",
    "summarize",
    "persona",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Map a query to an EU AI Act risk tier. Notes are fixed strings, never
/// derived from the input.
pub fn classify(query: &str) -> Assessment {
    let q = query.to_lowercase();
    if contains_any(&q, PROHIBITED_TERMS) {
        return Assessment {
            tag: RegulatoryTag::ProhibitedHighRisk,
            note: "Biometric identification/surveillance features can fall under high-risk or prohibited categories under the EU AI Act.",
        };
    }
    if contains_any(&q, HIGH_RISK_TERMS) {
        return Assessment {
            tag: RegulatoryTag::HighRisk,
            note: "Impacts access to essential services or fundamental rights; stricter obligations apply (risk mgmt, data quality, human oversight).",
        };
    }
    if contains_any(&q, LIMITED_RISK_TERMS) {
        return Assessment {
            tag: RegulatoryTag::LimitedRisk,
            note: "Likely transparency obligations (disclose AI use), log events, provide oversight mechanisms.",
        };
    }
    Assessment {
        tag: RegulatoryTag::MinimalRisk,
        note: "General-purpose UX support with low rights impact; follow good practices and basic transparency.",
    }
}

const OUT_OF_SCOPE_TERMS: &[&str] = &["medical", "diagnosis", "trading", "finance advice", "tax"];

/// Non-fatal advisory for queries outside the UX + AI ethics focus.
/// Processing continues unaffected when this fires.
pub fn scope_advisory(query: &str) -> Option<&'static str> {
    let q = query.to_lowercase();
    if contains_any(&q, OUT_OF_SCOPE_TERMS) {
        Some("This tool focuses on UX + AI ethics. Your query seems out of scope.")
    } else {
        None
    }
}

/// Supplementary mapping notes for other governance frameworks. Static
/// text, independent of the query.
pub fn framework_notes() -> &'static str {
    "GDPR: assess lawful basis, purpose limitation, data minimization. \
     NIST AI RMF: Govern -> Map -> Measure -> Manage; document risks and controls. \
     OECD AI: Inclusive growth, human-centered values, transparency, robustness, accountability."
}
