//! Keyword-overlap retrieval over the risk store.

use aura_core::{Phase, RiskRecord};
use serde::Serialize;
use tracing::debug;

/// A retrieval request.
#[derive(Debug, Clone)]
pub struct Query {
    /// The raw query text.
    pub text: String,
    /// Maximum number of records to return.
    pub max_items: usize,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            max_items: 5,
        }
    }

    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }
}

/// A matched record with its keyword-overlap score.
///
/// Phase-shortcut and zero-score fallback results carry a score of 0.
#[derive(Debug, Clone, Serialize)]
pub struct Match<'a> {
    pub record: &'a RiskRecord,
    pub score: usize,
}

/// Tokenize a query: lowercase, fold hyphens to spaces, split on
/// whitespace. Tokens are deliberately NOT deduplicated — a repeated token
/// contributes to the score once per repetition, matching the original
/// ranking behavior.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// The searchable text for a record: title, justification, evidence and
/// mitigations joined with spaces, lowercased.
fn searchable_blob(record: &RiskRecord) -> String {
    let mut blob = String::new();
    blob.push_str(&record.title);
    blob.push(' ');
    blob.push_str(&record.justification);
    blob.push(' ');
    blob.push_str(&record.evidence.join(" "));
    blob.push(' ');
    blob.push_str(&record.mitigations.join(" "));
    blob.to_lowercase()
}

/// Presence test per token: 1 if the token occurs anywhere in the blob,
/// else 0. Not a frequency count.
fn match_score(tokens: &[String], blob: &str) -> usize {
    tokens.iter().filter(|t| blob.contains(t.as_str())).count()
}

/// Retrieve the records matching a query.
///
/// Checks phase sentinels first (in [`Phase::ALL`] order; mutually
/// exclusive for well-formed queries, first match wins otherwise), then
/// falls through to keyword scoring. An empty store yields an empty list.
pub fn retrieve<'a>(risks: &'a [RiskRecord], query: &Query) -> Vec<Match<'a>> {
    let lowered = query.text.to_lowercase();
    for phase in Phase::ALL {
        if lowered.contains(phase.sentinel()) {
            debug!(%phase, "phase shortcut");
            return risks
                .iter()
                .filter(|r| r.phase == phase)
                .take(query.max_items)
                .map(|record| Match { record, score: 0 })
                .collect();
        }
    }

    let tokens = tokenize(&query.text);
    let mut scored: Vec<Match<'a>> = risks
        .iter()
        .map(|record| Match {
            score: match_score(&tokens, &searchable_blob(record)),
            record,
        })
        .collect();

    // sort_by is stable: equal scores keep store insertion order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let hits: Vec<Match<'a>> = scored
        .into_iter()
        .filter(|m| m.score > 0)
        .take(query.max_items)
        .collect();

    if hits.is_empty() {
        debug!(tokens = tokens.len(), "no scoring matches, store-order fallback");
        return risks
            .iter()
            .take(query.max_items)
            .map(|record| Match { record, score: 0 })
            .collect();
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::Severity;

    fn record(id: &str, phase: Phase, title: &str, justification: &str) -> RiskRecord {
        RiskRecord {
            id: id.into(),
            phase,
            title: title.into(),
            severity: Severity::Moderate,
            justification: justification.into(),
            evidence: vec![],
            mitigations: vec![],
            references: vec![],
            ai_act_note: None,
        }
    }

    fn store() -> Vec<RiskRecord> {
        vec![
            record("r1", Phase::Understand, "Interview synthesis pitfalls", "Compile interview results with AI assistance."),
            record("r2", Phase::Specify, "Requirement drift", "Specifications drift from user needs."),
            record("r3", Phase::Understand, "Bias in research data", "Skewed samples produce biased findings."),
            record("r4", Phase::Create, "Automation bias", "Over-reliance on AI suggestions."),
        ]
    }

    #[test]
    fn tokenizer_folds_hyphens_and_case() {
        assert_eq!(tokenize("Over-Reliance on AI"), vec!["over", "reliance", "on", "ai"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn phase_sentinel_returns_phase_records_in_store_order() {
        let risks = store();
        let q = Query::new("anything phase:understand anything");
        let out = retrieve(&risks, &q);
        let ids: Vec<&str> = out.iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn sentinel_respects_max_items() {
        let risks = store();
        let q = Query::new("phase:understand").with_max_items(1);
        assert_eq!(retrieve(&risks, &q).len(), 1);
    }

    #[test]
    fn first_sentinel_wins_in_malformed_query() {
        let risks = store();
        let q = Query::new("phase:create phase:understand");
        let ids: Vec<&str> = retrieve(&risks, &q)
            .iter()
            .map(|m| m.record.id.as_str())
            .collect();
        // Understand is checked before Create.
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn interview_query_ranks_matching_record_first() {
        let risks = store();
        let q = Query::new("compile interview results with AI");
        let out = retrieve(&risks, &q);
        assert_eq!(out[0].record.id, "r1");
        assert!(out[0].score >= 2, "expected both 'interview' and 'ai' to hit");
    }

    #[test]
    fn zero_score_falls_back_to_store_order() {
        let risks = store();
        let q = Query::new("zzz qqq xxx").with_max_items(3);
        let ids: Vec<&str> = retrieve(&risks, &q)
            .iter()
            .map(|m| m.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn empty_query_falls_back_to_store_order() {
        let risks = store();
        let q = Query::new("");
        assert_eq!(retrieve(&risks, &q).len(), 4);
        assert_eq!(retrieve(&risks, &q)[0].record.id, "r1");
    }

    #[test]
    fn empty_store_yields_empty_result() {
        let risks: Vec<RiskRecord> = vec![];
        assert!(retrieve(&risks, &Query::new("anything")).is_empty());
        assert!(retrieve(&risks, &Query::new("phase:create")).is_empty());
    }

    #[test]
    fn ties_keep_store_order() {
        let risks = store();
        // "drift" hits r2 only; "bias" hits r3 and r4 equally.
        let q = Query::new("bias");
        let ids: Vec<&str> = retrieve(&risks, &q)
            .iter()
            .map(|m| m.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r3", "r4"]);
    }

    #[test]
    fn repeated_tokens_inflate_score() {
        let risks = store();
        let once = retrieve(&risks, &Query::new("bias"));
        let twice = retrieve(&risks, &Query::new("bias bias"));
        assert_eq!(once[0].score * 2, twice[0].score);
    }

    #[test]
    fn retrieval_is_deterministic() {
        let risks = store();
        let q = Query::new("ai bias drift");
        let a: Vec<&str> = retrieve(&risks, &q).iter().map(|m| m.record.id.as_str()).collect();
        let b: Vec<&str> = retrieve(&risks, &q).iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn embedded_store_smoke() {
        let kb = aura_kb::KnowledgeBase::embedded();
        let out = retrieve(kb.risks(), &Query::new("algorithmic bias fairness"));
        assert_eq!(out[0].record.id, "risk_bias");
    }
}
