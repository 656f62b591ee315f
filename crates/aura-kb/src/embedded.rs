//! Embedded curated dataset.
//!
//! Shipped as literal constructors so the fallback path cannot itself fail
//! to parse. Used whenever the external YAML sources are absent or
//! unreadable, and as the seed data written out by `aura init`.

use aura_core::{Phase, ReferenceRecord, RiskRecord, Severity};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The embedded bibliography.
pub fn references() -> Vec<ReferenceRecord> {
    vec![
        ReferenceRecord {
            id: "ruckenstein2022".into(),
            authors: "Ruckenstein, M.; Granroth, J.".into(),
            year: 2022,
            title: "Definition drives design — Disability models and mechanisms of bias in AI technologies".into(),
            venue: "arXiv preprint".into(),
            doi: Some("10.48550/arXiv.2206.08287".into()),
            url: Some("https://arxiv.org/abs/2206.08287".into()),
        },
        ReferenceRecord {
            id: "mosqueira2023".into(),
            authors: "Mosqueira-Rey, E.; et al.".into(),
            year: 2023,
            title: "Human-in-the-loop Machine Learning — A State of the Art".into(),
            venue: "Artificial Intelligence Review (Springer)".into(),
            doi: Some("10.1007/s10462-022-10246-w".into()),
            url: Some("https://link.springer.com/article/10.1007/s10462-022-10246-w".into()),
        },
        ReferenceRecord {
            id: "mehrabi2022".into(),
            authors: "Mehrabi, N.; et al.".into(),
            year: 2022,
            title: "A survey on bias and fairness in machine learning".into(),
            venue: "ACM Computing Surveys".into(),
            doi: Some("10.1145/3457607".into()),
            url: Some("https://dl.acm.org/doi/10.1145/3457607".into()),
        },
        ReferenceRecord {
            id: "zoller2024".into(),
            authors: "Zöller, C.; et al.".into(),
            year: 2024,
            title: "The impact of AI errors in a human-in-the-loop process".into(),
            venue: "PLOS ONE (PMC)".into(),
            doi: Some("10.1371/journal.pone.0296535".into()),
            url: Some("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC10772030/".into()),
        },
        ReferenceRecord {
            id: "kim2023".into(),
            authors: "Kim, J.; et al.".into(),
            year: 2023,
            title: "Designerly Understanding: Information Needs for Model Transparency to Support Design Ideation for AI-Powered UX".into(),
            venue: "arXiv preprint".into(),
            doi: Some("10.48550/arXiv.2302.10395".into()),
            url: Some("https://arxiv.org/abs/2302.10395".into()),
        },
    ]
}

/// The embedded risk records.
pub fn risks() -> Vec<RiskRecord> {
    vec![
        RiskRecord {
            id: "risk_dehumanization".into(),
            phase: Phase::Understand,
            title: "Dehumanization through context-insensitive automation".into(),
            severity: Severity::High,
            justification: "Generic models can ignore cultural/accessibility context, excluding users and harming adoption.".into(),
            evidence: strings(&[
                "Automation can overlook disability models and context.",
                "Cultural misalignment degrades trust and fairness perception.",
            ]),
            mitigations: strings(&[
                "Include lived-experience users and accessibility experts in reviews.",
                "Add inclusive personas and scenario walkthroughs to decision logs.",
                "Require context notes in prompts and model cards.",
            ]),
            references: strings(&["ruckenstein2022"]),
            ai_act_note: Some("Potential Limited/High risk depending on domain; ensure transparency and accessibility compliance.".into()),
        },
        RiskRecord {
            id: "risk_intentionality".into(),
            phase: Phase::Specify,
            title: "Loss of design intentionality and purpose drift".into(),
            severity: Severity::Moderate,
            justification: "Delegating key choices to AI can detach outcomes from strategy, reducing differentiation and value.".into(),
            evidence: strings(&[
                "Practitioners report agency/purpose dilution with automation.",
            ]),
            mitigations: strings(&[
                "Human gates for vision, outcomes, success criteria.",
                "Design rationale log linked to AI-assisted artifacts.",
                "Human approval for changes to goals/metrics.",
            ]),
            references: strings(&["mosqueira2023"]),
            ai_act_note: Some("Transparency and human oversight duties recommended.".into()),
        },
        RiskRecord {
            id: "risk_bias".into(),
            phase: Phase::Understand,
            title: "Algorithmic bias and unfair outcomes".into(),
            severity: Severity::VeryHigh,
            justification: "Discriminatory outcomes cause legal/reputation risk and exclusion; remediation is costly.".into(),
            evidence: strings(&[
                "Bias emerges from data and reinforces discrimination at scale.",
            ]),
            mitigations: strings(&[
                "Fairness checks on representative samples before release.",
                "Human override/appeal channel for affected users.",
                "Track disparity metrics by key segments.",
            ]),
            references: strings(&["mehrabi2022"]),
            ai_act_note: Some("High-risk in sensitive domains; rigorous risk management required.".into()),
        },
        RiskRecord {
            id: "risk_automation_bias".into(),
            phase: Phase::Create,
            title: "Automation bias (over-reliance on AI suggestions)".into(),
            severity: Severity::High,
            justification: "Designers may accept wrong AI suggestions, leading to usability defects and misaligned features.".into(),
            evidence: strings(&[
                "Human accuracy drops when exposed to erroneous AI outputs.",
            ]),
            mitigations: strings(&[
                "Show confidence/uncertainty cues.",
                "Force exploration of >=2 alternatives before selection.",
                "Error review rituals with human-first judgment.",
            ]),
            references: strings(&["zoller2024"]),
            ai_act_note: Some("Transparency/logging obligations; promote human oversight.".into()),
        },
        RiskRecord {
            id: "risk_transparency".into(),
            phase: Phase::Evaluate,
            title: "Lack of traceability and transparency".into(),
            severity: Severity::Moderate,
            justification: "Without audit trails/rationale, decisions are indefensible; compliance and trust decline.".into(),
            evidence: strings(&[
                "Designers need model transparency artifacts to decide.",
            ]),
            mitigations: strings(&[
                "Model/prompt cards linked to artifacts.",
                "Log AI-assisted changes with who/why.",
                "End-user disclosures where applicable.",
            ]),
            references: strings(&["kim2023"]),
            ai_act_note: Some("Limited-risk transparency duties likely apply.".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_risk_ids_unique() {
        let risks = risks();
        let mut ids: Vec<&str> = risks.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), risks.len());
    }

    #[test]
    fn embedded_references_resolve() {
        let refs = references();
        for risk in risks() {
            for rid in &risk.references {
                assert!(
                    refs.iter().any(|r| &r.id == rid),
                    "dangling reference {} in {}",
                    rid,
                    risk.id
                );
            }
        }
    }

    #[test]
    fn every_phase_is_represented() {
        let risks = risks();
        for phase in Phase::ALL {
            assert!(risks.iter().any(|r| r.phase == phase));
        }
    }
}
