//! Shared result rendering for the query and phase commands.

use anyhow::Result;
use aura::prelude::*;
use colored::Colorize;

use crate::config::Config;

/// Rendering toggles from CLI flags.
#[derive(Debug, Default)]
pub struct RenderOptions {
    pub frameworks: bool,
    pub condense: bool,
}

/// Load the knowledge base per config, with a caption when the embedded
/// fallback is in use.
pub fn load_kb(config: &Config) -> Result<KnowledgeBase> {
    let (risks_path, refs_path) = config.data_paths()?;
    let kb = KnowledgeBase::load(&risks_path, &refs_path);
    if kb.source() == Source::Embedded {
        println!("{}", "• Using embedded curated base (data files not found).".dimmed());
    }
    Ok(kb)
}

/// The condensing backend, when one is available.
pub fn condenser() -> Option<Box<dyn Condenser>> {
    #[cfg(feature = "api")]
    {
        if let Ok(c) = OpenAiCondenser::from_env() {
            return Some(Box::new(c));
        }
    }
    None
}

fn severity_badge(severity: Severity) -> colored::ColoredString {
    let label = format!("Priority: {}", severity);
    match severity {
        Severity::Low => label.green(),
        Severity::Moderate => label.yellow(),
        Severity::High => label.red(),
        Severity::VeryHigh => label.red().bold(),
    }
}

/// Print the assessment and the matched records; returns the assessment so
/// callers can reuse it for PDF export.
pub fn render_results(
    kb: &KnowledgeBase,
    matches: &[Match<'_>],
    query_text: &str,
    opts: &RenderOptions,
) -> Assessment {
    let assessment = classify(query_text);
    println!(
        "{} {} — {}",
        "EU AI Act:".bold(),
        assessment.tag.to_string().cyan().bold(),
        assessment.note
    );
    if opts.frameworks {
        println!("{}", framework_notes().dimmed());
    }
    println!();

    if matches.is_empty() {
        println!("{} No records in the knowledge base.", "•".yellow());
        return assessment;
    }

    let backend = if opts.condense { condenser() } else { None };
    if opts.condense && backend.is_none() {
        println!("{}", "• Condensing unavailable, showing full text.".dimmed());
    }

    let index = kb.reference_index();
    let mut next_citation = 1;

    for (i, m) in matches.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!("{} {}", rank.blue(), m.record.title.white().bold());
        println!(
            "   {}  {}",
            severity_badge(m.record.severity),
            format!("Phase: {}", m.record.phase).dimmed()
        );

        let justification = match &backend {
            Some(c) => condense_or_original(c.as_ref(), &m.record.justification),
            None => m.record.justification.clone(),
        };
        println!("   {}", justification);

        if !m.record.mitigations.is_empty() {
            println!("   {}", "Mitigations:".bold());
            for mitigation in m.record.mitigations.iter().take(5) {
                println!("    - {}", mitigation);
            }
        }
        if !m.record.evidence.is_empty() {
            println!("   {}", "Evidence:".bold());
            for e in m.record.evidence.iter().take(5) {
                println!("    - {}", e);
            }
        }

        let citations = cite(&m.record.references, &index, next_citation);
        next_citation += citations.numbers.len();
        println!("   {}", "References:".bold());
        for line in citations.text.lines() {
            println!("    {}", line);
        }

        if let Some(note) = &m.record.ai_act_note {
            println!("   {}", format!("EU AI Act note: {}", note).dimmed());
        }
        println!();
    }

    assessment
}

/// Export the rendered result set as a PDF and report the path.
pub fn export_report(
    output: &str,
    query_text: &str,
    assessment: &Assessment,
    kb: &KnowledgeBase,
    matches: &[Match<'_>],
) -> Result<()> {
    let index = kb.reference_index();
    let path = export_pdf(
        std::path::Path::new(output),
        query_text,
        assessment,
        matches,
        &index,
    )?;
    println!("{} Exported report to {}", "✓".green().bold(), path.display().to_string().cyan());
    Ok(())
}
