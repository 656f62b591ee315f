//! Phase preset — typical risks of one design stage.

use anyhow::{bail, Result};
use aura::prelude::*;
use colored::Colorize;

use crate::config::Config;
use crate::render::{self, RenderOptions};

pub fn run(phase_keyword: &str, max_items: Option<usize>, pdf: Option<&str>) -> Result<()> {
    let Some(phase) = Phase::from_keyword(phase_keyword) else {
        bail!(
            "Unknown phase: {}. Use one of: understand, specify, create, evaluate.",
            phase_keyword
        );
    };

    let config = Config::load()?;
    let kb = render::load_kb(&config)?;

    // Phase presets go through the same sentinel path the query box uses;
    // they are not telemetry-logged (only typed queries are).
    let sentinel = phase.sentinel();
    let query = Query::new(sentinel).with_max_items(max_items.unwrap_or(config.query.max_items));
    let matches = retrieve(kb.risks(), &query);

    println!(
        "{} Typical AI risks in the {} phase:",
        "→".blue(),
        phase.to_string().cyan().bold()
    );
    println!();

    let assessment = render::render_results(&kb, &matches, sentinel, &RenderOptions::default());

    if let Some(output) = pdf {
        render::export_report(output, sentinel, &assessment, &kb, &matches)?;
    }

    Ok(())
}
