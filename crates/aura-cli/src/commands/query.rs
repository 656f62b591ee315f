//! Free-text query against the risk base.

use anyhow::Result;
use aura::prelude::*;
use colored::Colorize;

use crate::config::Config;
use crate::render::{self, RenderOptions};

pub fn run(
    query_text: &str,
    max_items: Option<usize>,
    frameworks: bool,
    condense: bool,
    pdf: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let kb = render::load_kb(&config)?;

    if config.telemetry.enabled {
        Telemetry::new(&config.telemetry.path).record(query_text);
    }

    if let Some(advisory) = scope_advisory(query_text) {
        println!("{} {}", "•".yellow(), advisory.yellow());
    }

    let query = Query::new(query_text).with_max_items(max_items.unwrap_or(config.query.max_items));
    let matches = retrieve(kb.risks(), &query);

    println!(
        "{} Results for {}:",
        "→".blue(),
        query_text.cyan().bold()
    );
    println!();

    let opts = RenderOptions {
        frameworks,
        condense,
    };
    let assessment = render::render_results(&kb, &matches, query_text, &opts);

    if let Some(output) = pdf {
        render::export_report(output, query_text, &assessment, &kb, &matches)?;
    }

    Ok(())
}
