//! List the bibliography.

use anyhow::Result;
use aura::prelude::*;
use colored::Colorize;

use crate::config::Config;
use crate::render;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let kb = render::load_kb(&config)?;

    println!("{} Bibliography:", "→".blue());
    println!();

    for (i, r) in kb.references().iter().enumerate() {
        println!(
            "  {} {} ({}). {}",
            format!("{}.", i + 1).blue(),
            r.authors,
            r.year,
            r.title.white().bold()
        );
        println!("     {}. {}", r.venue, r.link().dimmed());
    }

    println!();
    println!(
        "{} {} references",
        "✓".green(),
        kb.references().len().to_string().cyan()
    );

    Ok(())
}
