//! Knowledge-base statistics.

use anyhow::Result;
use aura::prelude::*;
use colored::Colorize;

use crate::config::Config;
use crate::render;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let kb = render::load_kb(&config)?;

    println!("{} Knowledge base:", "→".blue());
    println!();
    println!("  Risks:      {}", kb.risks().len().to_string().cyan());
    println!("  References: {}", kb.references().len().to_string().cyan());
    println!();

    println!("  By phase:");
    for phase in Phase::ALL {
        let count = kb.risks().iter().filter(|r| r.phase == phase).count();
        println!("    {:<12} {}", phase.to_string(), count.to_string().cyan());
    }
    println!();

    println!("  By severity:");
    for severity in [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::VeryHigh,
    ] {
        let count = kb.risks().iter().filter(|r| r.severity == severity).count();
        println!("    {:<12} {}", severity.to_string(), count.to_string().cyan());
    }

    Ok(())
}
