//! Initialize an Aura project.

use anyhow::{Context, Result};
use aura::kb::embedded;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = path
        .map(|p| Path::new(&p).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    println!("{} Initializing Aura project...", "→".blue());

    // Default config
    let config_path = base_path.join("aura.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    // Starter data files seeded from the embedded dataset
    let data_dir = base_path.join("data");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    let risks_path = data_dir.join("risks.yaml");
    if !risks_path.exists() {
        let content = serde_yaml::to_string(&embedded::risks())
            .context("Failed to serialize starter risks")?;
        std::fs::write(&risks_path, content)
            .with_context(|| format!("Failed to write {}", risks_path.display()))?;
        println!("  {} Created {}", "✓".green(), risks_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), risks_path.display());
    }

    let refs_path = data_dir.join("references.yaml");
    if !refs_path.exists() {
        let content = serde_yaml::to_string(&embedded::references())
            .context("Failed to serialize starter references")?;
        std::fs::write(&refs_path, content)
            .with_context(|| format!("Failed to write {}", refs_path.display()))?;
        println!("  {} Created {}", "✓".green(), refs_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), refs_path.display());
    }

    println!();
    println!("{} Aura project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} aura query \"compile interview results with AI\"", "1.".blue());
    println!("  {} aura phase understand", "2.".blue());
    println!("  {} aura stats", "3.".blue());

    Ok(())
}
