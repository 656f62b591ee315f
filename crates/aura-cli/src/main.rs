//! Aura CLI - curated AI-related UX risk lookup.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about = "Aura - AI-related UX risk lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (enables tracing)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an Aura project (config + starter data files)
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Search the risk base with a free-text query
    Query {
        /// What you are doing or want to do (e.g., "compile interview results with AI")
        query: String,

        /// Maximum records to return (overrides config)
        #[arg(short, long)]
        max_items: Option<usize>,

        /// Show GDPR / NIST AI RMF / OECD mapping notes
        #[arg(long)]
        frameworks: bool,

        /// Condense justifications via the configured backend (silent fallback)
        #[arg(long)]
        condense: bool,

        /// Export the result as a PDF report
        #[arg(long, value_name = "FILE")]
        pdf: Option<String>,
    },

    /// Browse typical risks of a design phase
    Phase {
        /// One of: understand, specify, create, evaluate
        phase: String,

        /// Maximum records to return (overrides config)
        #[arg(short, long)]
        max_items: Option<usize>,

        /// Export the result as a PDF report
        #[arg(long, value_name = "FILE")]
        pdf: Option<String>,
    },

    /// List the bibliography
    Refs,

    /// Show knowledge-base statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Query {
            query,
            max_items,
            frameworks,
            condense,
            pdf,
        } => commands::query::run(&query, max_items, frameworks, condense, pdf.as_deref()),
        Commands::Phase {
            phase,
            max_items,
            pdf,
        } => commands::phase::run(&phase, max_items, pdf.as_deref()),
        Commands::Refs => commands::refs::run(),
        Commands::Stats => commands::stats::run(),
    }
}
