//! Fox and sheep CLI - Adversarial search toolkit
//!
//! This CLI provides a unified interface for:
//! - Analyzing positions with minimax, alpha-beta, expectimax and deepimax
//! - Playing bot-versus-bot games and comparing strategies

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foxsheep")]
#[command(version, about = "Adversarial search toolkit for fox and sheep", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position with a search strategy
    Analyze(foxsheep::cli::commands::analyze::AnalyzeArgs),

    /// Play bot-versus-bot games
    Play(foxsheep::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => foxsheep::cli::commands::analyze::execute(args),
        Commands::Play(args) => foxsheep::cli::commands::play::execute(args),
    }
}
