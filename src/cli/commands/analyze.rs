//! Analyze command - Search a position and report the chosen line

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::board::Board;
use crate::cli::output::{create_spinner, format_number, print_kv, print_section};
use crate::config::{SearchConfig, Strategy};
use crate::eval::EvalWeights;
use crate::search::{self, CancelToken};
use crate::types::Side;

#[derive(Parser, Debug)]
#[command(about = "Analyze a position with a search strategy")]
pub struct AnalyzeArgs {
    /// Search strategy to run
    #[arg(long, short = 's', value_enum, default_value_t = Strategy::Minimax)]
    pub strategy: Strategy,

    /// Side to move (`fox` or `sheep`)
    #[arg(long, default_value = "fox")]
    pub side: Side,

    /// Search horizon in plies
    #[arg(long, short = 'd', default_value_t = 4)]
    pub depth: usize,

    /// Depth of accuracy (deepimax only)
    #[arg(long, default_value_t = 2)]
    pub doa: usize,

    /// Range of accuracy (deepimax only)
    #[arg(long, default_value_t = 2)]
    pub roa: usize,

    /// Position diagram to analyze (defaults to the starting position)
    #[arg(long)]
    pub board: Option<PathBuf>,

    /// Override the sheep separation weight
    #[arg(long)]
    pub separation_weight: Option<i32>,

    /// Override the sheep count weight
    #[arg(long)]
    pub sheep_count_weight: Option<i32>,

    /// Override the fox-to-sheep distance weight
    #[arg(long)]
    pub distance_weight: Option<i32>,

    /// Override the fox mobility weight
    #[arg(long)]
    pub mobility_weight: Option<i32>,

    /// Override the fox capture weight
    #[arg(long)]
    pub capture_weight: Option<i32>,

    /// Write the full search outcome as JSON
    #[arg(long)]
    pub dump_tree: Option<PathBuf>,
}

fn weights_from_args(args: &AnalyzeArgs) -> EvalWeights {
    let mut weights = EvalWeights::default();
    if let Some(w) = args.separation_weight {
        weights = weights.with_separation(w);
    }
    if let Some(w) = args.sheep_count_weight {
        weights = weights.with_sheep_count(w);
    }
    if let Some(w) = args.distance_weight {
        weights = weights.with_distance(w);
    }
    if let Some(w) = args.mobility_weight {
        weights = weights.with_mobility(w);
    }
    if let Some(w) = args.capture_weight {
        weights = weights.with_capture(w);
    }
    weights
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(path) => {
            let diagram = fs::read_to_string(path)
                .with_context(|| format!("Failed to read board file: {}", path.display()))?;
            Board::from_rows(&diagram)
                .with_context(|| format!("Invalid board diagram: {}", path.display()))?
        }
        None => Board::new(),
    };

    let config = SearchConfig::new(args.strategy)
        .with_depth(args.depth)
        .with_doa(args.doa)
        .with_roa(args.roa)
        .with_weights(weights_from_args(&args));

    let spinner = create_spinner(&format!(
        "Searching with {} to depth {}...",
        args.strategy, args.depth
    ));
    let outcome = search::run(&board, args.side, &config, &CancelToken::new())
        .context("Search failed")?;
    spinner.finish_and_clear();

    print_section(&format!("{} analysis, {} to move", args.strategy, args.side));
    println!("{board}");

    match outcome.best_action {
        Some(action) => print_kv("Best move", &action.to_string()),
        None => print_kv("Best move", "none (no legal move)"),
    }
    print_kv("Value", &format!("{:.2}", outcome.value));
    if !outcome.principal.is_empty() {
        let line: Vec<String> = outcome.principal.iter().map(ToString::to_string).collect();
        print_kv("Line", &line.join(" "));
    }
    print_kv("Nodes", &format_number(outcome.stats.nodes_created));
    print_kv("Evaluations", &format_number(outcome.stats.evaluations));
    print_kv("Deepest ply", &outcome.stats.deepest_ply.to_string());
    print_kv("Time", &format!("{:.3}s", outcome.stats.elapsed.as_secs_f64()));

    if let Some(path) = &args.dump_tree {
        let json = serde_json::to_string_pretty(&outcome)
            .context("Failed to serialize search outcome")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        println!("\nSearch outcome written to: {}", path.display());
    }

    Ok(())
}
