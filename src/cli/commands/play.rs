//! Play command - Run bot-versus-bot games and summarize the results

use anyhow::{Result, bail};
use clap::Parser;

use crate::agent::{RandomAgent, SearchAgent};
use crate::board::Board;
use crate::cli::output::{create_games_progress, format_number, print_kv, print_section};
use crate::config::{SearchConfig, Strategy};
use crate::game::{self, MatchConfig, MatchOutcome};
use crate::ports::MoveSource;
use crate::search::SearchStats;
use crate::types::Side;

#[derive(Parser, Debug)]
#[command(about = "Play bot-versus-bot games")]
pub struct PlayArgs {
    /// Fox controller (`random` or a strategy name)
    #[arg(long, default_value = "alpha-beta")]
    pub fox: String,

    /// Sheep controller (`random` or a strategy name)
    #[arg(long, default_value = "alpha-beta")]
    pub sheep: String,

    /// Search horizon in plies for search controllers
    #[arg(long, short = 'd', default_value_t = 4)]
    pub depth: usize,

    /// Depth of accuracy (deepimax only)
    #[arg(long, default_value_t = 2)]
    pub doa: usize,

    /// Range of accuracy (deepimax only)
    #[arg(long, default_value_t = 2)]
    pub roa: usize,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Ply cap per game
    #[arg(long, default_value_t = 100)]
    pub max_plies: usize,

    /// Side that moves first
    #[arg(long, default_value = "fox")]
    pub first_turn: Side,

    /// Random seed for `random` controllers
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

fn parse_controller_token(token: &str, args: &PlayArgs, seed: u64) -> Result<Box<dyn MoveSource>> {
    if token == "random" {
        return Ok(Box::new(RandomAgent::new(seed)));
    }
    let strategy = match token {
        "minimax" => Strategy::Minimax,
        "alpha-beta" => Strategy::AlphaBeta,
        "expectimax" => Strategy::Expectimax,
        "deepimax" => Strategy::Deepimax,
        other => bail!("Unknown controller: {other} (expected random, minimax, alpha-beta, expectimax or deepimax)"),
    };
    let config = SearchConfig::new(strategy)
        .with_depth(args.depth)
        .with_doa(args.doa)
        .with_roa(args.roa);
    Ok(Box::new(SearchAgent::new(config)))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut fox = parse_controller_token(&args.fox, &args, args.seed)?;
    let mut sheep = parse_controller_token(&args.sheep, &args, args.seed.wrapping_add(1))?;

    let match_config = MatchConfig::default()
        .with_max_plies(args.max_plies)
        .with_first_turn(args.first_turn);

    let mut fox_wins = 0usize;
    let mut sheep_wins = 0usize;
    let mut undecided = 0usize;
    let mut total_plies = 0usize;
    let mut fox_stats = SearchStats::default();
    let mut sheep_stats = SearchStats::default();

    let progress = create_games_progress(args.games as u64);
    for _ in 0..args.games {
        let report = game::run_match(
            Board::new(),
            fox.as_mut(),
            sheep.as_mut(),
            &match_config,
        )?;
        match report.outcome {
            MatchOutcome::FoxWin => fox_wins += 1,
            MatchOutcome::SheepWin => sheep_wins += 1,
            MatchOutcome::Undecided => undecided += 1,
        }
        total_plies += report.plies;
        fox_stats.absorb(&report.fox_stats);
        sheep_stats.absorb(&report.sheep_stats);
        progress.inc(1);
    }
    progress.finish_and_clear();

    print_section(&format!(
        "{} (fox) vs {} (sheep), {} game(s)",
        fox.name(),
        sheep.name(),
        args.games
    ));
    print_kv("Fox wins", &fox_wins.to_string());
    print_kv("Sheep wins", &sheep_wins.to_string());
    print_kv("Undecided", &undecided.to_string());
    print_kv(
        "Avg plies",
        &format!("{:.1}", total_plies as f64 / args.games as f64),
    );
    print_kv("Fox evaluations", &format_number(fox_stats.evaluations));
    print_kv("Sheep evaluations", &format_number(sheep_stats.evaluations));
    print_kv(
        "Fox search time",
        &format!("{:.3}s", fox_stats.elapsed.as_secs_f64()),
    );
    print_kv(
        "Sheep search time",
        &format!("{:.3}s", sheep_stats.elapsed.as_secs_f64()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlayArgs {
        PlayArgs {
            fox: "random".to_string(),
            sheep: "random".to_string(),
            depth: 2,
            doa: 2,
            roa: 2,
            games: 1,
            max_plies: 10,
            first_turn: Side::Fox,
            seed: 0,
        }
    }

    #[test]
    fn controller_tokens_cover_every_strategy() {
        let args = args();
        for token in ["random", "minimax", "alpha-beta", "expectimax", "deepimax"] {
            assert!(parse_controller_token(token, &args, 0).is_ok());
        }
        assert!(parse_controller_token("montecarlo", &args, 0).is_err());
    }
}
