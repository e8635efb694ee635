//! Full games between two move sources.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::ports::MoveSource;
use crate::search::SearchStats;
use crate::types::Side;

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Hard cap on plies before the game is called undecided.
    pub max_plies: usize,
    pub first_turn: Side,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 100,
            first_turn: Side::Fox,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    #[must_use]
    pub fn with_first_turn(mut self, first_turn: Side) -> Self {
        self.first_turn = first_turn;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOutcome {
    /// No sheep are left on the board.
    FoxWin,
    /// The fox has no legal move.
    SheepWin,
    /// The ply cap was reached first.
    Undecided,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::FoxWin => write!(f, "fox wins"),
            MatchOutcome::SheepWin => write!(f, "sheep win"),
            MatchOutcome::Undecided => write!(f, "undecided"),
        }
    }
}

/// What happened over one game, with search work aggregated across every
/// ply each side played.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub plies: usize,
    pub sheep_remaining: usize,
    pub fox_stats: SearchStats,
    pub sheep_stats: SearchStats,
}

/// Plays a game to completion, alternating turns from `config.first_turn`.
/// A side with no legal move passes; a fox that cannot move loses.
///
/// # Errors
///
/// Propagates the first error either move source returns.
pub fn run_match<'a>(
    mut board: Board,
    fox: &'a mut (dyn MoveSource + 'a),
    sheep: &'a mut (dyn MoveSource + 'a),
    config: &MatchConfig,
) -> crate::Result<MatchReport> {
    let mut side = config.first_turn;
    let mut plies = 0;
    let mut fox_stats = SearchStats::default();
    let mut sheep_stats = SearchStats::default();

    while plies < config.max_plies {
        if board.sheep_count() == 0 {
            return Ok(MatchReport {
                outcome: MatchOutcome::FoxWin,
                plies,
                sheep_remaining: 0,
                fox_stats,
                sheep_stats,
            });
        }

        let source = match side {
            Side::Fox => &mut *fox,
            Side::Sheep => &mut *sheep,
        };
        let proposed = source.propose(&board, side)?;
        if let Some(outcome) = source.last_outcome() {
            match side {
                Side::Fox => fox_stats.absorb(&outcome.stats),
                Side::Sheep => sheep_stats.absorb(&outcome.stats),
            }
        }

        match proposed {
            Some(action) => board.apply(action),
            None if side == Side::Fox => {
                return Ok(MatchReport {
                    outcome: MatchOutcome::SheepWin,
                    plies,
                    sheep_remaining: board.sheep_count(),
                    fox_stats,
                    sheep_stats,
                });
            }
            // Sheep with no move pass the turn.
            None => {}
        }

        plies += 1;
        side = side.opponent();
    }

    let outcome = if board.sheep_count() == 0 {
        MatchOutcome::FoxWin
    } else {
        MatchOutcome::Undecided
    };
    Ok(MatchReport {
        outcome,
        plies,
        sheep_remaining: board.sheep_count(),
        fox_stats,
        sheep_stats,
    })
}
