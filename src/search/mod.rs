//! The four search strategies and their shared plumbing
//!
//! Every algorithm consumes a board snapshot and a side to move, privately
//! clones the board to replay candidate action sequences, and returns a
//! [`SearchOutcome`]: the first action of the best line, the backed-up root
//! value, the explored tree for external visualization, and scalar counters
//! for the profiling surface. Execution is single-threaded and sequential;
//! every algorithm polls one [`CancelToken`] at its layer or node boundary.

pub mod alpha_beta;
pub mod deepimax;
pub mod expectimax;
pub mod minimax;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::{SearchConfig, Strategy};
use crate::eval::{EvalWeights, evaluate};
use crate::tree::{NodeId, SearchTree};
use crate::types::{Action, Side};

/// Shared cancellation flag polled cooperatively by all four algorithms.
///
/// Cloning the token shares the flag, so a controller thread can cancel a
/// search running on a worker.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Scalar counters describing one search invocation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Tree nodes created, attached or detached
    pub nodes_created: u64,
    /// Private board snapshots cloned for simulation
    pub boards_cloned: u64,
    /// Static evaluations performed
    pub evaluations: u64,
    /// Deepest ply materialized
    pub deepest_ply: usize,
    /// Wall-clock duration of the invocation
    pub elapsed: Duration,
}

impl SearchStats {
    /// Merge counters from another invocation (used by match reports).
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes_created += other.nodes_created;
        self.boards_cloned += other.boards_cloned;
        self.evaluations += other.evaluations;
        self.deepest_ply = self.deepest_ply.max(other.deepest_ply);
        self.elapsed += other.elapsed;
    }
}

/// Result of one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The move to play, or `None` when the side to move has no legal
    /// action (the root is a leaf)
    pub best_action: Option<Action>,
    /// Backed-up value at the root
    pub value: f64,
    /// Pending action sequence of the chosen line
    pub principal: Vec<Action>,
    /// The explored tree, for visualization or statistics extraction
    pub tree: SearchTree,
    /// Counters for the profiling surface
    pub stats: SearchStats,
}

/// Run the configured strategy against a snapshot of `board`.
///
/// The authoritative board is never mutated; the caller applies the
/// returned action itself.
///
/// # Errors
///
/// Returns [`Error::SearchCancelled`](crate::Error::SearchCancelled) when
/// the token is cancelled mid-search.
pub fn run(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    cancel: &CancelToken,
) -> crate::Result<SearchOutcome> {
    let started = Instant::now();
    let mut stats = SearchStats::default();

    let (tree, chosen) = match config.strategy {
        Strategy::Minimax => minimax::search(board, side, config, cancel, &mut stats)?,
        Strategy::AlphaBeta => alpha_beta::search(board, side, config, cancel, &mut stats)?,
        Strategy::Expectimax => expectimax::search(board, side, config, cancel, &mut stats)?,
        Strategy::Deepimax => deepimax::search(board, side, config, cancel, &mut stats)?,
    };
    stats.elapsed = started.elapsed();

    let principal = tree.node(chosen).actions.clone();
    let best_action = principal.first().copied();
    let value = tree.value(tree.root());

    Ok(SearchOutcome {
        best_action,
        value,
        principal,
        tree,
        stats,
    })
}

/// Clone the base board and replay a pending action sequence onto the clone.
pub(crate) fn materialize(base: &Board, path: &[Action], stats: &mut SearchStats) -> Board {
    stats.boards_cloned += 1;
    let mut board = base.clone();
    for &action in path {
        board.apply(action);
    }
    board
}

/// Statically evaluate a materialized leaf and record the value on its node.
pub(crate) fn evaluate_leaf(
    tree: &mut SearchTree,
    id: NodeId,
    position: &Board,
    weights: &EvalWeights,
    stats: &mut SearchStats,
) -> f64 {
    let value = f64::from(evaluate(position, weights));
    tree.set_value(id, value);
    stats.evaluations += 1;
    stats.deepest_ply = stats.deepest_ply.max(tree.node(id).depth);
    value
}
