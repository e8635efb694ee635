//! Trait seams for pluggable move sources.

use crate::board::Board;
use crate::search::SearchOutcome;
use crate::types::{Action, Side};

/// Anything that can propose a move for a side: search agents, random
/// baselines, or an interactive front end.
pub trait MoveSource {
    /// Proposes a move for `side` on `board`, or `None` when the side has
    /// no legal move and must pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails, for example when a
    /// search is cancelled.
    fn propose(&mut self, board: &Board, side: Side) -> crate::Result<Option<Action>>;

    /// A short label for reports and logs.
    fn name(&self) -> &str;

    /// The full outcome of the most recent search, when the source runs one.
    fn last_outcome(&self) -> Option<&SearchOutcome> {
        None
    }
}
