//! Move sources built on top of the search algorithms.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::config::SearchConfig;
use crate::ports::MoveSource;
use crate::search::{self, CancelToken, SearchOutcome};
use crate::types::{Action, Side};

/// A move source that runs a configured tree search every turn and keeps
/// the full outcome of the latest one around for inspection.
pub struct SearchAgent {
    config: SearchConfig,
    cancel: CancelToken,
    name: String,
    last: Option<SearchOutcome>,
}

impl SearchAgent {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let name = config.strategy.to_string();
        Self {
            config,
            cancel: CancelToken::new(),
            name,
            last: None,
        }
    }

    /// A handle that aborts the agent's current and future searches when
    /// cancelled, for example from another thread.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl MoveSource for SearchAgent {
    fn propose(&mut self, board: &Board, side: Side) -> crate::Result<Option<Action>> {
        let outcome = search::run(board, side, &self.config, &self.cancel)?;
        let action = outcome.best_action;
        self.last = Some(outcome);
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }
}

/// A baseline that picks a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomAgent {
    fn propose(&mut self, board: &Board, side: Side) -> crate::Result<Option<Action>> {
        Ok(board.actions_for(side).choose(&mut self.rng).copied())
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;

    #[test]
    fn search_agent_proposes_a_legal_move_and_retains_the_outcome() {
        let board = Board::new();
        let mut agent = SearchAgent::new(
            SearchConfig::new(Strategy::AlphaBeta).with_depth(2),
        );
        let action = agent.propose(&board, Side::Fox).unwrap();
        assert!(board.fox_actions().contains(&action.unwrap()));
        let outcome = agent.last_outcome().unwrap();
        assert!(outcome.stats.evaluations > 0);
    }

    #[test]
    fn random_agent_is_reproducible_for_a_seed() {
        let board = Board::new();
        let first = RandomAgent::new(7).propose(&board, Side::Sheep).unwrap();
        let second = RandomAgent::new(7).propose(&board, Side::Sheep).unwrap();
        assert_eq!(first, second);
        assert!(board.sheep_actions().contains(&first.unwrap()));
    }

    #[test]
    fn cancelled_agent_returns_the_cancellation_error() {
        let board = Board::new();
        let mut agent = SearchAgent::new(SearchConfig::new(Strategy::Minimax));
        agent.cancel_token().cancel();
        assert!(matches!(
            agent.propose(&board, Side::Fox),
            Err(crate::Error::SearchCancelled)
        ));
    }
}
