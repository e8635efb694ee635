//! Search strategy selection and configuration

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// The four interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Full-width, depth-limited minimax
    Minimax,
    /// Depth-first minimax with alpha-beta pruning
    AlphaBeta,
    /// Alternating best-choice and uniform-expectation layers
    Expectimax,
    /// Depth-extending search with expectation collapses and nominee
    /// re-expansion
    Deepimax,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
            Strategy::Expectimax => write!(f, "expectimax"),
            Strategy::Deepimax => write!(f, "deepimax"),
        }
    }
}

/// Configuration for one search invocation.
///
/// Depth, `doa` and `roa` are clamped to at least 1 on the way in; the
/// algorithms assume positive values and do not re-validate.
///
/// # Examples
///
/// ```
/// use foxsheep::config::{SearchConfig, Strategy};
///
/// let config = SearchConfig::new(Strategy::Deepimax)
///     .with_depth(6)
///     .with_doa(2)
///     .with_roa(3);
/// assert_eq!(config.depth, 6);
///
/// // Non-positive parameters are clamped, never passed through.
/// let clamped = SearchConfig::new(Strategy::Minimax).with_depth(0);
/// assert_eq!(clamped.depth, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which algorithm to run
    pub strategy: Strategy,
    /// Total ply budget
    pub depth: usize,
    /// Depth of accuracy: plies between branch-collapse boundaries
    /// (deepimax only)
    pub doa: usize,
    /// Range of accuracy: nominees re-expanded at each boundary
    /// (deepimax only)
    pub roa: usize,
    /// Evaluation weights used at every leaf
    pub weights: EvalWeights,
}

impl SearchConfig {
    /// Create a configuration with default depth 4, `doa` 2 and `roa` 2.
    pub fn new(strategy: Strategy) -> Self {
        SearchConfig {
            strategy,
            depth: 4,
            doa: 2,
            roa: 2,
            weights: EvalWeights::default(),
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }

    pub fn with_doa(mut self, doa: usize) -> Self {
        self.doa = doa.max(1);
        self
    }

    pub fn with_roa(mut self, roa: usize) -> Self {
        self.roa = roa.max(1);
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_clamped_to_one() {
        let config = SearchConfig::new(Strategy::Deepimax)
            .with_depth(0)
            .with_doa(0)
            .with_roa(0);
        assert_eq!(config.depth, 1);
        assert_eq!(config.doa, 1);
        assert_eq!(config.roa, 1);
    }

    #[test]
    fn builders_keep_other_fields() {
        let weights = EvalWeights::default().with_distance(5);
        let config = SearchConfig::new(Strategy::AlphaBeta)
            .with_depth(3)
            .with_weights(weights);
        assert_eq!(config.strategy, Strategy::AlphaBeta);
        assert_eq!(config.depth, 3);
        assert_eq!(config.weights.distance, 5);
        assert_eq!(config.doa, 2);
    }

    #[test]
    fn strategy_display_names() {
        assert_eq!(Strategy::Minimax.to_string(), "minimax");
        assert_eq!(Strategy::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!(Strategy::Expectimax.to_string(), "expectimax");
        assert_eq!(Strategy::Deepimax.to_string(), "deepimax");
    }
}
