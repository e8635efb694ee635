//! Fox and sheep adversarial search engine
//!
//! This crate provides:
//! - Complete fox and sheep board implementation with move generation,
//!   jump captures and reversible actions
//! - Four tree search strategies: minimax, minimax with alpha-beta
//!   pruning, expectimax and deepimax
//! - A weighted positional evaluation function
//! - Search and random agents behind a pluggable move-source trait
//! - A match runner for bot-versus-bot games

pub mod agent;
pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod ports;
pub mod search;
pub mod tree;
pub mod types;

pub use agent::{RandomAgent, SearchAgent};
pub use board::{BOARD_SIZE, Board, Cell, SHEEP_MAX};
pub use config::{SearchConfig, Strategy};
pub use error::{Error, Result};
pub use eval::{EvalWeights, evaluate};
pub use game::{MatchConfig, MatchOutcome, MatchReport, run_match};
pub use ports::MoveSource;
pub use search::{CancelToken, SearchOutcome, SearchStats};
pub use tree::{NodeId, SearchNode, SearchTree};
pub use types::{Action, Pos, Side};
