//! # Tetris UCT
//!
//! Time-bounded Monte Carlo Tree Search (UCT) for stochastic, turn-based placement games
//! in the Tetris family: a board, a randomly drawn next piece from a finite alphabet, and
//! a score made of line clears.
//!
//! ## Features
//!
//! - **Search Engine**: UCT descent with progressive widening and leaf evaluation
//! - **Transposition Table**: positions reached by different move orders share one node
//! - **Lazy Node Creation**: child statistics live in their parent until a visit quota is met
//! - **Strategies**: UCT, greedy and random players with episode statistics
//!
//! The board simulation itself (legality, line clears, piece generation) is supplied by
//! the caller through the [`GameState`] trait.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tetris_uct::{Node, TranspositionTable, UctConfig, UctSearcher};
//! use std::time::Duration;
//!
//! let config = UctConfig::default();
//! let mut table = TranspositionTable::new();
//! let root = table.get_or_create(&game, &heuristic, &config);
//! let mut searcher = UctSearcher::new(config)?;
//! let budget = Duration::from_millis(10);
//! let report = searcher.think(&mut table, root, &game, budget, &value, &heuristic)?;
//! game.apply(&report.best_action, ApplyMode::Commit);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Game collaborator contracts (state, actions, evaluation functions)
pub mod game;

/// UCT search engine
pub mod mcts;

/// Players built on top of the search, and episode drivers
pub mod strategy;

/// Episode statistics and their CSV export
pub mod recording;

/// Logger bootstrap
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use mcts::*;

pub use strategy::*;

pub use recording::GamesStatistics;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the search library
#[derive(Debug, thiserror::Error)]
pub enum UctError {
    #[error("Search configuration invalid: {0}")]
    InvalidConfig(String),

    #[error("Trace depth exceeded the maximum of {max_depth}; increase max_depth")]
    DepthExceeded { max_depth: usize },

    #[error("No selectable action although the node has {actions} actions ({total_trials} trials)")]
    NoSelectableAction { actions: usize, total_trials: u64 },

    #[error("Outcome {outcome} is outside the {outcome_count} outcomes known to the node")]
    OutcomeOutOfRange { outcome: usize, outcome_count: usize },

    #[error("Root node is not owned by this transposition table")]
    UnknownRoot,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UctError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
