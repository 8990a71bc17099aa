//! Players and episode drivers.
//!
//! A [`Strategy`] decides where to drop the active piece. The UCT strategy runs a
//! search per move and keeps its transposition table between moves; the greedy and
//! random strategies are cheap baselines to compare it against.

pub mod greedy;
pub mod play;
pub mod random;
pub mod uct_strategy;

pub use greedy::GreedyStrategy;
pub use play::{play_game, play_games, GameSummary};
pub use random::RandomStrategy;
pub use uct_strategy::UctStrategy;

use crate::game::action::Action;
use crate::game::game_state::GameState;
use crate::Result;

/// Decides the placement of the active piece.
pub trait Strategy<S: GameState> {
    fn decide(&mut self, state: &S) -> Result<Action>;

    /// Called before each new game.
    fn reset(&mut self) {}

    fn name(&self) -> &str;
}
