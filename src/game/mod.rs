pub mod action;
pub mod evaluation;
pub mod game_state;

pub use action::Action;
pub use evaluation::{Evaluator, ZeroEvaluator};
pub use game_state::{ApplyMode, GameState};
