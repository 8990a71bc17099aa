use crate::game::action::Action;
use crate::game::evaluation::Evaluator;
use crate::game::game_state::{ApplyMode, GameState};
use crate::strategy::Strategy;
use crate::Result;

/// One-ply player: drops the piece where immediate reward plus heuristic value of the
/// afterstate is highest, avoiding losing moves while a non-losing one exists.
#[derive(Debug, Clone)]
pub struct GreedyStrategy<H> {
    heuristic: H,
}

impl<H> GreedyStrategy<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<S, H> Strategy<S> for GreedyStrategy<H>
where
    S: GameState,
    H: Evaluator<S>,
{
    fn decide(&mut self, state: &S) -> Result<Action> {
        let mut afterstate = state.clone();
        let mut best: Option<(Action, f64)> = None;

        for action in state.legal_actions() {
            let reward = afterstate.apply(&action, ApplyMode::Trial);
            if !afterstate.is_game_over() {
                let value = reward + self.heuristic.evaluate(&afterstate);
                if best.map_or(true, |(_, best_value)| value > best_value) {
                    best = Some((action, value));
                }
            }
            afterstate.cancel_last_move();
        }

        Ok(best.map_or(Action::PLACEHOLDER, |(action, _)| action))
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
