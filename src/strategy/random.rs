use crate::game::action::Action;
use crate::game::game_state::GameState;
use crate::strategy::Strategy;
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drops the piece at a uniformly random legal placement.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Reproducible player.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<S: GameState> Strategy<S> for RandomStrategy {
    fn decide(&mut self, state: &S) -> Result<Action> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Ok(Action::PLACEHOLDER);
        }
        Ok(actions[self.rng.random_range(0..actions.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}
