use crate::game::action::Action;
use crate::mcts::stats::EdgeStats;
use std::time::Duration;

/// Report of one `think` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Most simulated root action, or [`Action::PLACEHOLDER`] when the root has none
    pub best_action: Action,
    /// Aggregated visits of `best_action`
    pub best_visits: u64,
    /// Simulations run before the deadline
    pub simulations: usize,
    pub elapsed: Duration,
    /// Every root action with its statistics summed over all next pieces
    pub root_actions: Vec<(Action, EdgeStats)>,
}

impl SearchResult {
    /// Statistics of `action` at the root, if it is a root action.
    pub fn stats_of(&self, action: &Action) -> Option<EdgeStats> {
        self.root_actions
            .iter()
            .find(|(candidate, _)| candidate == action)
            .map(|(_, stats)| *stats)
    }

    /// Simulations per second over the thinking time.
    pub fn simulation_rate(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.simulations as f64 / seconds
        } else {
            0.0
        }
    }
}
