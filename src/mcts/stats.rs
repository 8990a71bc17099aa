use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Visit count and reward sum of a bandit arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeStats {
    pub visits: u64,
    pub reward_sum: f64,
}

impl EdgeStats {
    pub const ZERO: EdgeStats = EdgeStats {
        visits: 0,
        reward_sum: 0.0,
    };

    /// Counts one more visit that earned `reward`.
    pub fn record(&mut self, reward: f64) {
        self.visits += 1;
        self.reward_sum += reward;
    }

    /// Mean reward, `None` before the first visit.
    pub fn mean(&self) -> Option<f64> {
        if self.visits == 0 {
            None
        } else {
            Some(self.reward_sum / self.visits as f64)
        }
    }
}

impl AddAssign for EdgeStats {
    fn add_assign(&mut self, other: EdgeStats) {
        self.visits += other.visits;
        self.reward_sum += other.reward_sum;
    }
}
