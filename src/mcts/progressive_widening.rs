//! Progressive Widening for UCT
//!
//! Progressive Widening (PW) limits how many of a node's actions are scored, based on
//! the number of trials already aggregated below that node. Actions are frozen in
//! heuristic order when a node is created, so only a prefix of that list competes:
//! narrow early in the search, wider as evidence accumulates.
//!
//! Key Formula: k(T) = min(A, max(min_actions, floor(C × T^α)))
//! - T: total trials aggregated over all actions of the node
//! - A: number of actions of the node
//! - C, α: widening constant and rate
//!
//! The defaults (C=1, α=0.5, min_actions=1) give `min(A, max(1, floor(sqrt(T))))`.

use serde::{Deserialize, Serialize};

/// Progressive Widening configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressiveWideningConfig {
    /// Constant C in k(T) = C × T^α
    pub c_constant: f64,
    /// Exponent α in k(T) = C × T^α
    pub alpha: f64,
    /// Minimum number of actions always scored
    pub min_actions: usize,
}

impl Default for ProgressiveWideningConfig {
    fn default() -> Self {
        Self {
            c_constant: 1.0,
            alpha: 0.5,
            min_actions: 1,
        }
    }
}

impl ProgressiveWideningConfig {
    /// Slower widening: trusts the heuristic ordering longer
    pub fn conservative() -> Self {
        Self {
            c_constant: 1.0,
            alpha: 0.25,
            min_actions: 1,
        }
    }

    /// Faster widening: more exploration of low-ranked actions
    pub fn aggressive() -> Self {
        Self {
            c_constant: 2.0,
            alpha: 0.5,
            min_actions: 2,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.c_constant > 0.0) || !self.c_constant.is_finite() {
            return Err(format!(
                "widening constant must be positive, got {}",
                self.c_constant
            ));
        }
        if !(self.alpha >= 0.0) || !self.alpha.is_finite() {
            return Err(format!(
                "widening exponent must be non-negative, got {}",
                self.alpha
            ));
        }
        if self.min_actions == 0 {
            return Err("widening must score at least one action".to_string());
        }
        Ok(())
    }
}

/// Number of leading actions scored at a node with `total_trials` trials.
///
/// # Example
/// ```
/// use tetris_uct::mcts::progressive_widening::{max_actions_to_explore, ProgressiveWideningConfig};
///
/// let config = ProgressiveWideningConfig::default();
///
/// assert_eq!(max_actions_to_explore(0, 20, &config), 1);
/// assert_eq!(max_actions_to_explore(8, 20, &config), 2);
/// assert_eq!(max_actions_to_explore(9, 20, &config), 3);
/// assert_eq!(max_actions_to_explore(10_000, 20, &config), 20);
/// ```
pub fn max_actions_to_explore(
    total_trials: u64,
    total_actions: usize,
    config: &ProgressiveWideningConfig,
) -> usize {
    let k = config.c_constant * (total_trials as f64).powf(config.alpha);
    // powf can land just below an exact integer (e.g. 9^0.5)
    let k_floored = (k + 1e-9).floor() as usize;

    k_floored.max(config.min_actions).min(total_actions)
}
