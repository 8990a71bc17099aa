//! Cached decision record of one encoded state.
//!
//! A node keeps three things:
//! - its own statistics, shared by every path that reaches the state,
//! - the legal actions of the state, frozen at creation and sorted by heuristic value,
//! - statistics of its children that do not have a node yet, indexed by
//!   (action position, next piece).
//!
//! A child edge lives in the parent's pending table until the search has visited it
//! often enough, then it is promoted to a node of its own in the transposition table.

use crate::game::action::Action;
use crate::game::evaluation::Evaluator;
use crate::game::game_state::{ApplyMode, GameState};
use crate::mcts::hyperparameters::UctConfig;
use crate::mcts::stats::EdgeStats;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Rewards attributed to reaching this state, from any parent.
    pub stats: EdgeStats,
    actions: Vec<Action>,
    outcome_count: usize,
    /// Row-major `[action][outcome]`.
    pending: Vec<EdgeStats>,
}

impl Node {
    /// Builds the node of `state`: every legal action is dropped on a copy of the
    /// state, actions that end the game are discarded, and the survivors are sorted by
    /// decreasing heuristic value of their afterstate.
    ///
    /// The action list may be empty when every move loses.
    pub fn create<S, H>(state: &S, heuristic: &H, config: &UctConfig) -> Self
    where
        S: GameState,
        H: Evaluator<S>,
    {
        let mut ranked: Vec<(Action, f64)> = state
            .legal_actions()
            .into_iter()
            .filter_map(|action| {
                let mut afterstate = state.clone();
                afterstate.apply(&action, ApplyMode::Trial);
                if afterstate.is_game_over() {
                    None
                } else {
                    Some((action, heuristic.evaluate(&afterstate)))
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(cap) = config.max_actions {
            ranked.truncate(cap);
        }

        Self::with_actions(
            ranked.into_iter().map(|(action, _)| action).collect(),
            state.outcome_count(),
        )
    }

    /// Node with an explicit, already ordered action list and zeroed statistics.
    pub fn with_actions(actions: Vec<Action>, outcome_count: usize) -> Self {
        let pending = vec![EdgeStats::ZERO; actions.len() * outcome_count];
        Self {
            stats: EdgeStats::ZERO,
            actions,
            outcome_count,
            pending,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// True when every move from this state loses.
    pub fn is_dead_end(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn outcome_count(&self) -> usize {
        self.outcome_count
    }

    /// Statistics of the not-yet-created child reached by `action` then `outcome`.
    pub fn pending(&self, action: usize, outcome: usize) -> Option<&EdgeStats> {
        self.pending_index(action, outcome)
            .map(|index| &self.pending[index])
    }

    pub fn pending_mut(&mut self, action: usize, outcome: usize) -> Option<&mut EdgeStats> {
        self.pending_index(action, outcome)
            .map(move |index| &mut self.pending[index])
    }

    fn pending_index(&self, action: usize, outcome: usize) -> Option<usize> {
        if action < self.actions.len() && outcome < self.outcome_count {
            Some(action * self.outcome_count + outcome)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_actions_zeroes_every_table() {
        let node = Node::with_actions(vec![Action::new(0, 1), Action::new(1, 3)], 7);

        assert_eq!(node.action_count(), 2);
        assert_eq!(node.outcome_count(), 7);
        assert_eq!(node.stats, EdgeStats::ZERO);
        for action in 0..2 {
            for outcome in 0..7 {
                assert_eq!(node.pending(action, outcome), Some(&EdgeStats::ZERO));
            }
        }
    }

    #[test]
    fn test_pending_cells_are_independent() {
        let mut node = Node::with_actions(vec![Action::new(0, 1), Action::new(0, 2)], 3);

        node.pending_mut(1, 2).unwrap().record(5.0);

        assert_eq!(node.pending(1, 2).unwrap().visits, 1);
        assert_eq!(node.pending(0, 2).unwrap().visits, 0);
        assert_eq!(node.pending(1, 1).unwrap().visits, 0);
    }

    #[test]
    fn test_pending_out_of_range() {
        let mut node = Node::with_actions(vec![Action::new(0, 1)], 2);
        assert!(node.pending(1, 0).is_none());
        assert!(node.pending(0, 2).is_none());
        assert!(node.pending_mut(0, 5).is_none());
    }

    #[test]
    fn test_dead_end_node() {
        let node = Node::with_actions(Vec::new(), 7);
        assert!(node.is_dead_end());
        assert!(node.pending(0, 0).is_none());
    }
}
