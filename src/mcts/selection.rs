//! Bandit selection at a cached node.
//!
//! The statistics of an action are summed over every possible next piece, whether or
//! not that piece is the one the simulation will draw: for each (action, piece) pair
//! the child node's statistics are used when the child exists, the parent's pending
//! edge otherwise. Each action is then scored with UCB1 over those sums and the best
//! action among the first `k` (progressive widening) is chosen.

use crate::game::game_state::{ApplyMode, GameState};
use crate::mcts::hyperparameters::UctConfig;
use crate::mcts::progressive_widening::max_actions_to_explore;
use crate::mcts::state_key::StateKeyEncoder;
use crate::mcts::stats::EdgeStats;
use crate::mcts::transposition::{NodeId, TranspositionTable};
use crate::{Result, UctError};

/// Score of an arm tried `visits` times out of `total_trials`.
///
/// Unvisited arms score `+∞`. Otherwise the mean reward plus
/// `exploration × sqrt(ln(total_trials) / visits)`.
pub fn bandit(visits: u64, total_trials: u64, reward_sum: f64, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    let visits = visits as f64;
    reward_sum / visits + exploration * ((total_trials as f64).ln() / visits).sqrt()
}

/// Outcome of one selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Position of the chosen action in the node's action list
    pub action: usize,
    /// Number of leading actions that were scored
    pub scored: usize,
    /// Trials aggregated over all actions of the node
    pub total_trials: u64,
}

/// Per-action statistics of `node`, each summed over every next piece.
///
/// `state` must be positioned at `node`. Each action is tried and cancelled, so the
/// state is unchanged on return.
pub fn aggregate_action_stats<S: GameState>(
    table: &TranspositionTable,
    node: NodeId,
    state: &mut S,
    encoder: &mut StateKeyEncoder,
) -> Vec<EdgeStats> {
    let parent = table.node(node);

    parent
        .actions()
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let mut total = EdgeStats::ZERO;
            let restored_piece = state.current_piece();

            state.apply(action, ApplyMode::Trial);
            for outcome in 0..parent.outcome_count() {
                state.set_current_piece(outcome);
                total += match table.lookup(encoder.encode(&*state)) {
                    Some(child) => table.node(child).stats,
                    None => parent.pending(index, outcome).copied().unwrap_or_default(),
                };
            }
            state.cancel_last_move();
            state.set_current_piece(restored_piece);

            total
        })
        .collect()
}

/// Chooses the action to play at `node`.
///
/// Returns `Ok(None)` for a dead end (no action at all).
pub fn select_action<S: GameState>(
    table: &TranspositionTable,
    node: NodeId,
    state: &mut S,
    encoder: &mut StateKeyEncoder,
    config: &UctConfig,
) -> Result<Option<Selection>> {
    let action_count = table.node(node).action_count();
    if action_count == 0 {
        return Ok(None);
    }

    let per_action = aggregate_action_stats(table, node, state, encoder);
    let total_trials: u64 = per_action.iter().map(|stats| stats.visits).sum();
    let scored = max_actions_to_explore(total_trials, action_count, &config.widening);

    let mut best_score = f64::NEG_INFINITY;
    let mut best_action = None;
    for (index, stats) in per_action.iter().take(scored).enumerate() {
        let score = bandit(stats.visits, total_trials, stats.reward_sum, config.exploration);
        if score > best_score {
            best_score = score;
            best_action = Some(index);
        }
    }

    match best_action {
        Some(action) => Ok(Some(Selection {
            action,
            scored,
            total_trials,
        })),
        None => {
            log::error!(
                "No selectable action: {} actions, {} scored, {} trials",
                action_count,
                scored,
                total_trials
            );
            Err(UctError::NoSelectableAction {
                actions: action_count,
                total_trials,
            })
        }
    }
}
