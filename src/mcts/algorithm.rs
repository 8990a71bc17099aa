//! Time-bounded UCT search over a transposition table.
//!
//! One simulation walks the cached tree from the root, choosing actions with the bandit
//! rule and playing them on a scratch copy of the root state, until the game ends or
//! the reached state has no node yet. The leaf is valued as score plus value estimate,
//! and every node on the path is credited with the reward earned *from its own
//! position onward*, so statistics do not depend on the score of the path prefix.
//!
//! The edge that left the tree is credited in its parent's pending table, or promoted
//! to a node of its own once its visit quota is reached. Promotion is additive: the new
//! node starts with the statistics the edge accumulated.
//!
//! A node reached from several parents accumulates rewards from all of them without
//! telling them apart.

use crate::game::action::Action;
use crate::game::evaluation::Evaluator;
use crate::game::game_state::{ApplyMode, GameState};
use crate::mcts::hyperparameters::UctConfig;
use crate::mcts::node::Node;
use crate::mcts::search_result::SearchResult;
use crate::mcts::selection::{aggregate_action_stats, select_action};
use crate::mcts::state_key::{StateKey, StateKeyEncoder};
use crate::mcts::stats::EdgeStats;
use crate::mcts::transposition::{NodeId, TranspositionTable};
use crate::{Result, UctError};
use std::time::{Duration, Instant};

/// One tree move of the current simulation.
#[derive(Debug, Clone, Copy)]
struct TraceEntry {
    node: NodeId,
    /// `None` at a dead end
    action: Option<usize>,
    /// Score before the move
    score: f64,
    /// Piece drawn after the move
    outcome: usize,
}

/// Why a descent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    GameOver,
    /// The reached state has no node yet
    Frontier,
    /// The last node has no action. The leaf is valued at the score alone, as if the
    /// placeholder piece had been dropped and the lost game valued at zero.
    DeadEnd,
}

/// UCT search driver.
///
/// Owns the trace buffer reused by every simulation, so one searcher runs one search
/// at a time. The transposition table is passed to each call.
#[derive(Debug)]
pub struct UctSearcher {
    config: UctConfig,
    trace: Vec<TraceEntry>,
    encoder: StateKeyEncoder,
}

impl UctSearcher {
    pub fn new(config: UctConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            trace: Vec::with_capacity(config.max_depth),
            config,
            encoder: StateKeyEncoder::new(),
        })
    }

    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    /// Runs simulations from `root` until `budget` has elapsed, then returns the root
    /// action with the most aggregated visits.
    ///
    /// `state` must be positioned at `root`; it is never modified. A non-zero budget
    /// always runs at least one simulation, a zero budget runs none. Ties go to the
    /// action ranked first by the heuristic, and a root without actions yields
    /// [`Action::PLACEHOLDER`].
    pub fn think<S, V, H>(
        &mut self,
        table: &mut TranspositionTable,
        root: NodeId,
        state: &S,
        budget: Duration,
        value_estimator: &V,
        heuristic: &H,
    ) -> Result<SearchResult>
    where
        S: GameState,
        V: Evaluator<S>,
        H: Evaluator<S>,
    {
        if table.get(root).is_none() {
            return Err(UctError::UnknownRoot);
        }

        let start = Instant::now();
        let mut simulations = 0;
        if !budget.is_zero() {
            loop {
                let mut scratch = state.clone();
                self.simulate(table, root, &mut scratch, value_estimator, heuristic)?;
                simulations += 1;
                if start.elapsed() >= budget {
                    break;
                }
            }
        }
        log::debug!("Launched {} simulations", simulations);

        let mut readout = state.clone();
        let per_action = aggregate_action_stats(table, root, &mut readout, &mut self.encoder);
        let root_actions: Vec<_> = table
            .node(root)
            .actions()
            .iter()
            .copied()
            .zip(per_action)
            .collect();

        let mut best: Option<(Action, u64)> = None;
        for (action, stats) in &root_actions {
            let better = match best {
                None => true,
                Some((_, visits)) => stats.visits > visits,
            };
            if better {
                best = Some((*action, stats.visits));
            }
        }

        let (best_action, best_visits) = match best {
            Some(best) => best,
            None => {
                log::warn!("Root has no legal action; returning the placeholder action");
                (Action::PLACEHOLDER, 0)
            }
        };
        log::debug!("Best action: {} (visits={})", best_action, best_visits);

        Ok(SearchResult {
            best_action,
            best_visits,
            simulations,
            elapsed: start.elapsed(),
            root_actions,
        })
    }

    /// Runs one simulation from `root`, playing on `state`, and returns the reward
    /// earned from the root onward.
    ///
    /// `state` must be positioned at `root` and is consumed as scratch: it ends at the
    /// leaf of the simulation.
    pub fn simulate<S, V, H>(
        &mut self,
        table: &mut TranspositionTable,
        root: NodeId,
        state: &mut S,
        value_estimator: &V,
        heuristic: &H,
    ) -> Result<f64>
    where
        S: GameState,
        V: Evaluator<S>,
        H: Evaluator<S>,
    {
        let root_score = state.score();
        let stop = self.descend(table, root, state)?;

        let reward = match stop {
            Stop::DeadEnd => state.score(),
            Stop::GameOver | Stop::Frontier => state.score() + value_estimator.evaluate(state),
        };

        for entry in &self.trace {
            table.node_mut(entry.node).stats.record(reward - entry.score);
        }

        let last = match self.trace.last() {
            Some(&TraceEntry {
                action: Some(action),
                node,
                outcome,
                ..
            }) => (node, action, outcome),
            _ => return Ok(reward - root_score),
        };
        let continuation = reward - state.score();

        match stop {
            Stop::Frontier => self.expand(table, last, &*state, continuation, heuristic)?,
            Stop::GameOver => pending_edge(table, last)?.record(continuation),
            Stop::DeadEnd => {}
        }

        Ok(reward - root_score)
    }

    /// Walks the cached tree, filling the trace.
    fn descend<S: GameState>(
        &mut self,
        table: &TranspositionTable,
        root: NodeId,
        state: &mut S,
    ) -> Result<Stop> {
        self.trace.clear();
        let mut current = Some(root);

        loop {
            if state.is_game_over() {
                return Ok(Stop::GameOver);
            }
            let Some(node) = current else {
                return Ok(Stop::Frontier);
            };
            if self.trace.len() >= self.config.max_depth {
                log::error!(
                    "Trace depth reached {}; increase max_depth",
                    self.config.max_depth
                );
                return Err(UctError::DepthExceeded {
                    max_depth: self.config.max_depth,
                });
            }

            let score = state.score();
            let Some(selection) =
                select_action(table, node, state, &mut self.encoder, &self.config)?
            else {
                self.trace.push(TraceEntry {
                    node,
                    action: None,
                    score,
                    outcome: state.current_piece(),
                });
                return Ok(Stop::DeadEnd);
            };

            let action = table.node(node).actions()[selection.action];
            state.apply(&action, ApplyMode::Commit);
            self.trace.push(TraceEntry {
                node,
                action: Some(selection.action),
                score,
                outcome: state.current_piece(),
            });

            current = if state.is_game_over() {
                None
            } else {
                table.lookup(self.encoder.encode(&*state))
            };
        }
    }

    /// Credits the edge that left the tree, creating the node of `state` once the
    /// edge has been visited `creation_threshold` times (this visit included).
    fn expand<S, H>(
        &mut self,
        table: &mut TranspositionTable,
        (parent, action, outcome): (NodeId, usize, usize),
        state: &S,
        continuation: f64,
        heuristic: &H,
    ) -> Result<()>
    where
        S: GameState,
        H: Evaluator<S>,
    {
        let edge = pending_edge(table, (parent, action, outcome))?;
        if edge.visits + 1 < self.config.creation_threshold {
            edge.record(continuation);
            return Ok(());
        }

        let mut stats = *edge;
        stats.record(continuation);

        let mut node = Node::create(state, heuristic, &self.config);
        node.stats = stats;
        log::trace!(
            "Materialized node with {} actions after {} visits",
            node.action_count(),
            stats.visits
        );

        let key = StateKey::from(self.encoder.encode(state));
        table.insert(key, node);
        Ok(())
    }
}

fn pending_edge(
    table: &mut TranspositionTable,
    (parent, action, outcome): (NodeId, usize, usize),
) -> Result<&mut EdgeStats> {
    let node = table.node_mut(parent);
    let outcome_count = node.outcome_count();
    node.pending_mut(action, outcome)
        .ok_or(UctError::OutcomeOutOfRange {
            outcome,
            outcome_count,
        })
}
