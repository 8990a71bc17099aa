//! Evaluation functions supplied by the caller.
//!
//! The search uses two of them: a *heuristic*, ranking the afterstates of the legal
//! actions once when a node is created, and a *value estimator*, standing in for the
//! rest of the game when a simulation leaves the cached tree.

/// Deterministic state evaluation.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Evaluates every state to zero.
///
/// As a value estimator this turns leaf evaluation into "score so far".
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroEvaluator;

impl<S> Evaluator<S> for ZeroEvaluator {
    fn evaluate(&self, _state: &S) -> f64 {
        0.0
    }
}
