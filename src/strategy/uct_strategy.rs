use crate::game::action::Action;
use crate::game::evaluation::Evaluator;
use crate::game::game_state::GameState;
use crate::mcts::algorithm::UctSearcher;
use crate::mcts::hyperparameters::UctConfig;
use crate::mcts::search_result::SearchResult;
use crate::mcts::transposition::TranspositionTable;
use crate::strategy::Strategy;
use crate::Result;
use std::time::Duration;

/// Player running a UCT search before every move.
///
/// The transposition table survives between moves: the node of the position reached
/// after a move is usually already in the table, grown by earlier searches. It is
/// created when the simulations never drew the piece that actually came.
#[derive(Debug)]
pub struct UctStrategy<H, V> {
    table: TranspositionTable,
    searcher: UctSearcher,
    heuristic: H,
    value_estimator: V,
    think_time: Duration,
    last_search: Option<SearchResult>,
}

impl<H, V> UctStrategy<H, V> {
    pub fn new(config: UctConfig, heuristic: H, value_estimator: V) -> Result<Self> {
        let think_time = Duration::from_millis(config.think_time_ms);
        Ok(Self {
            table: TranspositionTable::new(),
            searcher: UctSearcher::new(config)?,
            heuristic,
            value_estimator,
            think_time,
            last_search: None,
        })
    }

    /// Overrides the thinking time taken from the configuration.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Report of the most recent search.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl<S, H, V> Strategy<S> for UctStrategy<H, V>
where
    S: GameState,
    H: Evaluator<S>,
    V: Evaluator<S>,
{
    fn decide(&mut self, state: &S) -> Result<Action> {
        let root = self
            .table
            .get_or_create(state, &self.heuristic, self.searcher.config());

        let report = self.searcher.think(
            &mut self.table,
            root,
            state,
            self.think_time,
            &self.value_estimator,
            &self.heuristic,
        )?;
        let action = report.best_action;
        self.last_search = Some(report);
        Ok(action)
    }

    fn reset(&mut self) {
        log::debug!("Releasing {} nodes", self.table.len());
        self.table.clear();
        self.last_search = None;
    }

    fn name(&self) -> &str {
        "uct"
    }
}
