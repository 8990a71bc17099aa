use crate::game::game_state::{ApplyMode, GameState};
use crate::recording::GamesStatistics;
use crate::strategy::Strategy;
use crate::Result;

/// Outcome of one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSummary {
    pub score: f64,
    pub moves: usize,
}

/// Plays `state` to the end with `strategy`, committing every decision.
pub fn play_game<S, P>(strategy: &mut P, state: &mut S) -> Result<GameSummary>
where
    S: GameState,
    P: Strategy<S> + ?Sized,
{
    let mut moves = 0;
    while !state.is_game_over() {
        let action = strategy.decide(state)?;
        state.apply(&action, ApplyMode::Commit);
        moves += 1;
    }

    Ok(GameSummary {
        score: state.score(),
        moves,
    })
}

/// Plays `nb_games` fresh games and collects their scores.
pub fn play_games<S, P, F>(
    strategy: &mut P,
    mut new_game: F,
    nb_games: usize,
) -> Result<GamesStatistics>
where
    S: GameState,
    P: Strategy<S> + ?Sized,
    F: FnMut() -> S,
{
    let mut stats = GamesStatistics::new();

    for game_index in 0..nb_games {
        strategy.reset();
        let mut state = new_game();
        let summary = play_game(strategy, &mut state)?;
        log::info!(
            "[{}] game {} finished: score {} in {} moves",
            strategy.name(),
            game_index + 1,
            summary.score,
            summary.moves
        );
        stats.add_game(summary.score);
    }

    if let Some(mean) = stats.mean() {
        log::info!(
            "[{}] mean score over {} games: {:.2}",
            strategy.name(),
            stats.len(),
            mean
        );
    }
    Ok(stats)
}
