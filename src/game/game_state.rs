//! Contract of the board simulation the search runs against.
//!
//! The engine owning the board (piece geometry, collision detection, line clears,
//! random piece generation) lives outside this crate. The search only needs to
//! enumerate placements, drop pieces, undo trial drops, force the identity of the
//! next piece and read the score.

use crate::game::action::Action;

/// How a drop is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Final move. The next piece is drawn at random.
    Commit,
    /// Exploratory move that [`GameState::cancel_last_move`] can undo exactly.
    Trial,
}

/// Mutable game state handle: board contents, active piece, score and game-over flag.
///
/// Pieces are identified by an index into a finite alphabet of
/// [`outcome_count`](GameState::outcome_count) pieces. The search enumerates that
/// alphabet exhaustively when it aggregates statistics, so it must not depend on the
/// board.
pub trait GameState: Clone {
    /// Structurally legal placements of the active piece, including losing ones.
    fn legal_actions(&self) -> Vec<Action>;

    /// Drops the active piece and returns the immediate reward.
    ///
    /// Updates score, board and game-over flag.
    fn apply(&mut self, action: &Action, mode: ApplyMode) -> f64;

    /// Undoes the most recent [`ApplyMode::Trial`] drop, restoring board, score,
    /// game-over flag and active piece exactly.
    fn cancel_last_move(&mut self);

    /// Size of the piece alphabet.
    fn outcome_count(&self) -> usize;

    /// Index of the active piece, in `0..outcome_count()`.
    fn current_piece(&self) -> usize;

    /// Forces the identity of the active piece.
    fn set_current_piece(&mut self, piece: usize);

    fn score(&self) -> f64;

    fn is_game_over(&self) -> bool;

    /// Appends a fixed-length encoding of the board contents.
    ///
    /// Equal boards must write equal bytes and different boards different bytes.
    fn write_board(&self, out: &mut Vec<u8>);
}
