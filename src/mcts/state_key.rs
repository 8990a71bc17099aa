//! Canonical keys for the transposition table.
//!
//! A key is the board encoding followed by the active piece index as a
//! little-endian `usize`. Two states share a key exactly when they share board contents
//! and active piece, whatever moves led to them.

use crate::game::game_state::GameState;
use std::borrow::Borrow;

/// Owned key of one (board, active piece) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    /// Encodes `state` into a fresh key.
    pub fn encode<S: GameState>(state: &S) -> Self {
        let mut bytes = Vec::new();
        write_key(state, &mut bytes);
        StateKey(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for StateKey {
    fn from(bytes: &[u8]) -> Self {
        StateKey(bytes.into())
    }
}

impl Borrow<[u8]> for StateKey {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

/// Key encoder reusing one buffer, for lookups that do not need an owned key.
#[derive(Debug, Default)]
pub struct StateKeyEncoder {
    buffer: Vec<u8>,
}

impl StateKeyEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `state`. The bytes stay valid until the next call.
    pub fn encode<S: GameState>(&mut self, state: &S) -> &[u8] {
        self.buffer.clear();
        write_key(state, &mut self.buffer);
        &self.buffer
    }
}

fn write_key<S: GameState>(state: &S, out: &mut Vec<u8>) {
    state.write_board(out);
    out.extend_from_slice(&state.current_piece().to_le_bytes());
}
