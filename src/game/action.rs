use serde::{Deserialize, Serialize};

/// A candidate placement of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub orientation: usize,
    pub column: usize,
}

impl Action {
    /// Returned when no legal action exists. Dropping it ends the game.
    pub const PLACEHOLDER: Action = Action {
        orientation: 0,
        column: 1,
    };

    pub fn new(orientation: usize, column: usize) -> Self {
        Self {
            orientation,
            column,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(orientation={}, column={})", self.orientation, self.column)
    }
}
