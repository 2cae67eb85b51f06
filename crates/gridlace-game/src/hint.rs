use derive_more::IsVariant;
use gridlace_core::Position;

/// A single recommended move.
///
/// Hints are tiered: a wrong entry is always reported before any
/// placement, and placements come from the cheapest deduction technique
/// that applies anywhere on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Hint {
    /// The entry at `pos` contradicts the solution and should be cleared
    /// before anything else.
    ClearWrongEntry {
        /// The offending cell.
        pos: Position,
    },
    /// Place `value` at `pos`.
    Place {
        /// The cell to fill.
        pos: Position,
        /// The value that must go there.
        value: u8,
        /// Name of the deduction technique that found the move.
        technique: &'static str,
    },
}

impl Hint {
    /// Returns the cell the hint is about.
    #[must_use]
    pub const fn pos(&self) -> Position {
        match self {
            Self::ClearWrongEntry { pos } | Self::Place { pos, .. } => *pos,
        }
    }
}
