//! Per-cell board state.

/// State of a single board cell.
///
/// `value == 0` means the cell is empty. `predefined` cells are fixed by
/// the puzzle and never editable by the player. `edited` marks a non-zero
/// player entry. `correct` is a derived display flag that is only
/// meaningful after an analysis pass has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Cell value, `0` for empty, otherwise `1..=N`.
    pub value: u8,
    /// Fixed by the puzzle; not editable by the player.
    pub predefined: bool,
    /// The player entered this (non-zero) value.
    pub edited: bool,
    /// Display flag set by the last analysis pass.
    pub correct: bool,
}

impl Cell {
    /// An empty, editable cell.
    pub const EMPTY: Self = Self {
        value: 0,
        predefined: false,
        edited: false,
        correct: false,
    };

    /// Creates a predefined cell holding `value`.
    #[must_use]
    pub const fn predefined(value: u8) -> Self {
        Self {
            value,
            predefined: true,
            edited: false,
            correct: false,
        }
    }

    /// Creates a player-entered cell holding `value`.
    #[must_use]
    pub const fn entered(value: u8) -> Self {
        Self {
            value,
            predefined: false,
            edited: value != 0,
            correct: false,
        }
    }

    /// Returns `true` if the cell holds no value.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }
}
