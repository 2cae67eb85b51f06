//! Working grid for deduction passes.

use gridlace_core::{Board, Cell, Geometry, Position, ValueSet};

/// Solver state: a private copy of the board under deduction.
///
/// `SolveGrid` is the only surface techniques read or mutate, so running
/// the solver never disturbs the board the player sees. Assignments made
/// here are plain values; the predefined/edited/correct cell flags play no
/// role during deduction.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Geometry, Position};
/// use gridlace_solver::SolveGrid;
///
/// let board = Board::new_empty(Geometry::SIZE_4);
/// let mut grid = SolveGrid::from_board(&board);
/// grid.assign(Position::new(0, 0), 3);
///
/// // The source board is untouched
/// assert_eq!(board.value(Position::new(0, 0)), 0);
/// assert_eq!(grid.value(Position::new(0, 0)), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SolveGrid {
    board: Board,
}

impl SolveGrid {
    /// Creates a working copy of `board`.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: board.clone(),
        }
    }

    /// Returns the grid geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.board.geometry()
    }

    /// Returns the value at `pos`, `0` for empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.board.value(pos)
    }

    /// Returns `true` if the cell at `pos` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.value(pos) == 0
    }

    /// Computes the candidate set for `pos`, excluding the cell itself.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> ValueSet {
        self.board.candidates(pos)
    }

    /// Assigns a deduced value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn assign(&mut self, pos: Position, value: u8) {
        self.board.set(pos, Cell::entered(value));
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        self.geometry().positions().filter(|&pos| self.is_empty(pos))
    }

    /// Returns `true` if every cell is filled and every candidate set
    /// reduces to the placed value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_valid_solution()
    }

    /// Returns the grid values in row-major order, `0` for empty.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.board.values()
    }
}
