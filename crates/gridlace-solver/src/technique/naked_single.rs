use gridlace_core::Position;

use super::{BoxedTechnique, Technique};
use crate::SolveGrid;

const NAME: &str = "naked single";

/// Finds cells whose candidate set has exactly one member.
///
/// When every value but one is excluded from a cell by its row, column,
/// and block, that value must go there. This is the simplest deduction and
/// is always tried first.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell, Geometry, Position};
/// use gridlace_solver::{SolveGrid, technique::{NakedSingle, Technique}};
///
/// let mut board = Board::new_empty(Geometry::SIZE_4);
/// board.set(Position::new(1, 0), Cell::predefined(2));
/// board.set(Position::new(2, 0), Cell::predefined(3));
/// board.set(Position::new(3, 0), Cell::predefined(4));
///
/// let grid = SolveGrid::from_board(&board);
/// let technique = NakedSingle::new();
/// assert_eq!(technique.find_value(&grid, Position::new(0, 0)), Some(1));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_value(&self, grid: &SolveGrid, pos: Position) -> Option<u8> {
        grid.candidates(pos).as_single()
    }
}
