use gridlace_core::{Position, Unit};

use super::{BoxedTechnique, Technique};
use crate::SolveGrid;

/// Which unit a [`HiddenSingle`] instance inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// The row containing the cell.
    Row,
    /// The column containing the cell.
    Column,
    /// The block containing the cell.
    Block,
}

/// Finds values that fit only one cell within a unit.
///
/// A "hidden single" is a candidate of this cell that appears in no other
/// empty cell's candidate set within the same row, column, or block: even
/// though the cell has several candidates, the unit leaves the value
/// nowhere else to go.
///
/// Each instance checks one unit kind; deduction order across kinds (row,
/// then column, then block) comes from the order in
/// [`fundamental_techniques`](super::fundamental_techniques).
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell, Geometry, Position};
/// use gridlace_solver::{SolveGrid, technique::{HiddenSingle, Technique}};
///
/// let mut board = Board::new_empty(Geometry::SIZE_4);
/// // 1 is excluded from every row-0 cell except (0, 0)
/// board.set(Position::new(1, 2), Cell::predefined(1));
/// board.set(Position::new(2, 1), Cell::predefined(1));
/// board.set(Position::new(3, 3), Cell::predefined(1));
///
/// let grid = SolveGrid::from_board(&board);
/// let technique = HiddenSingle::in_row();
/// assert_eq!(technique.find_value(&grid, Position::new(0, 0)), Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HiddenSingle {
    kind: UnitKind,
}

impl HiddenSingle {
    /// Creates a hidden-single technique over rows.
    #[must_use]
    pub const fn in_row() -> Self {
        Self {
            kind: UnitKind::Row,
        }
    }

    /// Creates a hidden-single technique over columns.
    #[must_use]
    pub const fn in_column() -> Self {
        Self {
            kind: UnitKind::Column,
        }
    }

    /// Creates a hidden-single technique over blocks.
    #[must_use]
    pub const fn in_block() -> Self {
        Self {
            kind: UnitKind::Block,
        }
    }

    /// Returns the unit kind this instance inspects.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        self.kind
    }

    fn unit_at(self, grid: &SolveGrid, pos: Position) -> Unit {
        match self.kind {
            UnitKind::Row => Unit::Row { y: pos.y() },
            UnitKind::Column => Unit::Column { x: pos.x() },
            UnitKind::Block => Unit::Block {
                index: grid.geometry().block_index(pos),
            },
        }
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        match self.kind {
            UnitKind::Row => "hidden single (row)",
            UnitKind::Column => "hidden single (column)",
            UnitKind::Block => "hidden single (block)",
        }
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_value(&self, grid: &SolveGrid, pos: Position) -> Option<u8> {
        let unit = self.unit_at(grid, pos);
        let candidates = grid.candidates(pos);
        let mut elsewhere = gridlace_core::ValueSet::EMPTY;
        for peer in grid.geometry().unit_positions(unit) {
            if peer != pos && grid.is_empty(peer) {
                elsewhere |= grid.candidates(peer);
            }
        }
        candidates.difference(elsewhere).iter().next()
    }
}
