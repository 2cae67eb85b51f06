//! The mutable cell grid and the immutable solved snapshot.

use std::fmt::{self, Display};

use crate::{Cell, Geometry, Position, ValueSet};

/// The puzzle board: a grid of [`Cell`]s with a fixed [`Geometry`].
///
/// Coordinates are caller-validated; accessors panic on out-of-range
/// positions rather than attempting recovery, since an invalid coordinate
/// is a programming error in the caller.
///
/// Candidate computation ([`Board::candidates`]) is a pure query over an
/// immutable board view: the cell's own value never excludes itself, and
/// the board is never touched, so the query is safe to run concurrently
/// with rendering or repeatedly from solver passes.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell, Geometry, Position};
///
/// let mut board = Board::new_empty(Geometry::SIZE_4);
/// board.set(Position::new(0, 0), Cell::predefined(1));
///
/// // 1 is no longer a candidate anywhere in row 0, column 0, or block 0
/// assert!(!board.candidates(Position::new(3, 0)).contains(1));
/// assert!(!board.candidates(Position::new(0, 3)).contains(1));
/// assert!(!board.candidates(Position::new(1, 1)).contains(1));
/// // Unrelated cells keep it
/// assert!(board.candidates(Position::new(2, 2)).contains(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of empty cells for the given geometry.
    #[must_use]
    pub fn new_empty(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Cell::EMPTY; geometry.cell_count()],
        }
    }

    /// Returns the board geometry.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.geometry.contains(pos),
            "position {pos} outside the board"
        );
        usize::from(pos.y()) * usize::from(self.geometry.width()) + usize::from(pos.x())
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Replaces the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    /// Returns the value at `pos`, `0` for empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.cell(pos).value
    }

    /// Computes the candidate set for `pos`.
    ///
    /// Starts from the full value set and removes every value held by
    /// another cell in the same row, column, or block. The cell at `pos`
    /// itself is skipped, so its current value does not exclude itself;
    /// for a filled cell the result answers "which values could this cell
    /// hold given the rest of the board".
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> ValueSet {
        let mut candidates = self.geometry.all_values();
        for unit in self.geometry.units_at(pos) {
            for peer in self.geometry.unit_positions(unit) {
                if peer == pos {
                    continue;
                }
                let value = self.value(peer);
                if value != 0 {
                    candidates.remove(value);
                }
            }
        }
        candidates
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if the board is completely and validly solved.
    ///
    /// Every cell must hold a value, and every cell's candidate set
    /// (computed with its own value excluded) must reduce to exactly that
    /// value. Scans row-major and exits on the first failing cell.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.geometry.positions().all(|pos| {
            let value = self.value(pos);
            value != 0 && self.candidates(pos).as_single() == Some(value)
        })
    }

    /// Returns the cell values in row-major order, `0` for empty.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.value).collect()
    }

    /// Captures the solved snapshot of a complete board.
    ///
    /// # Panics
    ///
    /// Panics if any cell is empty.
    #[must_use]
    pub fn to_solution(&self) -> Solution {
        assert!(
            self.is_complete(),
            "cannot snapshot an incomplete board as a solution"
        );
        Solution {
            width: self.geometry.width(),
            values: self.values(),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.geometry.height() {
            for x in 0..self.geometry.width() {
                let value = self.value(Position::new(x, y));
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
            if y + 1 < self.geometry.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The unique solution captured when a puzzle is generated.
///
/// A flat, row-major sequence of values, immutable for the lifetime of one
/// puzzle. Used for wrong-entry detection and hint verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    width: u8,
    values: Vec<u8>,
}

impl Solution {
    /// Returns the solved value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        let width = usize::from(self.width);
        let index = usize::from(pos.y()) * width + usize::from(pos.x());
        assert!(
            usize::from(pos.x()) < width && index < self.values.len(),
            "position {pos} outside the solution"
        );
        self.values[index]
    }

    /// Returns the solution values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.width);
        for (y, row) in self.values.chunks(width).enumerate() {
            for value in row {
                write!(f, "{value}")?;
            }
            if (y + 1) * width < self.values.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
