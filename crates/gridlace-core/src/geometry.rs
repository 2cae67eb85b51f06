//! Board geometry: block shape and tiling.
//!
//! A board is a rectangle of cells tiled by equal rectangular blocks. The
//! block may itself be non-square (a 6×6 board uses 3×2 blocks tiled 2×3),
//! so the two axes are described independently.
//!
//! A well-formed sudoku constraint additionally requires the board to be
//! square with side length equal to the block size (the number of distinct
//! values); [`Geometry::new`] enforces this, so malformed shapes are
//! rejected at construction rather than surfacing as runtime corruption.

use derive_more::{Display, Error};

use crate::{Position, ValueSet};

/// Error returned when a block shape does not tile into a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GeometryError {
    /// A block or tiling dimension was zero.
    #[display("geometry dimensions must be non-zero")]
    ZeroDimension,
    /// The tiled board is not square.
    #[display("board must be square, got {width}x{height}")]
    NotSquare {
        /// Board width in cells.
        width: u16,
        /// Board height in cells.
        height: u16,
    },
    /// The block holds a different number of cells than a row.
    #[display("block holds {block_size} values but rows hold {width}")]
    BlockSizeMismatch {
        /// Number of cells per block.
        block_size: u16,
        /// Board width in cells.
        width: u16,
    },
    /// More than nine distinct values would be required.
    #[display("block size {block_size} exceeds the supported maximum of 9")]
    TooManyValues {
        /// Number of cells per block.
        block_size: u16,
    },
}

/// A row, column, or block of the board.
///
/// Every unit must contain each value `1..=N` exactly once, where `N` is
/// the block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its y coordinate.
    Row {
        /// Row index.
        y: u8,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index.
        x: u8,
    },
    /// A block identified by its index (left to right, top to bottom).
    Block {
        /// Block index.
        index: u8,
    },
}

/// Validated board geometry.
///
/// Describes the block shape (`elements_in_block_x/y`) and how many blocks
/// tile each axis (`blocks_in_game_x/y`). The board dimensions and the
/// value count are derived from these.
///
/// # Examples
///
/// ```
/// use gridlace_core::Geometry;
///
/// // 6x6 board: 3x2 blocks tiled 2 across, 3 down
/// let geometry = Geometry::new(3, 2, 2, 3)?;
/// assert_eq!(geometry.width(), 6);
/// assert_eq!(geometry.height(), 6);
/// assert_eq!(geometry.block_size(), 6);
/// # Ok::<(), gridlace_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    elements_in_block_x: u8,
    elements_in_block_y: u8,
    blocks_in_game_x: u8,
    blocks_in_game_y: u8,
}

impl Geometry {
    /// 4×4 board: 2×2 blocks tiled 2×2, values 1-4.
    pub const SIZE_4: Self = Self {
        elements_in_block_x: 2,
        elements_in_block_y: 2,
        blocks_in_game_x: 2,
        blocks_in_game_y: 2,
    };

    /// 6×6 board: 3×2 blocks tiled 2 across and 3 down, values 1-6.
    pub const SIZE_6: Self = Self {
        elements_in_block_x: 3,
        elements_in_block_y: 2,
        blocks_in_game_x: 2,
        blocks_in_game_y: 3,
    };

    /// 9×9 board: 3×3 blocks tiled 3×3, values 1-9.
    pub const SIZE_9: Self = Self {
        elements_in_block_x: 3,
        elements_in_block_y: 3,
        blocks_in_game_x: 3,
        blocks_in_game_y: 3,
    };

    /// Creates a validated geometry from a block shape and tiling counts.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is zero, the tiled
    /// board is not square, the block size differs from the board side
    /// length, or more than nine values would be needed.
    pub fn new(
        elements_in_block_x: u8,
        elements_in_block_y: u8,
        blocks_in_game_x: u8,
        blocks_in_game_y: u8,
    ) -> Result<Self, GeometryError> {
        if elements_in_block_x == 0
            || elements_in_block_y == 0
            || blocks_in_game_x == 0
            || blocks_in_game_y == 0
        {
            return Err(GeometryError::ZeroDimension);
        }
        // Widened so oversized inputs are rejected instead of wrapping
        let block_size = u16::from(elements_in_block_x) * u16::from(elements_in_block_y);
        if block_size > 9 {
            return Err(GeometryError::TooManyValues { block_size });
        }
        let width = u16::from(elements_in_block_x) * u16::from(blocks_in_game_x);
        let height = u16::from(elements_in_block_y) * u16::from(blocks_in_game_y);
        if width != height {
            return Err(GeometryError::NotSquare { width, height });
        }
        if block_size != width {
            return Err(GeometryError::BlockSizeMismatch { block_size, width });
        }
        Ok(Self {
            elements_in_block_x,
            elements_in_block_y,
            blocks_in_game_x,
            blocks_in_game_y,
        })
    }

    /// Returns the block width in cells.
    #[must_use]
    pub const fn elements_in_block_x(self) -> u8 {
        self.elements_in_block_x
    }

    /// Returns the block height in cells.
    #[must_use]
    pub const fn elements_in_block_y(self) -> u8 {
        self.elements_in_block_y
    }

    /// Returns how many blocks tile the board horizontally.
    #[must_use]
    pub const fn blocks_in_game_x(self) -> u8 {
        self.blocks_in_game_x
    }

    /// Returns how many blocks tile the board vertically.
    #[must_use]
    pub const fn blocks_in_game_y(self) -> u8 {
        self.blocks_in_game_y
    }

    /// Returns the board width in cells.
    #[must_use]
    pub const fn width(self) -> u8 {
        self.elements_in_block_x * self.blocks_in_game_x
    }

    /// Returns the board height in cells.
    #[must_use]
    pub const fn height(self) -> u8 {
        self.elements_in_block_y * self.blocks_in_game_y
    }

    /// Returns the number of distinct values, equal to the cells per block.
    #[must_use]
    pub const fn block_size(self) -> u8 {
        self.elements_in_block_x * self.elements_in_block_y
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Returns the full candidate set for this geometry, values `1..=N`.
    #[must_use]
    pub fn all_values(self) -> ValueSet {
        ValueSet::full(self.block_size())
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() < self.width() && pos.y() < self.height()
    }

    /// Returns the index of the block containing `pos`.
    ///
    /// Blocks are numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn block_index(self, pos: Position) -> u8 {
        assert!(self.contains(pos), "position {pos} outside the board");
        (pos.y() / self.elements_in_block_y) * self.blocks_in_game_x
            + pos.x() / self.elements_in_block_x
    }

    /// Iterates over all board positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| Position::new(x, y)))
    }

    /// Iterates over the positions of a unit.
    ///
    /// Rows and blocks are scanned left to right (blocks row by row),
    /// columns top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if the unit index is out of range for this geometry.
    pub fn unit_positions(self, unit: Unit) -> impl Iterator<Item = Position> {
        let cells: Vec<Position> = match unit {
            Unit::Row { y } => {
                assert!(y < self.height(), "row {y} outside the board");
                (0..self.width()).map(|x| Position::new(x, y)).collect()
            }
            Unit::Column { x } => {
                assert!(x < self.width(), "column {x} outside the board");
                (0..self.height()).map(|y| Position::new(x, y)).collect()
            }
            Unit::Block { index } => {
                let block_count = self.blocks_in_game_x * self.blocks_in_game_y;
                assert!(index < block_count, "block {index} outside the board");
                let x0 = (index % self.blocks_in_game_x) * self.elements_in_block_x;
                let y0 = (index / self.blocks_in_game_x) * self.elements_in_block_y;
                (y0..y0 + self.elements_in_block_y)
                    .flat_map(|y| {
                        (x0..x0 + self.elements_in_block_x).map(move |x| Position::new(x, y))
                    })
                    .collect()
            }
        };
        cells.into_iter()
    }

    /// Returns the three units containing `pos`: its row, column, and block.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn units_at(self, pos: Position) -> [Unit; 3] {
        [
            Unit::Row { y: pos.y() },
            Unit::Column { x: pos.x() },
            Unit::Block {
                index: self.block_index(pos),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in [Geometry::SIZE_4, Geometry::SIZE_6, Geometry::SIZE_9] {
            let rebuilt = Geometry::new(
                preset.elements_in_block_x(),
                preset.elements_in_block_y(),
                preset.blocks_in_game_x(),
                preset.blocks_in_game_y(),
            );
            assert_eq!(rebuilt, Ok(preset));
            assert_eq!(preset.width(), preset.block_size());
        }
    }

    #[test]
    fn test_rejects_malformed_shapes() {
        assert_eq!(Geometry::new(0, 2, 2, 2), Err(GeometryError::ZeroDimension));
        // 3x2 blocks tiled 3x2 (the transposed tiling) gives a 9x4 board
        assert_eq!(
            Geometry::new(3, 2, 3, 2),
            Err(GeometryError::NotSquare {
                width: 9,
                height: 4
            })
        );
        assert_eq!(
            Geometry::new(4, 3, 3, 4),
            Err(GeometryError::TooManyValues { block_size: 12 })
        );
        // Square board whose side differs from the block size
        assert_eq!(
            Geometry::new(2, 2, 3, 3),
            Err(GeometryError::BlockSizeMismatch {
                block_size: 4,
                width: 6
            })
        );
    }

    #[test]
    fn test_block_index_6x6() {
        let geometry = Geometry::SIZE_6;
        assert_eq!(geometry.block_index(Position::new(0, 0)), 0);
        assert_eq!(geometry.block_index(Position::new(3, 0)), 1);
        assert_eq!(geometry.block_index(Position::new(2, 2)), 2);
        assert_eq!(geometry.block_index(Position::new(5, 5)), 5);
    }

    #[test]
    fn test_unit_positions_cover_each_cell_once() {
        for geometry in [Geometry::SIZE_4, Geometry::SIZE_6, Geometry::SIZE_9] {
            let block_count = geometry.blocks_in_game_x() * geometry.blocks_in_game_y();
            let mut seen = vec![0_u32; geometry.cell_count()];
            for index in 0..block_count {
                for pos in geometry.unit_positions(Unit::Block { index }) {
                    seen[usize::from(pos.y()) * usize::from(geometry.width())
                        + usize::from(pos.x())] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1));
        }
    }

    #[test]
    fn test_positions_row_major() {
        let positions: Vec<_> = Geometry::SIZE_4.positions().collect();
        assert_eq!(positions.len(), 16);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(1, 0));
        assert_eq!(positions[4], Position::new(0, 1));
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_block_index_out_of_bounds_panics() {
        let _ = Geometry::SIZE_4.block_index(Position::new(4, 0));
    }

    proptest! {
        #[test]
        fn prop_units_at_contain_position(x in 0u8..9, y in 0u8..9) {
            let geometry = Geometry::SIZE_9;
            let pos = Position::new(x, y);
            for unit in geometry.units_at(pos) {
                prop_assert!(geometry.unit_positions(unit).any(|p| p == pos));
            }
        }
    }
}
