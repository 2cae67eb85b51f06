//! Board position coordinates.

use std::fmt::{self, Display};

/// A board coordinate, `x` column and `y` row, both zero-based.
///
/// Positions carry no geometry; bounds are validated by whichever board or
/// geometry they are used against.
///
/// # Examples
///
/// ```
/// use gridlace_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    // y first so the derived ordering matches row-major scans
    y: u8,
    x: u8,
}

impl Position {
    /// Creates a position from column and row coordinates.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { y, x }
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
