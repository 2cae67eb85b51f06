//! Difficulty configuration: level and level-points.

use derive_more::{Display, Error};

use crate::Geometry;

/// Lowest supported difficulty level.
pub const MIN_LEVEL: u8 = 1;
/// Highest supported difficulty level.
pub const MAX_LEVEL: u8 = 5;
/// Lowest supported level-points value.
pub const MIN_LEVEL_POINTS: u8 = 5;
/// Highest supported level-points value.
pub const MAX_LEVEL_POINTS: u8 = 16;

/// Error returned for difficulty parameters outside the supported ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DifficultyError {
    /// Level outside `MIN_LEVEL..=MAX_LEVEL`.
    #[display("level must be between {MIN_LEVEL} and {MAX_LEVEL}, got {level}")]
    LevelOutOfRange {
        /// The rejected level.
        level: u8,
    },
    /// Level-points outside `MIN_LEVEL_POINTS..=MAX_LEVEL_POINTS`.
    #[display(
        "level points must be between {MIN_LEVEL_POINTS} and {MAX_LEVEL_POINTS}, got {points}"
    )]
    PointsOutOfRange {
        /// The rejected level-points value.
        points: u8,
    },
}

/// Difficulty configuration controlling how many cells the carver clears.
///
/// The cleared-cell count for a board of `W x H` cells is
/// `floor(W * H * level * level_points / 100)`. The configured ranges keep
/// the ratio below 100%, so no clamping is needed.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Difficulty, Geometry};
///
/// let difficulty = Difficulty::new(4, 16)?;
/// assert_eq!(difficulty.cells_to_clear(Geometry::SIZE_4), 10);
/// # Ok::<(), gridlace_core::DifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Difficulty {
    level: u8,
    level_points: u8,
}

impl Difficulty {
    /// Creates a difficulty from a level (1-5) and level-points (5-16).
    ///
    /// # Errors
    ///
    /// Returns [`DifficultyError`] if either parameter is out of range.
    pub fn new(level: u8, level_points: u8) -> Result<Self, DifficultyError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(DifficultyError::LevelOutOfRange { level });
        }
        if !(MIN_LEVEL_POINTS..=MAX_LEVEL_POINTS).contains(&level_points) {
            return Err(DifficultyError::PointsOutOfRange {
                points: level_points,
            });
        }
        Ok(Self {
            level,
            level_points,
        })
    }

    /// Returns the difficulty level (1-5).
    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Returns the level-points value (5-16).
    #[must_use]
    pub const fn level_points(self) -> u8 {
        self.level_points
    }

    /// Returns how many cells the carver clears for the given geometry.
    #[must_use]
    pub fn cells_to_clear(self, geometry: Geometry) -> usize {
        geometry.cell_count() * usize::from(self.level) * usize::from(self.level_points) / 100
    }

    /// Returns the same difficulty one level lower, or `None` at the
    /// minimum level.
    ///
    /// Used by the generator to degrade difficulty when the propagation
    /// solver keeps rejecting carved puzzles.
    #[must_use]
    pub const fn lowered(self) -> Option<Self> {
        if self.level > MIN_LEVEL {
            Some(Self {
                level: self.level - 1,
                level_points: self.level_points,
            })
        } else {
            None
        }
    }
}

impl Default for Difficulty {
    /// A mid-range difficulty: level 3, 10 level-points.
    fn default() -> Self {
        Self {
            level: 3,
            level_points: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(Difficulty::new(1, 5).is_ok());
        assert!(Difficulty::new(5, 16).is_ok());
        assert_eq!(
            Difficulty::new(0, 5),
            Err(DifficultyError::LevelOutOfRange { level: 0 })
        );
        assert_eq!(
            Difficulty::new(6, 5),
            Err(DifficultyError::LevelOutOfRange { level: 6 })
        );
        assert_eq!(
            Difficulty::new(3, 4),
            Err(DifficultyError::PointsOutOfRange { points: 4 })
        );
        assert_eq!(
            Difficulty::new(3, 17),
            Err(DifficultyError::PointsOutOfRange { points: 17 })
        );
    }

    #[test]
    fn test_cells_to_clear_floors() {
        // 16 * 1 * 5 / 100 = 0.8 -> 0
        let low = Difficulty::new(1, 5).unwrap();
        assert_eq!(low.cells_to_clear(Geometry::SIZE_4), 0);

        // 16 * 4 * 16 / 100 = 10.24 -> 10
        let mid = Difficulty::new(4, 16).unwrap();
        assert_eq!(mid.cells_to_clear(Geometry::SIZE_4), 10);

        // 81 * 5 * 16 / 100 = 64.8 -> 64, still under the cell count
        let high = Difficulty::new(5, 16).unwrap();
        assert_eq!(high.cells_to_clear(Geometry::SIZE_9), 64);
    }

    #[test]
    fn test_lowered_stops_at_minimum() {
        let difficulty = Difficulty::new(2, 10).unwrap();
        let lowered = difficulty.lowered().unwrap();
        assert_eq!(lowered.level(), 1);
        assert_eq!(lowered.level_points(), 10);
        assert_eq!(lowered.lowered(), None);
    }
}
