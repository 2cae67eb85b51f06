//! The propagation solver and its statistics.

use derive_more::{Display, IsVariant};

use crate::{
    SolveGrid,
    technique::{self, BoxedTechnique},
};

/// Result of running the propagation solver to its fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SolveOutcome {
    /// Every cell is filled and every candidate set reduces to its value.
    #[display("solved")]
    Solved,
    /// A pass made no progress before the grid was complete.
    #[display("stuck")]
    Stuck,
}

/// Statistics collected during a solve.
///
/// Tracks how many cells each technique filled, in the solver's technique
/// order, plus the total number of placements.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Geometry};
/// use gridlace_solver::{PropagationSolver, SolveGrid};
///
/// let solver = PropagationSolver::with_fundamental_techniques();
/// let mut grid = SolveGrid::from_board(&Board::new_empty(Geometry::SIZE_4));
/// let (_outcome, stats) = solver.solve(&mut grid);
///
/// for (i, count) in stats.applications().iter().enumerate() {
///     println!("{}: {count} cells", solver.techniques()[i].name());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl SolverStats {
    /// Returns per-technique placement counts in solver order.
    ///
    /// Techniques that never fired have a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of placements made.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }
}

/// A solver that fills cells by pure logical deduction, without guessing.
///
/// Each pass scans the empty cells in row-major order. For every cell the
/// configured techniques are tried in order, and the first one that forces
/// a value fills the cell; at most one rule fires per cell per pass.
/// Passes repeat until one makes no change.
///
/// Because deduction never guesses, the solver is strictly weaker than a
/// backtracking search: some puzzles with a unique solution are still
/// reported [`SolveOutcome::Stuck`]. Callers using the solver as an
/// acceptance gate regenerate such puzzles instead of special-casing them.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Cell, Geometry, Position};
/// use gridlace_solver::{PropagationSolver, SolveGrid};
///
/// let mut board = Board::new_empty(Geometry::SIZE_4);
/// for (i, value) in [1, 2, 3].into_iter().enumerate() {
///     board.set(Position::new(i as u8, 0), Cell::predefined(value));
/// }
///
/// let solver = PropagationSolver::with_fundamental_techniques();
/// let mut grid = SolveGrid::from_board(&board);
/// solver.solve(&mut grid);
/// assert_eq!(grid.value(Position::new(3, 0)), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PropagationSolver {
    techniques: Vec<BoxedTechnique>,
}

impl PropagationSolver {
    /// Creates a solver with the specified techniques.
    ///
    /// Within a pass, each cell is checked against the techniques in the
    /// order given here; the first applicable technique wins.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the fundamental techniques: naked single,
    /// then hidden single by row, column, and block.
    #[must_use]
    pub fn with_fundamental_techniques() -> Self {
        Self::new(technique::fundamental_techniques())
    }

    /// Returns the configured techniques in application order.
    ///
    /// The slice defines the index mapping used by
    /// [`SolverStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs one pass over the empty cells.
    ///
    /// Returns `true` if any cell was filled.
    pub fn pass(&self, grid: &mut SolveGrid, stats: &mut SolverStats) -> bool {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        let mut changed = false;
        let empties: Vec<_> = grid.empty_positions().collect();
        for pos in empties {
            for (i, technique) in self.techniques.iter().enumerate() {
                if let Some(value) = technique.find_value(grid, pos) {
                    grid.assign(pos, value);
                    stats.applications[i] += 1;
                    stats.total_steps += 1;
                    changed = true;
                    break;
                }
            }
        }
        changed
    }

    /// Runs passes until none makes progress, then reports the outcome.
    pub fn solve(&self, grid: &mut SolveGrid) -> (SolveOutcome, SolverStats) {
        let mut stats = SolverStats {
            applications: vec![0; self.techniques.len()],
            total_steps: 0,
        };
        while self.pass(grid, &mut stats) {}
        let outcome = if grid.is_solved() {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Stuck
        };
        (outcome, stats)
    }

    /// Returns `true` if `board` can be completed by deduction alone.
    ///
    /// Runs the solver on a private copy; `board` is never modified.
    #[must_use]
    pub fn is_solvable(&self, board: &gridlace_core::Board) -> bool {
        let mut grid = SolveGrid::from_board(board);
        let (outcome, _stats) = self.solve(&mut grid);
        outcome.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use gridlace_core::{Board, Cell, Geometry, Position};

    use super::*;

    fn board_from_rows(geometry: Geometry, rows: &[&[u8]]) -> Board {
        let mut board = Board::new_empty(geometry);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    #[expect(clippy::cast_possible_truncation)]
                    board.set(Position::new(x as u8, y as u8), Cell::predefined(value));
                }
            }
        }
        board
    }

    #[test]
    fn test_solves_lightly_carved_4x4() {
        let board = board_from_rows(
            Geometry::SIZE_4,
            &[&[0, 2, 3, 4], &[3, 0, 1, 2], &[2, 1, 0, 3], &[4, 3, 2, 0]],
        );
        let solver = PropagationSolver::with_fundamental_techniques();
        let mut grid = SolveGrid::from_board(&board);
        let (outcome, stats) = solver.solve(&mut grid);

        assert!(outcome.is_solved());
        assert_eq!(stats.total_steps(), 4);
        assert_eq!(
            grid.values(),
            vec![1, 2, 3, 4, 3, 4, 1, 2, 2, 1, 4, 3, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_rejects_underdetermined_board() {
        let board = Board::new_empty(Geometry::SIZE_4);
        let solver = PropagationSolver::with_fundamental_techniques();
        let mut grid = SolveGrid::from_board(&board);
        let (outcome, stats) = solver.solve(&mut grid);

        assert!(outcome.is_stuck());
        assert_eq!(stats.total_steps(), 0);
    }

    #[test]
    fn test_solvability_check_leaves_board_untouched() {
        let board = board_from_rows(
            Geometry::SIZE_4,
            &[&[0, 2, 3, 4], &[3, 0, 1, 2], &[2, 1, 0, 3], &[4, 3, 2, 0]],
        );
        let solver = PropagationSolver::with_fundamental_techniques();
        assert!(solver.is_solvable(&board));
        // The visible board still has its carved holes
        assert_eq!(board.value(Position::new(0, 0)), 0);
        assert_eq!(board.value(Position::new(3, 3)), 0);
    }

    #[test]
    fn test_hidden_single_beyond_naked() {
        // (1, 0) has candidates {1, 4, 5, 6}, so no naked single; but
        // every other empty cell of row 0 sees a 1 in its column, leaving
        // (1, 0) as the only home for 1 in that row.
        let board = board_from_rows(
            Geometry::SIZE_6,
            &[
                &[0, 0, 0, 2, 0, 0],
                &[0, 3, 0, 0, 1, 0],
                &[1, 0, 0, 0, 0, 0],
                &[0, 0, 1, 0, 0, 0],
                &[0, 0, 0, 1, 0, 0],
                &[0, 0, 0, 0, 0, 1],
            ],
        );
        let grid = SolveGrid::from_board(&board);
        let solver = PropagationSolver::with_fundamental_techniques();
        let mut stats = SolverStats {
            applications: vec![0; solver.techniques().len()],
            total_steps: 0,
        };
        let mut grid = grid;
        assert!(solver.pass(&mut grid, &mut stats));
        assert_eq!(grid.value(Position::new(1, 0)), 1);
    }
}
