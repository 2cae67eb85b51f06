use derive_more::{Display, Error};
use gridlace_core::{Board, Difficulty, Geometry, Position, Solution};
use gridlace_generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use gridlace_solver::{SolveGrid, technique};

use crate::Hint;

/// Errors from player input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The cell is fixed by the puzzle and cannot be changed.
    #[display("cell at {pos} is predefined")]
    PredefinedCell {
        /// The rejected cell.
        pos: Position,
    },
    /// The value does not fit the board's value range.
    #[display("value {value} outside 0..={max}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// Largest value the board accepts.
        max: u8,
    },
}

/// A puzzle session: the live board, its solution, and player input.
///
/// The board is only mutated through [`Game::set_cell`] and
/// [`Game::analyze_entries`]; everything else is a query. Predefined
/// cells are immutable for the lifetime of the session.
///
/// # Example
///
/// ```
/// use gridlace_core::{Difficulty, Geometry};
/// use gridlace_game::Game;
/// use gridlace_generator::PuzzleGenerator;
/// use gridlace_solver::PropagationSolver;
///
/// let solver = PropagationSolver::with_fundamental_techniques();
/// let generator = PuzzleGenerator::new(&solver);
/// let game = Game::generate(&generator, Geometry::SIZE_4, Difficulty::default()).unwrap();
///
/// assert!(!game.is_solved_by_user());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    solution: Solution,
    difficulty: Difficulty,
    seed: PuzzleSeed,
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// Kept cells of the problem arrive predefined; carved cells start
    /// empty and editable.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        } = puzzle;
        Self {
            board: problem,
            solution,
            difficulty,
            seed,
        }
    }

    /// Starts a fresh session from a newly generated puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when generation exhausts its retry
    /// bounds.
    pub fn generate(
        generator: &PuzzleGenerator<'_>,
        geometry: Geometry,
        difficulty: Difficulty,
    ) -> Result<Self, GenerateError> {
        Ok(Self::new(generator.generate(geometry, difficulty)?))
    }

    /// Returns a read-only view of the live board.
    ///
    /// Per cell this exposes `(value, predefined, edited, correct)` for
    /// rendering; all mutation goes through [`Game::set_cell`].
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the solved snapshot of this puzzle.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the difficulty the puzzle was carved at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the seed that reproduces this puzzle.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Enters `value` at `pos`, or clears the cell when `value` is `0`.
    ///
    /// The cell's `correct` flag is carried over unchanged; it only moves
    /// on the next [`Game::analyze_entries`] pass.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PredefinedCell`] for cells fixed by the
    /// puzzle and [`GameError::ValueOutOfRange`] for values above the
    /// board's range; the board is untouched in both cases.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn set_cell(&mut self, pos: Position, value: u8) -> Result<(), GameError> {
        let max = self.board.geometry().block_size();
        if value > max {
            return Err(GameError::ValueOutOfRange { value, max });
        }
        if self.board.cell(pos).predefined {
            return Err(GameError::PredefinedCell { pos });
        }
        let mut cell = self.board.cell(pos);
        cell.value = value;
        cell.edited = value != 0;
        self.board.set(pos, cell);
        Ok(())
    }

    /// Recomputes the `correct` flag of every player-editable cell.
    ///
    /// A non-empty entry is flagged correct when it is a member of its
    /// own candidate set, computed with the entry itself excluded. This
    /// is a local consistency check, not a comparison against the
    /// solution: an entry can be locally consistent yet globally wrong
    /// until more of the board is filled in. Empty cells are flagged
    /// incorrect; predefined cells are left alone.
    pub fn analyze_entries(&mut self) {
        for pos in self.board.geometry().positions() {
            let mut cell = self.board.cell(pos);
            if cell.predefined {
                continue;
            }
            cell.correct = !cell.is_empty() && self.board.candidates(pos).contains(cell.value);
            self.board.set(pos, cell);
        }
    }

    /// Returns `true` if the player has completely and validly solved
    /// the puzzle.
    #[must_use]
    pub fn is_solved_by_user(&self) -> bool {
        self.board.is_valid_solution()
    }

    /// Computes the next recommended move, if any.
    ///
    /// Tiers, first match wins, each scanning cells in row-major order:
    ///
    /// 1. Any player entry that differs from the solution yields
    ///    [`Hint::ClearWrongEntry`].
    /// 2. Otherwise the deduction techniques are tried one at a time
    ///    across the whole board, cheapest first, and the first forced
    ///    move yields [`Hint::Place`].
    ///
    /// Returns `None` when the board is fully and correctly solved.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        for pos in self.board.geometry().positions() {
            let cell = self.board.cell(pos);
            if !cell.predefined && !cell.is_empty() && cell.value != self.solution.value(pos) {
                return Some(Hint::ClearWrongEntry { pos });
            }
        }

        let grid = SolveGrid::from_board(&self.board);
        for technique in technique::fundamental_techniques() {
            for pos in grid.empty_positions() {
                if let Some(value) = technique.find_value(&grid, pos) {
                    return Some(Hint::Place {
                        pos,
                        value,
                        technique: technique.name(),
                    });
                }
            }
        }
        None
    }
}
