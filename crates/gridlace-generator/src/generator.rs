//! Randomized puzzle generation with a deduction acceptance gate.

use derive_more::{Display, Error};
use gridlace_core::{Board, Cell, Difficulty, Geometry, Position, Solution};
use gridlace_solver::PropagationSolver;
use log::{debug, warn};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// Attempts to complete one random fill before a grid attempt fails.
pub const FILL_TRIES: usize = 40;

/// Grid attempts (completed fill plus validity check) before giving up.
pub const GRID_TRIES: usize = 99;

/// Carved puzzles offered to the solver before generation fails.
pub const ACCEPT_TRIES: usize = 99;

/// Rejected attempts between automatic difficulty reductions.
pub const LEVEL_DROP_INTERVAL: usize = 50;

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// No random fill produced a valid complete grid within
    /// [`GRID_TRIES`] attempts.
    #[display("no valid grid produced after {tries} attempts")]
    FillExhausted {
        /// Number of grid attempts made.
        tries: usize,
    },
    /// No carved puzzle passed the solver within [`ACCEPT_TRIES`]
    /// attempts, even after difficulty reductions.
    #[display("no solvable puzzle found after {tries} attempts")]
    AcceptExhausted {
        /// Number of carved puzzles rejected.
        tries: usize,
    },
}

/// A generated puzzle, its solution, and the seed that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The carved board handed to the player. Kept cells are predefined;
    /// carved cells are empty.
    pub problem: Board,
    /// The unique solution of `problem`.
    pub solution: Solution,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty actually used for the accepted carve.
    ///
    /// Starts at the requested difficulty and is lowered one level every
    /// [`LEVEL_DROP_INTERVAL`] rejected attempts, so it may end up below
    /// the request for geometries where deep carves defeat deduction.
    pub difficulty: Difficulty,
}

/// Generates puzzles that the given solver can complete.
///
/// Generation is a rejection loop: fill a complete valid grid by random
/// constrained assignment, carve it down to the difficulty's clear count,
/// and keep the result only if the solver completes it by deduction alone.
/// Rejected carves are thrown away and the loop restarts from a fresh
/// fill.
///
/// Deduction is weaker than exhaustive search, so carves with a unique
/// solution can still be rejected; the loop simply regenerates, and after
/// every [`LEVEL_DROP_INTERVAL`] rejections the difficulty drops one level
/// to keep deep carves from starving generation.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Difficulty, Geometry};
/// use gridlace_generator::{PuzzleGenerator, PuzzleSeed};
/// use gridlace_solver::PropagationSolver;
///
/// let solver = PropagationSolver::with_fundamental_techniques();
/// let generator = PuzzleGenerator::new(&solver);
///
/// let seed = PuzzleSeed::from_phrase("doc example");
/// let puzzle = generator
///     .generate_with_seed(Geometry::SIZE_4, Difficulty::default(), seed)
///     .unwrap();
/// assert!(solver.is_solvable(&puzzle.problem));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    solver: &'a PropagationSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator gated by `solver`.
    #[must_use]
    pub const fn new(solver: &'a PropagationSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the retry bounds are exhausted.
    pub fn generate(
        &self,
        geometry: Geometry,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(geometry, difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed, geometry, difficulty, and solver always reproduce
    /// the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the retry bounds are exhausted.
    pub fn generate_with_seed(
        &self,
        geometry: Geometry,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let mut difficulty = difficulty;
        for attempt in 1..=ACCEPT_TRIES {
            let solution = fill_solution(&mut rng, geometry)?;
            let problem = carve(&mut rng, &solution, difficulty);
            if self.solver.is_solvable(&problem) {
                return Ok(GeneratedPuzzle {
                    problem,
                    solution: solution.to_solution(),
                    seed,
                    difficulty,
                });
            }
            debug!("attempt {attempt}: carved puzzle defeats deduction, regenerating");
            if attempt % LEVEL_DROP_INTERVAL == 0 {
                if let Some(lowered) = difficulty.lowered() {
                    warn!(
                        "lowering difficulty to level {} after {attempt} rejected attempts",
                        lowered.level()
                    );
                    difficulty = lowered;
                }
            }
        }
        Err(GenerateError::AcceptExhausted { tries: ACCEPT_TRIES })
    }
}

/// Produces a complete valid grid by repeated random fills.
fn fill_solution(rng: &mut Pcg64, geometry: Geometry) -> Result<Board, GenerateError> {
    for _ in 0..GRID_TRIES {
        let Some(board) = (0..FILL_TRIES).find_map(|_| try_fill(rng, geometry)) else {
            continue;
        };
        if board.is_valid_solution() {
            return Ok(board);
        }
    }
    Err(GenerateError::FillExhausted { tries: GRID_TRIES })
}

/// Fills the board cell by cell with random candidates.
///
/// Returns `None` as soon as a cell has no candidate left; callers retry
/// with the next draw from the same random stream.
fn try_fill(rng: &mut Pcg64, geometry: Geometry) -> Option<Board> {
    let mut board = Board::new_empty(geometry);
    for pos in geometry.positions() {
        let candidates: Vec<u8> = board.candidates(pos).iter().collect();
        if candidates.is_empty() {
            return None;
        }
        let value = candidates[rng.random_range(0..candidates.len())];
        board.set(pos, Cell::predefined(value));
    }
    Some(board)
}

/// Clears the difficulty's share of cells from a complete grid.
///
/// Clears the first `cells_to_clear` positions of a uniformly shuffled
/// permutation; cleared cells revert to the empty state and every other
/// cell stays predefined.
fn carve(rng: &mut Pcg64, solution: &Board, difficulty: Difficulty) -> Board {
    let geometry = solution.geometry();
    let mut positions: Vec<Position> = geometry.positions().collect();
    positions.shuffle(rng);

    let mut problem = solution.clone();
    for &pos in &positions[..difficulty.cells_to_clear(geometry)] {
        problem.set(pos, Cell::EMPTY);
    }
    problem
}

#[cfg(test)]
mod tests {
    use gridlace_core::Unit;

    use super::*;

    fn generate(geometry: Geometry, difficulty: Difficulty, phrase: &str) -> GeneratedPuzzle {
        let solver = PropagationSolver::with_fundamental_techniques();
        PuzzleGenerator::new(&solver)
            .generate_with_seed(geometry, difficulty, PuzzleSeed::from_phrase(phrase))
            .unwrap()
    }

    fn all_units(geometry: Geometry) -> Vec<Unit> {
        let mut units = Vec::new();
        for y in 0..geometry.height() {
            units.push(Unit::Row { y });
        }
        for x in 0..geometry.width() {
            units.push(Unit::Column { x });
        }
        for index in 0..geometry.block_size() {
            units.push(Unit::Block { index });
        }
        units
    }

    #[test]
    fn test_solution_units_are_permutations() {
        for geometry in [Geometry::SIZE_4, Geometry::SIZE_6, Geometry::SIZE_9] {
            let puzzle = generate(geometry, Difficulty::default(), "permutation check");
            for unit in all_units(geometry) {
                let mut values: Vec<u8> = geometry
                    .unit_positions(unit)
                    .map(|pos| puzzle.solution.value(pos))
                    .collect();
                values.sort_unstable();
                let expected: Vec<u8> = (1..=geometry.block_size()).collect();
                assert_eq!(values, expected, "{geometry:?} {unit:?}");
            }
        }
    }

    #[test]
    fn test_carve_count_matches_effective_difficulty() {
        let geometry = Geometry::SIZE_9;
        let puzzle = generate(geometry, Difficulty::default(), "carve count");

        let empty = puzzle
            .problem
            .values()
            .iter()
            .filter(|&&value| value == 0)
            .count();
        assert_eq!(empty, puzzle.difficulty.cells_to_clear(geometry));
        assert!(puzzle.difficulty.level() <= Difficulty::default().level());
    }

    #[test]
    fn test_kept_cells_are_predefined_and_match_solution() {
        let puzzle = generate(Geometry::SIZE_6, Difficulty::default(), "kept cells");
        for pos in puzzle.problem.geometry().positions() {
            let cell = puzzle.problem.cell(pos);
            if cell.is_empty() {
                assert!(!cell.predefined);
            } else {
                assert!(cell.predefined);
                assert_eq!(cell.value, puzzle.solution.value(pos));
            }
        }
    }

    #[test]
    fn test_problem_passes_the_acceptance_solver() {
        let solver = PropagationSolver::with_fundamental_techniques();
        let puzzle = PuzzleGenerator::new(&solver)
            .generate_with_seed(
                Geometry::SIZE_9,
                Difficulty::default(),
                PuzzleSeed::from_phrase("acceptance"),
            )
            .unwrap();

        let mut grid = gridlace_solver::SolveGrid::from_board(&puzzle.problem);
        let (outcome, _stats) = solver.solve(&mut grid);
        assert!(outcome.is_solved());
        assert_eq!(grid.values(), puzzle.solution.values());
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        let a = generate(Geometry::SIZE_9, Difficulty::default(), "reproducible");
        let b = generate(Geometry::SIZE_9, Difficulty::default(), "reproducible");
        assert_eq!(a.problem, b.problem);
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.difficulty, b.difficulty);
    }

    #[test]
    fn test_deep_4x4_carve_clears_ten_cells() {
        // floor(16 * 4 * 16 / 100) = 10 cleared, 6 kept
        let difficulty = Difficulty::new(4, 16).unwrap();
        let puzzle = generate(Geometry::SIZE_4, difficulty, "deep carve");

        let values = puzzle.problem.values();
        assert_eq!(values.iter().filter(|&&value| value == 0).count(), 10);
        assert_eq!(values.iter().filter(|&&value| value != 0).count(), 6);
        assert_eq!(puzzle.difficulty, difficulty);
    }

    #[test]
    fn test_minimal_difficulty_clears_nothing() {
        // floor(16 * 1 * 5 / 100) = 0: the problem arrives fully solved
        let difficulty = Difficulty::new(1, 5).unwrap();
        let puzzle = generate(Geometry::SIZE_4, difficulty, "minimal");
        assert!(puzzle.problem.is_valid_solution());
        assert_eq!(puzzle.difficulty, difficulty);
    }
}
