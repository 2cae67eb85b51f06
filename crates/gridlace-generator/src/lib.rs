//! Puzzle generation for gridlace boards.
//!
//! The generator produces playable puzzles in three stages:
//!
//! 1. **Fill**: complete a valid grid by randomized constrained
//!    assignment, retrying within named bounds when a fill dead-ends.
//! 2. **Carve**: clear the share of cells the difficulty asks for, chosen
//!    from a uniformly shuffled permutation of the board.
//! 3. **Accept**: keep the carve only if the propagation solver completes
//!    it by deduction alone; otherwise regenerate, lowering the
//!    difficulty one level after every [`LEVEL_DROP_INTERVAL`]
//!    rejections.
//!
//! Every puzzle carries the [`PuzzleSeed`] that produced it, so results
//! are reproducible across runs.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Difficulty, Geometry};
//! use gridlace_generator::{PuzzleGenerator, PuzzleSeed};
//! use gridlace_solver::PropagationSolver;
//!
//! let solver = PropagationSolver::with_fundamental_techniques();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let seed = PuzzleSeed::from_phrase("lib example");
//! let puzzle = generator
//!     .generate_with_seed(Geometry::SIZE_9, Difficulty::default(), seed)
//!     .unwrap();
//! println!("{}", puzzle.problem);
//! ```

pub use self::{
    generator::{
        ACCEPT_TRIES, FILL_TRIES, GRID_TRIES, GenerateError, GeneratedPuzzle,
        LEVEL_DROP_INTERVAL, PuzzleGenerator,
    },
    seed::{ParseSeedError, PuzzleSeed, SEED_LEN},
};

mod generator;
mod seed;
