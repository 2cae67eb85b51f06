//! Game session layer for gridlace puzzles.
//!
//! A [`Game`] wraps one generated puzzle: the live board the player
//! edits, the immutable solved snapshot, and the difficulty and seed the
//! puzzle was generated with. On top of that it offers:
//!
//! - **Input**: [`Game::set_cell`] enters or clears a value, refusing to
//!   touch predefined cells.
//! - **Analysis**: [`Game::analyze_entries`] flags each entry as locally
//!   consistent or not, and [`Game::is_solved_by_user`] detects
//!   completion.
//! - **Hints**: [`Game::hint`] recommends a single next move, reporting
//!   wrong entries before suggesting placements from the deduction
//!   techniques, cheapest first.
//!
//! # Example
//!
//! ```
//! use gridlace_core::{Difficulty, Geometry};
//! use gridlace_game::{Game, Hint};
//! use gridlace_generator::PuzzleGenerator;
//! use gridlace_solver::PropagationSolver;
//!
//! let solver = PropagationSolver::with_fundamental_techniques();
//! let generator = PuzzleGenerator::new(&solver);
//! let mut game = Game::generate(&generator, Geometry::SIZE_4, Difficulty::default()).unwrap();
//!
//! // Follow hints until the board is solved
//! while let Some(Hint::Place { pos, value, .. }) = game.hint() {
//!     game.set_cell(pos, value).unwrap();
//! }
//! assert!(game.is_solved_by_user());
//! ```

pub use self::{
    game::{Game, GameError},
    hint::Hint,
};

mod game;
mod hint;
