//! Propagation-based solving for gridlace puzzles.
//!
//! The solver decides, by pure logical deduction, whether a carved puzzle
//! can be completed without guessing. It is used as the acceptance gate
//! before a puzzle is shown to the player, and its techniques double as
//! the deduction tiers of the hint engine.
//!
//! Deduction runs as repeated passes over the empty cells of a
//! [`SolveGrid`] (a private working copy, so the visible board is never
//! touched). Within a pass, each cell is checked against the configured
//! techniques in order; the first applicable technique fills the cell.
//! Passes repeat until one makes no progress.
//!
//! Propagation is strictly weaker than backtracking search: a puzzle that
//! requires guessing is rejected even though a solution exists. This is
//! deliberate; rejected puzzles are regenerated rather than solved harder.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Board, Geometry};
//! use gridlace_solver::{PropagationSolver, SolveGrid};
//!
//! let solver = PropagationSolver::with_fundamental_techniques();
//! let board = Board::new_empty(Geometry::SIZE_4);
//!
//! // An empty 4x4 board offers no forced moves
//! let mut grid = SolveGrid::from_board(&board);
//! let (outcome, stats) = solver.solve(&mut grid);
//! assert!(outcome.is_stuck());
//! assert_eq!(stats.total_steps(), 0);
//! ```

pub use self::{
    propagation::{PropagationSolver, SolveOutcome, SolverStats},
    solve_grid::SolveGrid,
};

mod propagation;
mod solve_grid;
pub mod technique;
