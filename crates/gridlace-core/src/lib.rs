//! Core data structures for the gridlace puzzle engine.
//!
//! This crate provides the fundamental types shared by the generation,
//! solving, and game-session layers:
//!
//! 1. **Board shape** - Describes which boards are legal
//!    - [`geometry`]: validated rectangular block geometry ([`Geometry`])
//!    - [`difficulty`]: difficulty level and level-points ([`Difficulty`])
//!
//! 2. **Board state** - The mutable puzzle grid
//!    - [`cell`]: per-cell state `(value, predefined, edited, correct)`
//!    - [`board`]: the cell grid ([`Board`]) and the immutable solved
//!      snapshot captured at generation time ([`Solution`])
//!
//! 3. **Deduction primitives**
//!    - [`value_set`]: a bitset of puzzle values ([`ValueSet`]) used for
//!      candidate computation
//!    - [`position`]: board coordinates ([`Position`])
//!
//! Candidate computation is a pure query: [`Board::candidates`] never
//! mutates the board, so solver and hint code can share a board freely.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Board, Geometry, Position};
//!
//! let geometry = Geometry::SIZE_4;
//! let board = Board::new_empty(geometry);
//!
//! // An empty board has every value as a candidate everywhere.
//! let candidates = board.candidates(Position::new(0, 0));
//! assert_eq!(candidates.len(), usize::from(geometry.block_size()));
//! ```

pub mod board;
pub mod cell;
pub mod difficulty;
pub mod geometry;
pub mod position;
pub mod value_set;

// Re-export commonly used types
pub use self::{
    board::{Board, Solution},
    cell::Cell,
    difficulty::{Difficulty, DifficultyError},
    geometry::{Geometry, GeometryError, Unit},
    position::Position,
    value_set::ValueSet,
};
