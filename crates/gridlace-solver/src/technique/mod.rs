//! Deduction techniques.
//!
//! Each technique answers one question: given the current grid, is there a
//! value that must go in this cell? Techniques implement the [`Technique`]
//! trait and are tried in a fixed order, both by the propagation solver
//! (per cell, within a pass) and by the hint engine (per technique, across
//! the board).

use std::fmt::Debug;

use gridlace_core::Position;

pub use self::{
    hidden_single::{HiddenSingle, UnitKind},
    naked_single::NakedSingle,
};
use crate::SolveGrid;

mod hidden_single;
mod naked_single;

/// A single-cell deduction technique.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Returns the value forced into the empty cell at `pos`, if any.
    ///
    /// Callers guarantee that `pos` names an empty cell; techniques only
    /// read the grid and never mutate it.
    fn find_value(&self, grid: &SolveGrid, pos: Position) -> Option<u8>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the fundamental techniques in deduction priority order.
///
/// The order is fixed: naked single first, then hidden single by row,
/// column, and block. Both the solver's per-cell tie-break and the hint
/// engine's tier order follow this sequence.
///
/// # Examples
///
/// ```
/// use gridlace_solver::technique;
///
/// let techniques = technique::fundamental_techniques();
/// assert_eq!(techniques.len(), 4);
/// assert_eq!(techniques[0].name(), "naked single");
/// ```
#[must_use]
pub fn fundamental_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::in_row()),
        Box::new(HiddenSingle::in_column()),
        Box::new(HiddenSingle::in_block()),
    ]
}
