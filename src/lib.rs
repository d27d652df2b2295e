//! Solver for code-matrix breach puzzles.
//!
//! A puzzle is a square grid of symbols, a set of weighted target sequences,
//! and a buffer bounding how many cells may be selected. Selections alternate
//! between the active row and column, starting anywhere on the top row, and
//! each cell may be used once. [`Puzzle::solve`] searches for a best-scoring
//! trail among the locally top-scoring picks; [`Matrix`] exposes the same
//! selection rules for driving a session by hand.

mod grid;
mod matrix;
mod sequence;
mod solver;
mod symbol;
mod trace;

pub use grid::{Grid, Position};
pub use matrix::{Active, Error as SelectionError, Matrix};
pub use sequence::Sequence;
pub use solver::{Error, Puzzle, Solution};
pub use symbol::Symbol;
pub use trace::move_order;
