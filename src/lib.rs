//! Optimal solver for N-by-N sliding tile puzzles.
//!
//! [`Board`] is an immutable puzzle configuration; [`Solver`] runs A* on a
//! board and on its [twin](Board::twin) at the same time to either find a
//! shortest solution or prove that none exists.

mod board;
mod error;
mod parse;
pub mod render;
mod solver;

mod prelude;

#[cfg(test)]
mod testing;

pub use board::{Board, Direction};
pub use error::Error;
pub use solver::{Heuristic, Outcome, Pruning, SearchStats, SideStats, Solver, SolverOptions};
