//! Distances on the integer grid.
//!
//! Provides the Manhattan metric and a dense per-search distance matrix.

mod manhattan;
mod matrix;

pub use manhattan::manhattan;
pub use matrix::{DistanceMatrix, ORIGIN_INDEX};
