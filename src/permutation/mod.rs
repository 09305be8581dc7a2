//! Permutation generators.
//!
//! - [`next_permutation`] — In-place lexicographic successor, no allocation
//! - [`Permutations`] — Lazy iterator over all orderings of `0..n`
//! - [`permutations_of`] — Recursive construction, fully materialized
//!
//! Every generator produces `n!` orderings, which bounds usable input sizes
//! to roughly `n ≤ 10`.

mod lexicographic;
mod recursive;

pub use lexicographic::{factorial, next_permutation, Permutations};
pub use recursive::permutations_of;
