//! Exact route solver.
//!
//! - [`find_shortest_route`] — Default entry point (leg cost, no limit)
//! - [`solve_with_model`] — Same search under an explicit cost model
//! - [`ExhaustiveSolver`] — Configurable solver with an optional size guard

mod config;
mod exhaustive;

pub use config::SolverConfig;
pub use exhaustive::{find_shortest_route, solve_with_model, ExhaustiveSolver};
