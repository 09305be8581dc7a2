//! # u-route-exact
//!
//! Exact shortest visiting order over a small set of points on an integer
//! grid, found by exhaustive permutation search under the Manhattan metric.
//! Run time is factorial in the number of points; intended for about ten
//! points or fewer.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Customer, Route, Instance)
//! - [`distance`] — Manhattan metric and distance matrix
//! - [`evaluation`] — Cost models and route scoring
//! - [`permutation`] — Permutation generators
//! - [`solver`] — Exhaustive route search
//! - [`sample`] — Built-in demonstration customers
//! - [`generate`] — Seeded random instances
//!
//! ## Example
//!
//! ```
//! use u_route_exact::find_shortest_route;
//! use u_route_exact::sample::sample_customers;
//!
//! let customers: Vec<_> = sample_customers().into_iter().take(4).collect();
//! let route = find_shortest_route(0, 0, &customers);
//! assert_eq!(route.len(), 4);
//! assert_eq!(route.cost(), route.path_length());
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod models;
pub mod permutation;
pub mod sample;
pub mod solver;

pub use error::RouteError;
pub use solver::find_shortest_route;
