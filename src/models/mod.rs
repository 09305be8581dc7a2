//! Domain model types for exact route search.
//!
//! Provides locations on an integer grid, named customers, the ordered
//! route produced by the solver, and the instance format that bundles a
//! starting location with its customers.

mod customer;
mod instance;
mod route;

pub use customer::{Customer, Location};
pub use instance::Instance;
pub use route::Route;
