//! Random instance generation.
//!
//! Produces reproducible instances from a seed, for property tests,
//! benchmarks and the command-line tool.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Customer, Instance, Location};

/// Generates `n` customers with coordinates uniform in `[0, extent]`.
///
/// Customers are named `"Customer 1"` … `"Customer n"`.
pub fn random_customers<R: Rng>(n: usize, extent: i32, rng: &mut R) -> Vec<Customer> {
    let extent = extent.max(0);
    (1..=n)
        .map(|i| {
            Customer::new(
                format!("Customer {i}"),
                rng.random_range(0..=extent),
                rng.random_range(0..=extent),
            )
        })
        .collect()
}

/// Generates a seeded instance of `n` customers starting at `(0, 0)`.
///
/// The same seed always yields the same instance.
///
/// # Examples
///
/// ```
/// use u_route_exact::generate::random_instance;
///
/// let a = random_instance(5, 100, 42);
/// let b = random_instance(5, 100, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.customers.len(), 5);
/// ```
pub fn random_instance(n: usize, extent: i32, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    Instance::new(Location::ORIGIN, random_customers(n, extent, &mut rng))
}
