//! Exhaustive shortest-route search.
//!
//! # Algorithm
//!
//! 1. Build a distance table over the origin and all customers.
//! 2. Walk every ordering of the customers in lexicographic order with an
//!    in-place next-permutation step.
//! 3. Score each ordering with the configured [`CostModel`] and keep the
//!    first one with the strictly lowest cost.
//!
//! # Complexity
//!
//! O(n!·n) time, O(n²) memory. This is a known limitation rather than a
//! defect: 10 customers mean 3.6M orderings, 12 mean 479M. There is no
//! heuristic fallback; set [`SolverConfig::max_customers`] to reject inputs
//! that are too large.

use std::time::Instant;

use tracing::{debug, trace, warn};

use super::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::error::RouteError;
use crate::evaluation::{CostModel, RouteEvaluator};
use crate::models::{Customer, Location, Route};
use crate::permutation::{factorial, next_permutation};

/// Inputs above this size get a warning about run time.
const LARGE_INPUT_WARNING: usize = 10;

/// Finds the optimal visiting order by trying every permutation.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Customer, Location};
/// use u_route_exact::solver::{ExhaustiveSolver, SolverConfig};
///
/// let customers = vec![
///     Customer::new("far", 3, 0),
///     Customer::new("near", 1, 0),
///     Customer::new("middle", 2, 0),
/// ];
/// let solver = ExhaustiveSolver::new(SolverConfig::default());
/// let route = solver.solve(Location::ORIGIN, &customers).unwrap();
/// assert_eq!(route.names(), vec!["near", "middle", "far"]);
/// assert_eq!(route.cost(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    config: SolverConfig,
}

impl ExhaustiveSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the minimum-cost route from `origin` through all `customers`.
    ///
    /// Fails only when `customers` exceeds [`SolverConfig::max_customers`].
    pub fn solve(&self, origin: Location, customers: &[Customer]) -> Result<Route, RouteError> {
        if let Some(limit) = self.config.max_customers {
            if customers.len() > limit {
                return Err(RouteError::TooManyCustomers {
                    count: customers.len(),
                    limit,
                });
            }
        }
        Ok(self.search(origin, customers))
    }

    pub(crate) fn search(&self, origin: Location, customers: &[Customer]) -> Route {
        let model = self.config.cost_model;
        let n = customers.len();
        if n == 0 {
            debug!("no customers, returning empty route");
            return Route::empty(origin, model);
        }
        if n > LARGE_INPUT_WARNING {
            warn!(
                customers = n,
                permutations = ?factorial(n),
                "exhaustive search over a large input"
            );
        }

        let started = Instant::now();
        let distances = DistanceMatrix::for_route(origin, customers);
        let evaluator = RouteEvaluator::new(&distances, model);

        let mut order: Vec<usize> = (0..n).collect();
        let mut best_order = order.clone();
        let mut best_cost = evaluator.cost(&order);
        let mut evaluated: u64 = 1;

        while next_permutation(&mut order) {
            evaluated += 1;
            let cost = evaluator.cost(&order);
            if cost < best_cost {
                trace!(cost, previous = best_cost, "improved route");
                best_cost = cost;
                best_order.copy_from_slice(&order);
            }
        }

        debug!(
            customers = n,
            evaluated,
            best_cost,
            ?model,
            elapsed = ?started.elapsed(),
            "exhaustive search finished"
        );

        let stops = best_order.iter().map(|&i| customers[i].clone()).collect();
        Route::new(origin, stops, best_cost, model)
    }
}

/// Shortest route from `(origin_x, origin_y)` through every customer.
///
/// Uses the default configuration: leg-by-leg Manhattan cost and no size
/// limit. Empty input yields an empty route with zero cost. Run time grows
/// factorially with the number of customers.
///
/// # Examples
///
/// ```
/// use u_route_exact::find_shortest_route;
/// use u_route_exact::models::Customer;
///
/// let customers = vec![Customer::new("A", 10, 20), Customer::new("B", 90, 24)];
/// let route = find_shortest_route(0, 0, &customers);
/// assert_eq!(route.names(), vec!["A", "B"]);
/// assert_eq!(route.cost(), 114);
/// ```
pub fn find_shortest_route(origin_x: i32, origin_y: i32, customers: &[Customer]) -> Route {
    ExhaustiveSolver::default().search(Location::new(origin_x, origin_y), customers)
}

/// Shortest route under an explicit [`CostModel`], with no size limit.
pub fn solve_with_model(
    origin: Location,
    customers: &[Customer],
    model: CostModel,
) -> Route {
    ExhaustiveSolver::new(SolverConfig::default().with_cost_model(model)).search(origin, customers)
}
