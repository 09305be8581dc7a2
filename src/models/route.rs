//! Route type.

use serde::{Deserialize, Serialize};

use super::{Customer, Location};
use crate::evaluation::{path_length, CostModel};

/// An ordered sequence of customers visited from a starting location.
///
/// The start is not stored among the customers; only the travel from it
/// contributes to the cost. `cost` is the value that was minimized under
/// `cost_model`, while [`Route::path_length`] always reports the true
/// leg-by-leg distance.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Customer, Location, Route};
/// use u_route_exact::evaluation::CostModel;
///
/// let route = Route::new(
///     Location::ORIGIN,
///     vec![Customer::new("A", 10, 20), Customer::new("B", 90, 24)],
///     114,
///     CostModel::Legs,
/// );
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.path_length(), 114);
/// assert_eq!(route.names(), vec!["A", "B"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    origin: Location,
    customers: Vec<Customer>,
    cost: u64,
    cost_model: CostModel,
}

impl Route {
    /// Creates a route from an already ordered customer sequence.
    pub fn new(
        origin: Location,
        customers: Vec<Customer>,
        cost: u64,
        cost_model: CostModel,
    ) -> Self {
        Self {
            origin,
            customers,
            cost,
            cost_model,
        }
    }

    /// Creates a route with no stops and zero cost.
    pub fn empty(origin: Location, cost_model: CostModel) -> Self {
        Self::new(origin, Vec::new(), 0, cost_model)
    }

    /// Starting location.
    pub fn origin(&self) -> Location {
        self.origin
    }

    /// Customers in visit order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Consumes the route, returning the ordered customers.
    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customer names in visit order.
    pub fn names(&self) -> Vec<&str> {
        self.customers.iter().map(Customer::name).collect()
    }

    /// Cost under [`Route::cost_model`].
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Model the cost was computed with.
    pub fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    /// Travelled Manhattan distance: origin → first stop → … → last stop.
    pub fn path_length(&self) -> u64 {
        path_length(self.origin, &self.customers)
    }
}
