//! Problem instance: a starting location plus the customers to visit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Customer, Location};
use crate::error::RouteError;
use crate::sample::sample_customers;

/// Input to the solver, loadable from JSON.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Instance;
///
/// let inst = Instance::from_json(r#"{
///     "origin": { "x": 0, "y": 0 },
///     "customers": [ { "name": "A", "x": 10, "y": 20 } ]
/// }"#).unwrap();
/// assert_eq!(inst.customers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Where the route starts.
    #[serde(default)]
    pub origin: Location,
    /// Customers to visit.
    pub customers: Vec<Customer>,
}

impl Instance {
    /// Creates an instance.
    pub fn new(origin: Location, customers: Vec<Customer>) -> Self {
        Self { origin, customers }
    }

    /// The built-in ten-customer sample, starting at `(0, 0)`.
    pub fn sample() -> Self {
        Self::new(Location::ORIGIN, sample_customers())
    }

    /// Parses an instance from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RouteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON instance file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let instance = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            customers = instance.customers.len(),
            "loaded instance"
        );
        Ok(instance)
    }

    /// Serializes this instance to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RouteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Keeps only the first `n` customers.
    pub fn truncate(mut self, n: usize) -> Self {
        self.customers.truncate(n);
        self
    }
}
