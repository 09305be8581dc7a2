//! Location and customer types.

use serde::{Deserialize, Serialize};

use crate::distance::manhattan;

/// An integer grid coordinate.
///
/// Used for the starting point of a route and as the position of every
/// customer.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Location;
///
/// let a = Location::new(0, 0);
/// let b = Location::new(10, 20);
/// assert_eq!(a.distance_to(b), 30);
/// assert_eq!(Location::ORIGIN, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    /// X-coordinate.
    pub x: i32,
    /// Y-coordinate.
    pub y: i32,
}

impl Location {
    /// The point `(0, 0)`.
    pub const ORIGIN: Location = Location { x: 0, y: 0 };

    /// Creates a location at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another location.
    pub fn distance_to(self, other: Location) -> u64 {
        manhattan(self, other)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A named stop that a route must visit.
///
/// Customers are immutable once constructed: fields are private and only
/// exposed through getters.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::Customer;
///
/// let c = Customer::new("Customer 1", 10, 20);
/// assert_eq!(c.name(), "Customer 1");
/// assert_eq!(c.x(), 10);
/// assert_eq!(c.y(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    x: i32,
    y: i32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Position of this customer.
    pub fn location(&self) -> Location {
        Location::new(self.x, self.y)
    }

    /// Manhattan distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> u64 {
        manhattan(self.location(), other.location())
    }
}
