//! Dense distance matrix.

use super::manhattan;
use crate::models::{Customer, Location};

/// Matrix index of the starting location in a table built by
/// [`DistanceMatrix::for_route`].
pub const ORIGIN_INDEX: usize = 0;

/// A dense n×n Manhattan distance matrix stored in row-major order.
///
/// Tables built with [`DistanceMatrix::for_route`] put the starting location
/// at index [`ORIGIN_INDEX`] and `customers[i]` at index `i + 1`. Row 0 is
/// then the origin-to-customer distance cache.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Customer, Location};
/// use u_route_exact::distance::DistanceMatrix;
///
/// let customers = vec![
///     Customer::new("A", 3, 4),
///     Customer::new("B", 6, 8),
/// ];
/// let dm = DistanceMatrix::for_route(Location::ORIGIN, &customers);
/// assert_eq!(dm.get(0, 1), 7);
/// assert_eq!(dm.get(1, 2), 7);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes the matrix over a list of locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = manhattan(locations[i], locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix for a route search: origin first, then customers.
    pub fn for_route(origin: Location, customers: &[Customer]) -> Self {
        let locations: Vec<Location> = std::iter::once(origin)
            .chain(customers.iter().map(Customer::location))
            .collect();
        Self::from_locations(&locations)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: u64) {
        self.data[from * self.size + to] = distance;
    }

    /// Distances from location `from` to every location.
    pub fn row(&self, from: usize) -> &[u64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
