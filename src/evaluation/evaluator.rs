//! Route cost models and the evaluator that scores visiting orders.

use serde::{Deserialize, Serialize};

use crate::distance::{manhattan, DistanceMatrix, ORIGIN_INDEX};
use crate::models::{Customer, Location};

/// How a visiting order is scored.
///
/// # Variants
///
/// - [`CostModel::Legs`] sums consecutive legs:
///   `d(origin, p0) + d(p0, p1) + … + d(p[n-2], p[n-1])`. This is the real
///   travelled distance of an open path.
/// - [`CostModel::OriginSum`] sums distances *from the origin only*:
///   `d0(p0) + Σ_{i≥1} (d0(p_i) + d0(p_{i-1}))`. For two or more stops this
///   equals `2·Σ d0 − d0(p_last)`, so the minimum just moves the customer
///   farthest from the origin to the end. It does not measure a route
///   length; it exists to reproduce results computed with that formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CostModel {
    /// Sum of consecutive leg distances.
    #[default]
    Legs,
    /// Legacy origin-distance sum.
    OriginSum,
}

/// Scores visiting orders against a precomputed distance table.
///
/// Orders are given as indices into the customer slice the table was built
/// from (`0..n`), not matrix indices.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Customer, Location};
/// use u_route_exact::distance::DistanceMatrix;
/// use u_route_exact::evaluation::{CostModel, RouteEvaluator};
///
/// let customers = vec![Customer::new("A", 10, 20), Customer::new("B", 90, 24)];
/// let dm = DistanceMatrix::for_route(Location::ORIGIN, &customers);
///
/// let legs = RouteEvaluator::new(&dm, CostModel::Legs);
/// assert_eq!(legs.cost(&[0, 1]), 114);
/// assert_eq!(legs.cost(&[1, 0]), 198);
///
/// let origin_sum = RouteEvaluator::new(&dm, CostModel::OriginSum);
/// assert_eq!(origin_sum.cost(&[0, 1]), 174);
/// assert_eq!(origin_sum.cost(&[1, 0]), 258);
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
    model: CostModel,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over a table built by
    /// [`DistanceMatrix::for_route`].
    pub fn new(distances: &'a DistanceMatrix, model: CostModel) -> Self {
        Self { distances, model }
    }

    /// Model this evaluator scores with.
    pub fn model(&self) -> CostModel {
        self.model
    }

    /// Cost of visiting customers in the given order.
    ///
    /// The empty order costs zero under every model.
    pub fn cost(&self, order: &[usize]) -> u64 {
        match self.model {
            CostModel::Legs => self.legs_cost(order),
            CostModel::OriginSum => self.origin_sum_cost(order),
        }
    }

    fn legs_cost(&self, order: &[usize]) -> u64 {
        let mut total = 0;
        let mut prev = ORIGIN_INDEX;
        for &c in order {
            let next = c + 1;
            total += self.distances.get(prev, next);
            prev = next;
        }
        total
    }

    fn origin_sum_cost(&self, order: &[usize]) -> u64 {
        let d0 = self.distances.row(ORIGIN_INDEX);
        let Some(&first) = order.first() else {
            return 0;
        };
        let mut total = d0[first + 1];
        for pair in order.windows(2) {
            total += d0[pair[1] + 1] + d0[pair[0] + 1];
        }
        total
    }
}

/// Travelled Manhattan distance of an open path starting at `origin` and
/// visiting `customers` in order.
///
/// # Examples
///
/// ```
/// use u_route_exact::models::{Customer, Location};
/// use u_route_exact::evaluation::path_length;
///
/// let stops = [Customer::new("A", 10, 20), Customer::new("B", 90, 24)];
/// assert_eq!(path_length(Location::ORIGIN, &stops), 114);
/// assert_eq!(path_length(Location::ORIGIN, &[]), 0);
/// ```
pub fn path_length(origin: Location, customers: &[Customer]) -> u64 {
    let mut current = origin;
    let mut total = 0;
    for c in customers {
        let next = c.location();
        total += manhattan(current, next);
        current = next;
    }
    total
}
