//! Solver configuration.

use crate::evaluation::CostModel;

/// Configuration for [`ExhaustiveSolver`](super::ExhaustiveSolver).
///
/// # Examples
///
/// ```
/// use u_route_exact::evaluation::CostModel;
/// use u_route_exact::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_cost_model(CostModel::OriginSum)
///     .with_max_customers(8);
/// assert_eq!(config.max_customers, Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// How visiting orders are scored.
    pub cost_model: CostModel,

    /// Reject inputs with more customers than this. `None` = no limit.
    pub max_customers: Option<usize>,
}

impl SolverConfig {
    pub fn with_cost_model(mut self, model: CostModel) -> Self {
        self.cost_model = model;
        self
    }

    pub fn with_max_customers(mut self, limit: usize) -> Self {
        self.max_customers = Some(limit);
        self
    }
}
