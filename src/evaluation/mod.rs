//! Route cost evaluation.

mod evaluator;

pub use evaluator::{path_length, CostModel, RouteEvaluator};
