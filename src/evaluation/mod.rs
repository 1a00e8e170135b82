//! Route duration and feasibility evaluation.

mod evaluator;

pub use evaluator::RouteEvaluator;
