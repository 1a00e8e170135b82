//! Savings-based route construction.
//!
//! - [`compute_savings`]: directed Clarke-Wright savings between jobs, O(n² log n)
//! - [`clarke_wright_savings`]: greedy merging under the duration bound
//! - [`merge_savings`]: the merge phase alone, over a caller-supplied edge order

mod clarke_wright;
mod savings;

pub use clarke_wright::{clarke_wright_savings, merge_savings};
pub use savings::{compute_savings, SavingsEdge};
