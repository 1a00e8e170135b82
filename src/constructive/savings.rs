//! Clarke-Wright savings between pickup-and-delivery jobs.
//!
//! For jobs `i` and `j` the saving of serving `j` right after `i` is
//!
//! ```text
//! s(i, j) = d(i.destination, depot) + d(depot, j.source) - d(i.destination, j.source)
//! ```
//!
//! i.e. the return trip after `i` and the outbound trip before `j` are
//! replaced by one empty drive from `i`'s drop-off to `j`'s pickup. Unlike
//! the customer-to-customer variant the measure is directed: `s(i, j)` and
//! `s(j, i)` generally differ.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{distance, JobId, JobSet, Point};

/// The saving of sequencing `destination` directly after `source`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEdge {
    /// Job whose drop-off precedes the direct drive.
    pub source: JobId,
    /// Job whose pickup follows the direct drive.
    pub destination: JobId,
    /// Travel saved compared to two depot round trips.
    pub amount: f64,
}

impl SavingsEdge {
    /// Processing order: larger savings first, then ascending source and
    /// destination IDs.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        other
            .amount
            .total_cmp(&self.amount)
            .then(self.source.cmp(&other.source))
            .then(self.destination.cmp(&other.destination))
    }
}

/// Computes the saving of every ordered pair of distinct jobs.
///
/// Returns `n * (n - 1)` edges for `n` jobs, sorted for processing
/// (see [`SavingsEdge::cmp_priority`]).
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Job, JobSet, Point};
/// use u_vrppd::constructive::compute_savings;
///
/// let jobs: JobSet = vec![
///     Job::new(1, Point::new(0.0, 1.0).unwrap(), Point::new(0.0, 10.0).unwrap()),
///     Job::new(2, Point::new(0.0, 11.0).unwrap(), Point::new(0.0, 20.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let edges = compute_savings(&jobs, Point::origin());
/// assert_eq!(edges.len(), 2);
/// // 10 back + 11 out - 1 direct
/// assert_eq!((edges[0].source, edges[0].destination), (1, 2));
/// assert!((edges[0].amount - 20.0).abs() < 1e-10);
/// ```
pub fn compute_savings(jobs: &JobSet, depot: Point) -> Vec<SavingsEdge> {
    let n = jobs.len();
    if n <= 1 {
        return Vec::new();
    }

    let mut savings = Vec::with_capacity(n * (n - 1));
    for i in jobs.iter() {
        let back = distance(&i.destination(), &depot);
        for j in jobs.iter() {
            if i.id() == j.id() {
                continue;
            }
            let amount =
                back + distance(&depot, &j.source()) - distance(&i.destination(), &j.source());
            savings.push(SavingsEdge {
                source: i.id(),
                destination: j.id(),
                amount,
            });
        }
    }

    savings.sort_by(SavingsEdge::cmp_priority);
    savings
}
