//! Clarke-Wright savings construction for pickup-and-delivery jobs.
//!
//! # Algorithm
//!
//! Every job starts unassigned. Savings edges are processed from largest to
//! smallest; an edge `(i, j)` proposes driving from `i`'s drop-off straight
//! to `j`'s pickup. Depending on the current assignment of both jobs:
//!
//! 1. both unassigned: open the route `[i, j]`;
//! 2. only `i` assigned and `i` ends its route: append `j`;
//! 3. only `j` assigned and `j` starts its route: append `i` to that route;
//! 4. different routes, `i` ends one and `j` starts the other: append the
//!    second route to the first and drop the second.
//!
//! Edges within a single route are ignored. A proposal is committed only if
//! the resulting sequence fits the duration bound. Jobs left over after the
//! last edge each get a route of their own, regardless of the bound.
//!
//! Case 3 appends rather than prepends. The route stays append-only and the
//! feasibility check is made on the sequence that is actually stored.
//!
//! # Complexity
//!
//! O(n² log n) for sorting the savings, O(n³) worst case for merging since
//! each duration check walks the candidate route.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::{debug, info, trace, warn};

use super::savings::{compute_savings, SavingsEdge};
use crate::evaluation::RouteEvaluator;
use crate::models::{JobId, JobSet, RouteId, RouteSet, RoutingConfig, Solution};

/// A committed change to the route collection.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Merge {
    Open { first: JobId, second: JobId },
    Append { route: RouteId, job: JobId },
    Absorb { into: RouteId, from: RouteId },
}

/// Routes all jobs with the Clarke-Wright savings heuristic.
///
/// Job assignments in `jobs` are reset first and reflect the returned
/// solution afterwards. Routes appear in creation order.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Job, JobSet, Point, RoutingConfig};
/// use u_vrppd::constructive::clarke_wright_savings;
///
/// let mut jobs: JobSet = vec![
///     Job::new(1, Point::new(0.0, 1.0).unwrap(), Point::new(0.0, 10.0).unwrap()),
///     Job::new(2, Point::new(0.0, 11.0).unwrap(), Point::new(0.0, 20.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let solution = clarke_wright_savings(&mut jobs, &RoutingConfig::default());
/// assert_eq!(solution.job_ids(), vec![vec![1, 2]]);
/// assert_eq!(jobs.route_of(1), jobs.route_of(2));
/// ```
pub fn clarke_wright_savings(jobs: &mut JobSet, config: &RoutingConfig) -> Solution {
    let savings = compute_savings(jobs, config.depot());
    let solution = merge_savings(jobs, &savings, config);

    info!(
        jobs = jobs.len(),
        edges = savings.len(),
        routes = solution.num_routes(),
        total_duration = solution.total_duration(),
        "savings construction finished"
    );
    solution
}

/// Runs the merge phase over `savings` in the given order.
///
/// The edges are not re-sorted; [`clarke_wright_savings`] passes them in
/// descending order. Edges naming an unknown job, or a job paired with
/// itself, are skipped.
pub fn merge_savings(jobs: &mut JobSet, savings: &[SavingsEdge], config: &RoutingConfig) -> Solution {
    jobs.clear_assignments();
    let mut routes = RouteSet::new();

    for edge in savings {
        let merge = {
            let evaluator = RouteEvaluator::new(jobs, config);
            plan_merge(jobs, &routes, &evaluator, edge)
        };
        if let Some(merge) = merge {
            apply_merge(jobs, &mut routes, merge);
        }
    }

    assign_residual(jobs, &mut routes, config);

    let evaluator = RouteEvaluator::new(jobs, config);
    let mut solution = Solution::new();
    for mut route in routes.into_routes() {
        route.set_total_duration(evaluator.duration(route.jobs()));
        solution.add_route(route);
    }
    solution
}

/// Decides what `edge` does to the current routes, if anything.
fn plan_merge(
    jobs: &JobSet,
    routes: &RouteSet,
    evaluator: &RouteEvaluator<'_>,
    edge: &SavingsEdge,
) -> Option<Merge> {
    let (i, j) = (edge.source, edge.destination);
    if i == j {
        return None;
    }
    let (Some(job_i), Some(job_j)) = (jobs.get(i), jobs.get(j)) else {
        warn!(source = i, destination = j, "savings edge names an unknown job");
        return None;
    };

    let (merge, duration) = match (job_i.route(), job_j.route()) {
        (None, None) => (
            Merge::Open {
                first: i,
                second: j,
            },
            evaluator.duration(&[i, j]),
        ),
        (Some(r), None) => {
            let route = routes.get(r)?;
            if route.last() != Some(i) {
                return None;
            }
            let duration = evaluator.duration_of(route.jobs().iter().chain([j].iter()));
            (Merge::Append { route: r, job: j }, duration)
        }
        (None, Some(r)) => {
            let route = routes.get(r)?;
            if route.first() != Some(j) {
                return None;
            }
            let duration = evaluator.duration_of(route.jobs().iter().chain([i].iter()));
            (Merge::Append { route: r, job: i }, duration)
        }
        (Some(r1), Some(r2)) => {
            if r1 == r2 {
                return None;
            }
            let (head, tail) = (routes.get(r1)?, routes.get(r2)?);
            if head.last() != Some(i) || tail.first() != Some(j) {
                return None;
            }
            let duration = evaluator.duration_of(head.jobs().iter().chain(tail.jobs()));
            (Merge::Absorb { into: r1, from: r2 }, duration)
        }
    };

    if !evaluator.fits(duration) {
        trace!(source = i, destination = j, duration, "merge rejected");
        return None;
    }
    debug!(source = i, destination = j, amount = edge.amount, duration, ?merge, "merge accepted");
    Some(merge)
}

fn apply_merge(jobs: &mut JobSet, routes: &mut RouteSet, merge: Merge) {
    match merge {
        Merge::Open { first, second } => {
            let id = routes.create(vec![first, second]);
            jobs.assign(first, id);
            jobs.assign(second, id);
        }
        Merge::Append { route, job } => {
            if let Some(r) = routes.get_mut(route) {
                r.push(job);
                jobs.assign(job, route);
            }
        }
        Merge::Absorb { into, from } => {
            let Some(absorbed) = routes.remove(from) else {
                return;
            };
            if let Some(r) = routes.get_mut(into) {
                r.extend_from(&absorbed);
            }
            for &job in absorbed.jobs() {
                jobs.assign(job, into);
            }
        }
    }
}

/// Gives every job still unassigned a route of its own, in ascending ID order.
fn assign_residual(jobs: &mut JobSet, routes: &mut RouteSet, config: &RoutingConfig) {
    for id in jobs.unassigned() {
        let route = routes.create(vec![id]);
        jobs.assign(id, route);

        let duration = RouteEvaluator::new(jobs, config).duration(&[id]);
        if duration > config.max_duration() {
            warn!(
                job = id,
                duration,
                max_duration = config.max_duration(),
                "single job exceeds the duration bound"
            );
        }
    }
}
