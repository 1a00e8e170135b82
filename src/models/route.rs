//! Routes and the live route collection.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::JobId;

/// Identifier of a route, assigned sequentially at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(usize);

impl RouteId {
    /// Wraps a raw route number.
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Raw route number.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// An ordered sequence of jobs served by one vehicle.
///
/// A route starts and ends at the depot (not stored in `jobs`).
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Route, RouteId};
///
/// let route = Route::new(RouteId::new(0), vec![4, 2]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.first(), Some(4));
/// assert_eq!(route.last(), Some(2));
/// assert_eq!(route.position(2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    jobs: Vec<JobId>,
    total_duration: f64,
}

impl Route {
    /// Creates a route visiting the given jobs in order.
    pub fn new(id: RouteId, jobs: Vec<JobId>) -> Self {
        Self {
            id,
            jobs,
            total_duration: 0.0,
        }
    }

    /// Route ID.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Job IDs in visit order.
    pub fn jobs(&self) -> &[JobId] {
        &self.jobs
    }

    /// Number of jobs on this route.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if the route serves no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// First job visited.
    pub fn first(&self) -> Option<JobId> {
        self.jobs.first().copied()
    }

    /// Last job visited.
    pub fn last(&self) -> Option<JobId> {
        self.jobs.last().copied()
    }

    /// Index of `job` in the visit order, or `None` if the route does not serve it.
    pub fn position(&self, job: JobId) -> Option<usize> {
        self.jobs.iter().position(|&id| id == job)
    }

    /// Returns `true` if the route serves `job`.
    pub fn contains(&self, job: JobId) -> bool {
        self.position(job).is_some()
    }

    /// Total duration of this route (set by the evaluator).
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Sets the total duration.
    pub fn set_total_duration(&mut self, duration: f64) {
        self.total_duration = duration;
    }

    /// Appends a job to the end of the visit order.
    pub fn push(&mut self, job: JobId) {
        self.jobs.push(job);
    }

    /// Appends all jobs of `other`, in order, to this route.
    pub fn extend_from(&mut self, other: &Route) {
        self.jobs.extend_from_slice(&other.jobs);
    }
}

/// The live collection of routes, keyed by ID.
///
/// Iteration follows creation order; removed routes leave no gap in
/// iteration and their IDs are never reused.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::RouteSet;
///
/// let mut routes = RouteSet::new();
/// let a = routes.create(vec![1, 2]);
/// let b = routes.create(vec![3]);
/// assert_eq!(routes.len(), 2);
///
/// routes.remove(a);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes.iter().next().map(|r| r.id()), Some(b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: BTreeMap<RouteId, Route>,
    next_id: usize,
}

impl RouteSet {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Creates a route with a fresh ID and adds it to the collection.
    pub fn create(&mut self, jobs: Vec<JobId>) -> RouteId {
        let id = RouteId::new(self.next_id);
        self.next_id += 1;
        self.routes.insert(id, Route::new(id, jobs));
        id
    }

    /// Looks up a route.
    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// Looks up a route for modification.
    pub fn get_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.routes.get_mut(&id)
    }

    /// Removes a route, returning it if it was present.
    pub fn remove(&mut self, id: RouteId) -> Option<Route> {
        self.routes.remove(&id)
    }

    /// Number of live routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route is live.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates live routes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Consumes the collection, returning routes in creation order.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes.into_values().collect()
    }
}
