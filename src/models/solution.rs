//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::{JobId, Route, RouteId};

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Route duration exceeds the configured maximum.
    MaxDurationExceeded {
        /// Route that is too long.
        route_id: RouteId,
        /// Actual duration.
        duration: f64,
        /// Maximum allowed duration.
        max_duration: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A partition of jobs into depot-to-depot routes.
///
/// Routes are kept in the order they were created during construction.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Route, RouteId, Solution};
///
/// let sol = Solution::from_routes(vec![
///     Route::new(RouteId::new(0), vec![1, 2]),
///     Route::new(RouteId::new(3), vec![3]),
/// ]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.route_of(3), Some(RouteId::new(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Creates a solution from routes in their final order.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of jobs served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Sum of route durations.
    pub fn total_duration(&self) -> f64 {
        self.routes.iter().map(Route::total_duration).sum()
    }

    /// Route serving `job`, if any.
    pub fn route_of(&self, job: JobId) -> Option<RouteId> {
        self.routes
            .iter()
            .find(|route| route.contains(job))
            .map(Route::id)
    }

    /// Job IDs of every route, in route order.
    pub fn job_ids(&self) -> Vec<Vec<JobId>> {
        self.routes.iter().map(|r| r.jobs().to_vec()).collect()
    }
}
