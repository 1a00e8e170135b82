//! Route evaluator that computes duration and feasibility.

use crate::models::{
    distance, JobId, JobSet, Route, RouteId, RoutingConfig, Solution, Violation, ViolationType,
};

/// Evaluates job sequences against the depot and duration bound.
///
/// The duration of a sequence is the drive from the depot to the first
/// pickup, each job's own duration, the empty drives from every drop-off to
/// the next pickup, and the drive from the last drop-off back to the depot.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Job, JobSet, Point, RoutingConfig};
/// use u_vrppd::evaluation::RouteEvaluator;
///
/// let jobs: JobSet = vec![
///     Job::new(1, Point::new(3.0, 4.0).unwrap(), Point::new(3.0, 10.0).unwrap()),
/// ]
/// .into_iter()
/// .collect();
/// let config = RoutingConfig::default();
///
/// let evaluator = RouteEvaluator::new(&jobs, &config);
/// // 5 out, 6 on the job, back from (3, 10)
/// let expected = 5.0 + 6.0 + (9.0f64 + 100.0).sqrt();
/// assert!((evaluator.duration(&[1]) - expected).abs() < 1e-10);
/// assert!(evaluator.is_feasible(&[1]));
/// ```
pub struct RouteEvaluator<'a> {
    jobs: &'a JobSet,
    config: &'a RoutingConfig,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(jobs: &'a JobSet, config: &'a RoutingConfig) -> Self {
        Self { jobs, config }
    }

    /// Total duration of visiting `job_ids` in order, depot to depot.
    ///
    /// An empty sequence takes no time.
    ///
    /// # Panics
    ///
    /// Panics if a job ID is not in the job set.
    pub fn duration(&self, job_ids: &[JobId]) -> f64 {
        self.duration_of(job_ids)
    }

    /// Same as [`duration`](Self::duration), over any job ID sequence.
    ///
    /// Lets callers evaluate a concatenation of routes without building it.
    pub fn duration_of<'b, I>(&self, job_ids: I) -> f64
    where
        I: IntoIterator<Item = &'b JobId>,
    {
        let depot = self.config.depot();
        let mut total = 0.0;
        let mut prev = None;

        for &id in job_ids {
            let job = &self.jobs[id];
            let from = prev.unwrap_or(depot);
            total += distance(&from, &job.source()) + job.duration();
            prev = Some(job.destination());
        }

        match prev {
            Some(last) => total + distance(&last, &depot),
            None => 0.0,
        }
    }

    /// Returns `true` if `duration` is within the bound (inclusive).
    pub fn fits(&self, duration: f64) -> bool {
        duration <= self.config.max_duration()
    }

    /// Returns `true` if visiting `job_ids` in order respects the bound.
    pub fn is_feasible(&self, job_ids: &[JobId]) -> bool {
        self.fits(self.duration(job_ids))
    }

    /// Builds a route from a sequence of job IDs, computing its duration.
    ///
    /// Returns the constructed route and any constraint violations found.
    pub fn build_route(&self, id: RouteId, job_ids: &[JobId]) -> (Route, Vec<Violation>) {
        let mut route = Route::new(id, job_ids.to_vec());
        let duration = self.duration(job_ids);
        route.set_total_duration(duration);
        (route, self.check(id, duration))
    }

    /// Evaluates an entire solution, returning `(total_duration, violations)`.
    ///
    /// Durations are recomputed from the job data rather than read from the
    /// routes.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let mut total = 0.0;
        let mut violations = Vec::new();

        for route in solution.routes() {
            let duration = self.duration(route.jobs());
            total += duration;
            violations.extend(self.check(route.id(), duration));
        }

        (total, violations)
    }

    fn check(&self, route_id: RouteId, duration: f64) -> Vec<Violation> {
        if self.fits(duration) {
            return Vec::new();
        }
        vec![Violation::new(ViolationType::MaxDurationExceeded {
            route_id,
            duration,
            max_duration: self.config.max_duration(),
        })]
    }
}
