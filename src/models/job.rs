//! Pickup-and-delivery jobs and the keyed job collection.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::{Point, RouteId};

/// Identifier of a job as read from input.
pub type JobId = i64;

/// A single point-to-point delivery.
///
/// The vehicle drives to `source`, loads, drives to `destination` and
/// unloads. The intrinsic `duration` (source to destination travel) is
/// computed once at construction.
///
/// A job also records the route it is currently assigned to. Assignment is
/// managed by the savings construction and is `None` until a route picks the
/// job up.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Job, Point};
///
/// let job = Job::new(7, Point::origin(), Point::new(3.0, 4.0).unwrap());
/// assert_eq!(job.id(), 7);
/// assert!((job.duration() - 5.0).abs() < 1e-10);
/// assert!(job.route().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    source: Point,
    destination: Point,
    duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<RouteId>,
}

impl Job {
    /// Creates an unassigned job.
    pub fn new(id: JobId, source: Point, destination: Point) -> Self {
        Self {
            id,
            source,
            destination,
            duration: source.distance_to(&destination),
            route: None,
        }
    }

    /// Job ID.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Pickup location.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Drop-off location.
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Time to execute the job once the vehicle is at the pickup.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Route currently serving this job, if any.
    pub fn route(&self) -> Option<RouteId> {
        self.route
    }

    /// Returns `true` if the job has been placed on a route.
    pub fn is_assigned(&self) -> bool {
        self.route.is_some()
    }

    pub(crate) fn assign(&mut self, route: RouteId) {
        self.route = Some(route);
    }

    pub(crate) fn unassign(&mut self) {
        self.route = None;
    }
}

/// Jobs keyed by ID, iterated in ascending ID order.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Job, JobSet, Point};
///
/// let mut jobs = JobSet::new();
/// jobs.insert(Job::new(2, Point::origin(), Point::origin()));
/// jobs.insert(Job::new(1, Point::origin(), Point::origin()));
/// assert_eq!(jobs.ids(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSet {
    jobs: BTreeMap<JobId, Job>,
}

impl JobSet {
    /// Creates an empty job set.
    pub fn new() -> Self {
        Self {
            jobs: BTreeMap::new(),
        }
    }

    /// Inserts a job, returning the job previously stored under the same ID.
    pub fn insert(&mut self, job: Job) -> Option<Job> {
        self.jobs.insert(job.id(), job)
    }

    /// Looks up a job by ID.
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.get_mut(&id)
    }

    /// Returns `true` if a job with this ID exists.
    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.contains_key(&id)
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if there are no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterates jobs in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    /// All job IDs in ascending order.
    pub fn ids(&self) -> Vec<JobId> {
        self.jobs.keys().copied().collect()
    }

    /// IDs of jobs not yet placed on a route, in ascending order.
    pub fn unassigned(&self) -> Vec<JobId> {
        self.iter()
            .filter(|job| !job.is_assigned())
            .map(Job::id)
            .collect()
    }

    /// Route of the given job, or `None` if the job is unknown or unassigned.
    pub fn route_of(&self, id: JobId) -> Option<RouteId> {
        self.get(id).and_then(Job::route)
    }

    pub(crate) fn assign(&mut self, id: JobId, route: RouteId) {
        if let Some(job) = self.get_mut(id) {
            job.assign(route);
        }
    }

    pub(crate) fn clear_assignments(&mut self) {
        for job in self.jobs.values_mut() {
            job.unassign();
        }
    }
}

impl Index<JobId> for JobSet {
    type Output = Job;

    /// # Panics
    ///
    /// Panics if no job has the given ID.
    fn index(&self, id: JobId) -> &Job {
        match self.jobs.get(&id) {
            Some(job) => job,
            None => panic!("unknown job id {id}"),
        }
    }
}

impl FromIterator<Job> for JobSet {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        let mut set = Self::new();
        for job in iter {
            set.insert(job);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).expect("finite")
    }

    #[test]
    fn test_job_duration_precomputed() {
        let job = Job::new(1, p(1.0, 1.0), p(4.0, 5.0));
        assert!((job.duration() - 5.0).abs() < 1e-10);
        assert_eq!(job.source(), p(1.0, 1.0));
        assert_eq!(job.destination(), p(4.0, 5.0));
    }

    #[test]
    fn test_job_assignment() {
        let mut job = Job::new(1, p(0.0, 0.0), p(1.0, 0.0));
        assert!(!job.is_assigned());
        job.assign(RouteId::new(3));
        assert_eq!(job.route(), Some(RouteId::new(3)));
        job.unassign();
        assert!(job.route().is_none());
    }

    #[test]
    fn test_job_set_ordering() {
        let jobs: JobSet = [5, 1, 3]
            .into_iter()
            .map(|id| Job::new(id, p(0.0, 0.0), p(1.0, 1.0)))
            .collect();
        assert_eq!(jobs.ids(), vec![1, 3, 5]);
        assert_eq!(jobs.len(), 3);
        assert!(jobs.contains(3));
        assert!(!jobs.contains(2));
    }

    #[test]
    fn test_job_set_insert_replaces() {
        let mut jobs = JobSet::new();
        assert!(jobs.insert(Job::new(1, p(0.0, 0.0), p(1.0, 0.0))).is_none());
        let prev = jobs.insert(Job::new(1, p(2.0, 0.0), p(3.0, 0.0)));
        assert!(prev.is_some());
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[1].source(), p(2.0, 0.0));
    }

    #[test]
    fn test_job_set_assignment_tracking() {
        let mut jobs: JobSet = (1..=3)
            .map(|id| Job::new(id, p(0.0, 0.0), p(1.0, 1.0)))
            .collect();
        jobs.assign(2, RouteId::new(0));
        assert_eq!(jobs.unassigned(), vec![1, 3]);
        assert_eq!(jobs.route_of(2), Some(RouteId::new(0)));
        assert_eq!(jobs.route_of(9), None);
        jobs.clear_assignments();
        assert_eq!(jobs.unassigned(), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "unknown job id 4")]
    fn test_job_set_index_unknown() {
        let jobs = JobSet::new();
        let _ = &jobs[4];
    }
}
