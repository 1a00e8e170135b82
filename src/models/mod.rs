//! Domain model types for pickup-and-delivery routing.
//!
//! Provides the core abstractions: points in the plane, jobs with a pickup
//! and a drop-off, routes as ordered job sequences, the live route
//! collection used during construction, and the problem-wide configuration.

mod config;
mod job;
mod point;
mod route;
mod solution;

pub use config::{RoutingConfig, DEFAULT_MAX_DURATION};
pub use job::{Job, JobId, JobSet};
pub use point::{distance, Point};
pub use route::{Route, RouteId, RouteSet};
pub use solution::{Solution, Violation, ViolationType};
