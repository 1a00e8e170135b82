//! # u-vrppd
//!
//! Single-depot pickup-and-delivery vehicle routing with a route duration
//! bound, solved with the Clarke-Wright savings heuristic.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Point, Job, Route, RouteSet, Solution, RoutingConfig)
//! - [`evaluation`]: Route duration and feasibility checking
//! - [`constructive`]: Savings computation and greedy route merging
//! - [`io`]: Job list parser and solution output
//!
//! ## Example
//!
//! ```
//! use u_vrppd::io::{parse_jobs, format_route};
//! use u_vrppd::models::RoutingConfig;
//!
//! let input = "loadNumber pickup dropoff\n1 (0,1) (0,10)\n2 (0,11) (0,20)\n";
//! let mut jobs = parse_jobs(input.as_bytes()).unwrap();
//! let solution = u_vrppd::solve(&mut jobs, &RoutingConfig::default());
//! assert_eq!(format_route(&solution.routes()[0]), "[1,2]");
//! ```

pub mod constructive;
pub mod evaluation;
pub mod io;
pub mod models;

pub use constructive::clarke_wright_savings as solve;
