//! Solution output.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::{JobId, Route, Solution};

/// Renders a route as `[id1,id2,...]`.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Route, RouteId};
/// use u_vrppd::io::format_route;
///
/// let route = Route::new(RouteId::new(0), vec![3, 1, 2]);
/// assert_eq!(format_route(&route), "[3,1,2]");
/// ```
pub fn format_route(route: &Route) -> String {
    let ids: Vec<String> = route.jobs().iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(","))
}

/// Writes one line per route, in solution order.
pub fn write_solution<W: Write>(mut out: W, solution: &Solution) -> io::Result<()> {
    for route in solution.routes() {
        writeln!(out, "{}", format_route(route))?;
    }
    out.flush()
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    jobs: &'a [JobId],
    duration: f64,
}

#[derive(Serialize)]
struct SolutionSummary<'a> {
    routes: Vec<RouteSummary<'a>>,
    total_duration: f64,
}

impl<'a> SolutionSummary<'a> {
    fn new(solution: &'a Solution) -> Self {
        Self {
            routes: solution
                .routes()
                .iter()
                .map(|r| RouteSummary {
                    jobs: r.jobs(),
                    duration: r.total_duration(),
                })
                .collect(),
            total_duration: solution.total_duration(),
        }
    }
}

/// Writes the routes and their durations as a JSON document.
pub fn write_solution_json<W: Write>(mut out: W, solution: &Solution) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, &SolutionSummary::new(solution))?;
    writeln!(out)?;
    out.flush()
}
