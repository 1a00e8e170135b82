//! Reading job lists and writing solutions.
//!
//! - [`read_jobs`] / [`parse_jobs`]: whitespace-separated job list with a header line
//! - [`write_solution`]: one `[id,id,...]` line per route
//! - [`write_solution_json`]: routes and durations as JSON

mod format;
mod parser;

pub use format::{format_route, write_solution, write_solution_json};
pub use parser::{parse_jobs, read_jobs, ParseError, ParseResult};
