use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, Command};
use std::{io, path::PathBuf};
use tracing::{info, Level};
use u_vrppd::io::{read_jobs, write_solution, write_solution_json};
use u_vrppd::models::{Point, RoutingConfig};
#[cfg(test)]
use u_vrppd::models::DEFAULT_MAX_DURATION;

fn cli() -> Command {
    Command::new("u-vrppd")
        .about("Groups pickup-and-delivery jobs into depot-to-depot routes")
        .arg(arg!(<FILE> "Job list: header line, then `id (x,y) (x,y)` per line")
            .value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(--"max-duration" <MINUTES> "Upper bound on total route duration")
                .default_value("720")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--depot <POINT> "Depot location as x,y")
                .default_value("0,0")
                .value_parser(parse_depot),
        )
        .arg(
            arg!(--format <FORMAT> "Output format")
                .default_value("lines")
                .value_parser(["lines", "json"]),
        )
        .arg(arg!(-v --verbose "Log merges to stderr (repeat for more)").action(ArgAction::Count))
}

fn parse_depot(s: &str) -> Result<Point, String> {
    let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    Point::new(x, y).ok_or_else(|| "coordinates must be finite".to_string())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let path = matches
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow!("missing job list"))?;
    let max_duration = *matches
        .get_one::<f64>("max-duration")
        .ok_or_else(|| anyhow!("missing --max-duration"))?;
    let depot = *matches
        .get_one::<Point>("depot")
        .ok_or_else(|| anyhow!("missing --depot"))?;
    let config = RoutingConfig::new(depot, max_duration)
        .ok_or_else(|| anyhow!("--max-duration must be finite and non-negative"))?;

    let mut jobs =
        read_jobs(path).with_context(|| format!("failed to load {}", path.display()))?;
    info!(jobs = jobs.len(), path = %path.display(), "job list loaded");

    let solution = u_vrppd::solve(&mut jobs, &config);

    let stdout = io::stdout().lock();
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => write_solution_json(stdout, &solution)?,
        _ => write_solution(stdout, &solution)?,
    }
    Ok(())
}
