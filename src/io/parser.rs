//! Reader for the plain-text job list.
//!
//! ```text
//! loadNumber pickup destination
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```
//!
//! The first line is a header and is ignored. Every other non-blank line
//! holds a job ID and two `(x,y)` points separated by whitespace.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::models::{Job, JobId, JobSet, Point};

/// Why a job list could not be read.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The input has no job lines after the header.
    TooFewLines,
    /// A job line does not have exactly three fields.
    FieldCount { line: usize, found: usize },
    /// The job ID is not an integer.
    InvalidId { line: usize, value: String },
    /// A point is not of the form `(x,y)` with finite coordinates.
    InvalidPoint { line: usize, value: String },
    /// The job ID was already used on an earlier line.
    DuplicateId { line: usize, id: JobId },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "failed to read job list: {}", e),
            ParseError::TooFewLines => write!(f, "job list has no jobs after the header"),
            ParseError::FieldCount { line, found } => {
                write!(f, "line {}: expected 3 fields, found {}", line, found)
            }
            ParseError::InvalidId { line, value } => {
                write!(f, "line {}: invalid job id '{}'", line, value)
            }
            ParseError::InvalidPoint { line, value } => {
                write!(f, "line {}: invalid point '{}'", line, value)
            }
            ParseError::DuplicateId { line, id } => {
                write!(f, "line {}: duplicate job id {}", line, id)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Reads a job list from a file.
pub fn read_jobs(path: impl AsRef<Path>) -> ParseResult<JobSet> {
    let file = File::open(path)?;
    parse_jobs(BufReader::new(file))
}

/// Reads a job list from any buffered reader.
///
/// # Examples
///
/// ```
/// use u_vrppd::io::parse_jobs;
///
/// let input = "loadNumber pickup dropoff\n1 (0,1) (3,5)\n";
/// let jobs = parse_jobs(input.as_bytes()).unwrap();
/// assert_eq!(jobs.len(), 1);
/// assert!((jobs[1].duration() - 5.0).abs() < 1e-10);
/// ```
pub fn parse_jobs<R: BufRead>(reader: R) -> ParseResult<JobSet> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((idx + 1, line));
        }
    }
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines);
    }

    let mut jobs = JobSet::new();
    for (number, line) in lines.iter().skip(1) {
        let job = parse_line(*number, line)?;
        let id = job.id();
        if jobs.insert(job).is_some() {
            return Err(ParseError::DuplicateId { line: *number, id });
        }
    }
    Ok(jobs)
}

fn parse_line(line: usize, text: &str) -> ParseResult<Job> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ParseError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let id = fields[0].parse::<JobId>().map_err(|_| ParseError::InvalidId {
        line,
        value: fields[0].to_string(),
    })?;
    let source = parse_point(fields[1]).ok_or_else(|| ParseError::InvalidPoint {
        line,
        value: fields[1].to_string(),
    })?;
    let destination = parse_point(fields[2]).ok_or_else(|| ParseError::InvalidPoint {
        line,
        value: fields[2].to_string(),
    })?;

    Ok(Job::new(id, source, destination))
}

/// Parses `(x,y)`.
fn parse_point(text: &str) -> Option<Point> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Point::new(x.parse().ok()?, y.parse().ok()?)
}
