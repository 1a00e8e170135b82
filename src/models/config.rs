//! Depot location and route duration bound.

use serde::{Deserialize, Serialize};

use super::Point;

/// Default route duration bound: a twelve-hour shift, in minutes.
pub const DEFAULT_MAX_DURATION: f64 = 12.0 * 60.0;

/// Problem-wide constants shared by every route.
///
/// # Examples
///
/// ```
/// use u_vrppd::models::{Point, RoutingConfig};
///
/// let config = RoutingConfig::default()
///     .with_depot(Point::new(10.0, -5.0).unwrap())
///     .with_max_duration(480.0);
/// assert_eq!(config.depot().x(), 10.0);
/// assert_eq!(config.max_duration(), 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    depot: Point,
    max_duration: f64,
}

impl RoutingConfig {
    /// Creates a configuration.
    ///
    /// Returns `None` if `max_duration` is negative or non-finite.
    pub fn new(depot: Point, max_duration: f64) -> Option<Self> {
        if !max_duration.is_finite() || max_duration < 0.0 {
            return None;
        }
        Some(Self {
            depot,
            max_duration,
        })
    }

    /// Sets the depot.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the route duration bound.
    pub fn with_max_duration(mut self, max: f64) -> Self {
        self.max_duration = max;
        self
    }

    /// Start and end location of every route.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Inclusive upper bound on total route duration.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            depot: Point::origin(),
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let c = RoutingConfig::default();
        assert_eq!(c.depot(), Point::origin());
        assert_eq!(c.max_duration(), 720.0);
    }

    #[test]
    fn test_config_new_validates() {
        assert!(RoutingConfig::new(Point::origin(), 100.0).is_some());
        assert!(RoutingConfig::new(Point::origin(), 0.0).is_some());
        assert!(RoutingConfig::new(Point::origin(), -1.0).is_none());
        assert!(RoutingConfig::new(Point::origin(), f64::NAN).is_none());
        assert!(RoutingConfig::new(Point::origin(), f64::INFINITY).is_none());
    }

    #[test]
    fn test_config_builder() {
        let depot = Point::new(2.0, 3.0).expect("finite");
        let c = RoutingConfig::default()
            .with_depot(depot)
            .with_max_duration(60.0);
        assert_eq!(c.depot(), depot);
        assert_eq!(c.max_duration(), 60.0);
    }
}
