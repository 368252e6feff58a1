//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::evaluation::DEFAULT_WALKING_SPEED_KMH;
use crate::local_search::DEFAULT_MAX_ITERATIONS;
use crate::models::DEFAULT_SAME_POINT_TOLERANCE_DEG;
use crate::search::DEFAULT_SEARCH_RADIUS_M;

/// Default waypoint budget for a route.
pub const DEFAULT_MAX_WAYPOINTS: usize = 5;

/// Tunable parameters for route planning.
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use walk_routing::config::PlannerConfig;
///
/// let config = PlannerConfig::from_json_str(r#"{"max_waypoints": 8}"#).unwrap();
/// assert_eq!(config.max_waypoints, 8);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of full 2-opt passes. Zero keeps the nearest-neighbor
    /// order as is.
    pub max_iterations: usize,
    /// Waypoint budget used when inserting points of interest.
    pub max_waypoints: usize,
    /// Coordinate tolerance, in degrees, for treating two clicks as one place.
    pub click_tolerance_deg: f64,
    /// Walking speed used for duration estimates.
    pub walking_speed_kmh: f64,
    /// Radius of each POI search area along the route.
    pub search_radius_m: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
            click_tolerance_deg: DEFAULT_SAME_POINT_TOLERANCE_DEG,
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.click_tolerance_deg.is_finite() && self.click_tolerance_deg >= 0.0) {
            return Err(PlanError::invalid_config(format!(
                "click_tolerance_deg must be a non-negative number, got {}",
                self.click_tolerance_deg
            )));
        }
        if !(self.walking_speed_kmh.is_finite() && self.walking_speed_kmh > 0.0) {
            return Err(PlanError::invalid_config(format!(
                "walking_speed_kmh must be positive, got {}",
                self.walking_speed_kmh
            )));
        }
        if !(self.search_radius_m.is_finite() && self.search_radius_m > 0.0) {
            return Err(PlanError::invalid_config(format!(
                "search_radius_m must be positive, got {}",
                self.search_radius_m
            )));
        }
        Ok(())
    }
}
