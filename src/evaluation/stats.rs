//! Route length, walking-time estimate, and display formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// Average pedestrian speed.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 4.0;

/// Estimated walking time in whole minutes (rounded) for a distance.
///
/// # Examples
///
/// ```
/// use walk_routing::evaluation::estimate_walking_minutes;
///
/// assert_eq!(estimate_walking_minutes(2_000.0, 4.0), 30);
/// assert_eq!(estimate_walking_minutes(0.0, 4.0), 0);
/// ```
pub fn estimate_walking_minutes(distance_m: f64, speed_kmh: f64) -> u32 {
    if speed_kmh.is_nan() || speed_kmh <= 0.0 || !distance_m.is_finite() || distance_m <= 0.0 {
        return 0;
    }
    let hours = (distance_m / 1000.0) / speed_kmh;
    (hours * 60.0).round() as u32
}

/// Formats a distance: whole meters below 1 km, otherwise kilometers with
/// one decimal.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round())
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Formats a duration given in minutes as minutes, hours, or both.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours} h {mins} min")
    } else {
        format!("{hours} h")
    }
}

/// Summary figures for a route.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Route};
/// use walk_routing::evaluation::RouteStats;
///
/// let route = Route::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 0.018)]);
/// let stats = RouteStats::from_route(&route, 4.0);
/// assert_eq!(stats.waypoint_count, 2);
/// assert_eq!(stats.duration_min, 30);
/// assert_eq!(stats.to_string(), "2.0 km, 30 min");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteStats {
    /// Total route length in meters.
    pub distance_m: f64,
    /// Estimated walking time in minutes.
    pub duration_min: u32,
    /// Number of waypoints.
    pub waypoint_count: usize,
    /// Number of point-of-interest waypoints.
    pub poi_count: usize,
}

impl RouteStats {
    /// Computes statistics for `route` at the given walking speed.
    pub fn from_route(route: &Route, speed_kmh: f64) -> Self {
        let distance_m = route.total_distance();
        Self {
            distance_m,
            duration_min: estimate_walking_minutes(distance_m, speed_kmh),
            waypoint_count: route.len(),
            poi_count: route.poi_count(),
        }
    }
}

impl fmt::Display for RouteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format_distance(self.distance_m),
            format_duration(self.duration_min)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_estimate_walking_minutes() {
        assert_eq!(estimate_walking_minutes(4_000.0, 4.0), 60);
        assert_eq!(estimate_walking_minutes(1_000.0, 4.0), 15);
        assert_eq!(estimate_walking_minutes(1_000.0, 5.0), 12);
        assert_eq!(estimate_walking_minutes(10.0, 4.0), 0);
    }

    #[test]
    fn test_estimate_degenerate_inputs() {
        assert_eq!(estimate_walking_minutes(1_000.0, 0.0), 0);
        assert_eq!(estimate_walking_minutes(1_000.0, f64::NAN), 0);
        assert_eq!(estimate_walking_minutes(f64::INFINITY, 4.0), 0);
        assert_eq!(estimate_walking_minutes(-5.0, 4.0), 0);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(420.4), "420 m");
        assert_eq!(format_distance(999.4), "999 m");
        assert_eq!(format_distance(1_000.0), "1.0 km");
        assert_eq!(format_distance(12_345.0), "12.3 km");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(60), "1 h");
        assert_eq!(format_duration(135), "2 h 15 min");
    }

    #[test]
    fn test_stats_empty_route() {
        let stats = RouteStats::from_route(&Route::new(), DEFAULT_WALKING_SPEED_KMH);
        assert_eq!(stats, RouteStats::default());
    }

    #[test]
    fn test_stats_counts() {
        let mut route = Route::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 0.01)]);
        route.insert(
            1,
            crate::models::PoiCandidate::new("1", "p", Point::new(0.0, 0.005)).to_waypoint(),
        );
        let stats = RouteStats::from_route(&route, DEFAULT_WALKING_SPEED_KMH);
        assert_eq!(stats.waypoint_count, 3);
        assert_eq!(stats.poi_count, 1);
        assert!((stats.distance_m - 1_111.95).abs() < 0.1);
        assert_eq!(stats.duration_min, 17);
    }
}
