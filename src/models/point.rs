//! Geographic point type.

use serde::{Deserialize, Serialize};

/// Default tolerance for "same point" detection, in degrees (roughly 50 m).
pub const DEFAULT_SAME_POINT_TOLERANCE_DEG: f64 = 0.0005;

/// A latitude/longitude pair in degrees.
///
/// Equality via `==` is exact on both coordinates; use
/// [`Point::approx_eq`] to treat nearby clicks as the same location.
///
/// # Examples
///
/// ```
/// use walk_routing::models::Point;
///
/// let p = Point::new(55.7558, 37.6173);
/// assert!(p.is_valid());
/// assert!(p.approx_eq(&Point::new(55.7560, 37.6170), 0.0005));
/// assert!(!Point::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Returns `true` if both coordinates are finite and within their ranges
    /// (latitude in [-90, 90], longitude in [-180, 180]).
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns `true` if both coordinate differences are strictly below
    /// `tolerance_deg`.
    pub fn approx_eq(&self, other: &Point, tolerance_deg: f64) -> bool {
        (self.latitude - other.latitude).abs() < tolerance_deg
            && (self.longitude - other.longitude).abs() < tolerance_deg
    }

    /// Arithmetic midpoint in degree space.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }
}
