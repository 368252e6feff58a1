//! Waypoint types: ordinary stops and promoted points of interest.

use serde::{Deserialize, Serialize};

use super::Point;

/// Location and descriptive data shared by every kind of waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Geographic position.
    pub point: Point,
    /// Human-readable name, if resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Street address, if resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Category tag (e.g. a museum or park).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Stop {
    /// Creates a stop with only a position.
    pub fn new(point: Point) -> Self {
        Self {
            point,
            display_name: None,
            address: None,
            category: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A stop within a route.
///
/// User-selected stops and points of interest spliced in by the insertion
/// planner are distinct variants; both carry a [`Stop`].
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Waypoint};
///
/// let w = Waypoint::at(Point::new(55.75, 37.61));
/// assert!(!w.is_point_of_interest());
/// assert_eq!(w.point().latitude(), 55.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waypoint {
    /// A stop the user selected directly.
    Ordinary(Stop),
    /// A point of interest promoted into the route.
    PointOfInterest(Stop),
}

impl Waypoint {
    /// Creates an ordinary waypoint with no descriptive data.
    pub fn at(point: Point) -> Self {
        Waypoint::Ordinary(Stop::new(point))
    }

    /// The underlying stop data.
    pub fn stop(&self) -> &Stop {
        match self {
            Waypoint::Ordinary(stop) | Waypoint::PointOfInterest(stop) => stop,
        }
    }

    /// Geographic position.
    pub fn point(&self) -> Point {
        self.stop().point
    }

    /// Display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.stop().display_name.as_deref()
    }

    /// Category tag, if any.
    pub fn category(&self) -> Option<&str> {
        self.stop().category.as_deref()
    }

    /// Returns `true` for the [`Waypoint::PointOfInterest`] variant.
    pub fn is_point_of_interest(&self) -> bool {
        matches!(self, Waypoint::PointOfInterest(_))
    }
}

impl From<Point> for Waypoint {
    fn from(point: Point) -> Self {
        Waypoint::at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_builder() {
        let stop = Stop::new(Point::new(1.0, 2.0))
            .with_name("Tower")
            .with_address("1 Main St")
            .with_category("museums");
        assert_eq!(stop.display_name.as_deref(), Some("Tower"));
        assert_eq!(stop.address.as_deref(), Some("1 Main St"));
        assert_eq!(stop.category.as_deref(), Some("museums"));
    }

    #[test]
    fn test_waypoint_variants() {
        let stop = Stop::new(Point::new(1.0, 2.0)).with_name("A");
        let ordinary = Waypoint::Ordinary(stop.clone());
        let poi = Waypoint::PointOfInterest(stop);
        assert!(!ordinary.is_point_of_interest());
        assert!(poi.is_point_of_interest());
        assert_eq!(ordinary.point(), poi.point());
        assert_eq!(poi.display_name(), Some("A"));
    }

    #[test]
    fn test_waypoint_from_point() {
        let w: Waypoint = Point::new(3.0, 4.0).into();
        assert_eq!(w.point(), Point::new(3.0, 4.0));
        assert!(w.display_name().is_none());
        assert!(w.category().is_none());
    }

    #[test]
    fn test_waypoint_json_tag() {
        let w = Waypoint::PointOfInterest(Stop::new(Point::new(0.0, 0.0)));
        let json = serde_json::to_value(&w).expect("serialize");
        assert_eq!(json["kind"], "point_of_interest");
        let back: Waypoint = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, w);
    }
}
