//! Point-of-interest candidates supplied by an external place service.

use serde::{Deserialize, Serialize};

use super::{Point, Stop, Waypoint};

/// A place of interest considered for inclusion in a route.
///
/// `source_id` is the identifier assigned by the place service and is used
/// to de-duplicate candidate lists.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, PoiCandidate};
///
/// let poi = PoiCandidate::new("70000001", "City Museum", Point::new(55.75, 37.61))
///     .with_category("museums");
/// let waypoint = poi.to_waypoint();
/// assert!(waypoint.is_point_of_interest());
/// assert_eq!(waypoint.display_name(), Some("City Museum"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiCandidate {
    /// External identifier.
    pub source_id: String,
    /// Place name.
    pub name: String,
    /// Free-form description, usually the address.
    #[serde(default)]
    pub description: String,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Position.
    pub point: Point,
}

impl PoiCandidate {
    /// Creates a candidate with an empty description and category.
    pub fn new(source_id: impl Into<String>, name: impl Into<String>, point: Point) -> Self {
        Self {
            source_id: source_id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            point,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Converts into a route waypoint: name becomes the display name and the
    /// description becomes the address.
    pub fn to_waypoint(&self) -> Waypoint {
        let mut stop = Stop::new(self.point).with_name(self.name.clone());
        if !self.description.is_empty() {
            stop = stop.with_address(self.description.clone());
        }
        if !self.category.is_empty() {
            stop = stop.with_category(self.category.clone());
        }
        Waypoint::PointOfInterest(stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_waypoint_maps_fields() {
        let poi = PoiCandidate::new("42", "Park", Point::new(1.0, 2.0))
            .with_description("Garden Ring 5")
            .with_category("parks");
        match poi.to_waypoint() {
            Waypoint::PointOfInterest(stop) => {
                assert_eq!(stop.point, Point::new(1.0, 2.0));
                assert_eq!(stop.display_name.as_deref(), Some("Park"));
                assert_eq!(stop.address.as_deref(), Some("Garden Ring 5"));
                assert_eq!(stop.category.as_deref(), Some("parks"));
            }
            other => panic!("expected POI waypoint, got {other:?}"),
        }
    }

    #[test]
    fn test_to_waypoint_skips_empty_fields() {
        let poi = PoiCandidate::new("1", "Bare", Point::new(0.0, 0.0));
        let stop = poi.to_waypoint().stop().clone();
        assert!(stop.address.is_none());
        assert!(stop.category.is_none());
    }

    #[test]
    fn test_deserialize_defaults() {
        let poi: PoiCandidate = serde_json::from_str(
            r#"{"source_id":"7","name":"X","point":{"latitude":1.0,"longitude":2.0}}"#,
        )
        .expect("deserialize");
        assert!(poi.description.is_empty());
        assert!(poi.category.is_empty());
    }
}
