//! Search areas along a route and candidate de-duplication.
//!
//! The place service is queried once per route segment, with a circle
//! centred on the segment midpoint. Neighbouring circles overlap, so the
//! merged result lists the same place several times.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Point, PoiCandidate};

/// Default search radius around each segment midpoint.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 500.0;

/// A circular area to query for points of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchArea {
    /// Circle centre.
    pub center: Point,
    /// Radius in meters.
    pub radius_m: f64,
}

/// One search area per consecutive pair of route points.
///
/// Fewer than two points yield no areas.
///
/// # Examples
///
/// ```
/// use walk_routing::models::Point;
/// use walk_routing::search::search_areas;
///
/// let areas = search_areas(&[Point::new(0.0, 0.0), Point::new(0.0, 0.02)], 500.0);
/// assert_eq!(areas.len(), 1);
/// assert_eq!(areas[0].center, Point::new(0.0, 0.01));
/// ```
pub fn search_areas(points: &[Point], radius_m: f64) -> Vec<SearchArea> {
    points
        .windows(2)
        .map(|w| SearchArea {
            center: w[0].midpoint(&w[1]),
            radius_m,
        })
        .collect()
}

/// Keeps the first candidate for each `source_id`, preserving order.
pub fn dedup_candidates(candidates: Vec<PoiCandidate>) -> Vec<PoiCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.source_id.clone()))
        .collect()
}
