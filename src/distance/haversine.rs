//! Great-circle distances.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_M`]. Point-to-segment distance projects in degree space,
//! which is accurate enough for short urban segments.

use crate::models::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
///
/// # Examples
///
/// ```
/// use walk_routing::models::Point;
/// use walk_routing::distance::distance;
///
/// let berlin = Point::new(52.5200, 13.4050);
/// let paris = Point::new(48.8566, 2.3522);
/// let d = distance(&berlin, &paris);
/// assert!((d - 878_000.0).abs() < 10_000.0);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    let (lat1, lon1) = a.to_radians();
    let (lat2, lon2) = b.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Distance from `p` to the closest point on the segment `start`–`end`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// projects onto `start`.
///
/// # Examples
///
/// ```
/// use walk_routing::models::Point;
/// use walk_routing::distance::{distance, point_to_segment_distance};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(0.0, 2.0);
/// let above = Point::new(1.0, 1.0);
/// let d = point_to_segment_distance(&above, &a, &b);
/// assert!((d - distance(&above, &Point::new(0.0, 1.0))).abs() < 1e-6);
/// ```
pub fn point_to_segment_distance(p: &Point, start: &Point, end: &Point) -> f64 {
    distance(p, &project_onto_segment(p, start, end))
}

/// Closest point to `p` on the segment `start`–`end`, in degree space.
pub fn project_onto_segment(p: &Point, start: &Point, end: &Point) -> Point {
    let dx = p.latitude() - start.latitude();
    let dy = p.longitude() - start.longitude();
    let sx = end.latitude() - start.latitude();
    let sy = end.longitude() - start.longitude();

    let len_sq = sx * sx + sy * sy;
    if len_sq == 0.0 {
        return *start;
    }

    let t = (dx * sx + dy * sy) / len_sq;
    if t < 0.0 {
        *start
    } else if t > 1.0 {
        *end
    } else {
        Point::new(start.latitude() + t * sx, start.longitude() + t * sy)
    }
}

/// Sum of consecutive distances along `points`, in meters.
///
/// Returns 0 for fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
