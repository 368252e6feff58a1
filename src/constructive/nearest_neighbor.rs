//! Nearest-neighbor constructive heuristic with fixed anchors.
//!
//! Builds a visiting order greedily: starting from the first waypoint, always
//! walk to the nearest unvisited interior waypoint, then finish at the last
//! waypoint.
//!
//! # Complexity
//!
//! O(n²) where n = number of interior waypoints.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While tour quality
//! is typically 15-25% above optimal, it provides a fast baseline for 2-opt.

use log::trace;

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Orders the interior waypoints of a route by nearest neighbor.
///
/// The first and last waypoints stay in place. Routes of two or fewer
/// waypoints are returned unchanged. Ties go to the waypoint that appears
/// earliest in the input.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Route};
/// use walk_routing::constructive::build_tour;
///
/// let route = Route::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.0, 2.0),
///     Point::new(0.0, 4.0),
/// ]);
/// let tour = build_tour(&route);
/// let lons: Vec<f64> = tour.points().iter().map(|p| p.longitude()).collect();
/// assert_eq!(lons, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn build_tour(route: &Route) -> Route {
    let n = route.len();
    if n <= 2 {
        return route.clone();
    }

    let distances = DistanceMatrix::from_points(&route.points());
    let order = nearest_neighbor_order(&distances);
    trace!("nearest-neighbor order: {order:?}");

    let waypoints = route.waypoints();
    order.iter().map(|&i| waypoints[i].clone()).collect()
}

/// Computes the nearest-neighbor visiting order over matrix indices,
/// anchored at index 0 and index `size - 1`.
pub(crate) fn nearest_neighbor_order(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut remaining: Vec<usize> = (1..n - 1).collect();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    order.push(n - 1);
    order
}
