//! Route planning entry points.
//!
//! These functions validate their input and never fail: a rejected input is
//! logged at `warn` level and the route comes back unchanged.

use std::collections::HashSet;

use log::{debug, warn};

use crate::config::PlannerConfig;
use crate::constructive::nearest_neighbor_order;
use crate::distance::DistanceMatrix;
use crate::error::{PlanError, Result};
use crate::insertion::{insert_pois, InsertionOutcome};
use crate::local_search::two_opt_order;
use crate::models::{PoiCandidate, Route};

/// Checks that every waypoint has finite, in-range coordinates.
pub fn validate_route(route: &Route) -> Result<()> {
    for (index, waypoint) in route.waypoints().iter().enumerate() {
        let p = waypoint.point();
        if !p.is_valid() {
            return Err(PlanError::InvalidWaypoint {
                index,
                latitude: p.latitude(),
                longitude: p.longitude(),
            });
        }
    }
    Ok(())
}

/// Checks candidate coordinates and that no `source_id` repeats.
pub fn validate_candidates(candidates: &[PoiCandidate]) -> Result<()> {
    let mut seen = HashSet::new();
    for c in candidates {
        if !c.point.is_valid() {
            return Err(PlanError::InvalidCandidate {
                source_id: c.source_id.clone(),
                latitude: c.point.latitude(),
                longitude: c.point.longitude(),
            });
        }
        if !seen.insert(c.source_id.as_str()) {
            return Err(PlanError::DuplicateSourceId(c.source_id.clone()));
        }
    }
    Ok(())
}

/// Orders a route by nearest neighbor and then improves it with 2-opt.
///
/// The first and last waypoints stay in place. A waypoint with bad
/// coordinates yields the route unchanged. Only `config.max_iterations` is
/// read; a limit of zero returns the nearest-neighbor order.
///
/// # Examples
///
/// ```
/// use walk_routing::config::PlannerConfig;
/// use walk_routing::models::{Point, Route};
/// use walk_routing::planner::build_and_optimize_route;
///
/// let route = Route::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 0.03),
///     Point::new(0.0, 0.01),
///     Point::new(0.0, 0.02),
///     Point::new(0.0, 0.04),
/// ]);
/// let optimized = build_and_optimize_route(&route, &PlannerConfig::default());
/// assert!(optimized.total_distance() <= route.total_distance());
/// assert_eq!(optimized.first(), route.first());
/// assert_eq!(optimized.last(), route.last());
/// ```
pub fn build_and_optimize_route(route: &Route, config: &PlannerConfig) -> Route {
    if let Err(err) = validate_route(route) {
        warn!("route optimization skipped: {err}");
        return route.clone();
    }
    if route.len() <= 2 {
        return route.clone();
    }

    let distances = DistanceMatrix::from_points(&route.points());
    let tour = nearest_neighbor_order(&distances);
    let improved = two_opt_order(&distances, tour, config.max_iterations);
    debug!(
        "optimized {} waypoints: {:.1} m",
        route.len(),
        distances.tour_length(&improved)
    );

    let waypoints = route.waypoints();
    improved.iter().map(|&i| waypoints[i].clone()).collect()
}

/// Inserts points of interest into a route within the configured waypoint
/// budget.
///
/// Invalid input (bad coordinates, a repeated `source_id`) yields the route
/// unchanged with nothing inserted.
pub fn insert_pois_into_route(
    route: &Route,
    candidates: &[PoiCandidate],
    config: &PlannerConfig,
) -> InsertionOutcome {
    if let Err(err) = validate_route(route).and_then(|()| validate_candidates(candidates)) {
        warn!("POI insertion skipped: {err}");
        return InsertionOutcome::unchanged(route.clone(), candidates.len());
    }

    let outcome = insert_pois(route, candidates, config.max_waypoints);
    debug!(
        "inserted {} of {} POIs ({} remaining, limit {})",
        outcome.inserted_count,
        candidates.len(),
        outcome.remaining_count,
        config.max_waypoints
    );
    outcome
}
