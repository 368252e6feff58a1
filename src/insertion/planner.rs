//! Best-segment POI insertion.
//!
//! Two separate computations drive insertion:
//!
//! - **Position**: a POI goes right after the start of the route segment it
//!   is geometrically closest to (point-to-segment distance).
//! - **Cost**: the increase in total route length from splicing the POI in at
//!   that position.
//!
//! The position is not chosen to minimize the cost; the cost only ranks POIs
//! against each other.
//!
//! Ranking evaluates every POI against the original route. Insertion then
//! walks the ranked list and recomputes each position against the route as
//! modified by the insertions before it.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::{distance, point_to_segment_distance};
use crate::models::{Point, PoiCandidate, Route};

/// Where a POI would go in a route and what it would cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionPlan {
    /// The candidate being planned.
    pub candidate: PoiCandidate,
    /// Index the candidate would occupy after insertion (`0..=route.len()`).
    pub position: usize,
    /// Route length increase in meters.
    pub cost: f64,
}

/// Result of [`insert_pois`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionOutcome {
    /// The extended route.
    pub route: Route,
    /// Number of candidates spliced in.
    pub inserted_count: usize,
    /// Number of candidates left out.
    pub remaining_count: usize,
    /// `true` when the budget had fewer free slots than there were
    /// candidates, so the caller may offer to raise the limit.
    pub needs_expansion: bool,
}

impl InsertionOutcome {
    /// An outcome that leaves `route` untouched.
    pub fn unchanged(route: Route, candidate_count: usize) -> Self {
        Self {
            route,
            inserted_count: 0,
            remaining_count: candidate_count,
            needs_expansion: false,
        }
    }
}

/// Finds the index at which `point` should be inserted into `route`.
///
/// Routes with fewer than two waypoints get the point appended. Otherwise
/// the segment `(route[i], route[i + 1])` closest to the point wins (first
/// one on ties) and the result is `i + 1`.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Route};
/// use walk_routing::insertion::find_insertion_position;
///
/// let route = Route::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 0.01),
///     Point::new(0.0, 0.02),
/// ]);
/// assert_eq!(find_insertion_position(&Point::new(0.001, 0.015), &route), 2);
/// ```
pub fn find_insertion_position(point: &Point, route: &Route) -> usize {
    let waypoints = route.waypoints();
    if waypoints.len() < 2 {
        return waypoints.len();
    }

    let mut best_segment = 0;
    let mut best_distance = f64::INFINITY;
    for (i, pair) in waypoints.windows(2).enumerate() {
        let d = point_to_segment_distance(point, &pair[0].point(), &pair[1].point());
        if d < best_distance {
            best_distance = d;
            best_segment = i;
        }
    }

    best_segment + 1
}

/// Route length increase, in meters, from inserting `point` at `position`.
///
/// Position 0 costs the walk to the current start; a position at or past
/// the end costs the walk from the current end. Interior positions cost the
/// detour `d(prev, p) + d(p, next) - d(prev, next)`. An empty route costs 0.
pub fn insertion_cost(point: &Point, route: &Route, position: usize) -> f64 {
    let waypoints = route.waypoints();
    let Some(last) = waypoints.last() else {
        return 0.0;
    };

    if position == 0 {
        distance(point, &waypoints[0].point())
    } else if position >= waypoints.len() {
        distance(&last.point(), point)
    } else {
        let prev = waypoints[position - 1].point();
        let next = waypoints[position].point();
        distance(&prev, point) + distance(point, &next) - distance(&prev, &next)
    }
}

/// Plans the insertion of a single candidate.
pub fn plan_insertion(candidate: &PoiCandidate, route: &Route) -> InsertionPlan {
    let position = find_insertion_position(&candidate.point, route);
    let cost = insertion_cost(&candidate.point, route, position);
    InsertionPlan {
        candidate: candidate.clone(),
        position,
        cost,
    }
}

/// Plans every candidate against `route` and sorts by ascending cost.
///
/// The sort is stable, so equal costs keep their input order. Positions
/// refer to `route` as given and go stale once any plan is applied.
pub fn rank_for_insertion(candidates: &[PoiCandidate], route: &Route) -> Vec<InsertionPlan> {
    let mut plans: Vec<InsertionPlan> = candidates
        .iter()
        .map(|c| plan_insertion(c, route))
        .collect();
    plans.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    plans
}

/// Inserts as many candidates as the waypoint budget allows, cheapest first.
///
/// Free slots are `max_waypoints - route.len()` (zero if the route is
/// already at or over budget). Each inserted candidate becomes a
/// point-of-interest waypoint placed against the route as it stands after
/// the previous insertions. Existing waypoints keep their relative order.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, PoiCandidate, Route};
/// use walk_routing::insertion::insert_pois;
///
/// let route = Route::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 0.02)]);
/// let candidates = vec![
///     PoiCandidate::new("a", "Near", Point::new(0.001, 0.01)),
///     PoiCandidate::new("b", "Far", Point::new(0.01, 0.01)),
/// ];
/// let outcome = insert_pois(&route, &candidates, 3);
/// assert_eq!(outcome.inserted_count, 1);
/// assert_eq!(outcome.remaining_count, 1);
/// assert!(outcome.needs_expansion);
/// assert_eq!(outcome.route.waypoints()[1].display_name(), Some("Near"));
/// ```
pub fn insert_pois(
    route: &Route,
    candidates: &[PoiCandidate],
    max_waypoints: usize,
) -> InsertionOutcome {
    if candidates.is_empty() {
        return InsertionOutcome::unchanged(route.clone(), 0);
    }

    let available_slots = max_waypoints.saturating_sub(route.len());
    let needs_expansion = available_slots < candidates.len();
    let take = candidates.len().min(available_slots);

    let ranked = rank_for_insertion(candidates, route);

    let mut extended = route.clone();
    let mut inserted_count = 0;
    for plan in ranked.into_iter().take(take) {
        let position = find_insertion_position(&plan.candidate.point, &extended);
        debug!(
            "inserting POI {:?} at {position} (ranked at {} for {:.1} m)",
            plan.candidate.source_id, plan.position, plan.cost
        );
        extended.insert(position, plan.candidate.to_waypoint());
        inserted_count += 1;
    }

    InsertionOutcome {
        route: extended,
        inserted_count,
        remaining_count: candidates.len() - inserted_count,
        needs_expansion,
    }
}

/// Returns `true` if a route of `route_len` waypoints has room for another.
pub fn can_add_poi(route_len: usize, max_waypoints: usize) -> bool {
    route_len < max_waypoints
}

/// Waypoint budget needed to fit every candidate.
pub fn required_slots(route_len: usize, poi_count: usize) -> usize {
    route_len + poi_count
}
