//! Anchored 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of interior cut positions `1 <= i < j <= n-2`, build the
//! candidate tour with the segment `[i..=j]` reversed and compare total
//! lengths. If the candidate is strictly shorter, adopt it immediately and
//! keep scanning (first-improvement strategy). Passes repeat until one
//! finds no improvement or the pass limit is reached.
//!
//! The first and last positions are never part of a reversal, so the start
//! and end anchors stay in place.
//!
//! # Complexity
//!
//! O(n²) candidate swaps per pass, each costing O(n) for the length
//! comparison. Distances come from a [`DistanceMatrix`] whose entries equal
//! direct recomputation, so outcomes match a naive implementation exactly.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, warn};

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Default upper bound on full 2-opt passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Applies anchored 2-opt improvement to a route.
///
/// Routes of three or fewer waypoints are returned unchanged. The result is
/// never longer than the input.
///
/// # Arguments
///
/// * `route` — Ordered waypoints; first and last are anchors
/// * `max_iterations` — Maximum number of full passes
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Route};
/// use walk_routing::local_search::{improve_tour, DEFAULT_MAX_ITERATIONS};
///
/// // Zig-zag along the equator: 0 → 2 → 1 → 3
/// let route = Route::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 0.02),
///     Point::new(0.0, 0.01),
///     Point::new(0.0, 0.03),
/// ]);
/// let improved = improve_tour(&route, DEFAULT_MAX_ITERATIONS);
/// assert!(improved.total_distance() < route.total_distance());
/// assert_eq!(improved.first(), route.first());
/// assert_eq!(improved.last(), route.last());
/// ```
pub fn improve_tour(route: &Route, max_iterations: usize) -> Route {
    let n = route.len();
    if n <= 3 {
        return route.clone();
    }

    let distances = DistanceMatrix::from_points(&route.points());
    let order: Vec<usize> = (0..n).collect();
    let improved = two_opt_order(&distances, order, max_iterations);

    let waypoints = route.waypoints();
    improved.iter().map(|&i| waypoints[i].clone()).collect()
}

/// Runs anchored 2-opt over a sequence of matrix indices.
///
/// The anchors are whatever indices occupy the first and last positions of
/// `order` on entry.
pub(crate) fn two_opt_order(
    distances: &DistanceMatrix,
    order: Vec<usize>,
    max_iterations: usize,
) -> Vec<usize> {
    let n = order.len();
    if n <= 3 {
        return order;
    }

    let start = order[0];
    let end = order[n - 1];
    let initial_length = distances.tour_length(&order);

    let mut current = order;
    let mut improved = true;
    let mut passes = 0;

    while improved && passes < max_iterations {
        improved = false;
        passes += 1;

        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let mut candidate = current.clone();
                candidate[i..=j].reverse();

                let old_length = distances.tour_length(&current);
                let new_length = distances.tour_length(&candidate);

                if new_length < old_length {
                    current = candidate;
                    improved = true;
                }
            }
        }
    }

    restore_anchors(&mut current, start, end);

    debug!(
        "2-opt finished after {passes} pass(es): {initial_length:.1} m -> {:.1} m",
        distances.tour_length(&current)
    );
    current
}

/// Moves `start` back to the front and `end` back to the back if either was
/// displaced.
fn restore_anchors(order: &mut Vec<usize>, start: usize, end: usize) {
    if order.first() != Some(&start) {
        if let Some(pos) = order.iter().position(|&c| c == start) {
            warn!("start anchor displaced to position {pos}; restoring");
            let anchor = order.remove(pos);
            order.insert(0, anchor);
        }
    }
    if order.last() != Some(&end) {
        if let Some(pos) = order.iter().position(|&c| c == end) {
            warn!("end anchor displaced to position {pos}; restoring");
            let anchor = order.remove(pos);
            order.push(anchor);
        }
    }
}
