//! Route type: an ordered sequence of waypoints.

use serde::{Deserialize, Serialize};

use super::{Point, Waypoint};
use crate::distance::path_length;

/// An ordered sequence of waypoints.
///
/// When a route has two or more waypoints, the first and last are anchors
/// (start and end) that optimization never relocates.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Route, Waypoint};
///
/// let mut route = Route::new();
/// route.push(Waypoint::at(Point::new(0.0, 0.0)));
/// route.push(Waypoint::at(Point::new(0.0, 1.0)));
/// assert_eq!(route.len(), 2);
/// assert!(route.total_distance() > 111_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Creates a route of ordinary waypoints from bare points.
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().copied().map(Waypoint::at).collect()
    }

    /// Appends a waypoint to the end of this route.
    pub fn push(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Inserts a waypoint at `index`, shifting later waypoints back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, waypoint: Waypoint) {
        self.waypoints.insert(index, waypoint);
    }

    /// Removes and returns the waypoint at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Waypoint> {
        if index < self.waypoints.len() {
            Some(self.waypoints.remove(index))
        } else {
            None
        }
    }

    /// Moves the waypoint at `from` so that it ends up at index `to`.
    ///
    /// Returns `false` and leaves the route untouched if either index is out
    /// of range.
    pub fn move_waypoint(&mut self, from: usize, to: usize) -> bool {
        let n = self.waypoints.len();
        if from >= n || to >= n {
            return false;
        }
        let moved = self.waypoints.remove(from);
        self.waypoints.insert(to, moved);
        true
    }

    /// Removes every waypoint.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    /// Returns the ordered waypoints.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Consumes the route, returning its waypoints.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    /// Returns the waypoint positions in order.
    pub fn points(&self) -> Vec<Point> {
        self.waypoints.iter().map(Waypoint::point).collect()
    }

    /// Returns the waypoint at `index`.
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Start anchor.
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// End anchor.
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if this route has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of waypoints that are promoted points of interest.
    pub fn poi_count(&self) -> usize {
        self.waypoints
            .iter()
            .filter(|w| w.is_point_of_interest())
            .count()
    }

    /// Sum of consecutive great-circle distances, in meters.
    pub fn total_distance(&self) -> f64 {
        path_length(&self.points())
    }
}

impl From<Vec<Waypoint>> for Route {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }
}

impl FromIterator<Waypoint> for Route {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self {
            waypoints: iter.into_iter().collect(),
        }
    }
}
