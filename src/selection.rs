//! Waypoint selection state for a planning session.
//!
//! Holds the stops a user has picked, in pick order, under a waypoint limit.
//! Callers own the value and pass it where it is needed.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::models::{Point, Route, Stop, Waypoint};

/// Effect of [`WaypointSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A new waypoint was added at this index.
    Added(usize),
    /// The existing waypoint at this index was removed.
    Removed(usize),
    /// Nothing changed because the selection is full.
    LimitReached,
}

/// The user's selected stops.
///
/// # Examples
///
/// ```
/// use walk_routing::models::{Point, Stop};
/// use walk_routing::selection::{Toggle, WaypointSelection};
///
/// let mut selection = WaypointSelection::new(5, 0.0005);
/// let here = Point::new(55.7558, 37.6173);
/// assert_eq!(selection.toggle(Stop::new(here)), Toggle::Added(0));
/// // A click within ~50 m of an existing stop removes it.
/// let nearby = Point::new(55.7560, 37.6175);
/// assert_eq!(selection.toggle(Stop::new(nearby)), Toggle::Removed(0));
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointSelection {
    route: Route,
    max_waypoints: usize,
    click_tolerance_deg: f64,
}

impl WaypointSelection {
    /// Creates an empty selection.
    pub fn new(max_waypoints: usize, click_tolerance_deg: f64) -> Self {
        Self {
            route: Route::new(),
            max_waypoints,
            click_tolerance_deg,
        }
    }

    /// Creates an empty selection using the limits from `config`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.max_waypoints, config.click_tolerance_deg)
    }

    /// Index of the first waypoint within the click tolerance of `point`.
    pub fn find_near(&self, point: &Point) -> Option<usize> {
        self.route
            .waypoints()
            .iter()
            .position(|w| w.point().approx_eq(point, self.click_tolerance_deg))
    }

    /// Removes the waypoint near the stop's position if there is one,
    /// otherwise adds the stop if the limit allows.
    pub fn toggle(&mut self, stop: Stop) -> Toggle {
        if let Some(index) = self.find_near(&stop.point) {
            self.route.remove(index);
            debug!("selection: removed waypoint {index}");
            return Toggle::Removed(index);
        }
        match self.add(stop) {
            Some(index) => Toggle::Added(index),
            None => Toggle::LimitReached,
        }
    }

    /// Appends a stop, returning its index, or `None` if the selection is
    /// full.
    pub fn add(&mut self, stop: Stop) -> Option<usize> {
        if self.is_full() {
            debug!("selection: limit of {} reached", self.max_waypoints);
            return None;
        }
        self.route.push(Waypoint::Ordinary(stop));
        Some(self.route.len() - 1)
    }

    /// Removes the waypoint at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Waypoint> {
        self.route.remove(index)
    }

    /// Moves the waypoint at `from` to index `to`. Returns `false` if either
    /// index is out of range.
    pub fn move_waypoint(&mut self, from: usize, to: usize) -> bool {
        self.route.move_waypoint(from, to)
    }

    /// Removes every waypoint.
    pub fn clear(&mut self) {
        self.route.clear();
    }

    /// Changes the limit. Existing waypoints beyond a lowered limit are kept.
    pub fn set_max_waypoints(&mut self, max_waypoints: usize) {
        self.max_waypoints = max_waypoints;
    }

    /// Current waypoint limit.
    pub fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }

    /// Returns `true` when no more waypoints may be added.
    pub fn is_full(&self) -> bool {
        self.route.len() >= self.max_waypoints
    }

    /// Selected waypoints in order.
    pub fn waypoints(&self) -> &[Waypoint] {
        self.route.waypoints()
    }

    /// Number of selected waypoints.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// The selection as a route, in pick order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Owned copy of [`route`](Self::route).
    pub fn to_route(&self) -> Route {
        self.route.clone()
    }
}
