//! # walk-routing
//!
//! Walking route planning: orders user-selected waypoints into a short
//! walk between a fixed start and end, and splices nearby points of interest
//! into the route without exceeding a waypoint budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Waypoint, Route, PoiCandidate)
//! - [`distance`] — Haversine and point-to-segment distances, distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — Anchored 2-opt improvement
//! - [`insertion`] — POI insertion planning under a waypoint budget
//! - [`evaluation`] — Route statistics and formatting
//! - [`search`] — POI categories, search areas, candidate de-duplication
//! - [`selection`] — Session waypoint selection
//! - [`planner`] — Validating entry points driven by [`config::PlannerConfig`]

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod insertion;
pub mod local_search;
pub mod models;
pub mod planner;
pub mod search;
pub mod selection;

pub use error::{PlanError, Result};
