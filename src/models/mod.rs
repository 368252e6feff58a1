//! Domain model types for walking routes.
//!
//! Provides geographic points, waypoints (ordinary stops and promoted points
//! of interest), routes as ordered waypoint sequences, and the POI candidates
//! supplied by an external place service.

mod poi;
mod point;
mod route;
mod waypoint;

pub use poi::PoiCandidate;
pub use point::{Point, DEFAULT_SAME_POINT_TOLERANCE_DEG};
pub use route::Route;
pub use waypoint::{Stop, Waypoint};
