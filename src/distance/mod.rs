//! Geodesic distances and distance matrices.
//!
//! Provides haversine point distances, point-to-segment distance, and a dense
//! distance matrix for tour construction and improvement.

mod haversine;
mod matrix;

pub use haversine::{
    distance, path_length, point_to_segment_distance, project_onto_segment, EARTH_RADIUS_M,
};
pub use matrix::DistanceMatrix;
