//! Route statistics and display formatting.

mod stats;

pub use stats::{
    estimate_walking_minutes, format_distance, format_duration, RouteStats,
    DEFAULT_WALKING_SPEED_KMH,
};
