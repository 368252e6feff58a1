//! Constructive heuristics for building an initial visiting order.
//!
//! - [`build_tour`] — Greedy nearest-neighbor ordering between fixed anchors, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::build_tour;
pub(crate) use nearest_neighbor::nearest_neighbor_order;
