//! Local search operators for improving a visiting order.
//!
//! - [`improve_tour`] — Anchored intra-route 2-opt segment reversal

mod two_opt;

pub use two_opt::{improve_tour, DEFAULT_MAX_ITERATIONS};
pub(crate) use two_opt::two_opt_order;
