//! Point-of-interest insertion under a waypoint budget.
//!
//! - [`find_insertion_position`] / [`insertion_cost`] — Per-POI placement and detour cost
//! - [`rank_for_insertion`] — Cheapest-detour-first ordering
//! - [`insert_pois`] — Capacity-limited sequential insertion

mod planner;

pub use planner::{
    can_add_poi, find_insertion_position, insert_pois, insertion_cost, plan_insertion,
    rank_for_insertion, required_slots, InsertionOutcome, InsertionPlan,
};
