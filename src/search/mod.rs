//! Support for the external POI search.
//!
//! The crate never performs the search itself. It supplies the category
//! rubrics, the areas to query along a route, and the merge step for the
//! fetched candidate lists.

mod buffer;
mod category;

pub use buffer::{dedup_candidates, search_areas, SearchArea, DEFAULT_SEARCH_RADIUS_M};
pub use category::{rubric_ids_for, PoiCategory};
