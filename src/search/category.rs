//! Point-of-interest categories understood by the place service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A POI category and its place-service rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    /// Historic sites and architectural landmarks.
    Attractions,
    /// Museums and galleries.
    Museums,
    /// Theatres and concert halls.
    Theatres,
    /// Parks and recreation areas.
    Parks,
}

impl PoiCategory {
    /// Every category, in rubric order.
    pub const ALL: [PoiCategory; 4] = [
        PoiCategory::Attractions,
        PoiCategory::Museums,
        PoiCategory::Theatres,
        PoiCategory::Parks,
    ];

    /// Rubric identifier used when querying the place service.
    pub fn rubric_id(self) -> u32 {
        match self {
            PoiCategory::Attractions => 168,
            PoiCategory::Museums => 220,
            PoiCategory::Theatres => 221,
            PoiCategory::Parks => 222,
        }
    }

    /// Stable lowercase identifier.
    pub fn slug(self) -> &'static str {
        match self {
            PoiCategory::Attractions => "attractions",
            PoiCategory::Museums => "museums",
            PoiCategory::Theatres => "theatres",
            PoiCategory::Parks => "parks",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PoiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoiCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| format!("unknown POI category: {s}"))
    }
}

/// Rubric ids to query for a category selection; an empty selection means
/// every category.
///
/// # Examples
///
/// ```
/// use walk_routing::search::{rubric_ids_for, PoiCategory};
///
/// assert_eq!(rubric_ids_for(&[]), vec![168, 220, 221, 222]);
/// assert_eq!(rubric_ids_for(&[PoiCategory::Parks]), vec![222]);
/// ```
pub fn rubric_ids_for(selected: &[PoiCategory]) -> Vec<u32> {
    if selected.is_empty() {
        return PoiCategory::ALL.iter().map(|c| c.rubric_id()).collect();
    }
    PoiCategory::ALL
        .iter()
        .filter(|c| selected.contains(*c))
        .map(|c| c.rubric_id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_ids() {
        assert_eq!(PoiCategory::Attractions.rubric_id(), 168);
        assert_eq!(PoiCategory::Museums.rubric_id(), 220);
        assert_eq!(PoiCategory::Theatres.rubric_id(), 221);
        assert_eq!(PoiCategory::Parks.rubric_id(), 222);
    }

    #[test]
    fn test_selection_keeps_rubric_order() {
        let ids = rubric_ids_for(&[PoiCategory::Parks, PoiCategory::Museums]);
        assert_eq!(ids, vec![220, 222]);
    }

    #[test]
    fn test_from_str_round_trip() {
        for c in PoiCategory::ALL {
            assert_eq!(c.slug().parse::<PoiCategory>(), Ok(c));
        }
        assert!("zoos".parse::<PoiCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&PoiCategory::Theatres).expect("serialize");
        assert_eq!(json, r#""theatres""#);
    }
}
