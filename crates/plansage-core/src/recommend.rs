//! Slot recommendation.
//!
//! Every free cell gets `base + time_weight - fatigue`; the best few are
//! returned, highest score first.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarGrid, Day, Hour, Slot};
use crate::fatigue::FatigueScore;

/// Number of recommendations returned by [`recommend`].
pub const DEFAULT_TOP_N: usize = 5;

/// Score of a free slot before weighting and fatigue.
pub const DEFAULT_BASE_SCORE: i32 = 10;

/// A scored, currently free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub day: Day,
    pub hour: Hour,
    pub score: i32,
}

impl Recommendation {
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.hour)
    }
}

/// Tunables for [`recommend_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub top_n: usize,
    pub base_score: i32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            base_score: DEFAULT_BASE_SCORE,
        }
    }
}

/// Time of day weighting.
///
/// - 10시..=12시: +2
/// - 14시..=15시: +1
/// - anything else: -1
pub fn time_weight(hour: Hour) -> i32 {
    match hour.value() {
        10..=12 => 2,
        14..=15 => 1,
        _ => -1,
    }
}

/// Top five free slots for the given fatigue, best first.
pub fn recommend(grid: &CalendarGrid, fatigue: FatigueScore) -> Vec<Recommendation> {
    recommend_with(grid, fatigue, &RecommendConfig::default())
}

/// Like [`recommend`] with explicit tunables.
///
/// Ties keep enumeration order (day-major, then hour).
pub fn recommend_with(
    grid: &CalendarGrid,
    fatigue: FatigueScore,
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    let penalty = fatigue.value() as i32;
    let mut scored: Vec<Recommendation> = grid
        .free_slots()
        .map(|slot| Recommendation {
            day: slot.day,
            hour: slot.hour,
            score: config
                .base_score
                .saturating_add(time_weight(slot.hour))
                .saturating_sub(penalty),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(config.top_n);

    tracing::debug!(
        fatigue = penalty,
        returned = scored.len(),
        best = scored.first().map(|r| r.score),
        "computed slot recommendations"
    );
    scored
}
