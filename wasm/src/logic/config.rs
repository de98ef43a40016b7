use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Weights and thresholds of the counter heuristic.
///
/// Deserializes from a partial object: any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub time_to_kill_weight: f64,
    pub bonus_damage_weight: f64,
    pub cost_efficiency_weight: f64,
    pub speed_edge_bonus: f64,
    pub range_edge_bonus: f64,
    pub manual_counter_boost: f64,
    /// Substituted for kill/death time when the relevant damage is zero.
    pub effectively_infinite_time: f64,
    pub cheap_cost_ratio: f64,
    pub default_limit: usize,
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self {
            time_to_kill_weight: TIME_TO_KILL_WEIGHT,
            bonus_damage_weight: BONUS_DAMAGE_WEIGHT,
            cost_efficiency_weight: COST_EFFICIENCY_WEIGHT,
            speed_edge_bonus: SPEED_EDGE_BONUS,
            range_edge_bonus: RANGE_EDGE_BONUS,
            manual_counter_boost: MANUAL_COUNTER_BOOST,
            effectively_infinite_time: EFFECTIVELY_INFINITE_TIME,
            cheap_cost_ratio: CHEAP_COST_RATIO,
            default_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}
