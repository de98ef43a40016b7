use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// Additive scoring signals for one candidate against one enemy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub time_to_kill: f64,
    pub bonus_damage: f64,
    pub cost_efficiency: f64,
    pub speed_edge: f64,
    pub range_edge: f64,
    pub manual_boost: f64,
}

impl ScoreBreakdown {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.time_to_kill
            + self.bonus_damage
            + self.cost_efficiency
            + self.speed_edge
            + self.range_edge
            + self.manual_boost
    }
}

/// One ranked recommendation handed back to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterResult {
    pub unit: Unit,
    /// Display score, rounded half-up.
    pub score: i64,
    pub raw_score: f64,
    pub bonus_damage: f64,
    pub reason: String,
    pub breakdown: ScoreBreakdown,
}

/// Rounds like the browser's `Math.round`: halves go towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
