use std::cmp::Ordering;

use super::config::ScoringConfig;
use super::reason::build_reason;
use super::scoring::{bonus_damage, score_breakdown};
use super::tech_commentary::{tech_commentary, TechContext};
use crate::types::{round_half_up, Civilisation, CounterResult, ManualCounters, Unit};

/// Which enemy to counter, for which civilisation, and how many answers.
#[derive(Debug, Clone, Copy)]
pub struct CounterQuery<'a> {
    pub enemy_unit_id: &'a str,
    pub civ_id: &'a str,
    /// Falls back to `ScoringConfig::default_limit`.
    pub limit: Option<usize>,
}

impl<'a> CounterQuery<'a> {
    pub fn new(enemy_unit_id: &'a str, civ_id: &'a str) -> Self {
        Self {
            enemy_unit_id,
            civ_id,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn sort_key(result: &CounterResult) -> f64 {
    if result.raw_score.is_nan() {
        f64::NEG_INFINITY
    } else {
        result.raw_score
    }
}

fn by_score_descending(a: &CounterResult, b: &CounterResult) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

/// Best counters to the enemy among the units the civilisation can train.
///
/// Unknown enemy or civ ids yield an empty list. Results are ordered by
/// unrounded score, highest first; equal scores keep the order of `units`.
pub fn get_counters(
    query: &CounterQuery<'_>,
    units: &[Unit],
    civs: &[Civilisation],
    manual: &ManualCounters,
    tech: TechContext<'_>,
    config: &ScoringConfig,
) -> Vec<CounterResult> {
    let Some(enemy) = units.iter().find(|unit| unit.id == query.enemy_unit_id) else {
        log::warn!("get_counters: unknown enemy unit `{}`", query.enemy_unit_id);
        return Vec::new();
    };
    let Some(civ) = civs.iter().find(|civ| civ.id == query.civ_id) else {
        log::warn!("get_counters: unknown civilisation `{}`", query.civ_id);
        return Vec::new();
    };

    let limit = query.limit.unwrap_or(config.default_limit);

    let mut results: Vec<CounterResult> = units
        .iter()
        .filter(|candidate| candidate.id != enemy.id && civ.can_train(&candidate.id))
        .map(|candidate| {
            let mut breakdown = score_breakdown(candidate, enemy, config);
            if manual.is_listed(&enemy.id, &candidate.id) {
                breakdown.manual_boost = config.manual_counter_boost;
            }
            let raw_score = breakdown.total();

            let mut reason = build_reason(candidate, enemy, config);
            if let Some(commentary) = tech_commentary(candidate, enemy, tech, Some(&civ.id)) {
                reason.push(' ');
                reason.push_str(&commentary);
            }

            CounterResult {
                unit: candidate.clone(),
                score: round_half_up(raw_score),
                raw_score,
                bonus_damage: bonus_damage(candidate, enemy),
                reason,
                breakdown,
            }
        })
        .collect();

    log::debug!(
        "get_counters: {} candidates for `{}` as `{}`",
        results.len(),
        enemy.id,
        civ.id
    );

    // Stable: ties stay in unit table order
    results.sort_by(by_score_descending);
    results.truncate(limit);
    results
}
