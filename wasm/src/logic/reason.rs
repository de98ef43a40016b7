use super::config::ScoringConfig;
use super::scoring::{bonus_damage, total_cost};
use crate::types::Unit;

pub const FALLBACK_REASON: &str = "Statistically favourable matchup.";

/// Human-readable explanation of why `candidate` counters `enemy`.
///
/// Clauses follow a fixed order: bonus damage, speed, range, cost, special
/// trait. Advisory text only, it never feeds back into the score.
pub fn build_reason(candidate: &Unit, enemy: &Unit, config: &ScoringConfig) -> String {
    let mut clauses: Vec<String> = Vec::new();

    let bonus = bonus_damage(candidate, enemy);
    if bonus > 0.0 {
        clauses.push(format!("Deals +{bonus} bonus damage"));
    }

    if candidate.speed > enemy.speed {
        clauses.push("Faster movement speed".to_string());
    }

    if candidate.range > enemy.range && candidate.is_ranged() {
        clauses.push("Outranges the enemy".to_string());
    }

    if total_cost(candidate) < total_cost(enemy) * config.cheap_cost_ratio {
        clauses.push("Significantly cheaper".to_string());
    }

    if let Some(special) = candidate.special_trait() {
        let special = special.trim_end_matches('.');
        if !special.is_empty() {
            clauses.push(special.to_string());
        }
    }

    if clauses.is_empty() {
        return FALLBACK_REASON.to_string();
    }

    format!("{}.", clauses.join(". "))
}
