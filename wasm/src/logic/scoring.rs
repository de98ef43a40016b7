//! Counter scoring heuristics over static unit statistics

use super::config::ScoringConfig;
use crate::constants::MIN_BASE_DAMAGE;
use crate::types::{ScoreBreakdown, Unit};

/// Food + wood + gold, missing resources counting as zero
pub fn total_cost(unit: &Unit) -> f64 {
    unit.total_cost()
}

/// Sum of every attacker bonus whose class tag the target carries.
///
/// Matching entries all accumulate; there is no cap and no dedup.
pub fn bonus_damage(attacker: &Unit, target: &Unit) -> f64 {
    attacker
        .attack_bonuses
        .iter()
        .filter(|bonus| target.has_armor_class(&bonus.class))
        .fold(0.0, |acc, bonus| acc + bonus.bonus)
}

/// Damage of a single hit from `attacker` onto `target`.
///
/// Ranged attackers are checked against pierce armor, melee attackers
/// against melee armor. The armor-reduced part never drops below 1.
pub fn effective_damage(attacker: &Unit, target: &Unit) -> f64 {
    let armor = if attacker.is_ranged() {
        target.pierce_armor
    } else {
        target.melee_armor
    };

    let base = (attacker.attack - armor).max(MIN_BASE_DAMAGE);
    base + bonus_damage(attacker, target)
}

fn time_to_defeat(hp: f64, damage_per_hit: f64, config: &ScoringConfig) -> f64 {
    if damage_per_hit == 0.0 {
        config.effectively_infinite_time
    } else {
        hp / damage_per_hit
    }
}

/// Per-signal contributions of `candidate` as a counter to `enemy`.
///
/// `manual_boost` is left at zero; ranking fills it in.
pub fn score_breakdown(candidate: &Unit, enemy: &Unit, config: &ScoringConfig) -> ScoreBreakdown {
    let mut comp = ScoreBreakdown::zero();

    // Survive longer than it takes to kill
    let kill_time = time_to_defeat(enemy.hp, effective_damage(candidate, enemy), config);
    let death_time = time_to_defeat(candidate.hp, effective_damage(enemy, candidate), config);
    if kill_time > 0.0 {
        comp.time_to_kill = (death_time / kill_time) * config.time_to_kill_weight;
    }

    comp.bonus_damage = bonus_damage(candidate, enemy) * config.bonus_damage_weight;

    let candidate_cost = total_cost(candidate);
    let enemy_cost = total_cost(enemy);
    if candidate_cost > 0.0 && enemy_cost > 0.0 {
        comp.cost_efficiency = (enemy_cost / candidate_cost) * config.cost_efficiency_weight;
    }

    if candidate.speed > enemy.speed {
        comp.speed_edge = config.speed_edge_bonus;
    }

    if candidate.range > enemy.range {
        comp.range_edge = config.range_edge_bonus;
    }

    comp
}

/// Unrounded heuristic score; higher is a better counter.
pub fn score_counter(candidate: &Unit, enemy: &Unit, config: &ScoringConfig) -> f64 {
    score_breakdown(candidate, enemy, config).total()
}
