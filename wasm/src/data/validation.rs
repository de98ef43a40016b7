use std::collections::HashSet;

use crate::error::DataIssue;
use crate::types::{Civilisation, ManualCounters, Unit};

/// Collects references that do not resolve against the loaded unit table.
pub struct ReferenceValidator<'a> {
    unit_ids: HashSet<&'a str>,
    armor_classes: HashSet<&'a str>,
}

impl<'a> ReferenceValidator<'a> {
    pub fn new(units: &'a [Unit]) -> Self {
        Self {
            unit_ids: units.iter().map(|unit| unit.id.as_str()).collect(),
            armor_classes: units
                .iter()
                .flat_map(|unit| unit.armor_classes.iter().map(String::as_str))
                .collect(),
        }
    }

    pub fn check_civilisations(&self, civs: &[Civilisation], issues: &mut Vec<DataIssue>) {
        for civ in civs {
            for unit_id in &civ.available_units {
                if !self.unit_ids.contains(unit_id.as_str()) {
                    issues.push(DataIssue::UnknownAvailableUnit {
                        civ_id: civ.id.clone(),
                        unit_id: unit_id.clone(),
                    });
                }
            }
        }
    }

    pub fn check_counters(&self, counters: &ManualCounters, issues: &mut Vec<DataIssue>) {
        let mut entries: Vec<_> = counters.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (enemy_id, candidates) in entries {
            if !self.unit_ids.contains(enemy_id.as_str()) {
                issues.push(DataIssue::UnknownCounterEnemy {
                    enemy_id: enemy_id.clone(),
                });
            }
            for candidate_id in candidates {
                if !self.unit_ids.contains(candidate_id.as_str()) {
                    issues.push(DataIssue::UnknownCounterCandidate {
                        enemy_id: enemy_id.clone(),
                        candidate_id: candidate_id.clone(),
                    });
                }
            }
        }
    }

    pub fn check_bonus_classes(&self, units: &[Unit], issues: &mut Vec<DataIssue>) {
        for unit in units {
            for bonus in &unit.attack_bonuses {
                if !self.armor_classes.contains(bonus.class.as_str()) {
                    issues.push(DataIssue::UnmatchedBonusClass {
                        unit_id: unit.id.clone(),
                        class: bonus.class.clone(),
                    });
                }
            }
        }
    }
}
