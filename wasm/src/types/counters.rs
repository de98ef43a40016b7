use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hand-curated counters, keyed by enemy unit id.
///
/// Entries boost a candidate's score; they never exclude anyone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualCounters(HashMap<String, Vec<String>>);

impl ManualCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, enemy_id: impl Into<String>, counters: Vec<String>) {
        self.0.insert(enemy_id.into(), counters);
    }

    pub fn counters_for(&self, enemy_id: &str) -> &[String] {
        self.0.get(enemy_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_listed(&self, enemy_id: &str, candidate_id: &str) -> bool {
        self.counters_for(enemy_id)
            .iter()
            .any(|id| id == candidate_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}
