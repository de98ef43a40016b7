use std::collections::{HashMap, HashSet};

use crate::types::{CivTechEntry, TechIndex, TechKey};

/// Case-insensitive technology name to every key that resolves to it.
///
/// Built once per technology table. Entries are reachable through their table
/// key and, when present, their numeric `id` (unit upgrades are keyed by unit).
#[derive(Debug, Clone, Default)]
pub struct TechNameIndex {
    by_name: HashMap<String, HashSet<TechKey>>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl TechNameIndex {
    pub fn build(techs: &TechIndex) -> Self {
        let mut by_name: HashMap<String, HashSet<TechKey>> = HashMap::new();

        for (key, tech) in techs {
            let name = normalize(&tech.name);
            if name.is_empty() {
                continue;
            }
            let keys = by_name.entry(name).or_default();
            keys.insert(TechKey::from(key.as_str()));
            if let Some(id) = tech.id {
                keys.insert(TechKey::from(id));
            }
        }

        Self { by_name }
    }

    pub fn keys_named(&self, name: &str) -> Option<&HashSet<TechKey>> {
        self.by_name.get(&normalize(name))
    }

    /// Whether any of the civ's technologies carries `name`.
    pub fn civ_has(&self, entry: &CivTechEntry, name: &str) -> bool {
        match self.keys_named(name) {
            Some(keys) => entry.tech_keys().any(|key| keys.contains(key)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
