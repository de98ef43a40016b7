use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Civilisation {
    pub id: String,
    pub name: String,
    pub bonuses: Vec<String>,
    pub available_units: BTreeSet<String>,
}

impl Civilisation {
    pub fn can_train(&self, unit_id: &str) -> bool {
        self.available_units.contains(unit_id)
    }
}
