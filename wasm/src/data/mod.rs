mod tech_name_index;
mod validation;

pub use tech_name_index::TechNameIndex;
pub use validation::ReferenceValidator;

use serde::de::DeserializeOwned;

use crate::error::{DataError, DataIssue, DataResult, Dataset};
use crate::logic::TechContext;
use crate::types::{CivTechMap, Civilisation, ManualCounters, TechIndex, Unit};

fn parse<T: DeserializeOwned>(dataset: Dataset, json: &str) -> DataResult<T> {
    serde_json::from_str(json).map_err(|source| DataError::Parse { dataset, source })
}

/// Every static table the counter engine reads. Loaded once, read many times.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    units: Vec<Unit>,
    civilisations: Vec<Civilisation>,
    counters: ManualCounters,
    civ_techs: Option<CivTechMap>,
    tech_names: Option<TechNameIndex>,
}

impl GameData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(
        units: Vec<Unit>,
        civilisations: Vec<Civilisation>,
        counters: ManualCounters,
    ) -> Self {
        Self {
            units,
            civilisations,
            counters,
            ..Self::default()
        }
    }

    /// Replaces the unit table. On error the previous table is kept.
    pub fn load_units(&mut self, json: &str) -> DataResult<usize> {
        self.units = parse(Dataset::Units, json)?;
        Ok(self.units.len())
    }

    pub fn load_civilisations(&mut self, json: &str) -> DataResult<usize> {
        self.civilisations = parse(Dataset::Civilisations, json)?;
        Ok(self.civilisations.len())
    }

    pub fn load_counters(&mut self, json: &str) -> DataResult<usize> {
        self.counters = parse(Dataset::Counters, json)?;
        Ok(self.counters.len())
    }

    pub fn load_technologies(&mut self, json: &str) -> DataResult<usize> {
        let techs: TechIndex = parse(Dataset::Technologies, json)?;
        Ok(self.set_technologies(techs))
    }

    pub fn load_civ_technologies(&mut self, json: &str) -> DataResult<usize> {
        let civ_techs: CivTechMap = parse(Dataset::CivTechnologies, json)?;
        Ok(self.set_civ_technologies(civ_techs))
    }

    /// Installs a tech table and rebuilds the name index from it.
    pub fn set_technologies(&mut self, techs: TechIndex) -> usize {
        let count = techs.len();
        self.tech_names = Some(TechNameIndex::build(&techs));
        count
    }

    pub fn set_civ_technologies(&mut self, civ_techs: CivTechMap) -> usize {
        let count = civ_techs.len();
        self.civ_techs = Some(civ_techs);
        count
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn civilisations(&self) -> &[Civilisation] {
        &self.civilisations
    }

    pub fn counters(&self) -> &ManualCounters {
        &self.counters
    }

    pub fn has_tech_data(&self) -> bool {
        self.civ_techs.is_some() && self.tech_names.is_some()
    }

    pub fn tech_context(&self) -> TechContext<'_> {
        TechContext {
            civ_techs: self.civ_techs.as_ref(),
            names: self.tech_names.as_ref(),
        }
    }

    /// References in civ rosters, manual counters and attack bonuses that do
    /// not resolve against the unit table.
    pub fn validate(&self) -> Vec<DataIssue> {
        let validator = ReferenceValidator::new(&self.units);
        let mut issues = Vec::new();
        validator.check_civilisations(&self.civilisations, &mut issues);
        validator.check_counters(&self.counters, &mut issues);
        validator.check_bonus_classes(&self.units, &mut issues);
        issues
    }
}
