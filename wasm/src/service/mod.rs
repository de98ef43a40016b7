use wasm_bindgen::prelude::*;

use crate::data::GameData;
use crate::dependency::Stopwatch;
use crate::error::DataError;
use crate::logic::{CounterLogic, CounterQuery, ScoringConfig};
use crate::types::{CounterResult, QueryMetrics};

fn to_js_error(err: DataError) -> String {
    log::error!("{}", err);
    err.to_string()
}

/// Counter recommendation engine handed to the front end.
///
/// The page fetches the data files and passes their text to the `load_*`
/// methods; queries then run against whatever has been loaded.
#[wasm_bindgen]
pub struct CounterEngine {
    data: GameData,
    logic: CounterLogic,
    metrics: QueryMetrics,
}

#[wasm_bindgen]
impl CounterEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            data: GameData::new(),
            logic: CounterLogic::default(),
            metrics: QueryMetrics::default(),
        }
    }

    #[wasm_bindgen]
    pub fn load_units(&mut self, json: &str) -> Result<usize, String> {
        let count = self.data.load_units(json).map_err(to_js_error)?;
        log::info!("loaded {} units", count);
        Ok(count)
    }

    #[wasm_bindgen]
    pub fn load_civilisations(&mut self, json: &str) -> Result<usize, String> {
        let count = self.data.load_civilisations(json).map_err(to_js_error)?;
        log::info!("loaded {} civilisations", count);
        Ok(count)
    }

    #[wasm_bindgen]
    pub fn load_counters(&mut self, json: &str) -> Result<usize, String> {
        let count = self.data.load_counters(json).map_err(to_js_error)?;
        log::info!("loaded manual counters for {} units", count);
        Ok(count)
    }

    #[wasm_bindgen]
    pub fn load_technologies(&mut self, json: &str) -> Result<usize, String> {
        let count = self.data.load_technologies(json).map_err(to_js_error)?;
        log::info!("loaded {} technologies", count);
        Ok(count)
    }

    #[wasm_bindgen]
    pub fn load_civ_technologies(&mut self, json: &str) -> Result<usize, String> {
        let count = self.data.load_civ_technologies(json).map_err(to_js_error)?;
        log::info!("loaded tech trees for {} civilisations", count);
        Ok(count)
    }

    /// Overrides scoring weights. Fields left out keep their defaults.
    #[wasm_bindgen]
    pub fn set_config(&mut self, json: &str) -> Result<(), String> {
        let config: ScoringConfig = serde_json::from_str(json)
            .map_err(DataError::Config)
            .map_err(to_js_error)?;
        log::debug!("scoring config replaced: {:?}", config);
        self.logic.set_config(config);
        Ok(())
    }

    /// Ranked counters as plain JS objects, or `null` if serialization fails.
    #[wasm_bindgen]
    pub fn get_counters(&mut self, enemy_id: &str, civ_id: &str, limit: Option<usize>) -> JsValue {
        let results = self.rank(enemy_id, civ_id, limit);
        match serde_wasm_bindgen::to_value(&results) {
            Ok(val) => val,
            Err(e) => {
                log::error!("get_counters serialization failed: {:?}", e);
                JsValue::NULL
            }
        }
    }

    #[wasm_bindgen]
    pub fn get_counters_json(
        &mut self,
        enemy_id: &str,
        civ_id: &str,
        limit: Option<usize>,
    ) -> Result<String, String> {
        let results = self.rank(enemy_id, civ_id, limit);
        serde_json::to_string(&results).map_err(|e| format!("Failed to serialize counters: {}", e))
    }

    /// Number of dangling references in the loaded data; each one is logged.
    #[wasm_bindgen]
    pub fn validate(&self) -> usize {
        let issues = self.data.validate();
        for issue in &issues {
            log::warn!("{}", issue);
        }
        issues.len()
    }

    #[wasm_bindgen]
    pub fn unit_count(&self) -> usize {
        self.data.units().len()
    }

    #[wasm_bindgen]
    pub fn civilisation_count(&self) -> usize {
        self.data.civilisations().len()
    }

    #[wasm_bindgen]
    pub fn has_tech_data(&self) -> bool {
        self.data.has_tech_data()
    }

    #[wasm_bindgen]
    pub fn get_last_query_duration(&self) -> f64 {
        self.metrics.last_query_duration_ms
    }
}

impl Default for CounterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterEngine {
    fn rank(&mut self, enemy_id: &str, civ_id: &str, limit: Option<usize>) -> Vec<CounterResult> {
        let query = CounterQuery {
            enemy_unit_id: enemy_id,
            civ_id,
            limit,
        };

        let watch = Stopwatch::start();
        let results = self.logic.counters(&self.data, &query);
        self.metrics.record_query(watch.elapsed_ms());

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS_JSON: &str = r#"[
        { "id": "knight", "name": "Knight", "class": "cavalry", "hp": 100, "attack": 10,
          "meleeArmor": 2, "pierceArmor": 2, "range": 0, "speed": 1.35,
          "cost": { "food": 60, "gold": 75 }, "armorClasses": ["cavalry"] },
        { "id": "pikeman", "name": "Pikeman", "class": "infantry", "hp": 55, "attack": 4,
          "meleeArmor": 0, "pierceArmor": 0, "range": 0, "speed": 1.0,
          "cost": { "food": 35, "wood": 25 },
          "attackBonuses": [{ "class": "cavalry", "bonus": 22 }],
          "armorClasses": ["infantry", "spear"] },
        { "id": "archer", "name": "Archer", "class": "archer", "hp": 30, "attack": 4,
          "range": 4, "speed": 0.96, "cost": { "wood": 25, "gold": 45 },
          "attackBonuses": [{ "class": "spear", "bonus": 3 }], "armorClasses": ["archer"] }
    ]"#;

    const CIVS_JSON: &str = r#"[
        { "id": "britons", "name": "Britons", "bonuses": [],
          "availableUnits": ["knight", "pikeman", "archer", "longbowman"] }
    ]"#;

    const TECHS_JSON: &str = r#"{
        "197": { "id": 197, "slug": "pikeman", "name": "Pikeman", "type": "tech" },
        "429": { "id": 429, "slug": "halberdier", "name": "Halberdier", "type": "tech" }
    }"#;

    const CIV_TECHS_JSON: &str = r#"{
        "britons": { "name": "Britons", "techIds": [197], "uniqueTechIds": [] }
    }"#;

    fn loaded_engine() -> CounterEngine {
        let mut engine = CounterEngine::new();
        engine.load_units(UNITS_JSON).unwrap();
        engine.load_civilisations(CIVS_JSON).unwrap();
        engine.load_counters(r#"{ "knight": ["pikeman"] }"#).unwrap();
        engine
    }

    #[test]
    fn test_engine_loads_and_ranks() {
        let mut engine = loaded_engine();
        assert_eq!(engine.unit_count(), 3);
        assert_eq!(engine.civilisation_count(), 1);

        let json = engine.get_counters_json("knight", "britons", None).unwrap();
        let results: Vec<CounterResult> = serde_json::from_str(&json).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].unit.id, "pikeman");
        assert_eq!(results[0].score, 197);
        assert_eq!(results[1].unit.id, "archer");
    }

    #[test]
    fn test_result_json_is_camel_case() {
        let mut engine = loaded_engine();
        let json = engine.get_counters_json("knight", "britons", Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["bonusDamage"], 22.0);
        assert_eq!(first["unit"]["meleeArmor"], 0.0);
        assert!(first["rawScore"].is_number());
        assert!(first["breakdown"]["manualBoost"].is_number());
    }

    #[test]
    fn test_unknown_ids_give_empty_json_list() {
        let mut engine = loaded_engine();
        assert_eq!(engine.get_counters_json("paladin", "britons", None).unwrap(), "[]");
        assert_eq!(engine.get_counters_json("knight", "goths", None).unwrap(), "[]");
    }

    #[test]
    fn test_bad_json_reports_dataset() {
        let mut engine = loaded_engine();
        let err = engine.load_civilisations("[{]").unwrap_err();
        assert!(err.contains("civilisations"));
        assert_eq!(engine.civilisation_count(), 1);
    }

    #[test]
    fn test_tech_commentary_after_tech_load() {
        let mut engine = loaded_engine();
        assert!(!engine.has_tech_data());

        engine.load_technologies(TECHS_JSON).unwrap();
        engine.load_civ_technologies(CIV_TECHS_JSON).unwrap();
        assert!(engine.has_tech_data());

        let json = engine.get_counters_json("knight", "britons", Some(1)).unwrap();
        let results: Vec<CounterResult> = serde_json::from_str(&json).unwrap();
        assert!(results[0].reason.ends_with("Pikeman upgrade available for heavier anti-cavalry damage."));
        assert!(!results[0].reason.contains("Halberdier"));
    }

    #[test]
    fn test_set_config_overrides_limit() {
        let mut engine = loaded_engine();
        engine.set_config(r#"{ "defaultLimit": 1 }"#).unwrap();
        let json = engine.get_counters_json("knight", "britons", None).unwrap();
        let results: Vec<CounterResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(results.len(), 1);

        assert!(engine.set_config("{ \"defaultLimit\": -1 }").is_err());
    }

    #[test]
    fn test_validate_counts_dangling_units() {
        let engine = loaded_engine();
        // britons list a longbowman the unit table lacks
        assert_eq!(engine.validate(), 1);
    }

    #[test]
    fn test_loaded_records_come_back_unchanged() {
        let mut engine = CounterEngine::new();
        engine
            .load_units(
                r#"[
                { "id": "knight", "name": "Knight", "class": "cavalry", "hp": 100, "attack": 10,
                  "meleeArmor": 2, "pierceArmor": 2, "range": 0, "speed": 1.35,
                  "cost": { "food": 60, "gold": 75 }, "armorClasses": ["cavalry"] },
                { "id": "war_elephant", "name": "War Elephant", "class": "elephant", "hp": 450,
                  "attack": 20, "meleeArmor": 1, "pierceArmor": null, "range": 0, "speed": 0.6,
                  "cost": null, "attackBonuses": null, "armorClasses": ["elephant"] }
            ]"#,
            )
            .unwrap();
        engine
            .load_civilisations(
                r#"[{ "id": "persians", "name": "Persians",
                      "availableUnits": ["knight", "war_elephant"] }]"#,
            )
            .unwrap();

        let json = engine.get_counters_json("knight", "persians", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let elephant = &value[0];

        assert_eq!(elephant["unit"]["id"], "war_elephant");
        assert_eq!(elephant["unit"]["class"], "elephant");
        assert_eq!(elephant["unit"]["pierceArmor"], 0.0);
        assert!(!json.contains("-0.0"));
        assert_eq!(elephant["bonusDamage"], 0.0);
    }

    #[test]
    fn test_query_duration_is_recorded() {
        let mut engine = loaded_engine();
        engine.get_counters_json("knight", "britons", None).unwrap();
        assert!(engine.get_last_query_duration() >= 0.0);
        assert_eq!(engine.metrics.queries_served, 1);
    }
}
