use wasm_bindgen::prelude::*;

mod constants;
pub mod data;
mod dependency;
pub mod error;
pub mod logic;
mod service;
pub mod types;

#[cfg(test)]
mod test_fixtures;

pub use data::GameData;
pub use error::{DataError, DataIssue, DataResult, Dataset};
pub use logic::{
    bonus_damage, build_reason, effective_damage, get_counters, score_breakdown, score_counter,
    tech_commentary, total_cost, CounterLogic, CounterQuery, ScoringConfig, TechContext,
};
pub use service::CounterEngine;
pub use types::{Civilisation, CounterResult, ManualCounters, ScoreBreakdown, Unit};

/// Runs once when the module is instantiated in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}
