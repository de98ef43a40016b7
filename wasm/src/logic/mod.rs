mod config;
mod ranking;
mod reason;
mod scoring;
mod tech_commentary;

pub use config::ScoringConfig;
pub use ranking::{get_counters, CounterQuery};
pub use reason::{build_reason, FALLBACK_REASON};
pub use scoring::{bonus_damage, effective_damage, score_breakdown, score_counter, total_cost};
pub use tech_commentary::{tech_commentary, CommentaryRule, TechContext, UnitLine, COMMENTARY_RULES};

use crate::data::GameData;
use crate::types::CounterResult;

/// Counter engine bound to one scoring configuration. Holds no game data.
pub struct CounterLogic {
    config: ScoringConfig,
}

impl Default for CounterLogic {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl CounterLogic {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScoringConfig) {
        self.config = config;
    }

    pub fn counters(&self, data: &GameData, query: &CounterQuery<'_>) -> Vec<CounterResult> {
        get_counters(
            query,
            data.units(),
            data.civilisations(),
            data.counters(),
            data.tech_context(),
            &self.config,
        )
    }
}
