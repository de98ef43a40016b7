pub mod civilisation;
pub mod counter_result;
pub mod counters;
pub mod metrics;
pub mod tech;
pub mod unit;

pub use civilisation::Civilisation;
pub use counter_result::{round_half_up, CounterResult, ScoreBreakdown};
pub use counters::ManualCounters;
pub use metrics::QueryMetrics;
pub use tech::{CivTechEntry, CivTechMap, CivTechTree, TechDef, TechIndex, TechKey, TechKind};
pub use unit::{AttackBonus, Cost, Unit, UnitClass};
