//! Error and diagnostic types for loading game data.

use std::fmt;

use thiserror::Error;

/// The data files the front end hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Units,
    Civilisations,
    Counters,
    Technologies,
    CivTechnologies,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Units => "units",
            Dataset::Civilisations => "civilisations",
            Dataset::Counters => "counters",
            Dataset::Technologies => "technologies",
            Dataset::CivTechnologies => "civ technologies",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse {dataset} data: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scoring config: {0}")]
    Config(#[source] serde_json::Error),
}

pub type DataResult<T> = Result<T, DataError>;

/// Dangling references found in otherwise loadable data. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIssue {
    #[error("civilisation `{civ_id}` lists unknown unit `{unit_id}`")]
    UnknownAvailableUnit { civ_id: String, unit_id: String },
    #[error("manual counters reference unknown enemy unit `{enemy_id}`")]
    UnknownCounterEnemy { enemy_id: String },
    #[error("manual counters for `{enemy_id}` reference unknown unit `{candidate_id}`")]
    UnknownCounterCandidate {
        enemy_id: String,
        candidate_id: String,
    },
    #[error("unit `{unit_id}` has a bonus against `{class}`, which no unit carries")]
    UnmatchedBonusClass { unit_id: String, class: String },
}
