use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology table keyed by the string form of the tech id.
pub type TechIndex = HashMap<String, TechDef>;

/// Civilisation id to the technologies that civilisation can research.
pub type CivTechMap = HashMap<String, CivTechEntry>;

/// Key into a [`TechIndex`]. Data files write these as numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawTechKey")]
pub struct TechKey(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTechKey {
    Number(u64),
    Text(String),
}

impl From<RawTechKey> for TechKey {
    fn from(raw: RawTechKey) -> Self {
        match raw {
            RawTechKey::Number(id) => TechKey(id.to_string()),
            RawTechKey::Text(id) => TechKey(id),
        }
    }
}

impl TechKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TechKey {
    fn from(key: &str) -> Self {
        TechKey(key.to_string())
    }
}

impl From<u32> for TechKey {
    fn from(id: u32) -> Self {
        TechKey(id.to_string())
    }
}

impl fmt::Display for TechKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechKind {
    #[default]
    Tech,
    UnitUpgrade,
    #[serde(other)]
    Other,
}

/// One entry of `technologies.json`. Only `name` matters to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechDef {
    pub id: Option<u32>,
    pub slug: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TechKind,
    pub cost: HashMap<String, f64>,
    pub research_time: Option<f64>,
    pub internal_name: Option<String>,
    /// Set for unit upgrades.
    pub unit_id: Option<u32>,
}

impl TechDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CivTechTree {
    pub name: Option<String>,
    pub tech_ids: Vec<TechKey>,
    pub unique_tech_ids: Vec<TechKey>,
}

/// Either a bare id list or the extracted tech tree form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CivTechEntry {
    Ids(Vec<TechKey>),
    Tree(CivTechTree),
}

impl CivTechEntry {
    /// Regular techs followed by unique techs.
    pub fn tech_keys(&self) -> impl Iterator<Item = &TechKey> {
        let (regular, unique) = match self {
            CivTechEntry::Ids(ids) => (ids.as_slice(), &[][..]),
            CivTechEntry::Tree(tree) => (
                tree.tech_ids.as_slice(),
                tree.unique_tech_ids.as_slice(),
            ),
        };
        regular.iter().chain(unique.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.tech_keys().next().is_none()
    }
}
