use serde::{Deserialize, Deserializer, Serialize};

/// Broad unit family, used for display grouping only.
///
/// Tags outside the known families are carried through as `Custom` so a
/// record serializes back exactly as it was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum UnitClass {
    Infantry,
    Archer,
    Cavalry,
    CavalryArcher,
    Gunpowder,
    Siege,
    Monk,
    Naval,
    Custom(String),
}

impl UnitClass {
    pub fn as_str(&self) -> &str {
        match self {
            UnitClass::Infantry => "infantry",
            UnitClass::Archer => "archer",
            UnitClass::Cavalry => "cavalry",
            UnitClass::CavalryArcher => "cavalry_archer",
            UnitClass::Gunpowder => "gunpowder",
            UnitClass::Siege => "siege",
            UnitClass::Monk => "monk",
            UnitClass::Naval => "naval",
            UnitClass::Custom(tag) => tag,
        }
    }

    /// True for a record that carried no class at all.
    pub fn is_unset(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for UnitClass {
    fn default() -> Self {
        UnitClass::Custom(String::new())
    }
}

impl From<String> for UnitClass {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "infantry" => UnitClass::Infantry,
            "archer" => UnitClass::Archer,
            "cavalry" => UnitClass::Cavalry,
            "cavalry_archer" => UnitClass::CavalryArcher,
            "gunpowder" => UnitClass::Gunpowder,
            "siege" => UnitClass::Siege,
            "monk" => UnitClass::Monk,
            "naval" => UnitClass::Naval,
            _ => UnitClass::Custom(tag),
        }
    }
}

impl From<UnitClass> for String {
    fn from(class: UnitClass) -> Self {
        match class {
            UnitClass::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// `null` in the data files means the same as a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resource cost of training one unit. Absent resources count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<f64>,
}

impl Cost {
    pub fn total(&self) -> f64 {
        self.food.unwrap_or(0.0) + self.wood.unwrap_or(0.0) + self.gold.unwrap_or(0.0)
    }
}

/// Additive damage applied against targets carrying the `class` armor tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackBonus {
    pub class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus: f64,
}

/// Static unit record as shipped in `units.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "UnitClass::is_unset", deserialize_with = "null_as_default")]
    pub class: UnitClass,
    #[serde(deserialize_with = "null_as_default")]
    pub hp: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub attack: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub melee_armor: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pierce_armor: f64,
    /// 0 for melee units.
    #[serde(deserialize_with = "null_as_default")]
    pub range: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: Cost,
    #[serde(deserialize_with = "null_as_default")]
    pub attack_bonuses: Vec<AttackBonus>,
    #[serde(deserialize_with = "null_as_default")]
    pub armor_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

impl Unit {
    pub fn total_cost(&self) -> f64 {
        self.cost.total()
    }

    pub fn is_ranged(&self) -> bool {
        self.range > 0.0
    }

    pub fn has_armor_class(&self, tag: &str) -> bool {
        self.armor_classes.iter().any(|class| class == tag)
    }

    /// Trait text, if the record carries a non-blank one.
    pub fn special_trait(&self) -> Option<&str> {
        self.special
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
