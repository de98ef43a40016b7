use crate::data::TechNameIndex;
use crate::types::{CivTechMap, Unit};

/// Unit upgrade lines that have technology-specific advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLine {
    Skirmisher,
    Spear,
    LightCavalry,
}

impl UnitLine {
    pub fn members(self) -> &'static [&'static str] {
        match self {
            UnitLine::Skirmisher => &["skirmisher", "elite_skirmisher", "imperial_skirmisher"],
            UnitLine::Spear => &["spearman", "pikeman", "halberdier"],
            UnitLine::LightCavalry => &["scout_cavalry", "light_cavalry", "hussar", "winged_hussar"],
        }
    }

    pub fn of(unit_id: &str) -> Option<UnitLine> {
        [UnitLine::Skirmisher, UnitLine::Spear, UnitLine::LightCavalry]
            .into_iter()
            .find(|line| line.members().contains(&unit_id))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommentaryRule {
    pub line: UnitLine,
    /// Technology name, matched case-insensitively.
    pub tech: &'static str,
    /// Armor class the enemy must carry for the advice to apply.
    pub enemy_class: Option<&'static str>,
    pub text: &'static str,
}

pub const COMMENTARY_RULES: [CommentaryRule; 5] = [
    CommentaryRule {
        line: UnitLine::Skirmisher,
        tech: "Bodkin Arrow",
        enemy_class: None,
        text: "Bodkin Arrow adds +1 attack and range to skirmishers.",
    },
    CommentaryRule {
        line: UnitLine::Skirmisher,
        tech: "Bracer",
        enemy_class: None,
        text: "Bracer adds a further +1 attack and range to skirmishers.",
    },
    CommentaryRule {
        line: UnitLine::Spear,
        tech: "Pikeman",
        enemy_class: Some("cavalry"),
        text: "Pikeman upgrade available for heavier anti-cavalry damage.",
    },
    CommentaryRule {
        line: UnitLine::Spear,
        tech: "Halberdier",
        enemy_class: Some("cavalry"),
        text: "Halberdier upgrade available, the strongest spear-line counter to cavalry.",
    },
    CommentaryRule {
        line: UnitLine::LightCavalry,
        tech: "Husbandry",
        enemy_class: None,
        text: "Husbandry makes the light cavalry line even faster.",
    },
];

/// Optional technology tables. Either half missing disables commentary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechContext<'a> {
    pub civ_techs: Option<&'a CivTechMap>,
    pub names: Option<&'a TechNameIndex>,
}

impl<'a> TechContext<'a> {
    pub fn new(civ_techs: &'a CivTechMap, names: &'a TechNameIndex) -> Self {
        Self {
            civ_techs: Some(civ_techs),
            names: Some(names),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Technology advice for `candidate`, or `None` when nothing applies or the
/// tech data, civ id, or the civ's tech list is missing.
pub fn tech_commentary(
    candidate: &Unit,
    enemy: &Unit,
    tech: TechContext<'_>,
    civ_id: Option<&str>,
) -> Option<String> {
    let (civ_techs, names, civ_id) = match (tech.civ_techs, tech.names, civ_id) {
        (Some(civ_techs), Some(names), Some(civ_id)) => (civ_techs, names, civ_id),
        _ => return None,
    };

    let entry = civ_techs.get(civ_id).filter(|entry| !entry.is_empty())?;
    let line = UnitLine::of(&candidate.id)?;

    let sentences: Vec<&str> = COMMENTARY_RULES
        .iter()
        .filter(|rule| rule.line == line)
        .filter(|rule| rule.enemy_class.map_or(true, |class| enemy.has_armor_class(class)))
        .filter(|rule| names.civ_has(entry, rule.tech))
        .map(|rule| rule.text)
        .collect();

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}
