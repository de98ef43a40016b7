//! Shared unit, civilisation and tech tables for unit tests.

use crate::types::{
    AttackBonus, CivTechEntry, CivTechMap, CivTechTree, Civilisation, Cost, ManualCounters,
    TechDef, TechIndex, TechKey, Unit, UnitClass,
};

fn bonus(class: &str, bonus: f64) -> AttackBonus {
    AttackBonus {
        class: class.to_string(),
        bonus,
    }
}

fn tags(classes: &[&str]) -> Vec<String> {
    classes.iter().map(|class| class.to_string()).collect()
}

pub fn knight() -> Unit {
    Unit {
        id: "knight".to_string(),
        name: "Knight".to_string(),
        class: UnitClass::Cavalry,
        hp: 100.0,
        attack: 10.0,
        melee_armor: 2.0,
        pierce_armor: 2.0,
        range: 0.0,
        speed: 1.35,
        cost: Cost {
            food: Some(60.0),
            wood: None,
            gold: Some(75.0),
        },
        attack_bonuses: Vec::new(),
        armor_classes: tags(&["cavalry"]),
        special: None,
    }
}

pub fn pikeman() -> Unit {
    Unit {
        id: "pikeman".to_string(),
        name: "Pikeman".to_string(),
        class: UnitClass::Infantry,
        hp: 55.0,
        attack: 4.0,
        melee_armor: 0.0,
        pierce_armor: 0.0,
        range: 0.0,
        speed: 1.0,
        cost: Cost {
            food: Some(35.0),
            wood: Some(25.0),
            gold: None,
        },
        attack_bonuses: vec![bonus("cavalry", 22.0)],
        armor_classes: tags(&["infantry", "spear"]),
        special: None,
    }
}

pub fn archer() -> Unit {
    Unit {
        id: "archer".to_string(),
        name: "Archer".to_string(),
        class: UnitClass::Archer,
        hp: 30.0,
        attack: 4.0,
        melee_armor: 0.0,
        pierce_armor: 0.0,
        range: 4.0,
        speed: 0.96,
        cost: Cost {
            food: None,
            wood: Some(25.0),
            gold: Some(45.0),
        },
        attack_bonuses: vec![bonus("spear", 3.0)],
        armor_classes: tags(&["archer"]),
        special: None,
    }
}

pub fn skirmisher() -> Unit {
    Unit {
        id: "skirmisher".to_string(),
        name: "Skirmisher".to_string(),
        class: UnitClass::Archer,
        hp: 30.0,
        attack: 2.0,
        melee_armor: 0.0,
        pierce_armor: 3.0,
        range: 4.0,
        speed: 0.96,
        cost: Cost {
            food: Some(25.0),
            wood: Some(35.0),
            gold: None,
        },
        attack_bonuses: vec![bonus("archer", 3.0), bonus("spear", 3.0)],
        armor_classes: tags(&["archer"]),
        special: Some("Cheap trash unit without gold cost.".to_string()),
    }
}

pub fn scout_cavalry() -> Unit {
    Unit {
        id: "scout_cavalry".to_string(),
        name: "Scout Cavalry".to_string(),
        class: UnitClass::Cavalry,
        hp: 45.0,
        attack: 3.0,
        melee_armor: 0.0,
        pierce_armor: 2.0,
        range: 0.0,
        speed: 1.55,
        cost: Cost {
            food: Some(80.0),
            wood: None,
            gold: None,
        },
        attack_bonuses: Vec::new(),
        armor_classes: tags(&["cavalry"]),
        special: None,
    }
}

pub fn camel_rider() -> Unit {
    Unit {
        id: "camel_rider".to_string(),
        name: "Camel Rider".to_string(),
        class: UnitClass::Cavalry,
        hp: 100.0,
        attack: 6.0,
        melee_armor: 0.0,
        pierce_armor: 0.0,
        range: 0.0,
        speed: 1.45,
        cost: Cost {
            food: Some(55.0),
            wood: None,
            gold: Some(60.0),
        },
        attack_bonuses: vec![bonus("cavalry", 9.0)],
        armor_classes: tags(&["cavalry", "camel"]),
        special: None,
    }
}

pub fn units() -> Vec<Unit> {
    vec![
        knight(),
        pikeman(),
        archer(),
        skirmisher(),
        scout_cavalry(),
        camel_rider(),
    ]
}

fn civilisation(id: &str, name: &str, roster: &[&str]) -> Civilisation {
    Civilisation {
        id: id.to_string(),
        name: name.to_string(),
        bonuses: Vec::new(),
        available_units: roster.iter().map(|id| id.to_string()).collect(),
    }
}

pub fn civilisations() -> Vec<Civilisation> {
    vec![
        civilisation(
            "britons",
            "Britons",
            &["knight", "pikeman", "archer", "skirmisher", "scout_cavalry"],
        ),
        civilisation(
            "berbers",
            "Berbers",
            &["knight", "pikeman", "archer", "scout_cavalry", "camel_rider"],
        ),
    ]
}

pub fn manual_counters() -> ManualCounters {
    let mut counters = ManualCounters::new();
    counters.insert(
        "knight",
        vec!["pikeman".to_string(), "camel_rider".to_string()],
    );
    counters.insert("archer", vec!["skirmisher".to_string()]);
    counters
}

pub fn tech_index() -> TechIndex {
    [
        ("197", "Pikeman"),
        ("429", "Halberdier"),
        ("199", "Fletching"),
        ("200", "Bodkin Arrow"),
        ("201", "Bracer"),
        ("39", "Husbandry"),
    ]
    .into_iter()
    .map(|(key, name)| (key.to_string(), TechDef::named(name)))
    .collect()
}

pub fn civ_techs() -> CivTechMap {
    let britons = CivTechTree {
        name: Some("Britons".to_string()),
        tech_ids: [197u32, 429, 199, 200, 201]
            .into_iter()
            .map(TechKey::from)
            .collect(),
        unique_tech_ids: Vec::new(),
    };

    let mut map = CivTechMap::new();
    map.insert("britons".to_string(), CivTechEntry::Tree(britons));
    map.insert(
        "berbers".to_string(),
        CivTechEntry::Ids(vec![TechKey::from(39u32), TechKey::from(197u32)]),
    );
    map.insert("huns".to_string(), CivTechEntry::Ids(Vec::new()));
    map
}
