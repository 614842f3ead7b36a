use serde::{Deserialize, Serialize};
use std::fmt;

use super::skill::Skill;

/// A category of generated equipment. The family fixes which bonus an
/// item can carry and whether it is graded by material or by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemFamily {
    #[serde(rename = "Arme")]
    Weapon,
    #[serde(rename = "Outil")]
    Tool,
    #[serde(rename = "Armure")]
    Armor,
    #[serde(rename = "Piège")]
    Trap,
    #[serde(rename = "Abri")]
    Shelter,
    Instrument,
    #[serde(rename = "Feu")]
    Fire,
    #[serde(rename = "Monte")]
    Mount,
    #[serde(rename = "Sac")]
    Bag,
    #[serde(rename = "Habits")]
    Clothing,
    #[serde(rename = "Teinture")]
    Dye,
    #[serde(rename = "Livre")]
    Book,
    #[serde(rename = "Lumière")]
    Light,
    #[serde(rename = "Décoration")]
    Decoration,
}

impl ItemFamily {
    pub const ALL: [ItemFamily; 14] = [
        ItemFamily::Weapon,
        ItemFamily::Tool,
        ItemFamily::Armor,
        ItemFamily::Trap,
        ItemFamily::Shelter,
        ItemFamily::Instrument,
        ItemFamily::Fire,
        ItemFamily::Mount,
        ItemFamily::Bag,
        ItemFamily::Clothing,
        ItemFamily::Dye,
        ItemFamily::Book,
        ItemFamily::Light,
        ItemFamily::Decoration,
    ];

    /// Equipment families are graded by [`Material`]; all others by [`Tier`].
    pub fn is_equipment(&self) -> bool {
        matches!(self, Self::Weapon | Self::Tool | Self::Armor | Self::Trap)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "Arme",
            Self::Tool => "Outil",
            Self::Armor => "Armure",
            Self::Trap => "Piège",
            Self::Shelter => "Abri",
            Self::Instrument => "Instrument",
            Self::Fire => "Feu",
            Self::Mount => "Monte",
            Self::Bag => "Sac",
            Self::Clothing => "Habits",
            Self::Dye => "Teinture",
            Self::Book => "Livre",
            Self::Light => "Lumière",
            Self::Decoration => "Décoration",
        }
    }
}

impl fmt::Display for ItemFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-tier crafting material of equipment families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "Pierre")]
    Rough,
    #[serde(rename = "Silex")]
    Fine,
    #[serde(rename = "Fer")]
    Iron,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Rough, Material::Fine, Material::Iron];

    /// Number of skill bonuses an item of this material carries.
    pub fn bonus_count(&self) -> usize {
        match self {
            Self::Rough => 1,
            Self::Fine => 2,
            Self::Iron => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rough => "Pierre",
            Self::Fine => "Silex",
            Self::Iron => "Fer",
        }
    }
}

/// Quality label of non-equipment families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Rudimentaire")]
    Rudimentary,
    #[serde(rename = "Raffiné")]
    Refined,
    #[serde(rename = "Transformé")]
    Worked,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Rudimentary, Tier::Refined, Tier::Worked];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rudimentary => "Rudimentaire",
            Self::Refined => "Raffiné",
            Self::Worked => "Transformé",
        }
    }
}

/// Exactly one of material or tier grades an item.
///
/// Serialized flattened into the item as either a `material` or a
/// `tier` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Material(Material),
    Tier(Tier),
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Material(m) => m.label(),
            Self::Tier(t) => t.label(),
        }
    }
}

/// The kind of bonus an item family grants, with the skills it may
/// draw from when the kind is skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusKind {
    Skills(&'static [Skill]),
    Armor,
    Stock,
    Travel,
}

/// The single bonus an item carries. Serialized flattened into the item
/// as one of `skills`, `armor`, `stock` or `travel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemBonus {
    /// Skill bonuses; duplicates allowed.
    Skills(Vec<Skill>),
    /// Armor points.
    Armor(u32),
    /// Stock capacity bonus.
    Stock(u32),
    /// Travel tokens.
    Travel(u32),
}

/// A generated piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub family: ItemFamily,
    pub name: String,
    #[serde(flatten)]
    pub grade: Grade,
    #[serde(flatten)]
    pub bonus: ItemBonus,
}

impl Item {
    pub fn material(&self) -> Option<Material> {
        match self.grade {
            Grade::Material(m) => Some(m),
            Grade::Tier(_) => None,
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        match self.grade {
            Grade::Tier(t) => Some(t),
            Grade::Material(_) => None,
        }
    }

    /// Skill bonuses; empty for armor, stock and travel items.
    pub fn bonus_skills(&self) -> &[Skill] {
        match &self.bonus {
            ItemBonus::Skills(skills) => skills,
            _ => &[],
        }
    }

    pub fn armor(&self) -> Option<u32> {
        match self.bonus {
            ItemBonus::Armor(points) => Some(points),
            _ => None,
        }
    }

    pub fn stock(&self) -> Option<u32> {
        match self.bonus {
            ItemBonus::Stock(bonus) => Some(bonus),
            _ => None,
        }
    }

    pub fn travel(&self) -> Option<u32> {
        match self.bonus {
            ItemBonus::Travel(tokens) => Some(tokens),
            _ => None,
        }
    }
}
