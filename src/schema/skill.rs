use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four skill families. Every skill belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Martial,
    #[serde(rename = "Survie")]
    Survival,
    #[serde(rename = "Technique")]
    Technical,
    Social,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::Martial,
        Family::Survival,
        Family::Technical,
        Family::Social,
    ];

    /// The three skills of this family, in rule-table order.
    pub fn skills(&self) -> &'static [Skill; 3] {
        match self {
            Self::Martial => &[Skill::Contact, Skill::Distance, Skill::Ruse],
            Self::Survival => &[Skill::Tracking, Skill::Resilience, Skill::Resourcefulness],
            Self::Technical => &[Skill::Craft, Skill::Lore, Skill::Occultism],
            Self::Social => &[Skill::Culture, Skill::Communication, Skill::Artistry],
        }
    }

    /// French display label, as printed on cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Martial => "Martial",
            Self::Survival => "Survie",
            Self::Technical => "Technique",
            Self::Social => "Social",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A leaf capability. Twelve skills, three per [`Family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Contact,
    Distance,
    Ruse,
    #[serde(rename = "Traque")]
    Tracking,
    #[serde(rename = "Résilience")]
    Resilience,
    #[serde(rename = "Débrouillardise")]
    Resourcefulness,
    #[serde(rename = "Artisanat")]
    Craft,
    #[serde(rename = "Érudition")]
    Lore,
    #[serde(rename = "Occultisme")]
    Occultism,
    Culture,
    Communication,
    #[serde(rename = "Artistique")]
    Artistry,
}

impl Skill {
    /// All twelve skills, families in order Martial, Survival, Technical, Social.
    pub const ALL: [Skill; 12] = [
        Skill::Contact,
        Skill::Distance,
        Skill::Ruse,
        Skill::Tracking,
        Skill::Resilience,
        Skill::Resourcefulness,
        Skill::Craft,
        Skill::Lore,
        Skill::Occultism,
        Skill::Culture,
        Skill::Communication,
        Skill::Artistry,
    ];

    pub fn family(&self) -> Family {
        match self {
            Self::Contact | Self::Distance | Self::Ruse => Family::Martial,
            Self::Tracking | Self::Resilience | Self::Resourcefulness => Family::Survival,
            Self::Craft | Self::Lore | Self::Occultism => Family::Technical,
            Self::Culture | Self::Communication | Self::Artistry => Family::Social,
        }
    }

    /// French display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Distance => "Distance",
            Self::Ruse => "Ruse",
            Self::Tracking => "Traque",
            Self::Resilience => "Résilience",
            Self::Resourcefulness => "Débrouillardise",
            Self::Craft => "Artisanat",
            Self::Lore => "Érudition",
            Self::Occultism => "Occultisme",
            Self::Culture => "Culture",
            Self::Communication => "Communication",
            Self::Artistry => "Artistique",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_listed_by_its_family() {
        for skill in Skill::ALL {
            assert!(skill.family().skills().contains(&skill), "{skill} missing from its family");
        }
    }

    #[test]
    fn families_partition_the_skills() {
        let total: usize = Family::ALL.iter().map(|f| f.skills().len()).sum();
        assert_eq!(total, Skill::ALL.len());

        let flattened: Vec<Skill> = Family::ALL
            .iter()
            .flat_map(|f| f.skills().iter().copied())
            .collect();
        assert_eq!(flattened, Skill::ALL.to_vec());
    }

    #[test]
    fn serializes_as_label() {
        for skill in Skill::ALL {
            let json = serde_json::to_string(&skill).unwrap();
            assert_eq!(json, format!("\"{}\"", skill.label()));
        }
        assert_eq!(serde_json::to_string(&Family::Survival).unwrap(), "\"Survie\"");
    }
}
