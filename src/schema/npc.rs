use serde::{Deserialize, Serialize};

use super::clan::Clan;
use super::item::Item;
use super::skill::{Family, Skill};
use super::terrain::Terrain;

/// A generated non-player character.
///
/// `skills` is the union of clan bonus, title and inventory skills,
/// without duplicates, in first-contributed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub clan: Clan,
    pub clan_bonus: [Skill; 2],
    pub title_skills: [Skill; 2],
    pub terrain: Terrain,
    pub title: String,
    pub inventory: Vec<Item>,
    pub skills: Vec<Skill>,
    pub armor: u32,
    pub stock: u32,
    pub travel: u32,
}

impl Npc {
    pub fn clan_family(&self) -> Family {
        self.clan.family()
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_npc() -> Npc {
        Npc {
            id: "pnj-3vi52o".to_string(),
            name: "Haska".to_string(),
            clan: Clan::Khazrak,
            clan_bonus: [Skill::Resourcefulness, Skill::Resilience],
            title_skills: [Skill::Distance, Skill::Craft],
            terrain: Terrain::PetrifiedForest,
            title: "Ailé Tanneur de la Forêt Pétrifiée".to_string(),
            inventory: Vec::new(),
            skills: vec![
                Skill::Resourcefulness,
                Skill::Resilience,
                Skill::Distance,
                Skill::Craft,
            ],
            armor: 0,
            stock: 0,
            travel: 0,
        }
    }

    #[test]
    fn npc_helpers() {
        let npc = make_npc();
        assert_eq!(npc.clan_family(), Family::Survival);
        assert!(npc.has_skill(Skill::Craft));
        assert!(!npc.has_skill(Skill::Ruse));
    }

    #[test]
    fn npc_json_round_trip() {
        let npc = make_npc();
        let json = serde_json::to_string(&npc).unwrap();
        assert!(json.contains("\"clan\":\"khazrak\""));
        let back: Npc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, npc);
    }
}
