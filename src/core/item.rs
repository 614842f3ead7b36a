/// Item generator: family, name, grade and family-appropriate bonus.

use tracing::trace;

use super::rng::RandomSource;
use super::rules::{bonus_kind, item_names, ARMOR_PER_PIECE, STOCK_BONUSES, TRAVEL_PER_MOUNT};
use super::sampling::{pick_many_with_replacement, pick_one, synthetic_id};
use crate::schema::item::{BonusKind, Grade, Item, ItemBonus, ItemFamily, Material, Tier};

/// Number of skill bonuses an item of this grade carries: one per
/// material step (Rough 1, Fine 2, Iron 3), always one for tiers.
pub fn bonus_count(grade: Grade) -> usize {
    match grade {
        Grade::Material(material) => material.bonus_count(),
        Grade::Tier(_) => 1,
    }
}

/// Generate one item.
///
/// Draw order: family, name, material or tier, bonus draws (one per
/// skill bonus, one for a stock bonus, none for armor or travel), then
/// one draw for the identity suffix.
pub fn generate_item<R: RandomSource + ?Sized>(source: &mut R) -> Item {
    let family = *pick_one(source, &ItemFamily::ALL);
    let name = *pick_one(source, item_names(family));

    let grade = if family.is_equipment() {
        Grade::Material(*pick_one(source, &Material::ALL))
    } else {
        Grade::Tier(*pick_one(source, &Tier::ALL))
    };

    let bonus = match bonus_kind(family) {
        BonusKind::Skills(choices) => {
            ItemBonus::Skills(pick_many_with_replacement(source, choices, bonus_count(grade)))
        }
        BonusKind::Armor => ItemBonus::Armor(ARMOR_PER_PIECE),
        BonusKind::Stock => ItemBonus::Stock(*pick_one(source, &STOCK_BONUSES)),
        BonusKind::Travel => ItemBonus::Travel(TRAVEL_PER_MOUNT),
    };

    let id = synthetic_id(source, name);
    trace!(%id, %family, grade = grade.label(), "generated item");

    Item {
        id,
        family,
        name: name.to_string(),
        grade,
        bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{Mulberry32, ScriptedSource};
    use crate::schema::skill::Skill;

    #[test]
    fn fine_weapon_gets_two_skill_bonuses() {
        let mut source = ScriptedSource::from_picks(&[
            (0, 14), // Weapon
            (1, 6),  // "Épée"
            (1, 3),  // Fine
            (1, 2),  // Distance
            (1, 2),  // Distance
            (0, 1),  // identity
        ]);
        let item = generate_item(&mut source);
        assert_eq!(item.family, ItemFamily::Weapon);
        assert_eq!(item.name, "Épée");
        assert_eq!(item.material(), Some(Material::Fine));
        assert_eq!(item.tier(), None);
        assert_eq!(item.bonus_skills(), &[Skill::Distance, Skill::Distance]);
        assert_eq!(item.id, "Épée-89oqgw");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn iron_tool_gets_three_skill_bonuses() {
        let mut source = ScriptedSource::from_picks(&[
            (1, 14), // Tool
            (4, 6),  // "Corde"
            (2, 3),  // Iron
            (0, 2),  // Tracking
            (1, 2),  // Craft
            (0, 2),  // Tracking
            (0, 1),
        ]);
        let item = generate_item(&mut source);
        assert_eq!(item.material(), Some(Material::Iron));
        assert_eq!(item.bonus_skills(), &[Skill::Tracking, Skill::Craft, Skill::Tracking]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn rough_trap_gets_one_skill_bonus() {
        let mut source = ScriptedSource::from_picks(&[(3, 14), (1, 3), (0, 3), (0, 2), (0, 1)]);
        let item = generate_item(&mut source);
        assert_eq!(item.family, ItemFamily::Trap);
        assert_eq!(item.name, "Pics");
        assert_eq!(item.material(), Some(Material::Rough));
        assert_eq!(item.bonus_skills(), &[Skill::Ruse]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn armor_takes_a_material_but_grants_armor_points() {
        let mut source = ScriptedSource::from_picks(&[(2, 14), (0, 4), (2, 3), (0, 1)]);
        let item = generate_item(&mut source);
        assert_eq!(item.family, ItemFamily::Armor);
        assert_eq!(item.material(), Some(Material::Iron));
        assert_eq!(item.armor(), Some(1));
        assert!(item.bonus_skills().is_empty());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn tiered_items_get_one_skill_bonus() {
        let mut source = ScriptedSource::from_picks(&[(11, 14), (2, 3), (2, 3), (0, 1), (0, 1)]);
        let item = generate_item(&mut source);
        assert_eq!(item.family, ItemFamily::Book);
        assert_eq!(item.name, "Journal de bord");
        assert_eq!(item.tier(), Some(Tier::Worked));
        assert_eq!(item.bonus_skills(), &[Skill::Lore]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn mount_grants_a_travel_token() {
        let mut source = ScriptedSource::from_picks(&[(7, 14), (0, 3), (0, 3), (0, 1)]);
        let item = generate_item(&mut source);
        assert_eq!(item.travel(), Some(1));
        assert_eq!(item.tier(), Some(Tier::Rudimentary));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn bag_draws_a_stock_bonus() {
        let mut rng = Mulberry32::new(42);
        let item = generate_item(&mut rng);
        assert_eq!(item.id, "Bourse-2w2v9m");
        assert_eq!(item.family, ItemFamily::Bag);
        assert_eq!(item.name, "Bourse");
        assert_eq!(item.tier(), Some(Tier::Worked));
        assert_eq!(item.stock(), Some(5));
    }

    #[test]
    fn tiering_holds_across_many_items() {
        let mut rng = Mulberry32::from_text("tiering");
        for _ in 0..2_000 {
            let item = generate_item(&mut rng);
            if let ItemBonus::Skills(skills) = &item.bonus {
                let expected = match item.material() {
                    Some(Material::Rough) | None => 1,
                    Some(Material::Fine) => 2,
                    Some(Material::Iron) => 3,
                };
                assert_eq!(skills.len(), expected, "{item:?}");
            }
            assert_eq!(item.material().is_some(), item.family.is_equipment());
            assert_ne!(item.material().is_some(), item.tier().is_some());
        }
    }
}
