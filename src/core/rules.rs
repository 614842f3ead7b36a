/// Static rule tables: epithets, item families, name pools.
///
/// Skill, clan and terrain tables live on their schema types; this module
/// holds the flavor pools and the item family rules.

use crate::schema::item::{BonusKind, ItemFamily};
use crate::schema::skill::Skill;

/// Epithets a title may use for a skill.
pub fn epithets(skill: Skill) -> &'static [&'static str] {
    match skill {
        Skill::Contact => &["Cornu", "Chargeur", "Épineux", "Piquant", "Heurtant", "Sanglier"],
        Skill::Distance => &["Ailé", "Guetteur", "Perce-Ciel", "Sagittaire", "Faucon", "Vigie"],
        Skill::Ruse => &["Tisseur", "Araignée", "Renard", "Fourbe", "Piégeur", "Luron"],
        Skill::Tracking => &["Flairant", "Pistard", "Lynx", "Renifleur", "Fouisseur", "Loup"],
        Skill::Resilience => &["Rocailleux", "Écorcé", "Rustique", "Endurant", "Chêne", "Tenace"],
        Skill::Resourcefulness => &[
            "Lierre",
            "Bricoleur",
            "Récupérateur",
            "Castor",
            "Rat-des-sables",
            "Trouve-Tout",
        ],
        Skill::Craft => &["Forgeron", "Tisserand", "Sculpteur", "Tanneur", "Tailleur", "Bâtisseur"],
        Skill::Lore => &["Lettré", "Sage", "Archiviste", "Hibou", "Savant", "Sagace"],
        Skill::Occultism => &["Augure", "Sibyllin", "Runique", "Corbeau", "Chamanique", "Occulte"],
        Skill::Culture => &["Totémique", "Griot", "Héritier", "Tradition", "Ancestral", "Rituel"],
        Skill::Communication => &[
            "Langue-d’Argent",
            "Mielleux",
            "Orateur",
            "Diplomate",
            "Négociant",
            "Persuasif",
        ],
        Skill::Artistry => &["Lyrique", "Mélodique", "Peintre", "Tambour", "Rossignol", "Inspirant"],
    }
}

/// The bonus an item family grants.
pub fn bonus_kind(family: ItemFamily) -> BonusKind {
    match family {
        ItemFamily::Weapon => BonusKind::Skills(&[Skill::Contact, Skill::Distance]),
        ItemFamily::Tool => BonusKind::Skills(&[Skill::Tracking, Skill::Craft]),
        ItemFamily::Armor => BonusKind::Armor,
        ItemFamily::Trap => BonusKind::Skills(&[Skill::Ruse, Skill::Tracking]),
        ItemFamily::Shelter => BonusKind::Skills(&[Skill::Resilience]),
        ItemFamily::Instrument => BonusKind::Skills(&[Skill::Artistry, Skill::Culture]),
        ItemFamily::Fire => BonusKind::Skills(&[Skill::Resilience]),
        ItemFamily::Mount => BonusKind::Travel,
        ItemFamily::Bag => BonusKind::Stock,
        ItemFamily::Clothing => BonusKind::Skills(&[Skill::Culture]),
        ItemFamily::Dye => BonusKind::Skills(&[Skill::Artistry]),
        ItemFamily::Book => BonusKind::Skills(&[Skill::Lore]),
        ItemFamily::Light => BonusKind::Skills(&[Skill::Tracking]),
        ItemFamily::Decoration => BonusKind::Skills(&[Skill::Culture, Skill::Artistry]),
    }
}

/// Item names an item family draws from.
pub fn item_names(family: ItemFamily) -> &'static [&'static str] {
    match family {
        ItemFamily::Weapon => &["Hache", "Épée", "Masse", "Lance", "Arc", "Fronde"],
        ItemFamily::Tool => &["Boussole à mousse", "Marteau", "Pelle", "Sceau", "Corde", "Couteau"],
        ItemFamily::Armor => &["Bouclier", "Casque", "Plastron", "Jupe lamellaire"],
        ItemFamily::Trap => &["Collet", "Pics", "Poison"],
        ItemFamily::Shelter => &["Hamac", "Tente", "Cocon", "Yourte"],
        ItemFamily::Instrument => &["Flûte", "Oud", "Tambour"],
        ItemFamily::Fire => &["Pierre à feu", "Briquet"],
        ItemFamily::Mount => &["Selle", "Harnais", "Étrier"],
        ItemFamily::Bag => &["Sacoche", "Panier", "Bourse", "Sac de voyage", "Bandoulière"],
        ItemFamily::Clothing => &["Braies", "Tunique", "Sandales", "Bijoux", "Anneaux"],
        ItemFamily::Dye => &["Peinture"],
        ItemFamily::Book => &["Livre de recettes", "Livre de cuisine", "Journal de bord"],
        ItemFamily::Light => &["Torche", "Bougie", "Lanterne"],
        ItemFamily::Decoration => &["Totem", "Sculpture"],
    }
}

/// Stock bonuses a bag may carry.
pub const STOCK_BONUSES: [u32; 3] = [3, 4, 5];
pub const ARMOR_PER_PIECE: u32 = 1;
pub const TRAVEL_PER_MOUNT: u32 = 1;

pub const NPC_NAMES: [&str; 22] = [
    "Aren", "Belka", "Caro", "Darel", "Edrin", "Faro", "Galen", "Haska", "Irin", "Jaro", "Kael",
    "Leni", "Maro", "Neris", "Orin", "Pasha", "Ryn", "Sora", "Talan", "Vaska", "Yaro", "Zerin",
];

/// Resource kinds of the caravan's shared pool. The pool is counted as a
/// single total and never broken down by kind.
pub const RESOURCES: [&str; 13] = [
    "Bois", "Résine", "Fibre", "Viande", "Cuir", "Os", "Graisse", "Plante", "Glande", "Pierre",
    "Silex", "Fer", "Eau",
];

pub const CARAVAN_NAMES: [&str; 6] = [
    "La Pèlerine",
    "La Girelle",
    "L’Errante",
    "La Rosée Nocturne",
    "La Braise Douce",
    "L’Aiguille des Sables",
];

pub const CARAVAN_FAUNA: [&str; 5] = [
    "Chèvres des sables",
    "Rocs juvéniles",
    "Lézards de bât",
    "Corbeaux messagers",
    "Chien pisteur",
];

pub const CARAVAN_FLORA: [&str; 5] = [
    "Herbes médicinales",
    "Mousses rituelles",
    "Graines nutritives",
    "Lianes tressables",
    "Champignons alchimiques",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn every_skill_has_six_to_eight_epithets() {
        for skill in Skill::ALL {
            let pool = epithets(skill);
            assert!((6..=8).contains(&pool.len()), "{skill}: {} epithets", pool.len());
        }
    }

    #[test]
    fn every_family_has_names() {
        for family in ItemFamily::ALL {
            assert!(!item_names(family).is_empty(), "{family} has no names");
        }
    }

    #[test]
    fn skill_families_have_choices() {
        for family in ItemFamily::ALL {
            if let BonusKind::Skills(choices) = bonus_kind(family) {
                assert!(!choices.is_empty(), "{family} has no skill choices");
            }
        }
    }

    #[test]
    fn non_skill_bonus_families() {
        assert_eq!(bonus_kind(ItemFamily::Armor), BonusKind::Armor);
        assert_eq!(bonus_kind(ItemFamily::Bag), BonusKind::Stock);
        assert_eq!(bonus_kind(ItemFamily::Mount), BonusKind::Travel);
        let skill_families = ItemFamily::ALL
            .into_iter()
            .filter(|f| matches!(bonus_kind(*f), BonusKind::Skills(_)))
            .count();
        assert_eq!(skill_families, 11);
    }

    #[test]
    fn caravan_pools_hold_at_least_two_distinct_entries() {
        for pool in [&CARAVAN_FAUNA[..], &CARAVAN_FLORA[..]] {
            let unique: FxHashSet<&str> = pool.iter().copied().collect();
            assert_eq!(unique.len(), pool.len());
            assert!(pool.len() >= 2);
        }
    }

    #[test]
    fn resource_kinds() {
        assert_eq!(RESOURCES.len(), 13);
        assert!(RESOURCES.contains(&"Eau"));
    }
}
