/// NPC generator: clan, title, terrain, inventory and aggregated bonuses.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::item::generate_item;
use super::rng::RandomSource;
use super::rules::NPC_NAMES;
use super::sampling::{pick_one, pick_pair, synthetic_id};
use super::title::compose_title;
use crate::schema::clan::Clan;
use crate::schema::item::Item;
use crate::schema::npc::Npc;
use crate::schema::skill::Skill;
use crate::schema::terrain::Terrain;

/// Most items an NPC may carry.
pub const MAX_ITEMS_PER_NPC: u32 = 4;

/// Skill union and bonus totals of an NPC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub skills: Vec<Skill>,
    pub armor: u32,
    pub stock: u32,
    pub travel: u32,
}

/// Fold clan bonus, title and inventory skills into one duplicate-free
/// list (first contribution wins the position) and sum item bonuses.
pub fn aggregate(clan_bonus: &[Skill], title_skills: &[Skill], inventory: &[Item]) -> Aggregate {
    let mut seen = FxHashSet::default();
    let mut totals = Aggregate::default();

    let contributed = clan_bonus
        .iter()
        .chain(title_skills)
        .chain(inventory.iter().flat_map(|item| item.bonus_skills()));
    for &skill in contributed {
        if seen.insert(skill) {
            totals.skills.push(skill);
        }
    }

    for item in inventory {
        totals.armor += item.armor().unwrap_or(0);
        totals.stock += item.stock().unwrap_or(0);
        totals.travel += item.travel().unwrap_or(0);
    }

    totals
}

/// Generate one NPC carrying `items_per_npc` items (clamped to at most
/// [`MAX_ITEMS_PER_NPC`]).
///
/// Draw order: clan, two clan bonus skills, two title skills, terrain,
/// two title epithets, each item in turn, identity, display name.
pub fn generate_npc<R: RandomSource + ?Sized>(source: &mut R, items_per_npc: u32) -> Npc {
    let clan = *pick_one(source, &Clan::ALL);
    let clan_bonus = pick_pair(source, clan.family().skills());
    let title_skills = pick_pair(source, &Skill::ALL);
    let terrain = *pick_one(source, &Terrain::ALL);
    let title = compose_title(source, title_skills[0], title_skills[1], terrain);

    let inventory: Vec<Item> = (0..items_per_npc.min(MAX_ITEMS_PER_NPC))
        .map(|_| generate_item(source))
        .collect();

    let Aggregate {
        skills,
        armor,
        stock,
        travel,
    } = aggregate(&clan_bonus, &title_skills, &inventory);

    let id = synthetic_id(source, "pnj");
    let name = pick_one(source, &NPC_NAMES).to_string();
    trace!(%id, %name, %clan, %title, items = inventory.len(), "generated npc");

    Npc {
        id,
        name,
        clan,
        clan_bonus,
        title_skills,
        terrain,
        title,
        inventory,
        skills,
        armor,
        stock,
        travel,
    }
}
