/// Property tests over arbitrary seeds and knob values.

use econom_generator::core::pipeline::{generate_caravan, generate_roster, GenerationConfig};
use econom_generator::core::seed::derive_seed;
use econom_generator::schema::item::{ItemBonus, Material};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn arb_seed() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9:/ -]{0,24}",
        any::<String>(),
        Just("EcoNom-v1".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same seed and knobs, same roster and caravan.
    #[test]
    fn generation_is_deterministic(seed in arb_seed(), npcs in 1u32..=12, items in 0u32..=4) {
        prop_assert_eq!(generate_roster(&seed, npcs, items), generate_roster(&seed, npcs, items));
        prop_assert_eq!(generate_caravan(&seed, 30, 6), generate_caravan(&seed, 30, 6));
        prop_assert_eq!(derive_seed(&seed), derive_seed(&seed));
    }

    /// Skill bonus count follows the material step; tiered items carry one.
    #[test]
    fn item_tiering(seed in arb_seed()) {
        for npc in generate_roster(&seed, 10, 4) {
            for item in &npc.inventory {
                prop_assert_ne!(item.material().is_some(), item.tier().is_some());
                prop_assert_eq!(item.material().is_some(), item.family.is_equipment());
                if let ItemBonus::Skills(skills) = &item.bonus {
                    let expected = match item.material() {
                        Some(Material::Fine) => 2,
                        Some(Material::Iron) => 3,
                        _ => 1,
                    };
                    prop_assert_eq!(skills.len(), expected);
                }
            }
        }
    }

    /// The NPC skill list is exactly the duplicate-free union of its sources.
    #[test]
    fn skill_set_is_the_union(seed in arb_seed(), items in 0u32..=4) {
        for npc in generate_roster(&seed, 8, items) {
            let listed: FxHashSet<_> = npc.skills.iter().copied().collect();
            prop_assert_eq!(listed.len(), npc.skills.len());

            let mut contributed: FxHashSet<_> = npc.clan_bonus.iter().copied().collect();
            contributed.extend(npc.title_skills);
            for item in &npc.inventory {
                contributed.extend(item.bonus_skills().iter().copied());
            }
            prop_assert_eq!(listed, contributed);

            for skill in npc.clan_bonus {
                prop_assert_eq!(skill.family(), npc.clan.family());
            }
        }
    }

    /// Totals are the sums of the inventory's bonuses.
    #[test]
    fn totals_sum_inventory(seed in arb_seed()) {
        for npc in generate_roster(&seed, 8, 4) {
            let armor: u32 = npc.inventory.iter().filter_map(|i| i.armor()).sum();
            let stock: u32 = npc.inventory.iter().filter_map(|i| i.stock()).sum();
            let travel: u32 = npc.inventory.iter().filter_map(|i| i.travel()).sum();
            prop_assert_eq!((npc.armor, npc.stock, npc.travel), (armor, stock, travel));
        }
    }

    /// Out-of-range knobs clamp rather than fail.
    #[test]
    fn knobs_clamp(
        npcs in any::<u32>(),
        items in any::<u32>(),
        hosted in any::<u32>(),
        total in any::<u32>()
    ) {
        let config = GenerationConfig {
            seed: "clamp".to_string(),
            npc_count: npcs,
            items_per_npc: items,
            hosted_npc_count: hosted,
            total_resources: total,
        }
        .clamped();
        prop_assert!((1..=50).contains(&config.npc_count));
        prop_assert!(config.items_per_npc <= 4);
        prop_assert!(config.hosted_npc_count <= 50);
        prop_assert!(config.total_resources <= 200);

        let caravan = generate_caravan("clamp", total, hosted);
        prop_assert_eq!(caravan.total_resources, config.total_resources);
        prop_assert_eq!(caravan.hosted_npc_count, config.hosted_npc_count);
    }

    /// The caravan stream is independent of the roster knobs, and its
    /// fauna and flora picks never repeat.
    #[test]
    fn caravan_independence(seed in arb_seed(), npcs in 1u32..=50, items in 0u32..=4) {
        let before = generate_caravan(&seed, 30, 6);
        let _ = generate_roster(&seed, npcs, items);
        let caravan = generate_caravan(&seed, 30, 6);
        prop_assert_eq!(&before, &caravan);
        prop_assert_ne!(&caravan.fauna[0], &caravan.fauna[1]);
        prop_assert_ne!(&caravan.flora[0], &caravan.flora[1]);
    }
}
