/// Caravan generator: name plus distinct fauna and flora picks.

use tracing::trace;

use super::rng::RandomSource;
use super::rules::{CARAVAN_FAUNA, CARAVAN_FLORA, CARAVAN_NAMES};
use super::sampling::{pick_many_distinct, pick_one, synthetic_id};
use crate::schema::caravan::Caravan;

/// Fauna and flora entries sampled per caravan.
pub const LIVING_STOCK_PICKS: usize = 2;

/// Generate one caravan.
///
/// `total_resources` and `hosted_npc_count` pass through untouched; they
/// are not reconciled with any generated roster.
///
/// Draw order: identity, name, fauna (distinct), flora (distinct).
pub fn generate_caravan<R: RandomSource + ?Sized>(
    source: &mut R,
    total_resources: u32,
    hosted_npc_count: u32,
) -> Caravan {
    let id = synthetic_id(source, "car");
    let name = pick_one(source, &CARAVAN_NAMES).to_string();
    let fauna = owned(pick_many_distinct(source, &CARAVAN_FAUNA, LIVING_STOCK_PICKS));
    let flora = owned(pick_many_distinct(source, &CARAVAN_FLORA, LIVING_STOCK_PICKS));
    trace!(%id, %name, total_resources, hosted_npc_count, "generated caravan");

    Caravan {
        id,
        name,
        total_resources,
        hosted_npc_count,
        fauna,
        flora,
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{Mulberry32, ScriptedSource};

    #[test]
    fn draw_order() {
        let mut source = ScriptedSource::from_picks(&[
            (0, 1), // identity
            (2, 6), // "L’Errante"
            (4, 5), // "Chien pisteur"
            (0, 4), // "Chèvres des sables"
            (0, 5), // "Herbes médicinales"
            (3, 4), // "Champignons alchimiques"
        ]);
        let caravan = generate_caravan(&mut source, 12, 3);
        assert_eq!(source.remaining(), 0);
        assert_eq!(caravan.id, "car-89oqgw");
        assert_eq!(caravan.name, "L’Errante");
        assert_eq!(caravan.fauna, vec!["Chien pisteur", "Chèvres des sables"]);
        assert_eq!(caravan.flora, vec!["Herbes médicinales", "Champignons alchimiques"]);
        assert_eq!(caravan.total_resources, 12);
        assert_eq!(caravan.hosted_npc_count, 3);
    }

    #[test]
    fn golden_caravan() {
        let mut rng = Mulberry32::from_text("EcoNom-v1/car");
        let caravan = generate_caravan(&mut rng, 30, 6);
        assert_eq!(caravan.id, "car-5ekb2y");
        assert_eq!(caravan.name, "La Braise Douce");
        assert_eq!(caravan.fauna, vec!["Rocs juvéniles", "Chèvres des sables"]);
        assert_eq!(caravan.flora, vec!["Champignons alchimiques", "Mousses rituelles"]);
    }

    #[test]
    fn counts_pass_through() {
        let mut rng = Mulberry32::new(3);
        let caravan = generate_caravan(&mut rng, 200, 0);
        assert_eq!(caravan.total_resources, 200);
        assert_eq!(caravan.hosted_npc_count, 0);
    }
}
