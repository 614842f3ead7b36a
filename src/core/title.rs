/// Title composer: two skill epithets and a terrain, e.g.
/// "Ailé Tanneur de la Forêt Pétrifiée".

use super::rng::RandomSource;
use super::rules::epithets;
use super::sampling::pick_one;
use crate::schema::skill::Skill;
use crate::schema::terrain::Terrain;

/// Compose `"{epithet1} {epithet2} {article} {terrain}"`.
///
/// Consumes exactly two draws, one per epithet. The two epithets may
/// coincide when both skills are the same.
pub fn compose_title<R: RandomSource + ?Sized>(
    source: &mut R,
    first: Skill,
    second: Skill,
    terrain: Terrain,
) -> String {
    let first_epithet = pick_one(source, epithets(first));
    let second_epithet = pick_one(source, epithets(second));
    format!(
        "{} {} {} {}",
        first_epithet,
        second_epithet,
        terrain.article(),
        terrain.label()
    )
}
