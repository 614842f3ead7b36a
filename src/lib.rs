//! EcoNom Generator: deterministic NPC and caravan generation for tabletop play.
//!
//! Builds reproducible rosters of non-player characters and a companion
//! caravan from a text seed and a handful of numeric knobs, by composing
//! values drawn from fixed rule tables (skills, clans, terrains, item
//! families) with a seeded random source.

pub mod core;
pub mod schema;
