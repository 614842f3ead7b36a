//! Generation pipeline: seed derivation, random source, sampling
//! primitives, rule tables and the layered entity generators.

pub mod caravan;
pub mod item;
pub mod npc;
pub mod pipeline;
pub mod rng;
pub mod rules;
pub mod sampling;
pub mod seed;
pub mod title;
