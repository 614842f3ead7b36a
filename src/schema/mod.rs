//! Plain value types produced by the generators and consumed read-only
//! by presentation and export layers.

pub mod caravan;
pub mod clan;
pub mod item;
pub mod npc;
pub mod skill;
pub mod terrain;
