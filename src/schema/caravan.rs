use serde::{Deserialize, Serialize};

/// The group entity travelling with the roster.
///
/// `total_resources` is an opaque pool and `hosted_npc_count` is taken
/// as given; neither is reconciled with the generated roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caravan {
    pub id: String,
    pub name: String,
    pub total_resources: u32,
    pub hosted_npc_count: u32,
    /// Two distinct fauna names.
    pub fauna: Vec<String>,
    /// Two distinct flora names.
    pub flora: Vec<String>,
}
