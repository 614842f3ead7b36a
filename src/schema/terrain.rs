use serde::{Deserialize, Serialize};
use std::fmt;

/// A named environment. Terrains come from two disjoint pools, the
/// nine deserts and the nine biomes; sampling uses their union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    // Deserts
    #[serde(rename = "Forêt Pétrifiée")]
    PetrifiedForest,
    #[serde(rename = "Terres Fongales")]
    FungalLands,
    #[serde(rename = "Cité Fantôme")]
    GhostCity,
    #[serde(rename = "Tourbière Asséchée")]
    DriedBog,
    #[serde(rename = "Mont Noir")]
    BlackMount,
    #[serde(rename = "Salinière")]
    SaltPan,
    #[serde(rename = "Canyon Plat")]
    FlatCanyon,
    #[serde(rename = "Mer d’Ombre")]
    ShadowSea,
    #[serde(rename = "Nuage Toxique")]
    ToxicCloud,
    // Biomes
    #[serde(rename = "Forêt")]
    Forest,
    Jungle,
    #[serde(rename = "Plaine")]
    Plain,
    #[serde(rename = "Marais")]
    Marsh,
    #[serde(rename = "Mont")]
    Mount,
    #[serde(rename = "Sable")]
    Sand,
    #[serde(rename = "Rivière")]
    River,
    #[serde(rename = "Lac")]
    Lake,
    Oasis,
}

impl Terrain {
    pub const DESERTS: [Terrain; 9] = [
        Terrain::PetrifiedForest,
        Terrain::FungalLands,
        Terrain::GhostCity,
        Terrain::DriedBog,
        Terrain::BlackMount,
        Terrain::SaltPan,
        Terrain::FlatCanyon,
        Terrain::ShadowSea,
        Terrain::ToxicCloud,
    ];

    pub const BIOMES: [Terrain; 9] = [
        Terrain::Forest,
        Terrain::Jungle,
        Terrain::Plain,
        Terrain::Marsh,
        Terrain::Mount,
        Terrain::Sand,
        Terrain::River,
        Terrain::Lake,
        Terrain::Oasis,
    ];

    /// Sampling pool: deserts first, then biomes.
    pub const ALL: [Terrain; 18] = [
        Terrain::PetrifiedForest,
        Terrain::FungalLands,
        Terrain::GhostCity,
        Terrain::DriedBog,
        Terrain::BlackMount,
        Terrain::SaltPan,
        Terrain::FlatCanyon,
        Terrain::ShadowSea,
        Terrain::ToxicCloud,
        Terrain::Forest,
        Terrain::Jungle,
        Terrain::Plain,
        Terrain::Marsh,
        Terrain::Mount,
        Terrain::Sand,
        Terrain::River,
        Terrain::Lake,
        Terrain::Oasis,
    ];

    pub fn is_desert(&self) -> bool {
        Self::DESERTS.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PetrifiedForest => "Forêt Pétrifiée",
            Self::FungalLands => "Terres Fongales",
            Self::GhostCity => "Cité Fantôme",
            Self::DriedBog => "Tourbière Asséchée",
            Self::BlackMount => "Mont Noir",
            Self::SaltPan => "Salinière",
            Self::FlatCanyon => "Canyon Plat",
            Self::ShadowSea => "Mer d’Ombre",
            Self::ToxicCloud => "Nuage Toxique",
            Self::Forest => "Forêt",
            Self::Jungle => "Jungle",
            Self::Plain => "Plaine",
            Self::Marsh => "Marais",
            Self::Mount => "Mont",
            Self::Sand => "Sable",
            Self::River => "Rivière",
            Self::Lake => "Lac",
            Self::Oasis => "Oasis",
        }
    }

    /// French partitive article used before the terrain name:
    /// "du", "de la", "de l’" or "des".
    pub fn article(&self) -> &'static str {
        match self {
            Self::FungalLands => "des",
            Self::PetrifiedForest
            | Self::GhostCity
            | Self::DriedBog
            | Self::SaltPan
            | Self::ShadowSea
            | Self::Forest
            | Self::Jungle
            | Self::Plain
            | Self::River => "de la",
            Self::BlackMount
            | Self::FlatCanyon
            | Self::ToxicCloud
            | Self::Marsh
            | Self::Mount
            | Self::Sand
            | Self::Lake => "du",
            Self::Oasis => "de l’",
        }
    }

    /// Article and name together, e.g. "du Canyon Plat".
    pub fn with_article(&self) -> String {
        format!("{} {}", self.article(), self.label())
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
