/// The generation pipeline: seed and knobs in, roster and caravan out.
///
/// The roster and the caravan each draw from their own random stream.
/// The caravan stream is seeded from the base seed plus a fixed suffix,
/// so changing the roster knobs never changes the caravan and vice versa.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::caravan;
use super::npc::{generate_npc, MAX_ITEMS_PER_NPC};
use super::rng::Mulberry32;
use super::sampling::to_base36;
use super::seed::derive_seed;
use crate::schema::caravan::Caravan;
use crate::schema::npc::Npc;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Appended to the base seed to derive the caravan stream.
pub const CARAVAN_SEED_SUFFIX: &str = "/car";

pub const NPC_COUNT_RANGE: RangeInclusive<u32> = 1..=50;
pub const ITEMS_PER_NPC_RANGE: RangeInclusive<u32> = 0..=MAX_ITEMS_PER_NPC;
pub const HOSTED_NPC_RANGE: RangeInclusive<u32> = 0..=50;
pub const TOTAL_RESOURCES_RANGE: RangeInclusive<u32> = 0..=200;

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Generate a roster of `npc_count` NPCs with `items_per_npc` items each.
/// Out-of-range counts are clamped, never rejected.
pub fn generate_roster(seed: &str, npc_count: u32, items_per_npc: u32) -> Vec<Npc> {
    let npc_count = clamp_to(npc_count, &NPC_COUNT_RANGE);
    let items_per_npc = clamp_to(items_per_npc, &ITEMS_PER_NPC_RANGE);
    let mut rng = Mulberry32::from_text(seed);
    debug!(seed, derived = rng.state(), npc_count, items_per_npc, "generating roster");

    (0..npc_count)
        .map(|_| generate_npc(&mut rng, items_per_npc))
        .collect()
}

/// Generate the caravan for `seed`. Counts are clamped and passed through.
pub fn generate_caravan(seed: &str, total_resources: u32, hosted_npc_count: u32) -> Caravan {
    let total_resources = clamp_to(total_resources, &TOTAL_RESOURCES_RANGE);
    let hosted_npc_count = clamp_to(hosted_npc_count, &HOSTED_NPC_RANGE);
    let caravan_seed = format!("{}{}", seed, CARAVAN_SEED_SUFFIX);
    let mut rng = Mulberry32::from_text(&caravan_seed);
    debug!(
        seed,
        derived = derive_seed(&caravan_seed),
        total_resources,
        hosted_npc_count,
        "generating caravan"
    );

    caravan::generate_caravan(&mut rng, total_resources, hosted_npc_count)
}

/// Append `":"` and a random base-36 token to `seed`.
///
/// The only helper that reads outside entropy; generation itself is a
/// pure function of seed and knobs.
pub fn reroll_seed<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> String {
    let token: u64 = rng.gen_range(0..1_000_000);
    format!("{}:{}", seed, to_base36(token))
}

/// File name for a dated export, e.g. `EcoNom_Gen_2024-05-01.json`.
pub fn export_file_name(date: &str) -> String {
    format!("EcoNom_Gen_{}.json", date)
}

/// Seed and knobs of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub seed: String,
    pub npc_count: u32,
    pub items_per_npc: u32,
    pub hosted_npc_count: u32,
    pub total_resources: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: "EcoNom-v1".to_string(),
            npc_count: 6,
            items_per_npc: 2,
            hosted_npc_count: 6,
            total_resources: 30,
        }
    }
}

impl GenerationConfig {
    /// Load a config from a RON file. Missing fields take their defaults.
    pub fn load_from_ron(path: &Path) -> Result<GenerationConfig, GenerationError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a config from a RON string.
    pub fn parse_ron(input: &str) -> Result<GenerationConfig, GenerationError> {
        Ok(ron::from_str(input)?)
    }

    /// Every knob bounded into its valid range.
    pub fn clamped(&self) -> GenerationConfig {
        GenerationConfig {
            seed: self.seed.clone(),
            npc_count: clamp_to(self.npc_count, &NPC_COUNT_RANGE),
            items_per_npc: clamp_to(self.items_per_npc, &ITEMS_PER_NPC_RANGE),
            hosted_npc_count: clamp_to(self.hosted_npc_count, &HOSTED_NPC_RANGE),
            total_resources: clamp_to(self.total_resources, &TOTAL_RESOURCES_RANGE),
        }
    }
}

/// The combined export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub npcs: Vec<Npc>,
    pub caravan: Caravan,
}

impl Generation {
    /// Run a full pass for `config`.
    pub fn from_config(config: &GenerationConfig) -> Generation {
        Generation {
            npcs: generate_roster(&config.seed, config.npc_count, config.items_per_npc),
            caravan: generate_caravan(&config.seed, config.total_resources, config.hosted_npc_count),
        }
    }

    /// Formatted JSON text, two-space indented.
    pub fn to_json_pretty(&self) -> Result<String, GenerationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Generation, GenerationError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Write the formatted JSON export to `path`.
    pub fn save_json(&self, path: &Path) -> Result<(), GenerationError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// A configured generator. Built via `EcoNomGenerator::builder()`.
#[derive(Debug, Clone)]
pub struct EcoNomGenerator {
    config: GenerationConfig,
}

/// Builder for constructing an `EcoNomGenerator`.
///
/// Values from a config file are applied first; explicit setters
/// override them.
#[derive(Debug, Default)]
pub struct EcoNomGeneratorBuilder {
    config_path: Option<PathBuf>,
    /// Directly provided config (for use without files).
    config: Option<GenerationConfig>,
    seed: Option<String>,
    npc_count: Option<u32>,
    items_per_npc: Option<u32>,
    hosted_npc_count: Option<u32>,
    total_resources: Option<u32>,
}

impl EcoNomGenerator {
    pub fn builder() -> EcoNomGeneratorBuilder {
        EcoNomGeneratorBuilder::default()
    }

    /// The clamped config this generator runs with.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn roster(&self) -> Vec<Npc> {
        generate_roster(&self.config.seed, self.config.npc_count, self.config.items_per_npc)
    }

    pub fn caravan(&self) -> Caravan {
        generate_caravan(
            &self.config.seed,
            self.config.total_resources,
            self.config.hosted_npc_count,
        )
    }

    pub fn generate(&self) -> Generation {
        Generation::from_config(&self.config)
    }

    /// A generator with the same knobs and a rerolled seed.
    pub fn rerolled<R: Rng + ?Sized>(&self, rng: &mut R) -> EcoNomGenerator {
        EcoNomGenerator {
            config: GenerationConfig {
                seed: reroll_seed(&self.config.seed, rng),
                ..self.config.clone()
            },
        }
    }
}

impl EcoNomGeneratorBuilder {
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Provide a config directly (for use without files).
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn seed(mut self, seed: &str) -> Self {
        self.seed = Some(seed.to_string());
        self
    }

    pub fn npc_count(mut self, count: u32) -> Self {
        self.npc_count = Some(count);
        self
    }

    pub fn items_per_npc(mut self, count: u32) -> Self {
        self.items_per_npc = Some(count);
        self
    }

    pub fn hosted_npc_count(mut self, count: u32) -> Self {
        self.hosted_npc_count = Some(count);
        self
    }

    pub fn total_resources(mut self, total: u32) -> Self {
        self.total_resources = Some(total);
        self
    }

    pub fn build(self) -> Result<EcoNomGenerator, GenerationError> {
        let mut config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => GenerationConfig::load_from_ron(&path)?,
            (None, None) => GenerationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(count) = self.npc_count {
            config.npc_count = count;
        }
        if let Some(count) = self.items_per_npc {
            config.items_per_npc = count;
        }
        if let Some(count) = self.hosted_npc_count {
            config.hosted_npc_count = count;
        }
        if let Some(total) = self.total_resources {
            config.total_resources = total;
        }

        Ok(EcoNomGenerator {
            config: config.clamped(),
        })
    }
}
