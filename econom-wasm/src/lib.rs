//! WASM bindings for econom-generator: JSON in and out for the web front ends.

use std::ops::RangeInclusive;
use wasm_bindgen::prelude::*;

use econom_generator::core::pipeline::{
    self, Generation, GenerationConfig, HOSTED_NPC_RANGE, ITEMS_PER_NPC_RANGE, NPC_COUNT_RANGE,
    TOTAL_RESOURCES_RANGE,
};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct KnobRange {
    min: u32,
    max: u32,
    default: u32,
}

#[derive(serde::Serialize)]
struct KnobRanges {
    npc_count: KnobRange,
    items_per_npc: KnobRange,
    hosted_npc_count: KnobRange,
    total_resources: KnobRange,
}

fn knob(range: &RangeInclusive<u32>, default: u32) -> KnobRange {
    KnobRange {
        min: *range.start(),
        max: *range.end(),
        default,
    }
}

/// JS numbers arrive signed; negatives clamp to zero before the
/// generator clamps into range.
fn count(value: i32) -> u32 {
    value.max(0) as u32
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

/// The NPC roster for `seed`, as a JSON array.
#[wasm_bindgen]
pub fn generate_roster(seed: &str, npc_count: i32, items_per_npc: i32) -> Result<String, JsError> {
    to_json(&pipeline::generate_roster(
        seed,
        count(npc_count),
        count(items_per_npc),
    ))
}

/// The caravan for `seed`, as a JSON object.
#[wasm_bindgen]
pub fn generate_caravan(
    seed: &str,
    total_resources: i32,
    hosted_npc_count: i32,
) -> Result<String, JsError> {
    to_json(&pipeline::generate_caravan(
        seed,
        count(total_resources),
        count(hosted_npc_count),
    ))
}

/// The full export document, pretty-printed, for a JSON config.
/// Missing config fields take their defaults.
#[wasm_bindgen]
pub fn generate(config_json: &str) -> Result<String, JsError> {
    let config: GenerationConfig = serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config JSON: {e}")))?;
    Generation::from_config(&config.clamped())
        .to_json_pretty()
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn reroll_seed(seed: &str) -> String {
    pipeline::reroll_seed(seed, &mut rand::thread_rng())
}

/// Suggested download name for an export dated `date` (YYYY-MM-DD).
#[wasm_bindgen]
pub fn export_file_name(date: &str) -> String {
    pipeline::export_file_name(date)
}

/// Slider bounds and defaults for every knob.
#[wasm_bindgen]
pub fn knob_ranges() -> String {
    let defaults = GenerationConfig::default();
    to_json(&KnobRanges {
        npc_count: knob(&NPC_COUNT_RANGE, defaults.npc_count),
        items_per_npc: knob(&ITEMS_PER_NPC_RANGE, defaults.items_per_npc),
        hosted_npc_count: knob(&HOSTED_NPC_RANGE, defaults.hosted_npc_count),
        total_resources: knob(&TOTAL_RESOURCES_RANGE, defaults.total_resources),
    })
    .unwrap_or_else(|_| "{}".to_string())
}

#[wasm_bindgen]
pub fn default_seed() -> String {
    GenerationConfig::default().seed
}
