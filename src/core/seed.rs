/// Seed derivation: folds an arbitrary text seed into a 32-bit integer.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// FNV-1a fold of the seed's UTF-16 code units.
///
/// Any string, including the empty one, yields a value.
pub fn derive_seed(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
