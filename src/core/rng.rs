/// Deterministic random source: a Mulberry32 stream over a 32-bit counter.
///
/// Not cryptographically secure. Each generation phase owns its own
/// stream, so phases never perturb each other's draws.

use rand::{RngCore, SeedableRng};

use super::seed::derive_seed;

/// Weyl increment added to the counter before each draw.
const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A source of uniform floats in `[0, 1)`.
///
/// Every sampling primitive and generator draws exclusively through this
/// trait. It is implemented for every [`RngCore`], using one 32-bit word
/// per draw.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// Mulberry32 generator. Same seed, same infinite sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from text through [`derive_seed`].
    pub fn from_text(seed: &str) -> Self {
        Self::new(derive_seed(seed))
    }

    /// Current counter value.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(t | 1);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
        r ^ (r >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
/// Replays a fixed script of draws; panics once the script runs out.
pub(crate) struct ScriptedSource {
    words: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    /// Each `(index, len)` pair yields a draw that lands on `index` when
    /// sampling from a pool of `len` elements.
    pub(crate) fn from_picks(picks: &[(usize, usize)]) -> Self {
        let words = picks
            .iter()
            .map(|&(index, len)| {
                assert!(index < len);
                ((2 * index as u64 + 1) * (1u64 << 32) / (2 * len as u64)) as u32
            })
            .collect();
        Self { words, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }
}

#[cfg(test)]
impl RngCore for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.pos];
        self.pos += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
