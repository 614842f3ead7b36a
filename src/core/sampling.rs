/// Sampling primitives over fixed pools.
///
/// Every primitive takes its random source explicitly and never mutates
/// the pool it samples from.
///
/// # Panics
///
/// Drawing from an empty pool is a programming error: [`pick_one`],
/// [`pick_pair`] and a non-zero [`pick_many_with_replacement`] panic on it.
/// The rule tables are fixed and never empty.

use super::rng::RandomSource;

/// Index of one uniform draw into a pool of `len` elements.
fn pick_index<R: RandomSource + ?Sized>(source: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot sample from an empty pool");
    (source.next_f64() * len as f64).floor() as usize
}

/// One uniform draw. Consumes one draw.
pub fn pick_one<'a, T, R: RandomSource + ?Sized>(source: &mut R, items: &'a [T]) -> &'a T {
    &items[pick_index(source, items.len())]
}

/// Up to `n` distinct positions, removed one at a time from a working
/// copy of the pool. Saturates at the pool size.
pub fn pick_many_distinct<T: Clone, R: RandomSource + ?Sized>(
    source: &mut R,
    items: &[T],
    n: usize,
) -> Vec<T> {
    let mut pool = items.to_vec();
    let mut picked = Vec::with_capacity(n.min(pool.len()));
    while picked.len() < n && !pool.is_empty() {
        let index = pick_index(source, pool.len());
        picked.push(pool.remove(index));
    }
    picked
}

/// `n` independent draws; duplicates expected.
pub fn pick_many_with_replacement<T: Clone, R: RandomSource + ?Sized>(
    source: &mut R,
    items: &[T],
    n: usize,
) -> Vec<T> {
    (0..n).map(|_| pick_one(source, items).clone()).collect()
}

/// Two independent draws, which may be identical.
pub fn pick_pair<T: Clone, R: RandomSource + ?Sized>(source: &mut R, items: &[T]) -> [T; 2] {
    let first = pick_one(source, items).clone();
    let second = pick_one(source, items).clone();
    [first, second]
}

/// Identity of the form `"{prefix}-{suffix}"`, where the suffix is one
/// draw scaled to `[0, 1e9)` and written in lowercase base 36.
/// Consumes one draw.
pub fn synthetic_id<R: RandomSource + ?Sized>(source: &mut R, prefix: &str) -> String {
    let suffix = (source.next_f64() * 1e9).floor() as u64;
    format!("{}-{}", prefix, to_base36(suffix))
}

/// Lowercase base-36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
