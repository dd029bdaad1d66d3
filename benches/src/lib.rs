//! Shared input generation for the engine benchmarks.

use rand::prelude::*;

/// Generate `len` bytes drawn uniformly from `alphabet`.
pub fn haystack(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| *alphabet.choose(&mut rng).unwrap())
        .collect()
}

/// Copy a window out of `text` to use as a pattern that is guaranteed to
/// occur at least once.
pub fn window(text: &[u8], at: usize, len: usize) -> Vec<u8> {
    text[at..at + len].to_vec()
}
