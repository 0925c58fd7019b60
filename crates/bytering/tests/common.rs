#![allow(missing_docs)]
#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::SmallRng};

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Routes the crate's `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A seeded generator, so failures reproduce.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// `n` random ASCII letters.
pub fn letters(rng: &mut impl Rng, n: usize) -> Vec<u8> {
    (0..n)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())])
        .collect()
}
