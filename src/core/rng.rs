//! Deterministic shuffling for in-memory piles.
//!
//! Hosts shuffle their own piles; the in-memory store needs a source of
//! randomness that tests can pin down, so the RNG is seeded explicitly.
//!
//! ```
//! use card_hud::core::ShuffleRng;
//!
//! let mut a = ShuffleRng::new(7);
//! let mut b = ShuffleRng::new(7);
//! let mut left = [1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left;
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream used for pile shuffles.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
    shuffles: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            shuffles: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
        self.shuffles += 1;
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of shuffles performed so far.
    #[must_use]
    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }
}

impl Default for ShuffleRng {
    fn default() -> Self {
        Self::new(0)
    }
}
