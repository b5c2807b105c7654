//! Deterministic randomness for deciding who breaks.
//!
//! Leagues normally lag for the break. When they don't, the scorer tosses a
//! coin; seeding the toss keeps replays and tests reproducible.
//!
//! ```
//! use rust_straight_pool::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.coin_toss(), b.coin_toss());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a seat with equal probability.
    pub fn coin_toss(&mut self) -> PlayerId {
        if self.inner.gen_bool(0.5) {
            PlayerId::A
        } else {
            PlayerId::B
        }
    }
}
