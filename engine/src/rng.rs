//! Session prize randomness.
//!
//! One [`PrizeRng`] is created per session from the host-provided seed, so a
//! session's full prize sequence is replayable from `(seed, action order)`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use spinhall_types::session::{PRIZE_MIN, PRIZE_SPREAD};

/// Deterministic prize stream for one session.
#[derive(Clone, Debug)]
pub struct PrizeRng {
    rng: ChaCha20Rng,
}

impl PrizeRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next prize, uniform in `PRIZE_MIN..PRIZE_MIN + PRIZE_SPREAD`.
    pub fn next_prize(&mut self) -> u64 {
        PRIZE_MIN + self.rng.gen_range(0..PRIZE_SPREAD)
    }
}
