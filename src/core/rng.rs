//! Seeded randomness for deck shuffles and role draws.
//!
//! A game replays exactly from its seed: the `GameState` owns one
//! `GameRng` and every deck shuffle pulls from it in a fixed order. Side
//! streams, such as the role draw, are derived from the seed by label so
//! they never shift the shuffles.
//!
//! ```
//! use pandemic_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42).for_context("roles");
//! let mut b = GameRng::new(42).for_context("roles");
//! assert_eq!(a.below(48), b.below(48));
//! ```

use std::hash::Hasher;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Spreads successive fork seeds across the seed space.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable RNG owned by the game state.
///
/// ChaCha8 keeps deals identical across platforms and releases.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fresh stream for a branched game. Successive forks differ.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// A stream derived from the seed and `label` only, independent of how
    /// far this one has advanced.
    #[must_use]
    pub fn for_context(&self, label: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(label.as_bytes());
        Self::new(hasher.finish())
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position so a saved game resumes the same shuffles.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub forks: u64,
}
