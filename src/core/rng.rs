//! Deterministic random number generation for hand draws and commentary.
//!
//! Every random choice in a session (the shuffle behind a hand, the
//! commentary line, the advice tip) is drawn from a [`GameRng`]. A session
//! seeded with the same value and fed the same selections replays exactly.
//!
//! Commentary and advice run off the session's own task, so they get a
//! [`GameRng::fork`] instead of a shared reference:
//!
//! ```
//! use campus_cards::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut for_commentary = rng.fork();
//!
//! // Forks are deterministic: same parent seed, same fork order, same stream.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(for_commentary.gen_index(1000), again.gen_index(1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable, forkable RNG.
///
/// ChaCha8 keeps the stream portable across platforms, and its word
/// position makes the state cheap to capture.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent RNG.
    ///
    /// Each fork gets a different but deterministic seed, so a task that
    /// owns the fork never touches the parent stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Uniform in-place shuffle (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a uniformly random element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Capture the current state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Rebuild an RNG from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Forks handed out so far
    pub fork_counter: u64,
}
