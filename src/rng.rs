//! Random sampling source for product generation.
//!
//! Every generator takes a `&mut SamplerRng` owned by the caller; there is
//! no ambient process-wide RNG. Production callers use [`SamplerRng::from_entropy`]
//! (no seeding contract, non-reproducible), tests inject [`SamplerRng::new`]
//! with a fixed seed so generation is replayable.
//!
//! ```
//! use proxy_league::SamplerRng;
//!
//! let mut a = SamplerRng::new(7);
//! let mut b = SamplerRng::new(7);
//! let items = ["x", "y", "z"];
//! assert_eq!(a.choose(&items), b.choose(&items));
//! ```

use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable sampling source backed by ChaCha8.
///
/// ChaCha8 is fast and statistically strong; the seed is kept so the
/// source can be forked into independent deterministic branches when a
/// caller parallelizes generation.
#[derive(Clone, Debug)]
pub struct SamplerRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SamplerRng {
    /// Create a source with a fixed seed. Same seed, same products.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(OsRng.gen())
    }

    /// Fork an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, so a
    /// caller can hand one source per thread without coordination.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Random index in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice. `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
