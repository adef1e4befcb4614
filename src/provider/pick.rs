//! Injectable random selection for connection candidates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of index choices for connection selection.
///
/// One instance per resolution call; sharing an instance across concurrent
/// resolutions requires the implementation to serialize access itself.
/// Implementations decide the policy: uniform, weighted, or affinity to a
/// previously successful connection. The resolver never embeds a policy of
/// its own.
pub trait Picker {
    /// Picks an index in `0..len`. `len` is always non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection over the full candidate list.
#[derive(Debug, Clone)]
pub struct UniformPicker {
    rng: StdRng,
}

impl UniformPicker {
    /// A picker with a fixed seed, for reproducible selection.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A picker seeded from the operating system entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Picker for UniformPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
