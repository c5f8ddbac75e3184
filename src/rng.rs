use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers for the simulation.
///
/// The engine only ever asks for a value in `0..bound`, which keeps scripted
/// sources in tests trivial to write.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `0..bound`.  `bound` is
    /// always greater than zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source; the same seed always yields the same game.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.rng.gen_range(0..bound)
    }
}
