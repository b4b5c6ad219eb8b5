/// Defines the contract for drawing random integers.
///
/// Value objects that need randomness take this as a parameter instead of
/// reaching for a global generator, so callers decide between a real RNG,
/// a seeded one, or a fixed stub.
pub trait RandomSource {
    /// Returns an integer in `0..bound`.
    ///
    /// # Arguments
    /// * `bound` - Exclusive upper limit. Must be greater than 0.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}
