use primer_common::config::Config;
use primer_common::random::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Draws from rand's thread-local generator.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        draw(&mut self.rng, bound)
    }
}

/// Reproducible generator: the same seed yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        draw(&mut self.rng, bound)
    }
}

fn draw(rng: &mut impl Rng, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    rng.random_range(0..bound)
}

/// Picks the seeded generator when the config carries a seed.
pub fn from_config(cfg: &Config) -> Box<dyn RandomSource> {
    match cfg.seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom::new()),
    }
}
