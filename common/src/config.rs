#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Seeds the randomness source so favourite numbers are reproducible.
    ///
    /// `None` draws from the thread-local generator.
    pub seed: Option<u64>,
    /// Suppresses headers and decorations. Results are still printed.
    pub quiet: u8,
    /// Disables coloured output.
    pub no_color: bool,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
