//! Solver configuration

/// Scoring rules applied to every query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Words shorter than this are not accepted
    pub min_length: usize,
    /// Extra points awarded to a pangram
    pub pangram_bonus: u32,
}

impl SolverConfig {
    /// Standard Spelling Bee rules: four letters minimum, seven point bonus
    pub const STANDARD: Self = Self {
        min_length: 4,
        pangram_bonus: 7,
    };

    #[must_use]
    pub const fn new(min_length: usize, pangram_bonus: u32) -> Self {
        Self {
            min_length,
            pangram_bonus,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
