//! Puzzle solving command
//!
//! Validates the raw letters and target, then runs the solver.

use crate::error::ValidationError;
use crate::solver::{Query, Solution, Solver};

/// Raw input for solving a puzzle
pub struct SolveConfig {
    pub letters: String,
    pub target: String,
    pub pangrams_only: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String, target: String) -> Self {
        Self {
            letters,
            target,
            pangrams_only: false,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub solution: Solution,
    pub pangrams_only: bool,
}

/// Solve the puzzle described by `config`
///
/// # Errors
///
/// Returns an error if the letters contain a non-letter or the target is not
/// a single available letter.
pub fn solve_puzzle(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, ValidationError> {
    let query = Query::parse(&config.letters, &config.target)?;

    Ok(SolveResult {
        solution: solver.solve(&query),
        pangrams_only: config.pangrams_only,
    })
}
