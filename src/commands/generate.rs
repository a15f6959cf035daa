//! Puzzle generation command
//!
//! Finds every playable puzzle in the dictionary and ranks them.

use crate::solver::Solver;
use crate::solver::generator::{
    PuzzleSummary, STANDARD_LETTER_COUNT, candidate_queries, evaluate, pangram_seeds,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a generation run
pub struct GenerateResult {
    /// Distinct seven letter sets found
    pub seeds: usize,
    /// Candidate puzzles evaluated (seed × target letter)
    pub candidates: usize,
    /// Puzzles that met the word threshold, best first
    pub puzzles: Vec<PuzzleSummary>,
    pub duration: Duration,
}

/// Evaluate all candidate puzzles, keeping the best `limit`
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_generate(solver: &Solver<'_>, limit: Option<usize>, min_words: usize) -> GenerateResult {
    let start = Instant::now();

    let seeds = pangram_seeds(solver.dictionary(), STANDARD_LETTER_COUNT);
    let queries = candidate_queries(&seeds);

    println!(
        "🐝 Evaluating {} puzzles from {} letter sets...",
        queries.len(),
        seeds.len()
    );

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut puzzles = evaluate(solver, &queries, min_words, || pb.inc(1));
    pb.finish_and_clear();

    if let Some(limit) = limit {
        puzzles.truncate(limit);
    }

    GenerateResult {
        seeds: seeds.len(),
        candidates: queries.len(),
        puzzles,
        duration: start.elapsed(),
    }
}
