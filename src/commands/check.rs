//! Word check command
//!
//! Explains how a single word fares against a puzzle.

use crate::core::ScoredWord;
use crate::error::ValidationError;
use crate::solver::{
    Query, Solver, contains_target, is_constructible, is_pangram, meets_min_length, score,
};

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub query: Query,
    pub constructible: bool,
    pub has_target: bool,
    pub long_enough: bool,
    pub in_dictionary: bool,
    pub pangram: bool,
    pub perfect_pangram: bool,
    /// Points the word is worth if accepted, else 0
    pub score: u32,
}

impl CheckResult {
    /// Would the puzzle accept this word?
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.constructible && self.has_target && self.long_enough && self.in_dictionary
    }
}

/// Check `word` against the puzzle given by `letters` and `target`
///
/// # Errors
///
/// Returns an error if the letters contain a non-letter or the target is not
/// a single available letter.
pub fn check_word(
    letters: &str,
    target: &str,
    word: &str,
    solver: &Solver<'_>,
) -> Result<CheckResult, ValidationError> {
    let query = Query::parse(letters, target)?;
    let config = solver.config();
    let word = word.trim().to_ascii_uppercase();

    let constructible = is_constructible(query.letters(), &word);
    let has_target = contains_target(query.letters(), &word, query.target());
    let long_enough = meets_min_length(&word, config.min_length);
    let in_dictionary = solver.contains_word(&word);
    let pangram = is_pangram(&word, query.letters());
    let perfect_pangram = ScoredWord::new(&word, pangram, 0).is_perfect_pangram(query.letters());

    let mut result = CheckResult {
        word,
        query,
        constructible,
        has_target,
        long_enough,
        in_dictionary,
        pangram,
        perfect_pangram,
        score: 0,
    };
    if result.accepted() {
        result.score = score(&result.word, pangram, config.min_length, config.pangram_bonus);
    }

    Ok(result)
}
