//! Scoring, pangram detection and result ordering
//!
//! Words shorter than the minimum length are dropped by [`classify`] before
//! scoring. [`score`] itself still returns 0 for them so it stays total.

use super::filter::meets_min_length;
use crate::core::{LetterSet, ScoredWord};

/// Does `word` use every letter of `letters` at least once?
///
/// This is a coverage check: the word's letters must include the whole set.
/// It says nothing about whether the word uses other letters as well.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::is_pangram;
///
/// let letters: LetterSet = "cat".parse().unwrap();
/// assert!(is_pangram("TACT", letters));
/// assert!(!is_pangram("TAT", letters));
/// ```
#[inline]
#[must_use]
pub fn is_pangram(word: &str, letters: LetterSet) -> bool {
    letters.is_subset_of(LetterSet::from_word(word))
}

/// Points for a word
///
/// - shorter than `min_length`: 0
/// - exactly `min_length`: 1
/// - longer: one point per letter, plus `pangram_bonus` for pangrams
#[must_use]
pub fn score(word: &str, is_pangram: bool, min_length: usize, pangram_bonus: u32) -> u32 {
    let length = word.chars().count();

    match length.cmp(&min_length) {
        std::cmp::Ordering::Less => 0,
        std::cmp::Ordering::Equal => 1,
        std::cmp::Ordering::Greater => {
            let base = u32::try_from(length).unwrap_or(u32::MAX);
            if is_pangram {
                base.saturating_add(pangram_bonus)
            } else {
                base
            }
        }
    }
}

/// Score every word that reaches `min_length`, in input order
///
/// Shorter words are dropped rather than kept with a zero score.
#[must_use]
pub fn classify<S: AsRef<str>>(
    words: &[S],
    letters: LetterSet,
    min_length: usize,
    pangram_bonus: u32,
) -> Vec<ScoredWord> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| meets_min_length(word, min_length))
        .map(|word| {
            let pangram = is_pangram(word, letters);
            ScoredWord::new(word, pangram, score(word, pangram, min_length, pangram_bonus))
        })
        .collect()
}

/// Sort into display order (length desc, score desc, text asc)
pub fn sort_scored(words: &mut [ScoredWord]) {
    words.sort_by(ScoredWord::display_order);
}

/// The pangrams among `words`, preserving their order
#[must_use]
pub fn select_pangrams(words: &[ScoredWord]) -> Vec<ScoredWord> {
    words.iter().filter(|w| w.is_pangram()).cloned().collect()
}

/// Group consecutive words of equal length
///
/// Expects `words` already in display order, so groups come out longest first.
#[must_use]
pub fn group_by_length(words: &[ScoredWord]) -> Vec<(usize, &[ScoredWord])> {
    words
        .chunk_by(|a, b| a.length() == b.length())
        .map(|group| (group[0].length(), group))
        .collect()
}
