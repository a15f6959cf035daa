//! Letter constraint checks for a single word

use crate::core::{LetterSet, Target};

/// Can `word` be spelled using only `letters`, each reusable any number of times?
///
/// The empty word is always constructible. Comparison is case-insensitive.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::is_constructible;
///
/// let letters: LetterSet = "cat".parse().unwrap();
/// assert!(is_constructible(letters, "tact"));
/// assert!(is_constructible(letters, ""));
/// assert!(!is_constructible(letters, "dog"));
/// ```
#[inline]
#[must_use]
pub fn is_constructible(letters: LetterSet, word: &str) -> bool {
    word.chars().all(|c| letters.contains(c))
}

/// Is `word` constructible from `letters` and does it contain `target`?
///
/// With no target every constructible word passes. A word holding any letter
/// outside the set fails regardless of the target.
#[inline]
#[must_use]
pub fn contains_target(letters: LetterSet, word: &str, target: Target) -> bool {
    is_constructible(letters, word) && target.is_satisfied_by(word)
}
