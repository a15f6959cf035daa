//! Scored result records

use super::LetterSet;
use std::cmp::Ordering;
use std::fmt;

/// A dictionary word that passed a query, with its score and pangram status
///
/// Created by the classifier and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredWord {
    word: String,
    length: usize,
    is_pangram: bool,
    score: u32,
}

impl ScoredWord {
    /// Create a record; the word is stored in canonical uppercase
    #[must_use]
    pub fn new(word: &str, is_pangram: bool, score: u32) -> Self {
        let word = word.to_ascii_uppercase();
        Self {
            length: word.chars().count(),
            word,
            is_pangram,
            score,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.is_pangram
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// A pangram that uses each available letter exactly once
    #[must_use]
    pub const fn is_perfect_pangram(&self, letters: LetterSet) -> bool {
        self.is_pangram && self.length == letters.len()
    }

    /// Display ordering: length descending, then score descending, then text
    /// ascending
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::ScoredWord;
    ///
    /// let mut words = vec![
    ///     ScoredWord::new("BOLT", false, 1),
    ///     ScoredWord::new("BLINK", false, 5),
    ///     ScoredWord::new("BLOT", false, 1),
    /// ];
    /// words.sort_by(ScoredWord::display_order);
    ///
    /// let texts: Vec<&str> = words.iter().map(ScoredWord::word).collect();
    /// assert_eq!(texts, ["BLINK", "BLOT", "BOLT"]);
    /// ```
    #[must_use]
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        b.length
            .cmp(&a.length)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| a.word.cmp(&b.word))
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_and_measures() {
        let word = ScoredWord::new("tact", true, 11);
        assert_eq!(word.word(), "TACT");
        assert_eq!(word.length(), 4);
        assert!(word.is_pangram());
        assert_eq!(word.score(), 11);
        assert_eq!(format!("{word}"), "TACT");
    }

    #[test]
    fn order_prefers_longer_words() {
        let long = ScoredWord::new("BOBBIN", false, 6);
        let short = ScoredWord::new("BOLT", false, 1);
        assert_eq!(ScoredWord::display_order(&long, &short), Ordering::Less);
        assert_eq!(ScoredWord::display_order(&short, &long), Ordering::Greater);
    }

    #[test]
    fn order_prefers_higher_score_at_equal_length() {
        let pangram = ScoredWord::new("PLANTED", true, 14);
        let plain = ScoredWord::new("PLANNED", false, 7);
        assert_eq!(ScoredWord::display_order(&pangram, &plain), Ordering::Less);
    }

    #[test]
    fn order_breaks_ties_alphabetically() {
        let blot = ScoredWord::new("BLOT", false, 1);
        let bolt = ScoredWord::new("BOLT", false, 1);
        assert_eq!(ScoredWord::display_order(&blot, &bolt), Ordering::Less);
        assert_eq!(ScoredWord::display_order(&blot, &blot), Ordering::Equal);
    }

    #[test]
    fn perfect_pangram_needs_exact_length() {
        let letters = LetterSet::parse("cat").unwrap();
        assert!(ScoredWord::new("CAT", true, 10).is_perfect_pangram(letters));
        assert!(!ScoredWord::new("TACT", true, 11).is_perfect_pangram(letters));
        assert!(!ScoredWord::new("ACT", false, 1).is_perfect_pangram(letters));
    }
}
