//! Available letters and the optional target letter
//!
//! A `LetterSet` stores up to 26 distinct letters as a bitmask, so membership
//! tests are a single shift-and-mask regardless of word length.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Bit for an ASCII letter in either case, `None` for anything else
#[inline]
const fn letter_bit(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(1 << (upper as u32 - 'A' as u32))
    } else {
        None
    }
}

/// A set of distinct, reusable letters in canonical uppercase form
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
///
/// let letters: LetterSet = "tolbkin".parse().unwrap();
/// assert_eq!(letters.len(), 7);
/// assert!(letters.contains('B'));
/// assert!(letters.contains('b'));
/// assert!(!letters.contains('z'));
/// assert_eq!(letters.to_string(), "BIKLNOT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from characters, collapsing duplicates
    ///
    /// Characters that are not ASCII letters are ignored. Use [`LetterSet::parse`]
    /// when bad input must be reported instead.
    #[must_use]
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mask = chars
            .into_iter()
            .filter_map(letter_bit)
            .fold(0, |acc, bit| acc | bit);
        Self(mask)
    }

    /// Distinct letters appearing in a word
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self::from_chars(word.chars())
    }

    /// Parse raw user input into a set
    ///
    /// Surrounding whitespace is ignored and duplicate letters are collapsed.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidLetter` for the first character that is
    /// not an ASCII letter.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut set = Self::EMPTY;
        let mut duplicates = 0usize;

        for c in raw.trim().chars() {
            if !set.insert(c)? {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            log::debug!("collapsed {duplicates} duplicate letter(s) in {raw:?}");
        }

        Ok(set)
    }

    /// Add a letter, returning whether it was newly inserted
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidLetter` if `c` is not an ASCII letter.
    pub fn insert(&mut self, c: char) -> Result<bool, ValidationError> {
        let bit = letter_bit(c).ok_or(ValidationError::InvalidLetter(c))?;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        Ok(fresh)
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        match letter_bit(c) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }
}

impl FromStr for LetterSet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// The letter every accepted word must contain, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// No constraint: every constructible word passes
    #[default]
    None,
    /// Words must contain this uppercase letter at least once
    Letter(char),
}

impl Target {
    /// Validate a raw target against the available letters
    ///
    /// An empty (or whitespace-only) string means no target.
    ///
    /// # Errors
    /// - `MultiCharTarget` if more than one character was supplied
    /// - `InvalidLetter` if the character is not an ASCII letter
    /// - `TargetNotInLetters` if the letter is not in `letters`
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{LetterSet, Target};
    ///
    /// let letters: LetterSet = "cat".parse().unwrap();
    /// assert_eq!(Target::parse("a", letters), Ok(Target::Letter('A')));
    /// assert_eq!(Target::parse("", letters), Ok(Target::None));
    /// assert!(Target::parse("x", letters).is_err());
    /// ```
    pub fn parse(raw: &str, letters: LetterSet) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();

        let Some(c) = chars.next() else {
            return Ok(Self::None);
        };
        if chars.next().is_some() {
            return Err(ValidationError::MultiCharTarget(trimmed.to_string()));
        }
        if letter_bit(c).is_none() {
            return Err(ValidationError::InvalidLetter(c));
        }

        let upper = c.to_ascii_uppercase();
        if !letters.contains(upper) {
            return Err(ValidationError::TargetNotInLetters(upper));
        }

        Ok(Self::Letter(upper))
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Letter(c) => Some(c),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// True if there is no target or `word` contains it (case-insensitive)
    #[must_use]
    pub fn is_satisfied_by(self, word: &str) -> bool {
        match self {
            Self::None => true,
            Self::Letter(target) => word.chars().any(|c| c.eq_ignore_ascii_case(&target)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Letter(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case() {
        let letters = LetterSet::parse("TolBkiN").unwrap();
        assert_eq!(letters.to_string(), "BIKLNOT");
        assert_eq!(letters.len(), 7);
    }

    #[test]
    fn parse_collapses_duplicates() {
        let letters = LetterSet::parse("ccaatt").unwrap();
        assert_eq!(letters, LetterSet::parse("cat").unwrap());
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            LetterSet::parse("ca7"),
            Err(ValidationError::InvalidLetter('7'))
        );
        assert_eq!(
            LetterSet::parse("c a"),
            Err(ValidationError::InvalidLetter(' '))
        );
        assert!(LetterSet::parse("cé").is_err());
    }

    #[test]
    fn parse_empty_is_valid() {
        let letters = LetterSet::parse("").unwrap();
        assert!(letters.is_empty());
        assert_eq!(letters, LetterSet::EMPTY);
    }

    #[test]
    fn from_chars_ignores_non_letters() {
        let letters = LetterSet::from_chars("c-a't!".chars());
        assert_eq!(letters.to_string(), "ACT");
    }

    #[test]
    fn insert_reports_freshness() {
        let mut letters = LetterSet::EMPTY;
        assert_eq!(letters.insert('a'), Ok(true));
        assert_eq!(letters.insert('A'), Ok(false));
        assert_eq!(letters.insert('!'), Err(ValidationError::InvalidLetter('!')));
        assert_eq!(letters.len(), 1);
    }

    #[test]
    fn contains_rejects_non_letters() {
        let letters = LetterSet::parse("abc").unwrap();
        assert!(!letters.contains('-'));
        assert!(!letters.contains('1'));
        assert!(!letters.contains('á'));
    }

    #[test]
    fn subset_relation() {
        let cat = LetterSet::parse("cat").unwrap();
        let tact = LetterSet::from_word("TACT");
        let act = LetterSet::from_word("act");
        let dog = LetterSet::from_word("dog");

        assert!(cat.is_subset_of(tact));
        assert!(act.is_subset_of(cat));
        assert!(!cat.is_subset_of(dog));
        assert!(LetterSet::EMPTY.is_subset_of(dog));
    }

    #[test]
    fn iter_is_alphabetical() {
        let letters = LetterSet::parse("zebra").unwrap();
        assert_eq!(letters.iter().collect::<String>(), "ABERZ");
    }

    #[test]
    fn target_parse_cases() {
        let letters = LetterSet::parse("tolbkin").unwrap();

        assert_eq!(Target::parse("", letters), Ok(Target::None));
        assert_eq!(Target::parse("  ", letters), Ok(Target::None));
        assert_eq!(Target::parse("b", letters), Ok(Target::Letter('B')));
        assert_eq!(Target::parse(" B ", letters), Ok(Target::Letter('B')));
        assert_eq!(
            Target::parse("bo", letters),
            Err(ValidationError::MultiCharTarget("bo".to_string()))
        );
        assert_eq!(
            Target::parse("z", letters),
            Err(ValidationError::TargetNotInLetters('Z'))
        );
        assert_eq!(
            Target::parse("?", letters),
            Err(ValidationError::InvalidLetter('?'))
        );
    }

    #[test]
    fn target_against_empty_letters() {
        assert_eq!(
            Target::parse("a", LetterSet::EMPTY),
            Err(ValidationError::TargetNotInLetters('A'))
        );
        assert_eq!(Target::parse("", LetterSet::EMPTY), Ok(Target::None));
    }

    #[test]
    fn target_satisfaction() {
        assert!(Target::None.is_satisfied_by("DOG"));
        assert!(Target::None.is_satisfied_by(""));
        assert!(Target::Letter('B').is_satisfied_by("bolt"));
        assert!(Target::Letter('B').is_satisfied_by("BLOT"));
        assert!(!Target::Letter('B').is_satisfied_by("TOOL"));
        assert!(!Target::Letter('B').is_satisfied_by(""));
    }

    #[test]
    fn display() {
        assert_eq!(Target::None.to_string(), "");
        assert_eq!(Target::Letter('Q').to_string(), "Q");
        assert_eq!(LetterSet::EMPTY.to_string(), "");
    }
}
