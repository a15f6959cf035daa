//! Dictionary filtering
//!
//! Applies the constraint checks across a whole dictionary. The dictionary is
//! only borrowed; the output owns copies of the accepted entries and keeps the
//! dictionary's relative order.

use super::constraint::contains_target;
use crate::core::{LetterSet, Target};

/// Every dictionary entry that is constructible from `letters` and satisfies
/// `target`, in dictionary order
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, Target};
/// use spelling_bee::solver::filter_words;
///
/// let letters: LetterSet = "cat".parse().unwrap();
/// let dictionary = ["CAT", "ACT", "TACT", "DOG"];
///
/// let words = filter_words(letters, &dictionary, Target::None);
/// assert_eq!(words, ["CAT", "ACT", "TACT"]);
/// ```
#[must_use]
pub fn filter_words<S: AsRef<str>>(
    letters: LetterSet,
    dictionary: &[S],
    target: Target,
) -> Vec<String> {
    let words: Vec<String> = dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| contains_target(letters, word, target))
        .map(str::to_string)
        .collect();

    log::debug!(
        "letters {letters} target {target:?}: {} of {} entries pass",
        words.len(),
        dictionary.len()
    );

    words
}

/// Does `word` reach the minimum scoring length?
#[inline]
#[must_use]
pub fn meets_min_length(word: &str, min_length: usize) -> bool {
    word.chars().count() >= min_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn target_filter_example() {
        let letters = LetterSet::parse("tolbkin").unwrap();
        let dictionary = ["BOLT", "BLOT", "KILN", "TOOL"];

        let words = filter_words(letters, &dictionary, Target::Letter('B'));
        assert_eq!(words, ["BOLT", "BLOT"]);
    }

    #[test]
    fn works_with_owned_strings() {
        let letters = LetterSet::parse("cat").unwrap();
        let dictionary: Vec<String> = ["DOG", "TACT", "CAT"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let words = filter_words(letters, &dictionary, Target::None);
        assert_eq!(words, ["TACT", "CAT"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn results_outlive_dictionary() {
        let letters = LetterSet::parse("cat").unwrap();
        let dictionary = vec!["TACT".to_string(), "DOG".to_string()];

        let mut words = filter_words(letters, &dictionary, Target::None);
        drop(dictionary);
        words[0].push('S');
        assert_eq!(words, ["TACTS"]);
    }

    #[test]
    fn entries_are_not_modified() {
        let letters = LetterSet::parse("cat").unwrap();
        let dictionary = ["cat", "Act"];

        let words = filter_words(letters, &dictionary, Target::None);
        assert_eq!(words, ["cat", "Act"]);
    }

    #[test]
    fn empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(filter_words(LetterSet::parse("cat").unwrap(), &empty, Target::None).is_empty());

        let dictionary = ["", "A"];
        assert_eq!(
            filter_words(LetterSet::EMPTY, &dictionary, Target::None),
            [""]
        );
    }

    #[test]
    fn min_length_predicate() {
        assert!(meets_min_length("BOLT", 4));
        assert!(meets_min_length("BLINK", 4));
        assert!(!meets_min_length("CAT", 4));
        assert!(meets_min_length("", 0));
    }

    proptest! {
        #[test]
        fn output_is_ordered_subsequence(
            raw in "[A-H]{0,8}",
            dictionary in proptest::collection::vec("[A-J]{0,6}", 0..40),
        ) {
            let letters = LetterSet::from_chars(raw.chars());
            let words = filter_words(letters, &dictionary, Target::None);

            // Walk the dictionary once, matching outputs in order
            let mut remaining = dictionary.iter();
            for word in &words {
                prop_assert!(remaining.any(|entry| entry == word));
            }
        }

        #[test]
        fn deterministic(
            raw in "[A-H]{0,8}",
            dictionary in proptest::collection::vec("[A-J]{0,6}", 0..40),
        ) {
            let letters = LetterSet::from_chars(raw.chars());
            prop_assert_eq!(
                filter_words(letters, &dictionary, Target::None),
                filter_words(letters, &dictionary, Target::None)
            );
        }
    }
}
