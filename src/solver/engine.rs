//! Main Spelling Bee solver interface

use super::classify::{classify, group_by_length, select_pangrams, sort_scored};
use super::config::SolverConfig;
use super::filter::filter_words;
use super::rank::Rank;
use crate::core::{LetterSet, ScoredWord, Target};
use crate::error::ValidationError;
use rustc_hash::FxHashSet;

/// A validated puzzle: the available letters and the optional target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    letters: LetterSet,
    target: Target,
}

impl Query {
    /// Build a query from already parsed parts
    ///
    /// # Errors
    /// Returns `ValidationError::TargetNotInLetters` if the target letter is
    /// not one of `letters`.
    pub const fn new(letters: LetterSet, target: Target) -> Result<Self, ValidationError> {
        if let Target::Letter(c) = target
            && !letters.contains(c)
        {
            return Err(ValidationError::TargetNotInLetters(c));
        }
        Ok(Self { letters, target })
    }

    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Validate raw letters and target text
    ///
    /// # Errors
    /// Returns `ValidationError` if the letters contain a non-letter or the
    /// target is not a single available letter.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::solver::Query;
    ///
    /// let query = Query::parse("tolbkin", "b").unwrap();
    /// assert_eq!(query.letters().len(), 7);
    ///
    /// assert!(Query::parse("tolbkin", "z").is_err());
    /// ```
    pub fn parse(letters: &str, target: &str) -> Result<Self, ValidationError> {
        let letters = LetterSet::parse(letters)?;
        let target = Target::parse(target, letters)?;
        Ok(Self { letters, target })
    }
}

/// Everything a query produced, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub query: Query,
    pub words: Vec<ScoredWord>,
    pub pangrams: Vec<ScoredWord>,
    pub total_score: u32,
}

impl Solution {
    /// Words grouped by length, longest first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, &[ScoredWord])> {
        group_by_length(&self.words)
    }

    /// Look up an accepted word (case-insensitive)
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&ScoredWord> {
        self.words
            .iter()
            .find(|scored| scored.word().eq_ignore_ascii_case(word))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Rank reached by a player holding `score` points in this puzzle
    #[must_use]
    pub fn rank_for(&self, score: u32) -> Rank {
        Rank::for_score(score, self.total_score)
    }
}

/// Spelling Bee solver over a borrowed dictionary
///
/// Each call to [`Solver::solve`] is independent: the dictionary is never
/// modified and every solution owns its words.
pub struct Solver<'a> {
    dictionary: &'a [String],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a [String], config: SolverConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [String] {
        self.dictionary
    }

    /// Is `word` present in the dictionary (case-insensitive)?
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.dictionary
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(word))
    }

    /// Filter, score and sort the dictionary for `query`
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::solver::{Query, Solver, SolverConfig};
    ///
    /// let dictionary: Vec<String> = ["CAT", "ACT", "TACT", "DOG"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// let solver = Solver::new(&dictionary, SolverConfig::new(3, 7));
    ///
    /// let solution = solver.solve(&Query::parse("cat", "").unwrap());
    /// assert_eq!(solution.words[0].word(), "TACT");
    /// assert_eq!(solution.words[0].score(), 11);
    /// assert_eq!(solution.total_score, 13);
    /// ```
    #[must_use]
    pub fn solve(&self, query: &Query) -> Solution {
        let candidates = filter_words(query.letters(), self.dictionary, query.target());

        let mut words = classify(
            &candidates,
            query.letters(),
            self.config.min_length,
            self.config.pangram_bonus,
        );
        let mut seen: FxHashSet<String> = FxHashSet::default();
        words.retain(|scored| seen.insert(scored.word().to_string()));
        sort_scored(&mut words);

        let pangrams = select_pangrams(&words);
        let total_score = words.iter().map(ScoredWord::score).sum();

        log::debug!(
            "solved {} / {}: {} words, {} pangrams, {} points",
            query.letters(),
            query.target(),
            words.len(),
            pangrams.len(),
            total_score
        );

        Solution {
            query: *query,
            words,
            pangrams,
            total_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{parse_lines, words_from_slice};

    fn dictionary(words: &[&str]) -> Vec<String> {
        words_from_slice(words)
    }

    #[test]
    fn target_example() {
        let dict = dictionary(&["BOLT", "BLOT", "KILN", "TOOL"]);
        let solver = Solver::new(&dict, SolverConfig::new(4, 7));
        let solution = solver.solve(&Query::parse("TOLBKIN", "B").unwrap());

        assert_eq!(
            solution.words,
            vec![
                ScoredWord::new("BLOT", false, 1),
                ScoredWord::new("BOLT", false, 1),
            ]
        );
        assert!(solution.pangrams.is_empty());
        assert_eq!(solution.total_score, 2);
    }

    #[test]
    fn no_target_example() {
        let dict = dictionary(&["CAT", "ACT", "TACT", "DOG"]);
        let solver = Solver::new(&dict, SolverConfig::new(3, 7));
        let solution = solver.solve(&Query::parse("cat", "").unwrap());

        let texts: Vec<&str> = solution.words.iter().map(ScoredWord::word).collect();
        assert_eq!(texts, ["TACT", "ACT", "CAT"]);
        assert_eq!(solution.pangrams.len(), 3);
        assert_eq!(solution.find("tact").map(ScoredWord::score), Some(11));
        assert!(solution.find("dog").is_none());
    }

    #[test]
    fn short_words_are_dropped() {
        let dict = dictionary(&["CAT", "ACT", "TACT"]);
        let solver = Solver::new(&dict, SolverConfig::default());
        let solution = solver.solve(&Query::parse("cat", "").unwrap());

        assert_eq!(solution.words.len(), 1);
        assert_eq!(solution.words[0].word(), "TACT");
    }

    #[test]
    fn empty_letters_give_empty_solution() {
        let dict = dictionary(&["CAT", "ACT"]);
        let solver = Solver::new(&dict, SolverConfig::default());
        let solution = solver.solve(&Query::new(LetterSet::EMPTY, Target::None).unwrap());

        assert!(solution.is_empty());
        assert_eq!(solution.total_score, 0);
        assert_eq!(solution.rank_for(0), Rank::QueenBee);
    }

    #[test]
    fn grouping_and_ranks() {
        let dict = dictionary(&["BOLT", "BLINK", "BOBBIN", "KNOB", "BLOT"]);
        let solver = Solver::new(&dict, SolverConfig::default());
        let solution = solver.solve(&Query::parse("tolbkin", "b").unwrap());

        let lengths: Vec<usize> = solution.by_length().iter().map(|(len, _)| *len).collect();
        assert_eq!(lengths, [6, 5, 4]);

        // 6 + 5 + 1 + 1 + 1
        assert_eq!(solution.total_score, 14);
        assert_eq!(solution.rank_for(14), Rank::QueenBee);
        assert_eq!(solution.rank_for(0), Rank::Beginner);
    }

    #[test]
    fn query_validation_errors() {
        assert_eq!(
            Query::parse("cat", "at"),
            Err(ValidationError::MultiCharTarget("at".to_string()))
        );
        assert_eq!(
            Query::parse("c4t", ""),
            Err(ValidationError::InvalidLetter('4'))
        );
        assert_eq!(
            Query::parse("cat", "d"),
            Err(ValidationError::TargetNotInLetters('D'))
        );
    }

    #[test]
    fn new_rejects_target_outside_letters() {
        let cat = LetterSet::parse("cat").unwrap();

        assert_eq!(
            Query::new(cat, Target::Letter('Z')),
            Err(ValidationError::TargetNotInLetters('Z'))
        );
        let query = Query::new(cat, Target::Letter('A')).unwrap();
        assert_eq!(query.letters(), cat);
        assert_eq!(query.target(), Target::Letter('A'));
    }

    #[test]
    fn duplicate_entries_count_once() {
        let dict = parse_lines("bolt\nBolt\nblink\nBOLT\n");
        let solver = Solver::new(&dict, SolverConfig::default());
        let solution = solver.solve(&Query::parse("tolbkin", "b").unwrap());

        let texts: Vec<&str> = solution.words.iter().map(ScoredWord::word).collect();
        assert_eq!(texts, ["BLINK", "BOLT"]);
        assert_eq!(solution.total_score, 6);
    }

    #[test]
    fn repeated_queries_are_independent() {
        let dict = dictionary(&["BOLT", "BLOT", "KILN", "TOOL"]);
        let solver = Solver::new(&dict, SolverConfig::default());
        let query = Query::parse("tolbkin", "").unwrap();

        let first = solver.solve(&query);
        let second = solver.solve(&query);
        assert_eq!(first, second);
        assert_eq!(dict, dictionary(&["BOLT", "BLOT", "KILN", "TOOL"]));
    }

    #[test]
    fn dictionary_lookup() {
        let dict = dictionary(&["BOLT"]);
        let solver = Solver::new(&dict, SolverConfig::default());
        assert!(solver.contains_word("bolt"));
        assert!(!solver.contains_word("blot"));
    }
}
