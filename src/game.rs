//! Play session state
//!
//! A `Game` wraps a solved puzzle and tracks the words the player has found.
//! Both the TUI and the line-oriented play mode drive the same state.

use crate::core::{LetterSet, ScoredWord, Target};
use crate::solver::{Rank, Solution, SolverConfig};
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("too short, words need at least {0} letters")]
    TooShort(usize),

    #[error("'{0}' is not one of the letters")]
    BadLetter(char),

    #[error("missing the center letter {0}")]
    MissingTarget(char),

    #[error("{0} was already found")]
    AlreadyFound(String),

    #[error("{0} is not in the word list")]
    NotInWordList(String),
}

/// A newly found word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: ScoredWord,
    /// Set when this word lifted the player to a new rank
    pub rank_up: Option<Rank>,
}

#[derive(Debug)]
pub struct Game {
    solution: Solution,
    config: SolverConfig,
    found: Vec<ScoredWord>,
    found_set: FxHashSet<String>,
    score: u32,
}

impl Game {
    #[must_use]
    pub fn new(solution: Solution, config: SolverConfig) -> Self {
        Self {
            solution,
            config,
            found: Vec::new(),
            found_set: FxHashSet::default(),
            score: 0,
        }
    }

    /// Check a guess and record it if it is a new valid word
    ///
    /// # Errors
    /// Returns a `GuessError` describing the first rule the guess breaks.
    pub fn guess(&mut self, raw: &str) -> Result<Accepted, GuessError> {
        let word = raw.trim().to_ascii_uppercase();
        let letters = self.letters();

        if word.chars().count() < self.config.min_length {
            return Err(GuessError::TooShort(self.config.min_length));
        }
        if let Some(bad) = word.chars().find(|&c| !letters.contains(c)) {
            return Err(GuessError::BadLetter(bad));
        }
        if let Target::Letter(center) = self.target()
            && !word.contains(center)
        {
            return Err(GuessError::MissingTarget(center));
        }
        if self.found_set.contains(&word) {
            return Err(GuessError::AlreadyFound(word));
        }

        let scored = self
            .solution
            .find(&word)
            .cloned()
            .ok_or_else(|| GuessError::NotInWordList(word.clone()))?;

        let before = self.rank();
        self.score += scored.score();
        self.found_set.insert(word);
        self.found.push(scored.clone());
        let after = self.rank();

        Ok(Accepted {
            word: scored,
            rank_up: (after > before).then_some(after),
        })
    }

    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.solution.query.letters()
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.solution.query.target()
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.solution.rank_for(self.score)
    }

    /// Points still needed for the next rank
    #[must_use]
    pub fn points_to_next_rank(&self) -> Option<u32> {
        self.rank().next().map(|next| {
            next.points_needed(self.solution.total_score)
                .saturating_sub(self.score)
        })
    }

    /// Found words in the order they were found
    #[must_use]
    pub fn found(&self) -> &[ScoredWord] {
        &self.found
    }

    #[must_use]
    pub fn pangrams_found(&self) -> usize {
        self.found.iter().filter(|w| w.is_pangram()).count()
    }

    /// Words not yet found, in display order
    pub fn remaining(&self) -> impl Iterator<Item = &ScoredWord> {
        self.solution
            .words
            .iter()
            .filter(|w| !self.found_set.contains(w.word()))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.solution.words.len()
    }

    /// Outer letters in random order, target excluded
    #[must_use]
    pub fn shuffled_outer_letters(&self) -> Vec<char> {
        let center = self.target().letter();
        let mut outer: Vec<char> = self
            .letters()
            .iter()
            .filter(|&c| Some(c) != center)
            .collect();
        outer.shuffle(&mut rand::rng());
        outer
    }
}
