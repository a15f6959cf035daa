//! Puzzle generation
//!
//! Every dictionary word with exactly `letter_count` distinct letters seeds a
//! letter set. Each letter of a seed is tried as the target, so a seven letter
//! seed yields seven candidate puzzles. Candidates are solved in parallel.

use super::engine::{Query, Solver};
use crate::core::{LetterSet, Target};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Number of distinct letters in a standard puzzle
pub const STANDARD_LETTER_COUNT: usize = 7;

/// Headline numbers for one candidate puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSummary {
    pub query: Query,
    pub word_count: usize,
    pub pangram_count: usize,
    pub total_score: u32,
}

/// Distinct letter sets of size `letter_count` found in the dictionary
///
/// Sets are returned in order of first appearance. Entries holding anything
/// other than letters are skipped.
#[must_use]
pub fn pangram_seeds<S: AsRef<str>>(dictionary: &[S], letter_count: usize) -> Vec<LetterSet> {
    let mut seen: FxHashSet<LetterSet> = FxHashSet::default();

    dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.chars().all(|c| c.is_ascii_alphabetic()))
        .map(LetterSet::from_word)
        .filter(|set| set.len() == letter_count)
        .filter(|set| seen.insert(*set))
        .collect()
}

/// One query per (seed, target letter) pair
#[must_use]
pub fn candidate_queries(seeds: &[LetterSet]) -> Vec<Query> {
    seeds
        .iter()
        .flat_map(|&letters| {
            letters
                .iter()
                .filter_map(move |c| Query::new(letters, Target::Letter(c)).ok())
        })
        .collect()
}

/// Solve every candidate, keeping those with at least `min_words` words
///
/// `on_progress` is called once per finished candidate, from worker threads.
/// Results are sorted by total score (highest first), then by letters and
/// target so the order is stable across runs.
pub fn evaluate<F>(
    solver: &Solver<'_>,
    queries: &[Query],
    min_words: usize,
    on_progress: F,
) -> Vec<PuzzleSummary>
where
    F: Fn() + Sync,
{
    let mut summaries: Vec<PuzzleSummary> = queries
        .par_iter()
        .filter_map(|query| {
            let solution = solver.solve(query);
            on_progress();

            (solution.words.len() >= min_words).then(|| PuzzleSummary {
                query: *query,
                word_count: solution.words.len(),
                pangram_count: solution.pangrams.len(),
                total_score: solution.total_score,
            })
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.query.letters().to_string().cmp(&b.query.letters().to_string()))
            .then_with(|| a.query.target().letter().cmp(&b.query.target().letter()))
    });

    log::info!(
        "{} of {} candidate puzzles have at least {min_words} words",
        summaries.len(),
        queries.len()
    );

    summaries
}

/// Generate and evaluate all standard puzzles in the solver's dictionary
#[must_use]
pub fn generate(solver: &Solver<'_>, min_words: usize) -> Vec<PuzzleSummary> {
    let seeds = pangram_seeds(solver.dictionary(), STANDARD_LETTER_COUNT);
    let queries = candidate_queries(&seeds);
    evaluate(solver, &queries, min_words, || {})
}

/// Pick a puzzle at random
#[must_use]
pub fn pick_random(summaries: &[PuzzleSummary]) -> Option<&PuzzleSummary> {
    summaries.choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dictionary() -> Vec<String> {
        words_from_slice(&[
            "PLANTED", "PLANT", "PLANE", "PLATE", "DENT", "LEAPT", "TAPED", "PEDANT", "CAT",
            "DEPLANT", "CAPTION", "PATIO", "TOPIC", "PANIC", "ACTION", "ON-LINE",
        ])
    }

    #[test]
    fn seeds_are_distinct_seven_letter_sets() {
        let dict = dictionary();
        let seeds = pangram_seeds(&dict, STANDARD_LETTER_COUNT);

        // PLANTED and DEPLANT share a set; ON-LINE is skipped
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], LetterSet::from_word("PLANTED"));
        assert_eq!(seeds[1], LetterSet::from_word("CAPTION"));
    }

    #[test]
    fn one_candidate_per_letter() {
        let seeds = [LetterSet::parse("planted").unwrap()];
        let queries = candidate_queries(&seeds);

        assert_eq!(queries.len(), 7);
        assert!(queries.iter().all(|q| q.letters() == seeds[0]));
        let targets: String = queries.iter().filter_map(|q| q.target().letter()).collect();
        assert_eq!(targets, "ADELNPT");
    }

    #[test]
    fn evaluate_reports_progress_and_filters() {
        let dict = dictionary();
        let solver = Solver::new(&dict, SolverConfig::default());
        let queries = candidate_queries(&pangram_seeds(&dict, STANDARD_LETTER_COUNT));

        let calls = AtomicUsize::new(0);
        let summaries = evaluate(&solver, &queries, 1, || {
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(calls.load(Ordering::Relaxed), queries.len());
        assert!(!summaries.is_empty());
        assert!(summaries.iter().all(|s| s.word_count >= 1));
        assert!(
            summaries
                .windows(2)
                .all(|pair| pair[0].total_score >= pair[1].total_score)
        );
    }

    #[test]
    fn every_candidate_has_a_pangram() {
        let dict = dictionary();
        let solver = Solver::new(&dict, SolverConfig::default());

        for summary in generate(&solver, 0) {
            assert!(summary.pangram_count >= 1, "{summary:?}");
        }
    }

    #[test]
    fn min_words_threshold() {
        let dict = dictionary();
        let solver = Solver::new(&dict, SolverConfig::default());
        assert!(generate(&solver, 1000).is_empty());
    }

    #[test]
    fn pick_random_from_empty() {
        assert!(pick_random(&[]).is_none());

        let dict = dictionary();
        let solver = Solver::new(&dict, SolverConfig::default());
        let summaries = generate(&solver, 1);
        let picked = pick_random(&summaries).unwrap();
        assert!(summaries.contains(picked));
    }
}
