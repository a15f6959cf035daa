//! Puzzle selection for the play modes

use crate::game::Game;
use crate::solver::generator::{generate, pick_random};
use crate::solver::{Query, Solver};
use anyhow::{Context, Result, bail};

/// Preferred minimum number of words for a randomly chosen puzzle
const RANDOM_PUZZLE_MIN_WORDS: usize = 15;

/// Build a game from explicit letters, or pick a random generated puzzle
///
/// # Errors
///
/// Returns an error if the letters or target are invalid, or if no letters
/// were given and the dictionary holds no playable puzzle.
pub fn start_game(solver: &Solver<'_>, letters: Option<&str>, target: &str) -> Result<Game> {
    let query = match letters {
        Some(letters) => Query::parse(letters, target)
            .with_context(|| format!("invalid puzzle '{letters}'"))?,
        None => random_query(solver)?,
    };

    Ok(Game::new(solver.solve(&query), solver.config()))
}

fn random_query(solver: &Solver<'_>) -> Result<Query> {
    let mut puzzles = generate(solver, RANDOM_PUZZLE_MIN_WORDS);
    if puzzles.is_empty() {
        log::info!("no puzzle has {RANDOM_PUZZLE_MIN_WORDS} words, accepting smaller ones");
        puzzles = generate(solver, 1);
    }

    match pick_random(&puzzles) {
        Some(summary) => Ok(summary.query),
        None => bail!("the word list has no seven letter pangram to build a puzzle from"),
    }
}
