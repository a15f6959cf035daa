//! Spelling Bee Solver
//!
//! Finds every dictionary word that can be spelled from a set of reusable
//! letters, scores each one and flags pangrams.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::solver::{Query, Solver, SolverConfig};
//! use spelling_bee::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["bolt", "blot", "kiln", "tool"]);
//! let solver = Solver::new(&dictionary, SolverConfig::default());
//!
//! let query = Query::parse("tolbkin", "b").unwrap();
//! let solution = solver.solve(&query);
//!
//! let words: Vec<&str> = solution.words.iter().map(|w| w.word()).collect();
//! assert_eq!(words, ["BLOT", "BOLT"]);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Play session state
pub mod game;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
