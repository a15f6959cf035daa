//! Spelling Bee solving
//!
//! Data flows one way: dictionary -> filtered words -> scored records ->
//! sorted solution.

mod classify;
mod config;
mod constraint;
mod engine;
mod filter;
pub mod generator;
mod rank;

pub use classify::{classify, group_by_length, is_pangram, score, select_pangrams, sort_scored};
pub use config::SolverConfig;
pub use constraint::{contains_target, is_constructible};
pub use engine::{Query, Solution, Solver};
pub use filter::{filter_words, meets_min_length};
pub use rank::Rank;
