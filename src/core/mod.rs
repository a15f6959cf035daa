//! Core domain types for Spelling Bee
//!
//! This module contains the fundamental value types shared by the solver and
//! every surface built on top of it. All types here are immutable once built.

mod letters;
mod scored;

pub use letters::{LetterSet, Target};
pub use scored::ScoredWord;
