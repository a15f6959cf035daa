//! Dictionaries for Spelling Bee solving
//!
//! Provides an embedded dictionary compiled into the binary for zero-cost
//! access, plus loaders for external word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
