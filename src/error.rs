//! Error types
//!
//! Validation failures are raised by the input surface before a query reaches
//! the solver; dictionary failures are raised while acquiring a word list.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A malformed query: bad letters or a bad target letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A character outside `A..=Z` (case-insensitive) was supplied as a letter.
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// The target held more than one character.
    #[error("target must be a single letter, got \"{0}\"")]
    MultiCharTarget(String),

    /// The target letter is not one of the available letters.
    #[error("target letter '{0}' is not one of the available letters")]
    TargetNotInLetters(char),
}

/// Failure to acquire a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
