//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded list.
//! Every entry is normalized to the solver's canonical uppercase form.

use crate::error::DictionaryError;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed, blank lines are skipped and words are uppercased. The
/// file is read in full before anything is returned, so a failure never
/// yields a partial dictionary.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Normalize newline-delimited text into dictionary entries
///
/// Blank lines and `#` comment lines are skipped.
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    let mut skipped = 0usize;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let comment = line.starts_with('#');
            skipped += usize::from(comment);
            !comment
        })
        .map(str::to_ascii_uppercase)
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} comment line(s) in word list");
    }
    words
}

/// Convert an embedded string slice to a normalized dictionary
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
/// use spelling_bee::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes_case() {
        let input = &["bolt", "Blot", "KILN"];
        let words = words_from_slice(input);

        assert_eq!(words, ["BOLT", "BLOT", "KILN"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["cat", "", "  ", " act "];
        let words = words_from_slice(input);

        assert_eq!(words, ["CAT", "ACT"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert!(words.is_empty());
    }

    #[test]
    fn parse_lines_handles_crlf() {
        let words = parse_lines("cat\r\nact\r\n\r\ntact\n");
        assert_eq!(words, ["CAT", "ACT", "TACT"]);
    }

    #[test]
    fn parse_lines_skips_comments() {
        let words = parse_lines("# header\ncat\n  # indented note\nact\n");
        assert_eq!(words, ["CAT", "ACT"]);
    }

    #[test]
    fn load_from_file_reads_all_lines() {
        let path = std::env::temp_dir().join(format!("spelling_bee_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "bolt\nblot\n\nkiln").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["BOLT", "BLOT", "KILN"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("definitely/not/a/dictionary.txt").unwrap_err();
        let DictionaryError::Io { path, source } = err;
        assert_eq!(path, Path::new("definitely/not/a/dictionary.txt"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
}
