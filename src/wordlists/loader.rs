//! Word list loading utilities
//!
//! Word lists are UTF-8 text, one word per line, no header. Entries are
//! trimmed and lowercased; blank lines are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-delimited text into normalized words
///
/// Lines containing whitespace inside the word are skipped, since a single
/// submission can never match them.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.contains(char::is_whitespace) {
                warn!(entry = trimmed, "skipping word list entry containing whitespace");
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("crane\n\nslate\n   \nirate\n");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let words = parse_word_list("  Crane \r\nSLATE\n");
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn parse_skips_entries_with_spaces() {
        let words = parse_word_list("ice cream\nsundae\n");
        assert_eq!(words, vec!["sundae"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(words, vec!["crane".to_string(), "slate".to_string()]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/real/wordlist.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Absolute\n\nboundary\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["absolute", "boundary"]);
    }

    #[test]
    fn load_blank_file_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_blank_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "\n  \n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }

    #[test]
    fn load_from_embedded_roots() {
        use crate::wordlists::ROOT_WORDS;

        let words = words_from_slice(ROOT_WORDS);
        assert_eq!(words.len(), ROOT_WORDS.len());
    }
}
