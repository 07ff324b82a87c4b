//! Spelling oracles
//!
//! The game only needs to ask whether a string is a real word in a given
//! language. Where that knowledge comes from is up to the implementation.

mod dictionary;

pub use dictionary::DictionaryOracle;

/// Language code used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// A source of truth for whether a string is a real word
pub trait SpellingOracle {
    /// Report whether `word` is a recognized word in `language`
    ///
    /// `word` is already normalized (lowercase, trimmed) by the caller.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellingOracle + ?Sized> SpellingOracle for &T {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}
