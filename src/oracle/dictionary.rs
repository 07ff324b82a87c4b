//! Word-list backed spelling oracle

use super::{DEFAULT_LANGUAGE, SpellingOracle};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Spelling oracle answering from an in-memory word set for one language
///
/// Words in other languages are never recognized.
#[derive(Debug, Clone)]
pub struct DictionaryOracle {
    language: String,
    words: FxHashSet<String>,
}

impl DictionaryOracle {
    /// Build an oracle from any list of words
    ///
    /// Words are lowercased and trimmed; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::oracle::{DictionaryOracle, SpellingOracle};
    ///
    /// let oracle = DictionaryOracle::new("en", ["cat", "Coat"]);
    /// assert!(oracle.is_valid_word("coat", "en"));
    /// assert!(!oracle.is_valid_word("coat", "fr"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Language this oracle answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of distinct words known
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the oracle knows no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellingOracle for DictionaryOracle {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_words() {
        let oracle = DictionaryOracle::new("en", ["cat", "coat", "taco"]);
        assert!(oracle.is_valid_word("cat", "en"));
        assert!(oracle.is_valid_word("taco", "en"));
        assert!(!oracle.is_valid_word("tac", "en"));
    }

    #[test]
    fn normalizes_dictionary_entries() {
        let oracle = DictionaryOracle::new("en", ["  Crane ", "SLATE", ""]);
        assert_eq!(oracle.len(), 2);
        assert!(oracle.is_valid_word("crane", "en"));
        assert!(oracle.is_valid_word("slate", "en"));
    }

    #[test]
    fn other_languages_are_not_recognized() {
        let oracle = DictionaryOracle::new("en", ["chat"]);
        assert!(!oracle.is_valid_word("chat", "fr"));
        assert!(oracle.is_valid_word("chat", "EN"));
    }

    #[test]
    fn empty_oracle_knows_nothing() {
        let oracle = DictionaryOracle::new("en", Vec::<String>::new());
        assert!(oracle.is_empty());
        assert!(!oracle.is_valid_word("cat", "en"));
    }

    #[test]
    fn embedded_dictionary_is_english() {
        let oracle = DictionaryOracle::embedded();
        assert_eq!(oracle.language(), "en");
        assert!(!oracle.is_empty());
        assert!(oracle.is_valid_word("cat", "en"));
        assert!(oracle.is_valid_word("coat", "en"));
        assert!(!oracle.is_valid_word("xqzt", "en"));
    }

    #[test]
    fn works_through_references() {
        fn check(oracle: &dyn SpellingOracle) -> bool {
            oracle.is_valid_word("cat", "en")
        }

        let oracle = DictionaryOracle::new("en", ["cat"]);
        assert!(check(&oracle));

        let by_ref: &DictionaryOracle = &oracle;
        assert!(SpellingOracle::is_valid_word(&by_ref, "cat", "en"));
    }
}
