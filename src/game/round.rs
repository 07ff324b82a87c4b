//! State of a single round

use crate::core::{MIN_WORD_LENGTH, can_form, letter_count, normalize};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a round needs to remember
///
/// `used_words` is ordered most recent first and `score` is always the sum of
/// their letter counts. The only way to grow a round is through the
/// validator, so both invariants hold for any value built by this crate.
/// Deserialized snapshots are normalized and checked against the same
/// invariants, and every used word must be a legal play for the root word.
/// Dictionary membership is not rechecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundSnapshot")]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

/// Invariant violations found in a deserialized round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundStateError {
    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("word '{0}' is the root word")]
    RootWordUsed(String),

    #[error("word '{0}' is shorter than {} letters", MIN_WORD_LENGTH)]
    TooShort(String),

    #[error("word '{word}' cannot be spelled from '{root}'")]
    NotFormable { word: String, root: String },

    #[error("score {found} does not match the {expected} letters of the used words")]
    ScoreMismatch { expected: usize, found: usize },
}

/// Unchecked wire form of [`RoundState`]
#[derive(Deserialize)]
struct RoundSnapshot {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl TryFrom<RoundSnapshot> for RoundState {
    type Error = RoundStateError;

    fn try_from(snapshot: RoundSnapshot) -> Result<Self, Self::Error> {
        let root_word = normalize(&snapshot.root_word);
        let used_words: Vec<String> = snapshot.used_words.iter().map(|w| normalize(w)).collect();

        let mut seen = FxHashSet::default();
        for word in &used_words {
            if !seen.insert(word.as_str()) {
                return Err(RoundStateError::DuplicateWord(word.clone()));
            }
            if *word == root_word {
                return Err(RoundStateError::RootWordUsed(word.clone()));
            }
            if letter_count(word) < MIN_WORD_LENGTH {
                return Err(RoundStateError::TooShort(word.clone()));
            }
            if !can_form(word, &root_word) {
                return Err(RoundStateError::NotFormable {
                    word: word.clone(),
                    root: root_word.clone(),
                });
            }
        }

        let expected: usize = used_words.iter().map(|w| letter_count(w)).sum();
        if expected != snapshot.score {
            return Err(RoundStateError::ScoreMismatch {
                expected,
                found: snapshot.score,
            });
        }

        Ok(Self {
            root_word,
            used_words,
            score: snapshot.score,
        })
    }
}

impl RoundState {
    /// Start a fresh round from `root_word`
    ///
    /// The root word is normalized; the word list and score start empty.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::RoundState;
    ///
    /// let round = RoundState::new(" Taco ");
    /// assert_eq!(round.root_word(), "taco");
    /// assert!(round.used_words().is_empty());
    /// assert_eq!(round.score(), 0);
    /// ```
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: normalize(root_word),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// The word every submission is built from
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Total letters across all accepted words
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Whether `word` was already accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record an accepted word
    ///
    /// Only the validator calls this, after every rule has passed.
    pub(crate) fn accept(&mut self, word: String) {
        self.score += letter_count(&word);
        self.used_words.insert(0, word);
    }
}
