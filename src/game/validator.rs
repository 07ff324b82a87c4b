//! Submission validation
//!
//! Rules are checked in a fixed order and the first failure wins:
//! 1. Normalize (empty input is silently ignored)
//! 2. Not the root word
//! 3. Not already used
//! 4. Formable from the root word's letters
//! 5. At least three letters and known to the spelling oracle
//!
//! The round is only touched once every rule has passed.

use super::RoundState;
use crate::core::{MIN_WORD_LENGTH, RejectionReason, can_form, letter_count, normalize};
use crate::oracle::SpellingOracle;
use tracing::debug;

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The normalized word passed every rule
    Accepted(String),
    /// The input was blank; nothing happened and nothing should be shown
    Ignored,
}

/// Applies the game rules using a spelling oracle for one language
pub struct Validator<O: SpellingOracle> {
    oracle: O,
    language: String,
}

impl<O: SpellingOracle> Validator<O> {
    /// Create a validator asking `oracle` about words in `language`
    pub fn new(oracle: O, language: impl Into<String>) -> Self {
        Self {
            oracle,
            language: language.into(),
        }
    }

    /// Language passed to the oracle
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The oracle consulted for rule 5
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Check `raw` against `round` without changing anything
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first rule that fails.
    pub fn validate(&self, raw: &str, round: &RoundState) -> Result<Submission, RejectionReason> {
        let word = normalize(raw);

        if word.is_empty() {
            return Ok(Submission::Ignored);
        }

        if word == round.root_word() {
            return Err(RejectionReason::IsRootWord);
        }

        if round.is_used(&word) {
            return Err(RejectionReason::AlreadyUsed);
        }

        if !can_form(&word, round.root_word()) {
            return Err(RejectionReason::NotFormableFromRoot);
        }

        if !self.is_real_word(&word) {
            return Err(RejectionReason::NotARealWord);
        }

        Ok(Submission::Accepted(word))
    }

    /// Check `raw` and, if it passes, add it to `round`
    ///
    /// On acceptance the word goes to the front of the used list and its
    /// letter count is added to the score. Rejected and ignored input leave
    /// the round unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first rule that fails.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RejectionReason;
    /// use word_scramble::game::{RoundState, Submission, Validator};
    /// use word_scramble::oracle::DictionaryOracle;
    ///
    /// let validator = Validator::new(DictionaryOracle::new("en", ["cat", "coat"]), "en");
    /// let mut round = RoundState::new("taco");
    ///
    /// assert_eq!(
    ///     validator.submit("Cat", &mut round),
    ///     Ok(Submission::Accepted("cat".to_string()))
    /// );
    /// assert_eq!(validator.submit("cat", &mut round), Err(RejectionReason::AlreadyUsed));
    /// assert_eq!(round.score(), 3);
    /// ```
    pub fn submit(&self, raw: &str, round: &mut RoundState) -> Result<Submission, RejectionReason> {
        match self.validate(raw, round) {
            Ok(Submission::Accepted(word)) => {
                debug!(word = %word, root = round.root_word(), "accepted word");
                round.accept(word.clone());
                Ok(Submission::Accepted(word))
            }
            Ok(Submission::Ignored) => Ok(Submission::Ignored),
            Err(reason) => {
                debug!(input = raw.trim(), ?reason, "rejected word");
                Err(reason)
            }
        }
    }

    /// Words shorter than the minimum never reach the oracle
    fn is_real_word(&self, word: &str) -> bool {
        letter_count(word) >= MIN_WORD_LENGTH && self.oracle.is_valid_word(word, &self.language)
    }
}
