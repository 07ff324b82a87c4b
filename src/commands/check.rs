//! Batch word checking
//!
//! Plays a list of words against a fixed root word in one go and reports the
//! verdict for each, as if they had been typed one after another.

use crate::core::RejectionReason;
use crate::game::{RoundState, Submission, Validator};
use crate::oracle::SpellingOracle;

/// Verdict for one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub input: String,
    pub outcome: Result<Submission, RejectionReason>,
}

/// Result of checking a list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub verdicts: Vec<Verdict>,
    pub round: RoundState,
}

impl CheckReport {
    /// Number of words that were accepted
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| matches!(v.outcome, Ok(Submission::Accepted(_))))
            .count()
    }

    /// Number of words that were rejected
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.outcome.is_err()).count()
    }
}

/// Submit `words` in order to a fresh round started from `root`
///
/// Earlier acceptances count, so repeating a word rejects the repeat.
pub fn check_words<O, S>(validator: &Validator<O>, root: &str, words: &[S]) -> CheckReport
where
    O: SpellingOracle,
    S: AsRef<str>,
{
    let mut round = RoundState::new(root);

    let verdicts = words
        .iter()
        .map(|input| {
            let input = input.as_ref();
            Verdict {
                input: input.to_string(),
                outcome: validator.submit(input, &mut round),
            }
        })
        .collect();

    CheckReport { verdicts, round }
}
