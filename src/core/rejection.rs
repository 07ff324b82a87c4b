//! Reasons a submitted word can be turned down

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a submission was rejected
///
/// Rejections are ordinary player mistakes. They never change the round and
/// each carries a title and message ready to show to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The submission is the root word itself
    IsRootWord,
    /// The submission was already accepted this round
    AlreadyUsed,
    /// The submission needs letters the root word does not have
    NotFormableFromRoot,
    /// The submission is too short or not in the dictionary
    NotARealWord,
}

impl RejectionReason {
    /// Every reason, in the order the rules are checked
    pub const ALL: [Self; 4] = [
        Self::IsRootWord,
        Self::AlreadyUsed,
        Self::NotFormableFromRoot,
        Self::NotARealWord,
    ];

    /// Short headline for the error popup
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::IsRootWord => "Word is the root word",
            Self::AlreadyUsed => "Word used already",
            Self::NotFormableFromRoot => "Word not possible",
            Self::NotARealWord => "Word doesn't exist",
        }
    }

    /// Longer explanation shown under the title
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IsRootWord => "Don't use the word we are looking for",
            Self::AlreadyUsed => "Be more original",
            Self::NotFormableFromRoot => "You can't spell that word from the root word",
            Self::NotARealWord => "That is not a real word",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for RejectionReason {}
