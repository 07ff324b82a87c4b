//! Game session lifecycle
//!
//! A session starts out `NotStarted`. Starting a round picks a root word
//! uniformly at random and moves to `InProgress`; starting again simply
//! replaces the round. There is no game-over state.

use super::{RoundState, Submission, Validator};
use crate::core::{RejectionReason, normalize};
use crate::oracle::{DEFAULT_LANGUAGE, SpellingOracle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

/// Settings that shape a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language handed to the spelling oracle
    pub language: String,
    /// Fixed seed for root word selection; random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
}

/// Errors that stop a session from being set up
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no root words available to start a round")]
    EmptyWordList,
}

/// Errors from submitting a word through a session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no round in progress")]
    NotStarted,

    #[error(transparent)]
    Rejected(#[from] RejectionReason),
}

/// Owns the root word list, the rules and the current round
pub struct GameSession<O: SpellingOracle> {
    root_words: Vec<String>,
    validator: Validator<O>,
    rng: StdRng,
    round: Option<RoundState>,
}

impl<O: SpellingOracle> GameSession<O> {
    /// Create a session that has not started a round yet
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyWordList`] if `root_words` holds no
    /// non-blank word, since no round could ever start.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::{GameConfig, GamePhase, GameSession, Submission};
    /// use word_scramble::oracle::DictionaryOracle;
    ///
    /// let mut session = GameSession::new(
    ///     vec!["taco".to_string()],
    ///     DictionaryOracle::new("en", ["cat"]),
    ///     GameConfig::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(session.phase(), GamePhase::NotStarted);
    ///
    /// session.start_round();
    /// assert_eq!(session.submit("cat"), Ok(Submission::Accepted("cat".to_string())));
    /// ```
    pub fn new(root_words: Vec<String>, oracle: O, config: GameConfig) -> Result<Self, SessionError> {
        let root_words: Vec<String> = root_words
            .into_iter()
            .map(|w| normalize(&w))
            .filter(|w| !w.is_empty())
            .collect();

        if root_words.is_empty() {
            return Err(SessionError::EmptyWordList);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            roots = root_words.len(),
            language = %config.language,
            seeded = config.seed.is_some(),
            "created game session"
        );

        Ok(Self {
            root_words,
            validator: Validator::new(oracle, config.language),
            rng,
            round: None,
        })
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.round.is_some() {
            GamePhase::InProgress
        } else {
            GamePhase::NotStarted
        }
    }

    /// The round in progress, if any
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Root words a round may start from
    #[must_use]
    pub fn root_words(&self) -> &[String] {
        &self.root_words
    }

    /// Start a new round with a randomly chosen root word
    ///
    /// Any previous round is discarded.
    pub fn start_round(&mut self) -> &RoundState {
        // Non-empty by construction
        let index = self.rng.random_range(0..self.root_words.len());
        let root = self.root_words[index].clone();
        self.begin(RoundState::new(&root))
    }

    /// Start a new round with a specific root word
    ///
    /// The word is normalized but need not be in the root word list.
    pub fn start_round_with(&mut self, root_word: &str) -> &RoundState {
        self.begin(RoundState::new(root_word))
    }

    /// Submit raw player input to the current round
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotStarted`] before the first round and
    /// [`SubmitError::Rejected`] when a rule fails.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, SubmitError> {
        let round = self.round.as_mut().ok_or(SubmitError::NotStarted)?;
        Ok(self.validator.submit(raw, round)?)
    }

    fn begin(&mut self, round: RoundState) -> &RoundState {
        debug!(root = round.root_word(), "started round");
        self.round.insert(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::DictionaryOracle;

    fn roots() -> Vec<String> {
        vec!["taco".to_string(), "crane".to_string(), "slate".to_string()]
    }

    fn session(seed: u64) -> GameSession<DictionaryOracle> {
        let oracle = DictionaryOracle::new("en", ["cat", "coat", "oat", "ran", "late", "tale"]);
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        GameSession::new(roots(), oracle, config).unwrap()
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let oracle = DictionaryOracle::new("en", ["cat"]);
        let result = GameSession::new(Vec::new(), oracle, GameConfig::default());
        assert!(matches!(result, Err(SessionError::EmptyWordList)));
    }

    #[test]
    fn blank_word_list_is_an_error() {
        let oracle = DictionaryOracle::new("en", ["cat"]);
        let words = vec![String::new(), "   ".to_string()];
        let result = GameSession::new(words, oracle, GameConfig::default());
        assert!(matches!(result, Err(SessionError::EmptyWordList)));
    }

    #[test]
    fn root_words_are_normalized() {
        let oracle = DictionaryOracle::new("en", ["cat"]);
        let words = vec![" TACO ".to_string(), String::new()];
        let session = GameSession::new(words, oracle, GameConfig::default()).unwrap();
        assert_eq!(session.root_words(), &["taco"]);
    }

    #[test]
    fn starts_not_started() {
        let session = session(1);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert!(session.round().is_none());
    }

    #[test]
    fn submit_before_start_fails() {
        let mut session = session(1);
        assert_eq!(session.submit("cat"), Err(SubmitError::NotStarted));
    }

    #[test]
    fn start_round_picks_listed_root() {
        let mut session = session(7);

        for _ in 0..20 {
            let root = session.start_round().root_word().to_string();
            assert!(roots().contains(&root), "unexpected root {root}");
            assert_eq!(session.phase(), GamePhase::InProgress);
        }
    }

    #[test]
    fn start_round_resets_state() {
        let mut session = session(3);
        session.start_round_with("taco");
        session.submit("cat").unwrap();
        session.submit("coat").unwrap();
        assert_eq!(session.round().unwrap().score(), 7);

        let round = session.start_round();
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn same_seed_same_roots() {
        let mut first = session(42);
        let mut second = session(42);

        for _ in 0..10 {
            assert_eq!(
                first.start_round().root_word(),
                second.start_round().root_word()
            );
        }
    }

    #[test]
    fn every_root_is_reachable() {
        let mut session = session(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(session.start_round().root_word().to_string());
        }

        assert_eq!(seen.len(), roots().len());
    }

    #[test]
    fn submit_reports_rejections() {
        let mut session = session(5);
        session.start_round_with("Taco");

        assert_eq!(
            session.submit("taco"),
            Err(SubmitError::Rejected(RejectionReason::IsRootWord))
        );
        assert_eq!(session.submit("  "), Ok(Submission::Ignored));
        assert_eq!(session.submit("oat"), Ok(Submission::Accepted("oat".to_string())));
        assert_eq!(
            session.submit("oat"),
            Err(SubmitError::Rejected(RejectionReason::AlreadyUsed))
        );
    }

    #[test]
    fn rejection_message_passes_through() {
        let err = SubmitError::Rejected(RejectionReason::NotARealWord);
        assert_eq!(err.to_string(), RejectionReason::NotARealWord.to_string());
    }

    #[test]
    fn default_config_is_english() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.seed, None);
    }
}
