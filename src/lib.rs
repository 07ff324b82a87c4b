//! Word Scramble
//!
//! Make as many words as you can from the letters of a root word. Each word
//! must use only the root's letters (each at most once), must not be the root
//! itself or a repeat, and must be a real word of at least three letters.
//! Accepted words score one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::game::{RoundState, Submission, Validator};
//! use word_scramble::oracle::DictionaryOracle;
//!
//! let validator = Validator::new(DictionaryOracle::embedded(), "en");
//! let mut round = RoundState::new("marathon");
//!
//! assert_eq!(
//!     validator.submit("Moth", &mut round),
//!     Ok(Submission::Accepted("moth".to_string()))
//! );
//! assert_eq!(round.score(), 4);
//! ```

// Core game rules
pub mod core;

// Round state, validation and session lifecycle
pub mod game;

// Spelling oracles
pub mod oracle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
