//! Core domain types for the word scramble game
//!
//! This module contains the game rules that need no outside collaborator:
//! input normalization, letter availability and the rejection taxonomy.

mod letters;
mod rejection;
mod word;

pub use letters::{LetterPool, can_form};
pub use rejection::RejectionReason;
pub use word::{MIN_WORD_LENGTH, letter_count, normalize};
