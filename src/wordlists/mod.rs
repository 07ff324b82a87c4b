//! Word lists for the word scramble game
//!
//! Provides the embedded root words and dictionary compiled into the binary,
//! plus a loader for newline-delimited word list files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::WordListError;
