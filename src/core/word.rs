//! Submission normalization and length rules

/// Shortest word the game will accept
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw player input for comparison
///
/// Lowercases the text and trims leading and trailing whitespace.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Crane\n"), "crane");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word
///
/// Counts characters rather than bytes, so scores are not inflated by
/// multi-byte letters.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
