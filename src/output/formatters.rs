//! Formatting utilities for terminal output

use crate::core::{LetterPool, letter_count};

/// Marker shown in place of a root letter the current input already uses
pub const USED_LETTER: char = '·';

/// Format a letter count as a circled number, falling back to parentheses
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::letter_badge;
///
/// assert_eq!(letter_badge(4), "④");
/// assert_eq!(letter_badge(25), "(25)");
/// ```
#[must_use]
pub fn letter_badge(count: usize) -> String {
    // ① is U+2460, ⑳ is U+2473
    u32::try_from(count)
        .ok()
        .filter(|n| (1..=20).contains(n))
        .and_then(|n| char::from_u32(0x245F + n))
        .map_or_else(|| format!("({count})"), |c| c.to_string())
}

/// Describe a word with its length, for list entries and screen readers
#[must_use]
pub fn describe_word(word: &str) -> String {
    let count = letter_count(word);
    let unit = if count == 1 { "letter" } else { "letters" };
    format!("{word}, {count} {unit}")
}

/// Show the root word's letters, greying out the ones `input` already uses
///
/// Letters are shown uppercase. Input letters the root does not have are
/// ignored here; the validator reports them on submission.
#[must_use]
pub fn remaining_letters(root: &str, input: &str) -> String {
    let mut typed = LetterPool::from_word(input);

    root.chars()
        .map(|letter| {
            if typed.take(letter) {
                USED_LETTER
            } else {
                letter.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_badge_circled_range() {
        assert_eq!(letter_badge(1), "①");
        assert_eq!(letter_badge(3), "③");
        assert_eq!(letter_badge(20), "⑳");
    }

    #[test]
    fn letter_badge_outside_range() {
        assert_eq!(letter_badge(0), "(0)");
        assert_eq!(letter_badge(21), "(21)");
    }

    #[test]
    fn describe_word_plural() {
        assert_eq!(describe_word("coat"), "coat, 4 letters");
        assert_eq!(describe_word("a"), "a, 1 letter");
    }

    #[test]
    fn remaining_letters_no_input() {
        assert_eq!(remaining_letters("taco", ""), "TACO");
    }

    #[test]
    fn remaining_letters_marks_used() {
        assert_eq!(remaining_letters("taco", "cat"), "···O");
        assert_eq!(remaining_letters("taco", "CO"), "TA··");
    }

    #[test]
    fn remaining_letters_respects_multiplicity() {
        // Only the first 'e' is consumed
        assert_eq!(remaining_letters("speed", "e"), "SP·ED");
        assert_eq!(remaining_letters("speed", "ee"), "SP··D");
    }

    #[test]
    fn remaining_letters_ignores_foreign_letters() {
        assert_eq!(remaining_letters("taco", "xyz"), "TACO");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
