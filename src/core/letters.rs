//! Letter availability checking
//!
//! A candidate can be formed from a source word when every letter it uses,
//! counted with multiplicity, occurs at least that many times in the source.
//! Position does not matter: this is anagram-subset formation, not substring
//! matching.

use rustc_hash::FxHashMap;

/// A multiset of the letters still available from a source word
///
/// Letters are stored lowercase, so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("Taco");
    /// assert_eq!(pool.count('t'), 1);
    /// assert_eq!(pool.count('C'), 1);
    /// assert_eq!(pool.remaining(), 4);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars().flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter` from the pool
    ///
    /// Returns `false` if no occurrence remains.
    pub fn take(&mut self, letter: char) -> bool {
        let mut all_taken = true;
        for ch in letter.to_lowercase() {
            match self.counts.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => all_taken = false,
            }
        }
        all_taken
    }

    /// How many occurrences of `letter` are still available
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        letter
            .to_lowercase()
            .next()
            .and_then(|ch| self.counts.get(&ch).copied())
            .unwrap_or(0)
    }

    /// Total number of letters left in the pool
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Check whether `candidate` can be spelled using only the letters of `source`
///
/// Each letter of `source` may be used at most once. The comparison is
/// case-insensitive. An empty candidate is trivially formable; callers that
/// need a minimum length must check it separately.
///
/// # Examples
/// ```
/// use word_scramble::core::can_form;
///
/// assert!(can_form("cat", "taco"));
/// assert!(can_form("coat", "taco"));
/// assert!(!can_form("coco", "taco"));
/// ```
#[must_use]
pub fn can_form(candidate: &str, source: &str) -> bool {
    let mut pool = LetterPool::from_word(source);
    candidate.chars().all(|letter| pool.take(letter))
}
