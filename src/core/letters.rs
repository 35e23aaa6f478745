//! Letter multiset for derivability checks
//!
//! A `LetterPool` counts how many times each letter occurs in a root word.
//! A candidate is derivable when every one of its letters can be taken from
//! the pool, each occurrence at most once.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build the pool for a word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.count('s'), 1);
    /// assert_eq!(pool.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` the pool holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether the pool holds no letters at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one copy of `letter`, returning false if none is left
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Letters are consumed greedily from a scratch copy; the pool itself is
    /// left untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("sworn")); // no 'n' in silkworm
    /// assert!(!pool.can_spell("kiss")); // only one 's'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicate_letters() {
        let pool = LetterPool::new("balloons");
        assert_eq!(pool.count('l'), 2);
        assert_eq!(pool.count('o'), 2);
        assert_eq!(pool.count('b'), 1);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::new("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn take_consumes_one_copy() {
        let mut pool = LetterPool::new("aab");
        assert!(pool.take('a'));
        assert_eq!(pool.count('a'), 1);
        assert!(pool.take('a'));
        assert!(!pool.take('a'));
        assert!(!pool.take('z'));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("worms"));
        assert!(!pool.can_spell("mills")); // one 'l', one 's'
        assert!(!pool.can_spell("sworn")); // no 'n'
        assert!(!pool.can_spell("room")); // one 'o'
    }

    #[test]
    fn can_spell_does_not_consume() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silkworm"));
        assert!(pool.can_spell("silkworm"));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn can_spell_unicode_letters() {
        let pool = LetterPool::new("café");
        assert_eq!(pool.count('é'), 1);
        assert!(pool.can_spell("éca"));
        assert!(!pool.can_spell("cafe"));
    }
}
