//! Candidate pool
//!
//! The words still consistent with every observed response, each carrying its
//! prior weight. The pool only ever shrinks during a game.

use crate::bank::Prior;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Filtering removed every candidate
///
/// Either the responses were inconsistent or the solution was never in the
/// bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no candidates are consistent with {guess} -> {pattern}")]
pub struct EmptyPool {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Remaining possible solutions with their prior weights
///
/// Weights are relative; they are never renormalized when words are removed.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    entries: FxHashMap<Word, f64>,
}

impl CandidatePool {
    /// Create a pool holding every word of the prior
    #[must_use]
    pub fn new(prior: &Prior) -> Self {
        Self {
            entries: prior.iter().map(|(w, weight)| (w.clone(), weight)).collect(),
        }
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.contains_key(word)
    }

    /// Prior weight of a remaining candidate
    #[must_use]
    pub fn weight(&self, word: &Word) -> Option<f64> {
        self.entries.get(word).copied()
    }

    /// Sum of the weights of all remaining candidates
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Iterate over `(word, weight)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.entries.iter().map(|(w, weight)| (w, *weight))
    }

    /// Remaining words, alphabetically
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.entries.keys().collect();
        words.sort_unstable();
        words
    }

    /// Retire a single word, returning whether it was present
    pub fn remove(&mut self, word: &Word) -> bool {
        self.entries.remove(word).is_some()
    }

    /// Keep only candidates that would have produced `pattern` for `guess`
    ///
    /// Survivors keep their weights. Returns the number of words removed.
    ///
    /// # Errors
    /// Returns `EmptyPool` if no candidate survives. The pool is left empty.
    ///
    /// # Examples
    /// ```
    /// use wordler::bank::Prior;
    /// use wordler::core::{Pattern, Word};
    /// use wordler::solver::CandidatePool;
    ///
    /// let words = ["aaaaa", "bbbbb", "ababa"].map(|w| (Word::new(w).unwrap(), 1.0));
    /// let prior = Prior::from_weights(words).unwrap();
    /// let mut pool = CandidatePool::new(&prior);
    ///
    /// let guess = Word::new("aaaaa").unwrap();
    /// let secret = Word::new("ababa").unwrap();
    /// pool.filter(&guess, Pattern::calculate(&guess, &secret)).unwrap();
    ///
    /// assert_eq!(pool.len(), 1);
    /// assert!(pool.contains(&secret));
    /// ```
    pub fn filter(&mut self, guess: &Word, pattern: Pattern) -> Result<usize, EmptyPool> {
        let before = self.entries.len();
        self.entries
            .retain(|candidate, _| Pattern::calculate(guess, candidate) == pattern);
        let removed = before - self.entries.len();

        log::debug!(
            "filter {guess} {pattern}: {before} -> {} candidates",
            self.entries.len()
        );

        if self.entries.is_empty() {
            return Err(EmptyPool {
                guess: guess.clone(),
                pattern,
            });
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool_of(words: &[(&str, f64)]) -> CandidatePool {
        let prior = Prior::from_weights(words.iter().map(|&(w, f)| (word(w), f))).unwrap();
        CandidatePool::new(&prior)
    }

    #[test]
    fn new_pool_matches_prior() {
        let pool = pool_of(&[("crane", 1.0), ("slate", 2.0)]);
        assert_eq!(pool.len(), 2);
        assert!((pool.total_weight() - 3.0).abs() < f64::EPSILON);
        assert_eq!(pool.weight(&word("slate")), Some(2.0));
    }

    #[test]
    fn filter_keeps_exactly_consistent_words() {
        let all = ["crane", "slate", "irate", "crate", "grate", "trace"];
        let mut pool = pool_of(&all.map(|w| (w, 1.0)));
        let guess = word("crane");
        let pattern = Pattern::calculate(&guess, &word("grate"));

        pool.filter(&guess, pattern).unwrap();

        for w in all {
            let w = word(w);
            let consistent = Pattern::calculate(&guess, &w) == pattern;
            assert_eq!(pool.contains(&w), consistent, "{w}");
        }
    }

    #[test]
    fn filter_preserves_weights() {
        let mut pool = pool_of(&[("crate", 0.25), ("grate", 0.75), ("slate", 1.0)]);
        let guess = word("crane");
        pool.filter(&guess, Pattern::calculate(&guess, &word("grate")))
            .unwrap();

        assert_eq!(pool.weight(&word("crate")), None);
        assert_eq!(pool.weight(&word("grate")), Some(0.75));
    }

    #[test]
    fn filter_reports_removed_count() {
        let mut pool = pool_of(&[("aaaaa", 1.0), ("bbbbb", 1.0), ("ababa", 1.0)]);
        let guess = word("aaaaa");
        let removed = pool.filter(&guess, Pattern::PERFECT).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn filter_to_empty_is_an_error() {
        let mut pool = pool_of(&[("aaaaa", 1.0), ("bbbbb", 1.0)]);
        let guess = word("zzzzz");
        let err = pool.filter(&guess, Pattern::PERFECT).unwrap_err();
        assert_eq!(err.guess, guess);
        assert!(pool.is_empty());
    }

    #[test]
    fn remove_retires_one_word() {
        let mut pool = pool_of(&[("aaaaa", 1.0), ("bbbbb", 1.0)]);
        assert!(pool.remove(&word("aaaaa")));
        assert!(!pool.remove(&word("aaaaa")));
        assert!(!pool.remove(&word("zzzzz")));
        assert_eq!(pool.sorted_words(), [&word("bbbbb")]);
    }

    #[test]
    fn size_never_increases() {
        let mut pool = pool_of(&[
            ("crane", 1.0),
            ("slate", 1.0),
            ("irate", 1.0),
            ("crate", 1.0),
            ("grate", 1.0),
        ]);
        let secret = word("grate");
        let mut last = pool.len();

        for guess in ["crane", "irate", "crate"] {
            let guess = word(guess);
            pool.remove(&guess);
            assert!(pool.len() <= last);
            last = pool.len();

            pool.filter(&guess, Pattern::calculate(&guess, &secret))
                .unwrap();
            assert!(pool.len() <= last);
            last = pool.len();
        }
        assert!(pool.contains(&secret));
    }
}
