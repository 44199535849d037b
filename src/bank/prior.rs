//! Prior weights over the word bank
//!
//! Words are ranked by ascending frequency and each rank is mapped through a
//! logistic curve to a relative weight.

use super::BankError;
use crate::config::PriorParams;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Logistic function
#[inline]
#[must_use]
pub fn sigmoid(v: f64) -> f64 {
    (1.0 + (-v).exp()).recip()
}

/// Relative prior weight of every word in the bank
///
/// Built once per process and passed by reference into each game, so
/// independent games never share mutable state.
#[derive(Debug, Clone)]
pub struct Prior {
    /// Sorted by word
    entries: Vec<(Word, f64)>,
}

impl Prior {
    /// Build a prior from raw frequencies
    ///
    /// Words are sorted ascending by frequency (ties alphabetically), ranked
    /// from 0, and weighted `sigmoid((offset - rank) / scale)`. A duplicate
    /// word keeps its last frequency.
    ///
    /// # Errors
    /// Returns `BankError::Empty` if `freqs` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordler::bank::Prior;
    /// use wordler::config::PriorParams;
    /// use wordler::core::Word;
    ///
    /// let freqs = vec![
    ///     (Word::new("crane").unwrap(), 3.0),
    ///     (Word::new("slate").unwrap(), 1.0),
    /// ];
    /// let prior = Prior::from_frequencies(freqs, PriorParams::default()).unwrap();
    /// assert_eq!(prior.len(), 2);
    /// ```
    pub fn from_frequencies(
        freqs: impl IntoIterator<Item = (Word, f64)>,
        params: PriorParams,
    ) -> Result<Self, BankError> {
        let deduped: FxHashMap<Word, f64> = freqs.into_iter().collect();
        let mut ranked: Vec<(Word, f64)> = deduped.into_iter().collect();
        ranked.sort_by(|(w1, f1), (w2, f2)| f1.total_cmp(f2).then_with(|| w1.cmp(w2)));

        let weighted = ranked.into_iter().enumerate().map(|(rank, (word, _))| {
            let weight = sigmoid((params.offset - rank as f64) / params.scale);
            (word, weight)
        });

        Self::from_weights(weighted)
    }

    /// Build a prior from explicit weights
    ///
    /// # Errors
    /// Returns `BankError::Empty` if `weights` is empty, or
    /// `BankError::InvalidFrequency` for a negative or non-finite weight.
    pub fn from_weights(weights: impl IntoIterator<Item = (Word, f64)>) -> Result<Self, BankError> {
        let deduped: FxHashMap<Word, f64> = weights.into_iter().collect();
        if deduped.is_empty() {
            return Err(BankError::Empty);
        }
        if let Some((word, &weight)) = deduped.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(BankError::InvalidFrequency {
                word: word.to_string(),
                freq: weight,
            });
        }

        let mut entries: Vec<(Word, f64)> = deduped.into_iter().collect();
        entries.sort_by(|(w1, _), (w2, _)| w1.cmp(w2));
        Ok(Self { entries })
    }

    /// Number of words in the bank
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty prior cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a word, if it is in the bank
    #[must_use]
    pub fn weight(&self, word: &Word) -> Option<f64> {
        self.entries
            .binary_search_by(|(w, _)| w.cmp(word))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Check whether a word is in the bank
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.weight(word).is_some()
    }

    /// Look up a bank word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.entries
            .binary_search_by(|(w, _)| w.cmp(&word))
            .ok()
            .map(|idx| &self.entries[idx].0)
    }

    /// All words, alphabetically
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(w, _)| w)
    }

    /// All `(word, weight)` pairs, alphabetically by word
    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.entries.iter().map(|(w, weight)| (w, *weight))
    }

    /// Pick a bank word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.entries.choose(rng).map(|(w, _)| w)
    }

    /// Pick up to `count` distinct bank words uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&Word> {
        self.entries
            .choose_multiple(rng, count)
            .map(|(w, _)| w)
            .collect()
    }
}
