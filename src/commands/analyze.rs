//! Word analysis command
//!
//! Scores a single guess against the full bank.

use crate::bank::Prior;
use crate::core::Word;
use crate::solver::CandidatePool;
use crate::solver::entropy::{GuessMetrics, calculate_metrics, rank_guesses};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub pool_size: usize,
    /// 1-based position among all bank words by entropy, if a bank word
    pub rank: Option<usize>,
    /// Prior weight, if a bank word
    pub weight: Option<f64>,
}

/// Analyze a guess as an opening move
///
/// The word need not be in the bank; only bank words get a rank.
#[must_use]
pub fn analyze_word(prior: &Prior, word: &Word) -> AnalysisResult {
    let pool = CandidatePool::new(prior);
    let metrics = calculate_metrics(word, &pool);

    let weight = prior.weight(word);
    let rank = weight.and_then(|_| {
        let guesses: Vec<&Word> = prior.words().collect();
        rank_guesses(&guesses, &pool)
            .iter()
            .position(|(w, _)| *w == word)
            .map(|idx| idx + 1)
    });

    AnalysisResult {
        word: word.clone(),
        metrics,
        pool_size: pool.len(),
        rank,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::entropy::calculate_entropy;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn bank() -> Prior {
        Prior::from_weights(["abcde", "abcdf", "zzzzz"].map(|w| (word(w), 1.0))).unwrap()
    }

    #[test]
    fn analyze_bank_word() {
        let prior = bank();
        let result = analyze_word(&prior, &word("abcdf"));

        assert_eq!(result.pool_size, 3);
        assert!((result.metrics.entropy - 3f64.log2()).abs() < 1e-9);
        assert_eq!(result.metrics.partitions, 3);
        // abcde and abcdf tie; alphabetical order puts abcdf second
        assert_eq!(result.rank, Some(2));
        assert!(result.weight.is_some());
    }

    #[test]
    fn analyze_word_outside_bank() {
        let prior = bank();
        let result = analyze_word(&prior, &word("qqqqq"));

        assert!(result.rank.is_none());
        assert!(result.weight.is_none());
        assert!(result.metrics.entropy.abs() < f64::EPSILON);
        assert_eq!(result.metrics.partitions, 1);
    }

    #[test]
    fn entropy_matches_calculator() {
        let prior = bank();
        let guess = word("zzzzz");
        let result = analyze_word(&prior, &guess);
        let pool = CandidatePool::new(&prior);
        assert!(
            (result.metrics.entropy - calculate_entropy(&guess, &pool)).abs() < f64::EPSILON
        );
        assert_eq!(result.rank, Some(3));
    }
}
