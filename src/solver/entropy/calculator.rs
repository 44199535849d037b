//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and the weighted candidate pool, computes the expected
//! information gain of playing that guess.

use crate::core::{Pattern, Word};
use crate::solver::CandidatePool;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct responses the guess can produce
    pub partitions: usize,
}

/// Calculate the weighted Shannon entropy of a guess against the pool
///
/// Each candidate contributes its weight, normalized by the total weight of
/// the pool, to the bucket of the response it would produce.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability mass of response pattern x.
///
/// # Examples
/// ```
/// use wordler::bank::Prior;
/// use wordler::core::Word;
/// use wordler::solver::CandidatePool;
/// use wordler::solver::entropy::calculate_entropy;
///
/// let words = ["aaaaa", "bbbbb"].map(|w| (Word::new(w).unwrap(), 1.0));
/// let pool = CandidatePool::new(&Prior::from_weights(words).unwrap());
///
/// // Either the guess is right or it is not: one bit
/// let entropy = calculate_entropy(&Word::new("aaaaa").unwrap(), &pool);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, pool: &CandidatePool) -> f64 {
    shannon_entropy(&pattern_masses(guess, pool))
}

/// Sum candidate weights per response pattern
///
/// Indexed by `Pattern::value()`.
#[must_use]
pub fn pattern_masses(guess: &Word, pool: &CandidatePool) -> [f64; Pattern::COUNT] {
    let mut masses = [0.0; Pattern::COUNT];

    for (candidate, weight) in pool.iter() {
        let pattern = Pattern::calculate(guess, candidate);
        masses[usize::from(pattern.value())] += weight;
    }

    masses
}

/// Calculate Shannon entropy from unnormalized bucket masses
///
/// H = -Σ p * log₂(p), with p = mass / total
///
/// # Properties
/// - Returns 0.0 for a certain outcome or an empty distribution
/// - Empty buckets contribute nothing
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use wordler::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[2.5, 2.5, 2.5, 2.5, 0.0]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(masses: &[f64]) -> f64 {
    let total: f64 = masses.iter().sum();

    if total <= 0.0 {
        return 0.0;
    }

    masses
        .iter()
        .map(|&mass| mass / total)
        // certain outcomes carry no information
        .filter(|&p| p > 0.0 && p < 1.0)
        // an f64 sum of nothing is -0.0
        .fold(0.0, |acc, p| acc - p * p.log2())
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and partition sizes.
#[must_use]
pub fn calculate_metrics(guess: &Word, pool: &CandidatePool) -> GuessMetrics {
    let mut masses = [0.0; Pattern::COUNT];
    let mut counts = [0usize; Pattern::COUNT];

    for (candidate, weight) in pool.iter() {
        let idx = usize::from(Pattern::calculate(guess, candidate).value());
        masses[idx] += weight;
        counts[idx] += 1;
    }

    let total: f64 = masses.iter().sum();
    let expected_remaining = if total > 0.0 {
        masses
            .iter()
            .zip(counts)
            .map(|(&mass, count)| mass / total * count as f64)
            .sum()
    } else {
        0.0
    };

    GuessMetrics {
        entropy: shannon_entropy(&masses),
        expected_remaining,
        max_partition: counts.iter().copied().max().unwrap_or(0),
        partitions: counts.iter().filter(|&&c| c > 0).count(),
    }
}
