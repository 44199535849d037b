//! Pure entropy-based word selection
//!
//! Selects words that maximize weighted Shannon entropy (expected information
//! gain), breaking ties uniformly at random.

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::solver::CandidatePool;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// Entropies closer than this to the maximum count as tied
///
/// Equal partitions can differ in the last bits depending on summation order.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Select the best guess from the pool by maximizing entropy
///
/// Every remaining candidate is scored against the pool. When several share
/// the maximum entropy (within `TIE_TOLERANCE`), one of them is chosen
/// uniformly at random.
/// Returns the chosen word with its entropy, or `None` if the pool is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordler::bank::Prior;
/// use wordler::core::Word;
/// use wordler::solver::CandidatePool;
/// use wordler::solver::entropy::select_best_guess;
///
/// let words = ["abcde", "abcdf", "zzzzz"].map(|w| (Word::new(w).unwrap(), 1.0));
/// let pool = CandidatePool::new(&Prior::from_weights(words).unwrap());
///
/// let (best, entropy) = select_best_guess(&pool, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert!(entropy > 1.5);
/// assert_ne!(best.text(), "zzzzz");
/// ```
pub fn select_best_guess<R: Rng + ?Sized>(
    pool: &CandidatePool,
    rng: &mut R,
) -> Option<(Word, f64)> {
    // Alphabetical order keeps seeded runs reproducible
    let scored: Vec<(&Word, f64)> = pool
        .sorted_words()
        .into_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, pool);
            log::trace!("H({guess}) = {entropy:.6}");
            (guess, entropy)
        })
        .collect();

    let best = scored
        .iter()
        .map(|&(_, entropy)| entropy)
        .max_by(f64::total_cmp)?;

    let tied: Vec<&Word> = scored
        .iter()
        .filter(|&&(_, entropy)| best - entropy <= TIE_TOLERANCE)
        .map(|&(word, _)| word)
        .collect();

    if tied.len() > 1 {
        log::debug!("{} guesses tied at {best:.4} bits", tied.len());
    }

    tied.choose(rng).map(|&word| (word.clone(), best))
}

/// Score every guess against the pool, best first
///
/// Scoring runs in parallel; equal entropies are ordered alphabetically.
#[must_use]
pub fn rank_guesses<'a>(guesses: &[&'a Word], pool: &CandidatePool) -> Vec<(&'a Word, f64)> {
    let mut ranked: Vec<(&Word, f64)> = guesses
        .par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, pool)))
        .collect();

    ranked.sort_by(|(w1, e1), (w2, e2)| e2.total_cmp(e1).then_with(|| w1.cmp(w2)));
    ranked
}
