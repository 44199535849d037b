//! Main Wordle solver interface

use super::CandidatePool;
use super::entropy::{calculate_entropy, select_best_guess};
use crate::config::GameConfig;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Entropy-maximizing guess selector
///
/// Plays a fixed opening word on turn 1, then the highest-entropy word still
/// in the pool, breaking ties with its own RNG.
pub struct Solver<R: Rng = StdRng> {
    opening: Word,
    rng: R,
}

impl Solver<StdRng> {
    /// Create a solver from game settings
    ///
    /// Uses `config.seed` for the tie-break RNG, or OS entropy if unset.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(config.opening.clone(), rng)
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver with the given opening word and RNG
    pub const fn new(opening: Word, rng: R) -> Self {
        Self { opening, rng }
    }

    /// The fixed turn-1 guess
    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// Pick the guess for `turn` (1-based) and report its entropy
    ///
    /// Turn 1 always returns the opening word, which need not be in the pool;
    /// its entropy is still measured against the pool. Later turns choose only
    /// from the pool. Returns `None` if a later turn finds the pool empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordler::bank::Prior;
    /// use wordler::core::Word;
    /// use wordler::solver::{CandidatePool, Solver};
    ///
    /// let words = ["crane", "slate"].map(|w| (Word::new(w).unwrap(), 1.0));
    /// let pool = CandidatePool::new(&Prior::from_weights(words).unwrap());
    ///
    /// let mut solver = Solver::new(Word::new("tares").unwrap(), StdRng::seed_from_u64(0));
    /// let (guess, _) = solver.select(1, &pool).unwrap();
    /// assert_eq!(guess.text(), "tares");
    /// ```
    pub fn select(&mut self, turn: usize, pool: &CandidatePool) -> Option<(Word, f64)> {
        if turn <= 1 {
            let entropy = calculate_entropy(&self.opening, pool);
            return Some((self.opening.clone(), entropy));
        }

        let choice = select_best_guess(pool, &mut self.rng);
        if let Some((guess, entropy)) = &choice {
            log::debug!(
                "turn {turn}: chose {guess} ({entropy:.4} bits) from {} candidates",
                pool.len()
            );
        }
        choice
    }
}
