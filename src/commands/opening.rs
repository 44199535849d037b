//! Opening search command
//!
//! Scores every bank word against the full prior to find the best first
//! guess. This is how the default opening was chosen.

use crate::bank::Prior;
use crate::core::Word;
use crate::solver::CandidatePool;
use crate::solver::entropy::rank_guesses;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Best opening guesses, highest entropy first
pub struct OpeningRanking {
    pub pool_size: usize,
    pub top: Vec<(Word, f64)>,
}

/// Rank every bank word as an opening and keep the best `top`
#[must_use]
pub fn rank_openings(prior: &Prior, top: usize) -> OpeningRanking {
    let pool = CandidatePool::new(prior);
    let guesses: Vec<&Word> = prior.words().collect();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Scoring {} openings", guesses.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let ranked = rank_guesses(&guesses, &pool);
    spinner.finish_and_clear();

    log::info!("scored {} openings", ranked.len());

    OpeningRanking {
        pool_size: pool.len(),
        top: ranked
            .into_iter()
            .take(top)
            .map(|(word, entropy)| (word.clone(), entropy))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::FREQUENCIES;
    use crate::config::{DEFAULT_OPENING, PriorParams};

    #[test]
    fn keeps_top_k_in_order() {
        let prior = Prior::from_weights(
            ["abcde", "abcdf", "zzzzz", "qqqqq"].map(|w| (Word::new(w).unwrap(), 1.0)),
        )
        .unwrap();
        let ranking = rank_openings(&prior, 2);

        assert_eq!(ranking.pool_size, 4);
        assert_eq!(ranking.top.len(), 2);
        assert_eq!(ranking.top[0].0.text(), "abcde");
        assert_eq!(ranking.top[1].0.text(), "abcdf");
        assert!(ranking.top[0].1 >= ranking.top[1].1);
    }

    #[test]
    fn default_opening_ranks_highly() {
        let freqs = FREQUENCIES
            .iter()
            .map(|&(w, f)| (Word::new(w).unwrap(), f));
        let prior = Prior::from_frequencies(freqs, PriorParams::default()).unwrap();
        let ranking = rank_openings(&prior, 50);

        assert!(
            ranking.top.iter().any(|(w, _)| w.text() == DEFAULT_OPENING),
            "{DEFAULT_OPENING} missing from the best openings"
        );
    }
}
