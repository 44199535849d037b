//! Entropy-based guess scoring
//!
//! Implements weighted Shannon entropy over response patterns and the
//! max-entropy selection built on it.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, pattern_masses, shannon_entropy,
};
pub use selector::{TIE_TOLERANCE, rank_guesses, select_best_guess};
