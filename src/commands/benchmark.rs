//! Benchmark command
//!
//! Plays many independent self-play games in parallel and summarizes how
//! quickly the solver finds the secret.

use super::autoplay::autoplay;
use crate::bank::Prior;
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameError, GameStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Games that ended in an error, with their secret
    pub failures: Vec<(Word, GameError)>,
    /// Guesses summed over won games
    pub total_guesses: usize,
    pub average_guesses: f64,
    /// Winning turn -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Draw `count` distinct secrets from the bank
#[must_use]
pub fn benchmark_secrets(prior: &Prior, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    prior.sample(&mut rng, count).into_iter().cloned().collect()
}

/// Play one game per secret and collect the statistics
///
/// Games run in parallel. Each owns its pool and solver; with a base seed,
/// game `i` uses `seed + i` so runs are reproducible regardless of
/// scheduling.
#[must_use]
pub fn run_benchmark(prior: &Prior, config: &GameConfig, secrets: &[Word]) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let outcomes: Vec<(&Word, Result<GameStatus, GameError>)> = secrets
        .par_iter()
        .enumerate()
        .map(|(idx, secret)| {
            let mut game_config = config.clone();
            game_config.seed = config.seed.map(|s| s.wrapping_add(idx as u64));

            let outcome = autoplay(prior, game_config, secret, true).map(|record| record.status);
            pb.inc(1);
            (secret, outcome)
        })
        .collect();

    pb.finish_and_clear();

    let mut wins = 0;
    let mut losses = 0;
    let mut total_guesses = 0;
    let mut failures = Vec::new();
    let mut distribution = BTreeMap::new();

    for (secret, outcome) in outcomes {
        match outcome {
            Ok(GameStatus::Won(turns)) => {
                wins += 1;
                total_guesses += turns;
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Ok(_) => {
                log::info!("did not solve {secret}");
                losses += 1;
            }
            Err(err) => {
                log::warn!("game for {secret} failed: {err}");
                failures.push((secret.clone(), err));
            }
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    BenchmarkResult {
        total_games,
        wins,
        losses,
        failures,
        total_guesses,
        average_guesses: if wins == 0 {
            0.0
        } else {
            total_guesses as f64 / wins as f64
        },
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
