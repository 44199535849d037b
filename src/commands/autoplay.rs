//! Self-play command
//!
//! Lets the solver play against a known secret word.

use crate::bank::Prior;
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{Game, GameError, GameRecord, Round, SecretOracle};
use crate::solver::Solver;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Play one solver game against `secret`
///
/// Unless `allow_unknown` is set, the secret must be a bank word; a secret
/// outside the bank can never be reached and ends with an empty pool.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not in the bank and `allow_unknown` is false
/// - The pool runs empty before the secret is found
pub fn autoplay(
    prior: &Prior,
    config: GameConfig,
    secret: &Word,
    allow_unknown: bool,
) -> Result<GameRecord, GameError> {
    autoplay_observed(prior, config, secret, allow_unknown, |_| {})
}

/// [`autoplay`], calling `on_round` after every turn
///
/// # Errors
///
/// See [`autoplay`].
pub fn autoplay_observed<F: FnMut(&Round)>(
    prior: &Prior,
    config: GameConfig,
    secret: &Word,
    allow_unknown: bool,
    on_round: F,
) -> Result<GameRecord, GameError> {
    if !allow_unknown && !prior.contains(secret) {
        return Err(GameError::UnknownSecret(secret.to_string()));
    }

    let game = Game::new(prior, config);
    let mut solver = Solver::from_config(game.config());
    let mut oracle = SecretOracle::new(secret.clone());
    game.play_observed(&mut solver, &mut oracle, on_round)
}

/// Draw a secret from the bank, seeded when `seed` is set
#[must_use]
pub fn random_secret(prior: &Prior, seed: Option<u64>) -> Option<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    prior.random_word(&mut rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::FREQUENCIES;
    use crate::config::PriorParams;
    use crate::game::GameStatus;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn embedded_prior() -> Prior {
        let freqs = FREQUENCIES.iter().map(|&(w, f)| (word(w), f));
        Prior::from_frequencies(freqs, PriorParams::default()).unwrap()
    }

    #[test]
    fn solves_bank_words() {
        let prior = embedded_prior();
        for secret in ["crane", "slate", "tares"] {
            let config = GameConfig::default().with_seed(1);
            let record = autoplay(&prior, config, &word(secret), false).unwrap();
            assert!(record.won(), "failed to solve {secret}");
            assert!(record.turns() <= 6);
        }
    }

    #[test]
    fn opening_is_always_first() {
        let prior = embedded_prior();
        let config = GameConfig::default().with_seed(4);
        let record = autoplay(&prior, config, &word("slate"), false).unwrap();
        assert_eq!(record.rounds[0].guess.text(), "tares");
    }

    #[test]
    fn unknown_secret_rejected() {
        let prior = embedded_prior();
        let err = autoplay(&prior, GameConfig::default(), &word("qqqqq"), false).unwrap_err();
        assert!(matches!(err, GameError::UnknownSecret(w) if w == "qqqqq"));
    }

    #[test]
    fn unknown_secret_allowed_runs_dry() {
        let prior = embedded_prior();
        let config = GameConfig::default().with_seed(2);
        let err = autoplay(&prior, config, &word("qqqqq"), true).unwrap_err();
        assert!(matches!(err, GameError::EmptyPool { .. }));
    }

    #[test]
    fn observed_rounds_match_record() {
        let prior = embedded_prior();
        let config = GameConfig::default().with_seed(8);
        let mut turns = Vec::new();
        let record =
            autoplay_observed(&prior, config, &word("crane"), false, |r| turns.push(r.turn))
                .unwrap();
        assert_eq!(turns.len(), record.turns());
        assert_eq!(record.status, GameStatus::Won(record.turns()));
    }

    #[test]
    fn seeded_secret_is_reproducible() {
        let prior = embedded_prior();
        let a = random_secret(&prior, Some(17)).unwrap();
        let b = random_secret(&prior, Some(17)).unwrap();
        assert_eq!(a, b);
        assert!(prior.contains(&a));
    }
}
