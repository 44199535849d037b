//! Human play mode
//!
//! A Wordle clone: the user guesses and the program answers from a secret
//! drawn from the bank.

use crate::bank::Prior;
use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{Game, GameError, GameRecord, Guesser, HumanGuesser, SecretOracle};
use crate::output::{print_human_intro, print_outcome, print_round};

/// Run human play mode on the terminal
///
/// # Errors
///
/// Returns an error if stdin fails or reaches end of input.
pub fn run_human(prior: &Prior, config: GameConfig, secret: Word) -> Result<GameRecord, GameError> {
    print_human_intro();
    let mut guesser = HumanGuesser::stdio(prior);
    play_human_with(prior, config, secret, &mut guesser)
}

/// Play a human game with any guess source
///
/// # Errors
///
/// See [`run_human`].
pub fn play_human_with<G: Guesser + ?Sized>(
    prior: &Prior,
    config: GameConfig,
    secret: Word,
    guesser: &mut G,
) -> Result<GameRecord, GameError> {
    let game = Game::new(prior, config);
    let mut oracle = SecretOracle::new(secret);

    let record = game.play_observed(guesser, &mut oracle, print_round)?;
    print_outcome(&record);
    Ok(record)
}
