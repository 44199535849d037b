//! Assist mode
//!
//! The solver suggests each guess and the user types in the response shown by
//! the real game.

use crate::bank::Prior;
use crate::config::GameConfig;
use crate::game::{Game, GameError, GameRecord, Oracle, PromptOracle};
use crate::output::{print_assist_intro, print_outcome, print_round};
use crate::solver::Solver;

/// Run assist mode on the terminal
///
/// # Errors
///
/// Returns an error if:
/// - The game rejects the opening guess
/// - The responses rule out every candidate
/// - Reading from stdin fails or reaches end of input
pub fn run_assist(prior: &Prior, config: GameConfig) -> Result<GameRecord, GameError> {
    print_assist_intro();
    assist_with(prior, config, &mut PromptOracle::stdio())
}

/// Play an assisted game with any response source
///
/// # Errors
///
/// See [`run_assist`].
pub fn assist_with<O: Oracle + ?Sized>(
    prior: &Prior,
    config: GameConfig,
    oracle: &mut O,
) -> Result<GameRecord, GameError> {
    let game = Game::new(prior, config);
    let mut solver = Solver::from_config(game.config());

    let record = game.play_observed(&mut solver, oracle, print_round)?;
    print_outcome(&record);
    Ok(record)
}
