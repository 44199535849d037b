//! The turn-by-turn game loop

use super::GameError;
use super::oracle::{Feedback, Oracle};
use super::player::Guesser;
use super::state::{GameState, GameStatus, Round};
use crate::bank::Prior;
use crate::config::GameConfig;
use crate::core::Word;

/// Everything that happened in a finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub status: GameStatus,
    pub rounds: Vec<Round>,
    /// The solution, when the oracle knew it
    pub secret: Option<Word>,
}

impl GameRecord {
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Number of turns played
    #[must_use]
    pub fn turns(&self) -> usize {
        self.rounds.len()
    }
}

/// Plays games against a fixed prior
pub struct Game<'a> {
    prior: &'a Prior,
    config: GameConfig,
}

impl<'a> Game<'a> {
    #[must_use]
    pub const fn new(prior: &'a Prior, config: GameConfig) -> Self {
        Self { prior, config }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn prior(&self) -> &'a Prior {
        self.prior
    }

    /// Play one game from a fresh pool
    ///
    /// # Errors
    /// See [`Game::play_observed`].
    pub fn play<G, O>(&self, guesser: &mut G, oracle: &mut O) -> Result<GameRecord, GameError>
    where
        G: Guesser + ?Sized,
        O: Oracle + ?Sized,
    {
        self.play_observed(guesser, oracle, |_| {})
    }

    /// Play one game, calling `on_round` after every completed turn
    ///
    /// Each turn: ask the guesser, ask the oracle, retire the guess from the
    /// pool, stop on the winning pattern, otherwise filter the pool by the
    /// response. If the oracle rejects a guess after turn 1, the word stays
    /// retired and the turn is replayed with a new guess.
    ///
    /// # Errors
    /// - `EmptyPool` if no candidate is consistent with the responses
    /// - `UnknownOpeningGuess` if the oracle rejects the turn-1 guess
    /// - any error raised by the guesser or the oracle
    ///
    /// # Examples
    /// ```
    /// use wordler::bank::Prior;
    /// use wordler::config::GameConfig;
    /// use wordler::core::Word;
    /// use wordler::game::{Game, GameStatus, SecretOracle};
    /// use wordler::solver::Solver;
    ///
    /// let words = ["aaaaa", "bbbbb", "ababa"].map(|w| (Word::new(w).unwrap(), 1.0));
    /// let prior = Prior::from_weights(words).unwrap();
    /// let config = GameConfig::default()
    ///     .with_opening(Word::new("aaaaa").unwrap())
    ///     .with_seed(0);
    ///
    /// let game = Game::new(&prior, config);
    /// let mut solver = Solver::from_config(game.config());
    /// let mut oracle = SecretOracle::new(Word::new("aaaaa").unwrap());
    ///
    /// let record = game.play(&mut solver, &mut oracle).unwrap();
    /// assert_eq!(record.status, GameStatus::Won(1));
    /// ```
    pub fn play_observed<G, O, F>(
        &self,
        guesser: &mut G,
        oracle: &mut O,
        on_round: F,
    ) -> Result<GameRecord, GameError>
    where
        G: Guesser + ?Sized,
        O: Oracle + ?Sized,
        F: FnMut(&Round),
    {
        let mut state = GameState::new(self.prior);
        let status = self.run(&mut state, guesser, oracle, on_round)?;
        Ok(GameRecord {
            status,
            rounds: state.rounds,
            secret: oracle.secret().cloned(),
        })
    }

    /// Play one game inside `state`, which is reset to the full prior first
    ///
    /// On return `state` holds the finished game, so the caller can inspect
    /// the pool that was left and reuse the same state for the next game.
    ///
    /// # Errors
    /// See [`Game::play_observed`].
    pub fn play_in<G, O, F>(
        &self,
        state: &mut GameState,
        guesser: &mut G,
        oracle: &mut O,
        on_round: F,
    ) -> Result<GameStatus, GameError>
    where
        G: Guesser + ?Sized,
        O: Oracle + ?Sized,
        F: FnMut(&Round),
    {
        state.reset(self.prior);
        self.run(state, guesser, oracle, on_round)
    }

    fn run<G, O, F>(
        &self,
        state: &mut GameState,
        guesser: &mut G,
        oracle: &mut O,
        mut on_round: F,
    ) -> Result<GameStatus, GameError>
    where
        G: Guesser + ?Sized,
        O: Oracle + ?Sized,
        F: FnMut(&Round),
    {
        let secret = oracle.secret().cloned();
        let empty_pool = || GameError::EmptyPool {
            secret: secret.as_ref().map(ToString::to_string),
        };

        for turn in 1..=self.config.max_turns {
            state.status = GameStatus::InProgress(turn);
            let pool_before = state.pool.len();

            let (guess, entropy, pattern) = loop {
                if turn > 1 && state.pool.is_empty() {
                    return Err(empty_pool());
                }

                let (guess, entropy) = guesser.guess(turn, &state.pool)?;
                let feedback = oracle.respond(&guess)?;
                state.pool.remove(&guess);

                match feedback {
                    Feedback::Response(pattern) => break (guess, entropy, pattern),
                    Feedback::UnknownWord if turn == 1 => {
                        return Err(GameError::UnknownOpeningGuess(guess.to_string()));
                    }
                    Feedback::UnknownWord => {
                        log::warn!("{guess} was rejected; retrying turn {turn} without it");
                    }
                }
            };

            let won = pattern.is_perfect();
            let filtered = if won {
                Ok(0)
            } else {
                state.pool.filter(&guess, pattern)
            };

            let round = Round {
                turn,
                guess,
                entropy,
                pattern,
                pool_before,
                pool_after: state.pool.len(),
            };
            on_round(&round);
            state.rounds.push(round);

            if won {
                state.status = GameStatus::Won(turn);
                log::info!("won on turn {}", state.turn());
                return Ok(state.status);
            }
            if let Err(err) = filtered {
                log::debug!("{err}");
                return Err(empty_pool());
            }
        }

        state.status = GameStatus::Lost;
        log::info!("lost after {} turns", state.turn());
        Ok(state.status)
    }
}
