//! Game state and per-turn records

use crate::bank::Prior;
use crate::core::{Pattern, Word};
use crate::solver::CandidatePool;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Playing the given 1-based turn
    InProgress(usize),
    /// Solved on the given turn
    Won(usize),
    /// Ran out of turns
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress(_))
    }
}

/// One completed turn
#[derive(Debug, Clone)]
pub struct Round {
    pub turn: usize,
    pub guess: Word,
    pub entropy: f64,
    pub pattern: Pattern,
    /// Candidates before the guess was played
    pub pool_before: usize,
    /// Candidates after removing the guess and filtering by the response
    pub pool_after: usize,
}

/// Mutable state of one game
///
/// Filled in by [`Game::play_in`](super::Game::play_in).
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) status: GameStatus,
    pub(crate) rounds: Vec<Round>,
    pub(crate) pool: CandidatePool,
}

impl GameState {
    /// Fresh state with the full prior in the pool
    #[must_use]
    pub fn new(prior: &Prior) -> Self {
        Self {
            status: GameStatus::InProgress(1),
            rounds: Vec::new(),
            pool: CandidatePool::new(prior),
        }
    }

    /// Restore the initial pool and clear the history
    pub fn reset(&mut self, prior: &Prior) {
        *self = Self::new(prior);
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Current 1-based turn, or the final turn played once finished
    #[must_use]
    pub fn turn(&self) -> usize {
        match self.status {
            GameStatus::InProgress(turn) | GameStatus::Won(turn) => turn,
            GameStatus::Lost => self.rounds.len(),
        }
    }

    /// Completed turns in play order
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }
}
