//! Playing a game
//!
//! The bounded turn loop and its two collaborators: a guesser that proposes
//! words and an oracle that answers with the response pattern.

mod error;
mod oracle;
mod player;
mod runner;
mod state;

pub use error::GameError;
pub use oracle::{Feedback, Oracle, PromptOracle, SecretOracle, UNKNOWN_WORD_SENTINEL};
pub use player::{Guesser, HumanGuesser};
pub use runner::{Game, GameRecord};
pub use state::{GameState, GameStatus, Round};
