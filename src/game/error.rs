//! Fatal game errors

use std::io;
use thiserror::Error;

/// Conditions that abort a game
///
/// Bad user input is never one of these; prompts re-ask instead.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("ruled out all possibilities somehow (secret = {})", .secret.as_deref().unwrap_or("unknown"))]
    EmptyPool { secret: Option<String> },
    #[error("the opening guess '{0}' was rejected; it must always be a valid word")]
    UnknownOpeningGuess(String),
    #[error("'{0}' is not in the word bank")]
    UnknownSecret(String),
    #[error("input closed before the game finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}
