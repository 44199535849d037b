//! Sources of truth for the game's response
//!
//! The secret-based oracle computes responses directly; the prompt oracle asks
//! a human who is playing the real game elsewhere.

use super::GameError;
use crate::core::{Pattern, PatternError, Word};
use std::io::{self, BufRead, Write};

/// Typed in place of a response when the game refuses the suggested word
pub const UNKNOWN_WORD_SENTINEL: &str = "xxxxx";

/// What the oracle said about a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Response(Pattern),
    /// The external game does not accept the guessed word
    UnknownWord,
}

/// Provides the response to each guess
pub trait Oracle {
    /// Respond to a guess
    ///
    /// # Errors
    /// Returns `GameError` if the response cannot be obtained at all.
    fn respond(&mut self, guess: &Word) -> Result<Feedback, GameError>;

    /// The solution, when the oracle knows it
    fn secret(&self) -> Option<&Word> {
        None
    }
}

/// Oracle that knows the solution
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }
}

impl Oracle for SecretOracle {
    fn respond(&mut self, guess: &Word) -> Result<Feedback, GameError> {
        Ok(Feedback::Response(Pattern::calculate(guess, &self.secret)))
    }

    fn secret(&self) -> Option<&Word> {
        Some(&self.secret)
    }
}

/// Oracle that asks a human for the response
///
/// Accepts five digits (0 = absent, 1 = present, 2 = correct) or
/// `xxxxx` when the game rejected the word. Anything else is re-requested.
pub struct PromptOracle<R, W> {
    input: R,
    output: W,
}

impl PromptOracle<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the oracle, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Oracle for PromptOracle<R, W> {
    fn respond(&mut self, guess: &Word) -> Result<Feedback, GameError> {
        loop {
            write!(self.output, "{} >", guess.text().to_uppercase())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            let data = line.trim().to_lowercase();

            if data == UNKNOWN_WORD_SENTINEL {
                writeln!(self.output, "Gotcha, I am removing this word from my bank.")?;
                return Ok(Feedback::UnknownWord);
            }

            match Pattern::from_digits(&data) {
                Ok(pattern) => return Ok(Feedback::Response(pattern)),
                Err(PatternError::InvalidLength(_)) => {
                    writeln!(self.output, "err: invalid length")?;
                }
                // Any non-digit outranks an out-of-range digit
                Err(PatternError::InvalidSymbol(_))
                    if !data.chars().all(|c| c.is_ascii_digit()) =>
                {
                    writeln!(self.output, "err: not numeric")?;
                }
                Err(PatternError::InvalidSymbol(_)) => {
                    writeln!(self.output, "err: only 0-2 accepted")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn prompt(input: &str) -> PromptOracle<Cursor<Vec<u8>>, Vec<u8>> {
        PromptOracle::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn secret_oracle_computes_response() {
        let mut oracle = SecretOracle::new(word("ababa"));
        let feedback = oracle.respond(&word("aabbb")).unwrap();
        assert_eq!(
            feedback,
            Feedback::Response(Pattern::from_digits("21120").unwrap())
        );
        assert_eq!(oracle.secret().map(Word::text), Some("ababa"));
    }

    #[test]
    fn prompt_oracle_parses_digits() {
        let mut oracle = prompt("01202\n");
        let feedback = oracle.respond(&word("tares")).unwrap();
        assert_eq!(
            feedback,
            Feedback::Response(Pattern::from_digits("01202").unwrap())
        );
        assert!(oracle.secret().is_none());

        let output = String::from_utf8(oracle.into_output()).unwrap();
        assert_eq!(output, "TARES >");
    }

    #[test]
    fn prompt_oracle_sentinel() {
        let mut oracle = prompt("XXXXX\n");
        assert_eq!(
            oracle.respond(&word("tares")).unwrap(),
            Feedback::UnknownWord
        );
        let output = String::from_utf8(oracle.into_output()).unwrap();
        assert!(output.contains("removing this word"));
    }

    #[test]
    fn prompt_oracle_reprompts_on_bad_input() {
        let mut oracle = prompt("012\nabcde\n01203\n  22222  \n");
        assert_eq!(
            oracle.respond(&word("tares")).unwrap(),
            Feedback::Response(Pattern::PERFECT)
        );

        let output = String::from_utf8(oracle.into_output()).unwrap();
        assert!(output.contains("err: invalid length"));
        assert!(output.contains("err: not numeric"));
        assert!(output.contains("err: only 0-2 accepted"));
        assert_eq!(output.matches("TARES >").count(), 4);
    }

    #[test]
    fn prompt_oracle_eof_is_fatal() {
        let mut oracle = prompt("");
        assert!(matches!(
            oracle.respond(&word("tares")),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn prompt_oracle_letters_beat_bad_digits() {
        let mut oracle = prompt("0130a\n22222\n");
        assert_eq!(
            oracle.respond(&word("tares")).unwrap(),
            Feedback::Response(Pattern::PERFECT)
        );

        let output = String::from_utf8(oracle.into_output()).unwrap();
        assert!(output.contains("err: not numeric"));
        assert!(!output.contains("err: only 0-2 accepted"));
    }
}
