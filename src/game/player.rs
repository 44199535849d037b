//! Who chooses the guesses
//!
//! The solver picks guesses itself; a human player types them in.

use super::GameError;
use crate::bank::Prior;
use crate::core::Word;
use crate::solver::entropy::calculate_entropy;
use crate::solver::{CandidatePool, Solver};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Chooses the guess for each turn
pub trait Guesser {
    /// Pick a guess for the 1-based `turn`, with its entropy under `pool`
    ///
    /// # Errors
    /// Returns `GameError` if no guess can be produced.
    fn guess(&mut self, turn: usize, pool: &CandidatePool) -> Result<(Word, f64), GameError>;
}

impl<R: Rng> Guesser for Solver<R> {
    fn guess(&mut self, turn: usize, pool: &CandidatePool) -> Result<(Word, f64), GameError> {
        self.select(turn, pool)
            .ok_or(GameError::EmptyPool { secret: None })
    }
}

/// A human typing guesses at a prompt
///
/// Guesses must be words from the bank; anything else is re-requested.
pub struct HumanGuesser<'a, R, W> {
    bank: &'a Prior,
    input: R,
    output: W,
}

impl<'a> HumanGuesser<'a, io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdio(bank: &'a Prior) -> Self {
        Self::new(bank, io::stdin().lock(), io::stdout())
    }
}

impl<'a, R: BufRead, W: Write> HumanGuesser<'a, R, W> {
    pub const fn new(bank: &'a Prior, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
        }
    }

    /// Consume the guesser, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Guesser for HumanGuesser<'_, R, W> {
    fn guess(&mut self, turn: usize, pool: &CandidatePool) -> Result<(Word, f64), GameError> {
        loop {
            write!(self.output, "Round {turn} > ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            let text = line.trim().to_lowercase();

            if let Some(word) = self.bank.find(&text) {
                let entropy = calculate_entropy(word, pool);
                return Ok((word.clone(), entropy));
            }
            writeln!(self.output, "Invalid word: {text}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn bank() -> Prior {
        Prior::from_weights(["aaaaa", "bbbbb", "ababa"].map(|w| (Word::new(w).unwrap(), 1.0)))
            .unwrap()
    }

    #[test]
    fn solver_guesser_on_empty_pool() {
        let prior = bank();
        let mut pool = CandidatePool::new(&prior);
        for w in prior.words() {
            pool.remove(w);
        }
        let mut solver = Solver::new(Word::new("aaaaa").unwrap(), StdRng::seed_from_u64(0));
        assert!(matches!(
            solver.guess(2, &pool),
            Err(GameError::EmptyPool { .. })
        ));
    }

    #[test]
    fn human_guesser_accepts_bank_word() {
        let prior = bank();
        let pool = CandidatePool::new(&prior);
        let mut human = HumanGuesser::new(&prior, Cursor::new(b"AAAAA\n".to_vec()), Vec::new());

        let (guess, entropy) = human.guess(1, &pool).unwrap();
        assert_eq!(guess.text(), "aaaaa");
        assert!(
            (entropy - calculate_entropy(&guess, &pool)).abs() < f64::EPSILON
        );

        let output = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(output, "Round 1 > ");
    }

    #[test]
    fn human_guesser_rejects_unknown_words() {
        let prior = bank();
        let pool = CandidatePool::new(&prior);
        let input = Cursor::new(b"zzzzz\nnope\nbbbbb\n".to_vec());
        let mut human = HumanGuesser::new(&prior, input, Vec::new());

        let (guess, _) = human.guess(3, &pool).unwrap();
        assert_eq!(guess.text(), "bbbbb");

        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("Invalid word: zzzzz"));
        assert!(output.contains("Invalid word: nope"));
        assert_eq!(output.matches("Round 3 > ").count(), 3);
    }

    #[test]
    fn human_guesser_eof_is_fatal() {
        let prior = bank();
        let pool = CandidatePool::new(&prior);
        let mut human = HumanGuesser::new(&prior, Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(human.guess(1, &pool), Err(GameError::InputClosed)));
    }
}
