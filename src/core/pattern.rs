//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Per-position outcome of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Absent,
    Present,
    Correct,
}

impl Symbol {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji glyph shown to the player
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for response strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid length: expected 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(char),
}

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct, the unique winning pattern
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the winning pattern
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from its per-position symbols
    #[must_use]
    pub fn from_symbols(symbols: [Symbol; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode the per-position symbols
    #[must_use]
    pub fn symbols(self) -> [Symbol; WORD_LENGTH] {
        let mut result = [Symbol::Absent; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Symbol::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Calculate the game's response when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// For each position: an exact match is Correct. Otherwise, if the letter
    /// occurs in the solution, it is Present while the number of earlier
    /// occurrences of that letter in the guess is below the letter's *total*
    /// count in the solution; past that budget it is Absent.
    ///
    /// The budget is never reduced by Correct matches elsewhere in the word.
    /// This differs from the official rule, which spends greens first: for
    /// GEESE against THOSE the official answer is ⬛⬛⬛🟩🟩 but this returns
    /// ⬛🟨⬛🟩🟩. Every solver path (scoring and filtering) uses this one
    /// function, so the solver stays self-consistent either way.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Pattern, Symbol, Word};
    ///
    /// let guess = Word::new("aabbb").unwrap();
    /// let solution = Word::new("ababa").unwrap();
    /// let pattern = Pattern::calculate(&guess, &solution);
    ///
    /// use Symbol::{Absent, Correct, Present};
    /// assert_eq!(pattern.symbols(), [Correct, Present, Present, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess_chars = guess.chars();
        let solution_chars = solution.chars();
        let mut result = [Symbol::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess_chars[i];
            if letter == solution_chars[i] {
                *slot = Symbol::Correct;
            } else if solution.has_letter(letter) {
                let seen = guess_chars[..i].iter().filter(|&&c| c == letter).count();
                if seen < solution.count_of(letter) {
                    *slot = Symbol::Present;
                }
            }
        }

        Self::from_symbols(result)
    }

    /// Parse the digit encoding used at the prompt, e.g. "01202"
    ///
    /// # Errors
    /// Returns `PatternError` for a wrong length or a digit outside 0-2.
    pub fn from_digits(s: &str) -> Result<Self, PatternError> {
        Self::parse_with(s, |ch| match ch {
            '0' => Some(Symbol::Absent),
            '1' => Some(Symbol::Present),
            '2' => Some(Symbol::Correct),
            _ => None,
        })
    }

    fn parse_with(
        s: &str,
        symbol_of: impl Fn(char) -> Option<Symbol>,
    ) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = symbol_of(ch).ok_or(PatternError::InvalidSymbol(ch))?;
        }
        Ok(Self::from_symbols(symbols))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.glyph()).collect()
    }
}

/// Parses any of the accepted encodings:
/// - digits `0`/`1`/`2`
/// - letters `-`/`_`/`b`, `y`, `g` (case-insensitive)
/// - glyphs ⬛/⬜, 🟨, 🟩
impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, |ch| match ch.to_ascii_lowercase() {
            '0' | '-' | '_' | 'b' | '⬛' | '⬜' => Some(Symbol::Absent),
            '1' | 'y' | '🟨' => Some(Symbol::Present),
            '2' | 'g' | '🟩' => Some(Symbol::Correct),
            _ => None,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
