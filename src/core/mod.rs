//! Core domain types for Wordle
//!
//! Pure value types with no solver state: words and the response patterns
//! produced by comparing a guess with a solution.

mod pattern;
mod word;

pub use pattern::{Pattern, PatternError, Symbol};
pub use word::{WORD_LENGTH, Word, WordError};
