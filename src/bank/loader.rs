//! Word bank loading utilities
//!
//! Reads `(word, frequency)` tables from the embedded bank, from JSON files of
//! the form `{"words": {"tares": 1.2e-6, ...}}`, or from text files with one
//! `word frequency` pair per line.

use super::embedded::FREQUENCIES;
use crate::core::{Word, WordError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A raw frequency table as read from storage
pub type Frequencies = Vec<(Word, f64)>;

/// Errors raised while reading a word bank
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read word bank {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON word bank")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: expected `word frequency`, got '{text}'")]
    MalformedLine { line: usize, text: String },
    #[error("invalid word '{word}'")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("invalid frequency {freq} for '{word}'")]
    InvalidFrequency { word: String, freq: f64 },
    #[error("word bank is empty")]
    Empty,
}

#[derive(Deserialize)]
struct FreqMap {
    words: BTreeMap<String, f64>,
}

/// Load the word bank compiled into the binary
///
/// # Examples
/// ```
/// use wordler::bank::loader::embedded;
///
/// let bank = embedded().unwrap();
/// assert!(bank.iter().any(|(word, _)| word.text() == "tares"));
/// ```
///
/// # Errors
/// Returns `BankError` if the embedded table contains an invalid entry.
pub fn embedded() -> Result<Frequencies, BankError> {
    FREQUENCIES
        .iter()
        .map(|&(word, freq)| validate(word, freq))
        .collect()
}

/// Load a word bank from a file
///
/// Files ending in `.json` are parsed as JSON; anything else as text.
///
/// # Errors
/// Returns `BankError` if the file cannot be read or contains an invalid entry.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Frequencies, BankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let freqs = if is_json {
        parse_json(&content)?
    } else {
        parse_text(&content)?
    };
    log::info!("loaded {} words from {}", freqs.len(), path.display());
    Ok(freqs)
}

/// Parse a JSON word bank
///
/// # Errors
/// Returns `BankError` on malformed JSON or an invalid entry.
pub fn parse_json(content: &str) -> Result<Frequencies, BankError> {
    let map: FreqMap = serde_json::from_str(content)?;
    map.words
        .iter()
        .map(|(word, &freq)| validate(word, freq))
        .collect()
}

/// Parse a text word bank
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
/// Returns `BankError` on a malformed line or an invalid entry.
pub fn parse_text(content: &str) -> Result<Frequencies, BankError> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            let malformed = || BankError::MalformedLine {
                line: line_no,
                text: line.to_string(),
            };
            let mut fields = line.split_whitespace();
            let word = fields.next().ok_or_else(malformed)?;
            let freq = fields
                .next()
                .and_then(|f| f.parse::<f64>().ok())
                .ok_or_else(malformed)?;
            if fields.next().is_some() {
                return Err(malformed());
            }
            validate(word, freq)
        })
        .collect()
}

fn validate(word: &str, freq: f64) -> Result<(Word, f64), BankError> {
    let parsed = Word::new(word).map_err(|source| BankError::InvalidWord {
        word: word.to_string(),
        source,
    })?;
    if !freq.is_finite() || freq < 0.0 {
        return Err(BankError::InvalidFrequency {
            word: word.to_string(),
            freq,
        });
    }
    Ok((parsed, freq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{FREQUENCIES, FREQUENCIES_COUNT};

    #[test]
    fn embedded_bank_loads() {
        let bank = embedded().unwrap();
        assert_eq!(bank.len(), FREQUENCIES_COUNT);
        assert_eq!(bank.len(), FREQUENCIES.len());
    }

    #[test]
    fn parse_json_words_map() {
        let bank = parse_json(r#"{"words": {"TARES": 2.5e-6, "ababa": 1}}"#).unwrap();
        assert_eq!(bank.len(), 2);
        // BTreeMap order: uppercase sorts before lowercase
        assert_eq!(bank[0].0.text(), "tares");
        assert!((bank[0].1 - 2.5e-6).abs() < 1e-12);
        assert_eq!(bank[1].0.text(), "ababa");
    }

    #[test]
    fn parse_json_rejects_bad_shape() {
        assert!(matches!(parse_json("{}"), Err(BankError::Json(_))));
        assert!(matches!(
            parse_json(r#"{"words": {"toolong": 1.0}}"#),
            Err(BankError::InvalidWord { .. })
        ));
    }

    #[test]
    fn parse_text_skips_comments_and_blanks() {
        let bank = parse_text("# header\n\ncrane 3.0\n  slate 1.5  \n").unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].0.text(), "crane");
        assert_eq!(bank[1].0.text(), "slate");
    }

    #[test]
    fn parse_text_malformed_line() {
        let err = parse_text("crane 3.0\nslate\n").unwrap_err();
        assert!(matches!(err, BankError::MalformedLine { line: 2, .. }));

        let err = parse_text("crane three").unwrap_err();
        assert!(matches!(err, BankError::MalformedLine { line: 1, .. }));

        let err = parse_text("crane 1.0 extra").unwrap_err();
        assert!(matches!(err, BankError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn parse_text_invalid_frequency() {
        assert!(matches!(
            parse_text("crane -1.0"),
            Err(BankError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            parse_text("crane NaN"),
            Err(BankError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn load_missing_file() {
        let err = load_from_file("/nonexistent/bank.json").unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }
}
