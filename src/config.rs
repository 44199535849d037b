//! Game and prior configuration
//!
//! Plain value types with defaults; the CLI overrides individual fields.

use crate::core::Word;

/// Maximum number of turns in a game
pub const MAX_TURNS: usize = 6;

/// Turn-1 guess; one of the top scorers of the `opening` command
pub const DEFAULT_OPENING: &str = "tares";

/// Settings for one game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Turn limit; the game is lost after this many non-winning turns
    pub max_turns: usize,
    /// Fixed first guess
    pub opening: Word,
    /// Seed for the tie-break RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Replace the opening guess
    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = opening;
        self
    }

    /// Fix the tie-break seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: MAX_TURNS,
            opening: Word::new(DEFAULT_OPENING).expect("DEFAULT_OPENING is a valid word"),
            seed: None,
        }
    }
}

/// Constants of the rank-to-weight sigmoid
///
/// weight(rank) = sigmoid((offset - rank) / scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorParams {
    pub offset: f64,
    pub scale: f64,
}

impl Default for PriorParams {
    fn default() -> Self {
        Self {
            offset: 4660.0,
            scale: 2500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_turns, 6);
        assert_eq!(config.opening.text(), "tares");
        assert!(config.seed.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::default()
            .with_opening(Word::new("crane").unwrap())
            .with_seed(7);
        assert_eq!(config.opening.text(), "crane");
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn default_prior_params() {
        let params = PriorParams::default();
        assert!((params.offset - 4660.0).abs() < f64::EPSILON);
        assert!((params.scale - 2500.0).abs() < f64::EPSILON);
    }
}
