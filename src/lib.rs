//! Wordler
//!
//! A Wordle solver that picks each guess by maximizing the expected
//! information of the response, weighting candidates by how common they are.
//!
//! # Quick Start
//!
//! ```rust
//! use wordler::bank::{Prior, loader};
//! use wordler::commands::autoplay;
//! use wordler::config::{GameConfig, PriorParams};
//! use wordler::core::Word;
//!
//! let freqs = loader::embedded().unwrap();
//! let prior = Prior::from_frequencies(freqs, PriorParams::default()).unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let record = autoplay(&prior, GameConfig::default().with_seed(7), &secret, false).unwrap();
//! assert!(record.won());
//! ```

// Core domain types
pub mod core;

// Word bank and prior weights
pub mod bank;

// Game and prior settings
pub mod config;

// Solving algorithms
pub mod solver;

// Turn loop, oracles and players
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
