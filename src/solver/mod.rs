//! Wordle solving algorithms
//!
//! The candidate pool, entropy scoring, and the guess selector built on them.

mod engine;
pub mod entropy;
mod pool;

pub use engine::Solver;
pub use pool::{CandidatePool, EmptyPool};
