//! Command implementations

pub mod analyze;
pub mod assist;
pub mod autoplay;
pub mod benchmark;
pub mod human;
pub mod opening;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::{assist_with, run_assist};
pub use autoplay::{autoplay, autoplay_observed, random_secret};
pub use benchmark::{BenchmarkResult, benchmark_secrets, run_benchmark};
pub use human::{play_human_with, run_human};
pub use opening::{OpeningRanking, rank_openings};
