//! Terminal output formatting
//!
//! Display utilities for game rounds, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_assist_intro, print_benchmark_result, print_human_intro,
    print_openings, print_outcome, print_round,
};
