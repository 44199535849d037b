//! Word bank and prior weights
//!
//! Provides the embedded frequency table, file loaders, and the rank-based
//! prior that seeds every candidate pool.

mod embedded;
pub mod loader;
mod prior;

pub use embedded::{FREQUENCIES, FREQUENCIES_COUNT};
pub use loader::{BankError, Frequencies};
pub use prior::{Prior, sigmoid};
