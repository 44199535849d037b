//! Embedded word bank
//!
//! Frequency table compiled into the binary at build time.

// Include generated frequency table from build script
include!(concat!(env!("OUT_DIR"), "/frequencies.rs"));
