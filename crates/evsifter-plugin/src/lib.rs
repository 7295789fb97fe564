//! evsifter plugin library entry.
//!
//! This crate holds the sifter units (admission policies over single events),
//! the strict config that selects one of them, and the stdin/stdout loop that
//! runs it as a relay write-policy plugin. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod config;
pub mod sifters;
pub mod transport;
