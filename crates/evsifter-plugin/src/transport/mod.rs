//! Transport layer (relay stdin/stdout line protocol).
//!
//! Decodes each input line once, hands it to the configured sifter and writes
//! exactly one reply line per decoded input.

pub mod stdio;
