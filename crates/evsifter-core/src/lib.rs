//! evsifter core: transport-agnostic event model, filters, plugin protocol and errors.
//!
//! This crate defines the relay event, the structured filter matcher, and the
//! line-level plugin contracts shared by the sifter library and the plugin
//! binary. It carries no runtime dependencies so it can be reused by other
//! hosts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SiftError`/`Result` so a relay never
//! loses its write-policy plugin on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod filter;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SiftError};
pub use event::Event;
pub use filter::{Filter, Filters};
