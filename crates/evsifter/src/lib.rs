//! Top-level facade crate for evsifter.
//!
//! Re-exports the core event/protocol types and the sifter library so users can depend on a single crate.

pub mod core {
    pub use evsifter_core::*;
}

pub mod plugin {
    pub use evsifter_plugin::*;
}
