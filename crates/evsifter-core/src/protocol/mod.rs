//! Write-policy plugin protocol (one JSON object per line).
//!
//! The relay writes one `Input` line per event to the plugin's stdin and
//! expects exactly one `Output` line back on stdout, carrying the same id.
//!
//! Decoders never panic: malformed lines are reported as `SiftError`
//! so the host can log and keep reading.

pub mod input;
pub mod output;

pub use input::{decode_input, peek_event_id, Input, InputType, SourceType};
pub use output::{encode_output, Action, Output};
