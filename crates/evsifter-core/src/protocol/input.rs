//! Inbound plugin line.

use serde::Deserialize;

use crate::error::{Result, SiftError};
use crate::event::Event;

/// Why the relay is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Freshly received event.
    New,
    /// Replay of a stored event at plugin startup.
    Lookback,
}

/// Where the event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SourceType {
    IP4,
    IP6,
    Import,
    Stream,
    Sync,
}

/// One inbound request from the relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Request type (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub event: Event,
    /// Unix seconds at which the relay received the event.
    pub received_at: u64,
    pub source_type: SourceType,
    /// IP address for IP4/IP6 sources, upstream URL for Stream/Sync.
    #[serde(default)]
    pub source_info: String,
}

impl Input {
    /// Wrap an event as a freshly received one. Mostly useful for tests and
    /// for hosts that do not speak the line protocol.
    pub fn new_event(event: Event) -> Self {
        Self {
            input_type: InputType::New,
            received_at: event.created_at,
            event,
            source_type: SourceType::IP4,
            source_info: String::new(),
        }
    }
}

/// Decode one input line.
pub fn decode_input(line: &str) -> Result<Input> {
    serde_json::from_str(line).map_err(|e| SiftError::BadRequest(format!("invalid input json: {e}")))
}

/// Best-effort read of `event.id` from a line that failed [`decode_input`].
///
/// Lets the host still answer the relay for an event whose other fields are
/// malformed. `None` if the line is not JSON or carries no string id.
pub fn peek_event_id(line: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct IdOnly {
        id: String,
    }
    #[derive(Deserialize)]
    struct Envelope {
        event: IdOnly,
    }

    serde_json::from_str::<Envelope>(line).ok().map(|e| e.event.id)
}
