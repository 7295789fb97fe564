//! Relay event as delivered to the write-policy plugin.
//!
//! Signature and id validity are established by the relay before the event
//! reaches us; nothing here re-checks them.

use serde::{Deserialize, Serialize};

/// A signed relay event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event id (hex).
    pub id: String,
    /// Author public key (hex).
    pub pubkey: String,
    /// Creation time, unix seconds.
    pub created_at: u64,
    /// Event kind.
    pub kind: u32,
    /// Tags; the first element of each tag is its name.
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// Values of all tags named `name` (the second element of each tag).
    pub fn tag_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags.iter().filter_map(move |t| match t.as_slice() {
            [n, v, ..] if n == name => Some(v.as_str()),
            _ => None,
        })
    }
}
