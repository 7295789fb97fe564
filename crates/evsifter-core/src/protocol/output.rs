//! Outbound plugin line.

use serde::Serialize;

use crate::error::{Result, SiftError};

/// What the relay should do with the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Accept,
    Reject,
    /// Report success to the client but drop the event.
    ShadowReject,
}

/// One outbound reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Id of the event this reply is for.
    pub id: String,
    pub action: Action,
    /// Reason relayed to the client (empty on accept).
    pub msg: String,
}

impl Output {
    pub fn accept(id: impl Into<String>) -> Self {
        Self { id: id.into(), action: Action::Accept, msg: String::new() }
    }

    pub fn reject(id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { id: id.into(), action: Action::Reject, msg: msg.into() }
    }

    pub fn shadow_reject(id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self { id: id.into(), action: Action::ShadowReject, msg: msg.into() }
    }
}

/// Encode one output line (without the trailing newline).
pub fn encode_output(out: &Output) -> Result<String> {
    serde_json::to_string(out).map_err(|e| SiftError::Internal(format!("encode output failed: {e}")))
}
