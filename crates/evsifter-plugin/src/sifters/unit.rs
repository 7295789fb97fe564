//! Sifter unit: a match predicate plus a declared intent.
//!
//! Every adapter in this module tree builds a predicate and hands it to
//! [`SifterUnit::new`] together with a [`Mode`] and its default messages, so
//! the (mode, match) -> verdict table below is the only place where accept
//! and reject are decided.

use std::borrow::Cow;

use evsifter_core::error::Result;
use evsifter_core::protocol::{Input, Output};
use serde::Deserialize;

/// Outcome of a predicate that managed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Matched,
    NotMatched,
}

impl From<bool> for MatchResult {
    fn from(b: bool) -> Self {
        if b {
            MatchResult::Matched
        } else {
            MatchResult::NotMatched
        }
    }
}

/// What the predicate's match set means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The predicate defines the allowed set.
    Allow,
    /// The predicate defines the forbidden set.
    Deny,
}

/// Rejection messages, one per mode.
///
/// `allow` is reported when an Allow unit does not match (the event is absent
/// from the allowed set); `deny` when a Deny unit matches (the event is
/// present in the forbidden set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectMessages {
    allow: Cow<'static, str>,
    deny: Cow<'static, str>,
}

impl RejectMessages {
    pub fn new(allow: impl Into<Cow<'static, str>>, deny: impl Into<Cow<'static, str>>) -> Self {
        Self { allow: allow.into(), deny: deny.into() }
    }

    /// Same message regardless of mode.
    pub fn uniform(msg: impl Into<Cow<'static, str>>) -> Self {
        let msg = msg.into();
        Self { allow: msg.clone(), deny: msg }
    }

    pub fn for_mode(&self, mode: Mode) -> &str {
        match mode {
            Mode::Allow => self.allow.as_ref(),
            Mode::Deny => self.deny.as_ref(),
        }
    }
}

/// Result of evaluating one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(String),
    /// Rejected, but the relay should report success to the client.
    ShadowReject(String),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    /// Rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(msg) | Verdict::ShadowReject(msg) => Some(msg.as_str()),
        }
    }

    /// Turn the verdict into the reply line for event `id`.
    pub fn into_output(self, id: impl Into<String>) -> Output {
        match self {
            Verdict::Accept => Output::accept(id),
            Verdict::Reject(msg) => Output::reject(id, msg),
            Verdict::ShadowReject(msg) => Output::shadow_reject(id, msg),
        }
    }
}

/// Anything that can judge a single input.
pub trait Sifter: Send + Sync {
    /// `Err` means the event could not be judged; it is never a rejection.
    fn evaluate(&self, input: &Input) -> Result<Verdict>;
}

/// Fallible match predicate over one input.
pub type MatchFn = Box<dyn Fn(&Input) -> Result<MatchResult> + Send + Sync>;

/// Predicate + mode + rejection strategy.
pub struct SifterUnit {
    match_input: MatchFn,
    mode: Mode,
    messages: RejectMessages,
    shadow: bool,
}

impl std::fmt::Debug for SifterUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SifterUnit")
            .field("mode", &self.mode)
            .field("messages", &self.messages)
            .field("shadow", &self.shadow)
            .finish_non_exhaustive()
    }
}

impl SifterUnit {
    pub fn new<F>(match_input: F, mode: Mode, messages: RejectMessages) -> Self
    where
        F: Fn(&Input) -> Result<MatchResult> + Send + Sync + 'static,
    {
        Self {
            match_input: Box::new(match_input),
            mode,
            messages,
            shadow: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Message this unit reports when it rejects.
    pub fn reject_msg(&self) -> &str {
        self.messages.for_mode(self.mode)
    }

    /// Replace the default messages with a single one.
    pub fn with_reject_msg(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.messages = RejectMessages::uniform(msg);
        self
    }

    /// Replace both per-mode messages.
    pub fn with_reject_messages(
        mut self,
        allow: impl Into<Cow<'static, str>>,
        deny: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.messages = RejectMessages::new(allow, deny);
        self
    }

    /// Report rejections as shadow rejections.
    pub fn shadow_reject(mut self) -> Self {
        self.shadow = true;
        self
    }

    fn decide(&self, matched: MatchResult) -> Verdict {
        match (self.mode, matched) {
            (Mode::Allow, MatchResult::Matched) | (Mode::Deny, MatchResult::NotMatched) => Verdict::Accept,
            (Mode::Allow, MatchResult::NotMatched) | (Mode::Deny, MatchResult::Matched) => {
                let msg = self.reject_msg().to_string();
                if self.shadow {
                    Verdict::ShadowReject(msg)
                } else {
                    Verdict::Reject(msg)
                }
            }
        }
    }
}

impl Sifter for SifterUnit {
    fn evaluate(&self, input: &Input) -> Result<Verdict> {
        let matched = (self.match_input)(input)?;
        let verdict = self.decide(matched);
        if let Some(reason) = verdict.reason() {
            tracing::debug!(id = %input.event.id, mode = ?self.mode, reason, "event rejected");
        }
        Ok(verdict)
    }
}
