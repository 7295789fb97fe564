//! Sifter on the event's `created_at` relative to the injected clock.

use std::sync::Arc;

use super::clock::Clock;
use super::time_range::RelativeTimeRange;
use super::unit::{MatchResult, Mode, RejectMessages, SifterUnit};

/// Matches events whose `created_at` falls inside `range`, read against
/// `clock` at evaluation time.
pub fn created_at_range(range: RelativeTimeRange, mode: Mode, clock: Arc<dyn Clock>) -> SifterUnit {
    let messages = RejectMessages::new(
        format!("invalid: event timestamp is out of the range: {range}"),
        format!("blocked: event timestamp must be out of the range: {range}"),
    );
    SifterUnit::new(
        move |input| Ok(MatchResult::from(range.contains_unix(input.event.created_at, clock.now()))),
        mode,
        messages,
    )
}
