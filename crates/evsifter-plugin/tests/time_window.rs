//! Relative time windows, the created_at sifter and the fake clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use time::macros::datetime;
use time::OffsetDateTime;

use evsifter_core::event::Event;
use evsifter_core::protocol::Input;
use evsifter_plugin::sifters::{created_at_range, Clock, FakeClock, Mode, RelativeTimeRange, Sifter, Verdict};

const HOUR: Duration = Duration::from_secs(3600);
const MINUTE: Duration = Duration::from_secs(60);

fn t0() -> OffsetDateTime {
    datetime!(2024-01-01 12:00 UTC)
}

fn input_at(t: OffsetDateTime) -> Input {
    input_at_secs(t.unix_timestamp() as u64)
}

fn input_at_secs(created_at: u64) -> Input {
    Input::new_event(Event {
        id: "ev".into(),
        pubkey: "a".into(),
        created_at,
        kind: 1,
        tags: vec![],
        content: String::new(),
        sig: String::new(),
    })
}

#[test]
fn unbounded_range_contains_everything() {
    let r = RelativeTimeRange::unbounded();
    for t in [OffsetDateTime::UNIX_EPOCH, t0(), datetime!(9999-12-31 23:59 UTC)] {
        assert!(r.contains(t, t0()));
    }
}

#[test]
fn past_bound_only() {
    let r = RelativeTimeRange::new(HOUR, Duration::ZERO);
    assert!(r.contains(t0() - 59 * MINUTE, t0()));
    assert!(!r.contains(t0() - 61 * MINUTE, t0()));
    assert!(r.contains(t0() + HOUR, t0()));
}

#[test]
fn bounds_are_inclusive() {
    let r = RelativeTimeRange::new(HOUR, 10 * MINUTE);
    assert!(r.contains(t0() - HOUR, t0()));
    assert!(r.contains(t0() + 10 * MINUTE, t0()));
    assert!(!r.contains(t0() + 10 * MINUTE + Duration::from_secs(1), t0()));
}

#[test]
fn huge_bounds_behave_as_unbounded() {
    let r = RelativeTimeRange::new(Duration::from_secs(u64::MAX), Duration::from_secs(u64::MAX));
    assert!(r.contains(OffsetDateTime::UNIX_EPOCH, t0()));
}

#[test]
fn display() {
    assert_eq!(RelativeTimeRange::unbounded().to_string(), "[-∞, +∞]");
    assert_eq!(RelativeTimeRange::new(HOUR, Duration::ZERO).to_string(), "[1h ago, +∞]");
    assert_eq!(
        RelativeTimeRange::new(HOUR + 30 * MINUTE, 5 * MINUTE).to_string(),
        "[1h30m ago, 5m after]"
    );
    assert_eq!(
        RelativeTimeRange::new(Duration::ZERO, Duration::from_millis(500)).to_string(),
        "[-∞, 500ms after]"
    );
    assert_eq!(
        RelativeTimeRange::new(HOUR + Duration::from_secs(1), Duration::from_secs(45)).to_string(),
        "[1h0m1s ago, 45s after]"
    );
}

#[test]
fn created_at_range_reads_clock_at_evaluation() {
    let clock = Arc::new(FakeClock::fixed(t0()));
    let unit = created_at_range(RelativeTimeRange::new(HOUR, Duration::ZERO), Mode::Allow, clock.clone());

    let ev = input_at(t0() - 30 * MINUTE);
    assert!(unit.evaluate(&ev).unwrap().is_accept());

    // Two hours later the same event has aged out of the window.
    clock.set_fake(t0() + 2 * HOUR);
    assert_eq!(
        unit.evaluate(&ev).unwrap(),
        Verdict::Reject("invalid: event timestamp is out of the range: [1h ago, +∞]".into())
    );
}

#[test]
fn created_at_range_deny_message() {
    let clock = Arc::new(FakeClock::fixed(t0()));
    let unit = created_at_range(RelativeTimeRange::new(Duration::ZERO, 5 * MINUTE), Mode::Deny, clock);
    assert_eq!(
        unit.evaluate(&input_at(t0())).unwrap(),
        Verdict::Reject("blocked: event timestamp must be out of the range: [-∞, 5m after]".into())
    );
    assert!(unit.evaluate(&input_at(t0() + HOUR)).unwrap().is_accept());
}

// Year 10000, past what `OffsetDateTime` can hold.
const FAR_FUTURE_SECS: u64 = 253_402_300_800;

#[test]
fn far_future_created_at_is_judged_against_the_window() {
    let clock: Arc<FakeClock> = Arc::new(FakeClock::fixed(t0()));

    let past_only = created_at_range(RelativeTimeRange::new(HOUR, Duration::ZERO), Mode::Allow, clock.clone());
    assert!(past_only.evaluate(&input_at_secs(FAR_FUTURE_SECS)).unwrap().is_accept());

    let future = RelativeTimeRange::new(Duration::ZERO, 5 * MINUTE);
    let deny = created_at_range(future, Mode::Deny, clock.clone());
    assert!(deny.evaluate(&input_at_secs(FAR_FUTURE_SECS)).unwrap().is_accept());

    let allow = created_at_range(future, Mode::Allow, clock);
    assert_eq!(
        allow.evaluate(&input_at_secs(FAR_FUTURE_SECS)).unwrap(),
        Verdict::Reject("invalid: event timestamp is out of the range: [-∞, 5m after]".into())
    );
}

#[test]
fn unix_seconds_cover_the_whole_u64_range() {
    assert!(RelativeTimeRange::unbounded().contains_unix(u64::MAX, t0()));
    assert!(RelativeTimeRange::new(HOUR, Duration::ZERO).contains_unix(u64::MAX, t0()));
    assert!(!RelativeTimeRange::new(HOUR, MINUTE).contains_unix(u64::MAX, t0()));
    assert!(!RelativeTimeRange::new(HOUR, MINUTE).contains_unix(0, t0()));

    let now = t0().unix_timestamp() as u64;
    assert!(RelativeTimeRange::new(HOUR, MINUTE).contains_unix(now + 60, t0()));
    assert!(!RelativeTimeRange::new(HOUR, MINUTE).contains_unix(now + 61, t0()));
}

#[test]
fn fake_clock_reset_returns_to_wall_clock() {
    let clock = FakeClock::new();
    assert!(!clock.is_fake());

    let t1 = datetime!(2000-01-01 00:00 UTC);
    clock.set_fake(t1);
    assert!(clock.is_fake());
    assert_eq!(clock.now(), t1);
    assert_eq!(clock.now(), t1);

    clock.reset();
    assert!(!clock.is_fake());
    let before = OffsetDateTime::now_utc();
    let now = clock.now();
    let after = OffsetDateTime::now_utc();
    assert!(before <= now && now <= after);
}
