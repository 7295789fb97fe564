//! Time window relative to "now".

use std::fmt;
use std::time::Duration;

use time::OffsetDateTime;

/// Inclusive window `[now - max_past, now + max_future]`.
///
/// A zero duration leaves that side unbounded; there is no way to express
/// zero tolerance on a side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeTimeRange {
    max_past: Duration,
    max_future: Duration,
}

impl RelativeTimeRange {
    pub fn new(max_past: Duration, max_future: Duration) -> Self {
        Self { max_past, max_future }
    }

    /// Unbounded on both sides.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_past(&self) -> Duration {
        self.max_past
    }

    pub fn max_future(&self) -> Duration {
        self.max_future
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_past.is_zero() && self.max_future.is_zero()
    }

    /// Whether `t` lies inside the window anchored at `now`.
    pub fn contains(&self, t: OffsetDateTime, now: OffsetDateTime) -> bool {
        self.contains_nanos(t.unix_timestamp_nanos(), now)
    }

    /// Same as [`contains`](Self::contains) for a unix timestamp in seconds.
    ///
    /// Works for any `u64`, including instants past the range `OffsetDateTime`
    /// can represent.
    pub fn contains_unix(&self, secs: u64, now: OffsetDateTime) -> bool {
        self.contains_nanos(i128::from(secs) * NANOS_PER_SEC, now)
    }

    // i128 nanoseconds hold u64 seconds and u64 durations without overflow.
    fn contains_nanos(&self, t: i128, now: OffsetDateTime) -> bool {
        let now = now.unix_timestamp_nanos();
        let ok_past = self.max_past.is_zero() || t >= now - duration_nanos(self.max_past);
        let ok_future = self.max_future.is_zero() || t <= now + duration_nanos(self.max_future);

        ok_past && ok_future
    }
}

const NANOS_PER_SEC: i128 = 1_000_000_000;

fn duration_nanos(d: Duration) -> i128 {
    i128::from(d.as_secs()) * NANOS_PER_SEC + i128::from(d.subsec_nanos())
}

impl fmt::Display for RelativeTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if self.max_past.is_zero() {
            f.write_str("-∞")?;
        } else {
            write!(f, "{} ago", HumanDuration(self.max_past))?;
        }
        f.write_str(", ")?;
        if self.max_future.is_zero() {
            f.write_str("+∞")?;
        } else {
            write!(f, "{} after", HumanDuration(self.max_future))?;
        }
        f.write_str("]")
    }
}

/// Compact duration rendering: `1h30m`, `45s`, `2h`, `1m0.5s`, `500ms`.
struct HumanDuration(Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        if d.is_zero() {
            return f.write_str("0s");
        }
        if d.as_secs() == 0 {
            return if d.subsec_nanos() % 1_000_000 == 0 {
                write!(f, "{}ms", d.subsec_millis())
            } else {
                write!(f, "{}µs", d.subsec_micros())
            };
        }

        let total = d.as_secs();
        let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
        let nanos = d.subsec_nanos();

        if h > 0 {
            write!(f, "{h}h")?;
        }
        if m > 0 || (h > 0 && (s > 0 || nanos > 0)) {
            write!(f, "{m}m")?;
        }
        if nanos > 0 {
            let frac = format!("{:09}", nanos);
            write!(f, "{s}.{}s", frac.trim_end_matches('0'))?;
        } else if s > 0 {
            write!(f, "{s}s")?;
        }
        Ok(())
    }
}
