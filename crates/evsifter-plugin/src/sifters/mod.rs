//! Sifter units (admission policies over single events).
//!
//! A unit pairs a match predicate with a [`Mode`]: in Allow mode the predicate
//! describes what may pass, in Deny mode what must not. Adapters here build
//! the predicate from domain data (filters, authors, kinds, timestamps) and
//! attach default rejection messages.

pub mod clock;
pub mod created_at;
pub mod matchers;
pub mod time_range;
pub mod unit;

pub use clock::{Clock, FakeClock, SystemClock};
pub use created_at::created_at_range;
pub use matchers::{author_list, author_matcher, kind_list, kind_matcher, kinds, matches_filters};
pub use time_range::RelativeTimeRange;
pub use unit::{MatchFn, MatchResult, Mode, RejectMessages, Sifter, SifterUnit, Verdict};
