//! Time source for time-window sifters.
//!
//! Sifters that look at the current time take a `Clock` at construction
//! instead of reading the wall clock directly, so tests can pin "now".

use std::sync::{PoisonError, RwLock};

use time::OffsetDateTime;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Wall clock with an optional fixed override.
///
/// Unset, it behaves like [`SystemClock`]. After `set_fake(t)` every read
/// returns `t` until `reset()`.
#[derive(Debug, Default)]
pub struct FakeClock {
    fake_now: RwLock<Option<OffsetDateTime>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock already pinned at `t`.
    pub fn fixed(t: OffsetDateTime) -> Self {
        Self { fake_now: RwLock::new(Some(t)) }
    }

    pub fn set_fake(&self, t: OffsetDateTime) {
        *self.fake_now.write().unwrap_or_else(PoisonError::into_inner) = Some(t);
    }

    pub fn reset(&self) {
        *self.fake_now.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_fake(&self) -> bool {
        self.fake_now.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> OffsetDateTime {
        // A poisoned lock still holds a valid Option; keep serving it.
        let fake = *self.fake_now.read().unwrap_or_else(PoisonError::into_inner);
        fake.unwrap_or_else(OffsetDateTime::now_utc)
    }
}
