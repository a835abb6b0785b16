//! Injectable time source.
//!
//! # Responsibility
//! - Decouple "what time is it" from the wall clock so the today filter
//!   can be exercised deterministically.
//!
//! # Invariants
//! - Core reads time only through [`Clock::now`]; `Local::now()` appears
//!   nowhere outside [`SystemClock`].

use chrono::{DateTime, Local, TimeDelta};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock implementation used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a controlled instant.
///
/// Clones share the same instant, so a test can hand one clone to the
/// tracker and keep another to move time forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Rc<Cell<DateTime<Local>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            instant: Rc::new(Cell::new(now)),
        }
    }

    /// Re-pins the clock to `now` for this clock and all its clones.
    pub fn set(&self, now: DateTime<Local>) {
        self.instant.set(now);
    }

    /// Moves the pinned instant forward (or backward) by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        self.instant.set(self.instant.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant.get()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{Local, TimeDelta, TimeZone};

    #[test]
    fn fixed_clock_clones_share_the_instant() {
        let start = Local.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        let handle = clock.clone();

        handle.advance(TimeDelta::hours(3));

        assert_eq!(clock.now(), start + TimeDelta::hours(3));
        assert_eq!(handle.now(), clock.now());
    }

    #[test]
    fn fixed_clock_set_overrides_the_instant() {
        let start = Local.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();
        let clock = FixedClock::new(start);

        clock.set(later);

        assert_eq!(clock.now(), later);
    }
}
