//! Injectable time source.
//!
//! All date math in the library runs against a [`Clock`] rather than the
//! wall clock directly, so production supplies [`SystemClock`] and tests
//! supply a [`FixedClock`] pinned to a known instant.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Source of "now" for the whole system.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date (midnight-floored).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to a date and time-of-day.
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        let dt = date
            .and_hms_opt(hour, minute, 0)
            .unwrap_or_else(|| date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
        Self(Utc.from_utc_datetime(&dt))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
        let clock = FixedClock::at(date, 14, 30);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().time().hour(), 14);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
