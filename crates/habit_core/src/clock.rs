use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, Utc};
use parking_lot::RwLock;

use crate::date;

/// Source of "now" for the store. Every call reads the time afresh.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Wall clock; "today" is the local calendar day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        date::today_local()
    }
}

/// Manually driven clock for tests and replays. "Today" is the UTC day of the pinned instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Pins the clock to noon UTC of `day`.
    pub fn on(day: NaiveDate) -> Self {
        Self::new(noon(day))
    }

    pub fn set_today(&self, day: NaiveDate) {
        *self.now.write() = noon(day);
    }

    pub fn advance_days(&self, days: u64) {
        let mut now = self.now.write();
        if let Some(next) = now.checked_add_days(Days::new(days)) {
            *now = next;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }

    fn today(&self) -> NaiveDate {
        self.now.read().date_naive()
    }
}

fn noon(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let clock = FixedClock::on(start);
        assert_eq!(clock.today(), start);
        assert_eq!(clock.today(), start);

        clock.advance_days(2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        clock.set_today(start);
        assert_eq!(clock.now().date_naive(), start);
    }

    #[test]
    fn shared_clock_reads_through_arc() {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        let handle: Box<dyn Clock> = Box::new(Arc::clone(&clock));
        clock.advance_days(1);
        assert_eq!(
            handle.today(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }
}
