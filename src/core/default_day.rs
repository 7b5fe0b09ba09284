use chrono::{DateTime, Utc};

use crate::core::model::Day;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct RealClock;

impl Clock for RealClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for reproducible builds.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Index of the first day still running at `now`, or 0 if every day is over.
///
/// This only stands in for the client-side tab logic, so it is as stale as
/// the last site build.
pub fn default_day_index(days: &[Day], now: DateTime<Utc>) -> usize {
    days.iter()
        .position(|day| now < day.end_time())
        .unwrap_or(0)
}

pub struct DefaultDaySelector<C: Clock> {
    clock: C,
}

impl<C: Clock> DefaultDaySelector<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn select(&self, days: &[Day]) -> usize {
        let now = self.clock.now();
        let index = default_day_index(days, now);
        tracing::debug!(%now, index, days = days.len(), "selected default schedule day");
        index
    }
}
