//! Wall-clock source and forecast slot normalization

use chrono::{Datelike, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::models::ForecastSlot;

/// Weekday the analytics provider uses as index 0 of its weekly forecast.
///
/// `BestTime` numbers its `analysis` days with `day_int` 0 = Monday through 6 = Sunday.
pub const PROVIDER_WEEK_START: Weekday = Weekday::Mon;

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in a fixed timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Days since the provider's week start, in 0..7
#[must_use]
pub fn provider_weekday_index(weekday: Weekday) -> usize {
    let offset = 7 + weekday.num_days_from_monday() - PROVIDER_WEEK_START.num_days_from_monday();
    (offset % 7) as usize
}

impl ForecastSlot {
    /// Slot covering the given local time
    #[must_use]
    pub fn at(time: NaiveDateTime) -> Self {
        Self::new(provider_weekday_index(time.weekday()), time.hour() as usize)
    }
}
