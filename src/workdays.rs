//! Weekday-skipping day arithmetic.
//!
//! Both operations advance one calendar day at a time and test the landing
//! day's ISO weekday, so calendar irregularities stay with the engine's
//! per-day addition. No holiday calendar is consulted.

use chrono::Datelike;
use tracing::trace;

use crate::amount::Unit;
use crate::engine;
use crate::error::TempusError;
use crate::moment::Moment;

/// ISO weekday number for Saturday.
const SATURDAY: u32 = 6;
/// ISO weekday number for Sunday.
const SUNDAY: u32 = 7;

impl Moment {
    /// Advances by `days` weekdays: Saturdays and Sundays are skipped
    /// entirely and never counted, even as the landing day.
    ///
    /// The result always has its time of day zeroed. `days <= 0` returns
    /// the same calendar day with time zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if the walk leaves the
    /// engine's representable range.
    pub fn add_weekdays(&self, days: i64) -> Result<Self, TempusError> {
        self.advance_counting(days, |weekday| weekday != SATURDAY && weekday != SUNDAY)
    }

    /// Advances by `days` working days: only Sundays are skipped, Saturday
    /// counts as a working day.
    ///
    /// Same zeroed-time postcondition as [`Moment::add_weekdays`].
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if the walk leaves the
    /// engine's representable range.
    pub fn add_working_days(&self, days: i64) -> Result<Self, TempusError> {
        self.advance_counting(days, |weekday| weekday != SUNDAY)
    }

    /// Day-at-a-time advance; a step decrements the counter only when
    /// `counts` accepts the landing day's ISO weekday.
    fn advance_counting(
        &self,
        days: i64,
        counts: impl Fn(u32) -> bool,
    ) -> Result<Self, TempusError> {
        let mut dt = engine::start_of(self.inner, Unit::Days);
        let mut remaining = days.max(0);
        while remaining > 0 {
            dt = engine::shift_days(dt, 1)?;
            let weekday = dt.weekday().number_from_monday();
            if counts(weekday) {
                remaining -= 1;
            } else {
                trace!(weekday, remaining, "skipping non-counted day");
            }
        }
        Ok(Self { inner: dt })
    }
}
