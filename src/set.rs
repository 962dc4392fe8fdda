//! Overflow-checked and overflow-permitting field setters.
//!
//! The strict variants mirror host date APIs that reject out-of-range
//! fields; the `*_with_overflow` variants are the explicit opt-in for
//! rollover, useful for bulk date generation ("the 31st of every month").

use chrono::{Datelike, Month, Timelike};

use crate::engine;
use crate::error::{TempusError, TimeField};
use crate::moment::Moment;

impl Moment {
    /// Returns a new moment with the provided time-of-day fields replaced,
    /// rejecting any field outside its natural bound (hour 23, minute 59,
    /// second 59, millisecond 999). Omitted fields stay untouched.
    ///
    /// On success, delegates to [`Moment::set_time_with_overflow`].
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::TimeFieldOutOfRange`] naming the first field
    /// that violates its bound; nothing is applied in that case.
    pub fn set_time(
        &self,
        hour: u32,
        minute: Option<u32>,
        second: Option<u32>,
        millisecond: Option<u32>,
    ) -> Result<Self, TempusError> {
        check_bound(TimeField::Hour, Some(hour), 23)?;
        check_bound(TimeField::Minute, minute, 59)?;
        check_bound(TimeField::Second, second, 59)?;
        check_bound(TimeField::Millisecond, millisecond, 999)?;
        self.set_time_with_overflow(hour, minute, second, millisecond)
    }

    /// Returns a new moment with the provided time-of-day fields replaced,
    /// letting out-of-range values roll into the next unit (minute 74
    /// becomes one hour and fourteen minutes).
    ///
    /// Fields are applied hour, then minute, then second, then millisecond;
    /// each application re-derives a consistent instant before the next.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if a rollover leaves the
    /// engine's representable range.
    pub fn set_time_with_overflow(
        &self,
        hour: u32,
        minute: Option<u32>,
        second: Option<u32>,
        millisecond: Option<u32>,
    ) -> Result<Self, TempusError> {
        let mut dt = self.inner;
        dt = engine::shift_duration(
            dt,
            scaled_delta(hour, dt.hour(), 3_600_000)?,
        )?;
        if let Some(minute) = minute {
            dt = engine::shift_duration(dt, scaled_delta(minute, dt.minute(), 60_000)?)?;
        }
        if let Some(second) = second {
            dt = engine::shift_duration(dt, scaled_delta(second, dt.second(), 1_000)?)?;
        }
        if let Some(millisecond) = millisecond {
            dt = engine::shift_duration(
                dt,
                scaled_delta(millisecond, dt.timestamp_subsec_millis(), 1)?,
            )?;
        }
        Ok(Self { inner: dt })
    }

    /// Returns a new moment on the given calendar date, rejecting days that
    /// do not exist in the month. The time of day is untouched.
    ///
    /// The maximum valid day comes from the engine's own calendar (day 0 of
    /// the following month), so leap years are handled by the engine. On
    /// success, delegates to [`Moment::set_date_with_overflow`] with the
    /// 0-indexed month id.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::DayOutOfRange`] if `day` is 0 or exceeds the
    /// month's length; nothing is applied in that case.
    pub fn set_date(&self, year: i32, month: Month, day: u32) -> Result<Self, TempusError> {
        let month_number = month.number_from_month();
        let max_day = engine::days_in_month(year, month_number)?;
        if day < 1 || day > max_day {
            return Err(TempusError::DayOutOfRange {
                year,
                month: month_number,
                day,
                max_day,
            });
        }
        self.set_date_with_overflow(year, month_number - 1, day)
    }

    /// Returns a new moment with year, month, and day replaced, letting
    /// out-of-range values roll over: a `month_id` beyond 11 overflows into
    /// following years and a `day` beyond the month's length overflows into
    /// following months, per the engine's rollover rule.
    ///
    /// Fields are applied year, then month (0-indexed id), then day; each
    /// application re-derives a consistent instant before the next, so
    /// intermediate end-of-month clamping is exactly the engine's policy.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if a rollover leaves the
    /// engine's representable range.
    pub fn set_date_with_overflow(
        &self,
        year: i32,
        month_id: u32,
        day: u32,
    ) -> Result<Self, TempusError> {
        let mut dt = self.inner;
        let year_delta = i64::from(year) - i64::from(dt.year());
        dt = engine::shift_months(
            dt,
            year_delta
                .checked_mul(12)
                .ok_or(TempusError::ArithmeticOverflow)?,
        )?;
        dt = engine::shift_months(dt, i64::from(month_id) - i64::from(dt.month0()))?;
        dt = engine::shift_days(dt, i64::from(day) - i64::from(dt.day()))?;
        Ok(Self { inner: dt })
    }
}

/// Bound check for one provided strict-setter field.
fn check_bound(field: TimeField, value: Option<u32>, max: u32) -> Result<(), TempusError> {
    match value {
        Some(value) if value > max => Err(TempusError::TimeFieldOutOfRange { field, value, max }),
        _ => Ok(()),
    }
}

/// Fixed-unit delta between a target field value and the current one.
fn scaled_delta(
    target: u32,
    current: u32,
    millis_per_unit: i64,
) -> Result<chrono::Duration, TempusError> {
    let delta = (i64::from(target) - i64::from(current))
        .checked_mul(millis_per_unit)
        .ok_or(TempusError::ArithmeticOverflow)?;
    chrono::Duration::try_milliseconds(delta).ok_or(TempusError::ArithmeticOverflow)
}
