//! Narrow adapter over the chrono calendar engine.
//!
//! Everything timezone- or calendar-shaped goes through this module: parsing,
//! month lengths, duration shifts, unit truncation, and whole-month
//! differences. The rest of the crate composes these primitives and never
//! touches calendar math directly.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, Timelike,
};
use tracing::debug;

use crate::amount::Unit;
use crate::error::TempusError;

/// The engine's native instant type: one point in time with a fixed UTC
/// offset for calendar-field projections.
pub(crate) type EngineInstant = DateTime<FixedOffset>;

/// Returns the current instant in the local offset.
pub(crate) fn now() -> EngineInstant {
    Local::now().fixed_offset()
}

/// Parses `input` with the given engine pattern.
///
/// Tries offset-aware parsing first, then a naive date-time (assumed UTC),
/// then a bare date (midnight UTC), so patterns without an offset or time
/// section still produce a valid instant.
///
/// # Errors
///
/// Returns [`TempusError::InvalidDate`] if no form matches.
pub(crate) fn parse(input: &str, format: &str) -> Result<EngineInstant, TempusError> {
    if let Ok(dt) = DateTime::parse_from_str(input, format) {
        return Ok(dt);
    }
    debug!(input, format, "offset-aware parse failed, trying naive forms");
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, format) {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time of day");
        return Ok(naive.and_utc().fixed_offset());
    }
    Err(TempusError::InvalidDate {
        input: input.to_string(),
    })
}

/// Returns the number of days in `(year, month)` using the engine's own
/// calendar: day 0 of the following month is the last day of this one, so
/// leap years fall out of the engine rather than a table.
///
/// # Errors
///
/// Returns [`TempusError::ArithmeticOverflow`] if the year is outside the
/// engine's representable range.
pub(crate) fn days_in_month(year: i32, month: u32) -> Result<u32, TempusError> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or(TempusError::ArithmeticOverflow)?;
    Ok(last.day())
}

/// Shifts an instant by a signed number of calendar months, with the
/// engine's end-of-month clamping.
///
/// # Errors
///
/// Returns [`TempusError::ArithmeticOverflow`] if the result leaves the
/// engine's representable range.
pub(crate) fn shift_months(dt: EngineInstant, months: i64) -> Result<EngineInstant, TempusError> {
    let magnitude =
        u32::try_from(months.unsigned_abs()).map_err(|_| TempusError::ArithmeticOverflow)?;
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(magnitude))
    } else {
        dt.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(TempusError::ArithmeticOverflow)
}

/// Shifts an instant by a signed number of calendar days.
///
/// # Errors
///
/// Returns [`TempusError::ArithmeticOverflow`] if the result leaves the
/// engine's representable range.
pub(crate) fn shift_days(dt: EngineInstant, days: i64) -> Result<EngineInstant, TempusError> {
    let span = Duration::try_days(days).ok_or(TempusError::ArithmeticOverflow)?;
    shift_duration(dt, span)
}

/// Shifts an instant by a fixed duration.
///
/// # Errors
///
/// Returns [`TempusError::ArithmeticOverflow`] if the result leaves the
/// engine's representable range.
pub(crate) fn shift_duration(dt: EngineInstant, span: Duration) -> Result<EngineInstant, TempusError> {
    dt.checked_add_signed(span)
        .ok_or(TempusError::ArithmeticOverflow)
}

/// Truncates an instant to the start of the given unit, in the instant's own
/// offset. Week starts are ISO Mondays.
pub(crate) fn start_of(dt: EngineInstant, unit: Unit) -> EngineInstant {
    match unit {
        Unit::Milliseconds => dt
            .with_nanosecond(dt.nanosecond() / 1_000_000 * 1_000_000)
            .expect("truncated nanoseconds are always valid"),
        Unit::Seconds => dt
            .with_nanosecond(0)
            .expect("zero nanoseconds is always valid"),
        Unit::Minutes => dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .expect("zero seconds is always valid"),
        Unit::Hours => dt
            .with_minute(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .expect("zero minutes is always valid"),
        Unit::Days => midnight(dt),
        Unit::Weeks => {
            let day_start = midnight(dt);
            let back = i64::from(day_start.weekday().num_days_from_monday());
            day_start
                .checked_sub_signed(Duration::try_days(back).expect("0..=6 days is representable"))
                .expect("week start stays within the engine range")
        }
        Unit::Months => midnight(dt)
            .with_day(1)
            .expect("day 1 exists in every month"),
        Unit::Years => midnight(dt)
            .with_day(1)
            .and_then(|d| d.with_month(1))
            .expect("January 1 exists in every year"),
    }
}

/// Whole calendar months in `a - b`, truncated toward zero.
///
/// Starts from the raw year/month field difference and anchors from `a`:
/// shifting `a` by that difference brackets `b` within one month, and the
/// partial-month remainder drops out in the direction of zero. Anchoring
/// from the first argument makes clamped month-ends behave like the
/// reference engine (Feb 29 minus Jan 31 is zero whole months).
pub(crate) fn month_diff(a: EngineInstant, b: EngineInstant) -> i64 {
    let whole = (i64::from(b.year()) - i64::from(a.year())) * 12
        + (i64::from(b.month0()) - i64::from(a.month0()));
    let adjust = match shift_months(a, whole) {
        Ok(anchor) if b > anchor => i64::from(whole < 0),
        Ok(anchor) if b < anchor => -i64::from(whole > 0),
        _ => 0,
    };
    -(whole + adjust)
}

fn midnight(dt: EngineInstant) -> EngineInstant {
    dt.with_hour(0)
        .and_then(|d| d.with_minute(0))
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .expect("midnight is always a valid fixed-offset time")
}
