//! The immutable temporal value type.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Month, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Unit};
use crate::engine;
use crate::error::TempusError;

/// Default engine pattern used by [`Moment::parse`] and [`fmt::Display`]:
/// calendar date, time of day, and UTC offset.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

/// One point in time with a fixed UTC offset for calendar-field projections.
///
/// A `Moment` is never mutated after construction: every modifying operation
/// takes an internal snapshot, derives a new consistent instant through the
/// engine, and returns it as a fresh value. Equality, ordering, and hashing
/// follow the underlying instant, so two moments at the same instant in
/// different offsets compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moment {
    pub(crate) inner: DateTime<FixedOffset>,
}

impl Moment {
    /// Returns the current instant in the local offset.
    pub fn now() -> Self {
        Self {
            inner: engine::now(),
        }
    }

    /// Parses `input` with the default pattern [`DEFAULT_FORMAT`].
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::InvalidDate`] if the input does not form a
    /// valid instant.
    pub fn parse(input: &str) -> Result<Self, TempusError> {
        Self::parse_with_format(input, DEFAULT_FORMAT)
    }

    /// Parses `input` with an explicit engine pattern.
    ///
    /// Pattern syntax is the engine's and is passed through unchanged.
    /// Patterns without an offset section are read as UTC; date-only
    /// patterns land on midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::InvalidDate`] if the input does not form a
    /// valid instant under the pattern.
    pub fn parse_with_format(input: &str, format: &str) -> Result<Self, TempusError> {
        Ok(Self {
            inner: engine::parse(input, format)?,
        })
    }

    /// Creates a moment from epoch milliseconds, in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::TimestampOutOfRange`] if `millis` is outside
    /// the engine's representable range.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, TempusError> {
        let dt = DateTime::from_timestamp_millis(millis)
            .ok_or(TempusError::TimestampOutOfRange { millis })?;
        Ok(Self {
            inner: dt.fixed_offset(),
        })
    }

    /// Returns the engine-native view of this moment.
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.inner
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Returns the month as the engine's semantic enum.
    pub fn month(&self) -> Month {
        Month::try_from(self.inner.month() as u8).expect("engine month is always 1..=12")
    }

    /// Returns the 0-indexed month id (0 = January .. 11 = December).
    pub fn month_id(&self) -> u32 {
        self.inner.month0()
    }

    /// Returns the day of the month (1..=31).
    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Returns the ISO weekday (1 = Monday .. 7 = Sunday).
    pub fn iso_weekday(&self) -> u32 {
        self.inner.weekday().number_from_monday()
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    /// Returns the minute of the hour (0..=59).
    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Returns the second of the minute (0..=59).
    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// Returns the millisecond of the second (0..=999).
    pub fn millisecond(&self) -> u32 {
        self.inner.timestamp_subsec_millis()
    }

    /// Returns the canonical representation: milliseconds since the epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.inner.timestamp_millis()
    }

    /// Returns the fixed UTC offset of the calendar-field projections.
    pub fn offset(&self) -> FixedOffset {
        *self.inner.offset()
    }

    /// Renders this moment with an engine pattern, passed through unchanged.
    pub fn format(&self, pattern: &str) -> String {
        self.inner.format(pattern).to_string()
    }

    /// Returns a new moment with the amount applied through the engine.
    ///
    /// Calendar months and years roll over with the engine's end-of-month
    /// clamping; fixed spans apply as exact durations.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if the result leaves the
    /// engine's representable range.
    pub fn add(&self, amount: impl Into<Amount>) -> Result<Self, TempusError> {
        self.apply(amount.into())
    }

    /// Returns a new moment with the negated amount applied.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if the amount cannot be
    /// negated or the result leaves the engine's representable range.
    pub fn subtract(&self, amount: impl Into<Amount>) -> Result<Self, TempusError> {
        self.apply(amount.into().negated()?)
    }

    fn apply(&self, amount: Amount) -> Result<Self, TempusError> {
        let dt = match amount {
            Amount::Duration(span) => engine::shift_duration(self.inner, span)?,
            Amount::Value(n, unit) => match unit {
                Unit::Years => {
                    let months = n.checked_mul(12).ok_or(TempusError::ArithmeticOverflow)?;
                    engine::shift_months(self.inner, months)?
                }
                Unit::Months => engine::shift_months(self.inner, n)?,
                Unit::Weeks => {
                    let days = n.checked_mul(7).ok_or(TempusError::ArithmeticOverflow)?;
                    engine::shift_days(self.inner, days)?
                }
                Unit::Days => engine::shift_days(self.inner, n)?,
                Unit::Hours => self.shift_fixed(n, 3_600_000)?,
                Unit::Minutes => self.shift_fixed(n, 60_000)?,
                Unit::Seconds => self.shift_fixed(n, 1_000)?,
                Unit::Milliseconds => self.shift_fixed(n, 1)?,
            },
            Amount::Calendar {
                months,
                days,
                millis,
            } => {
                let dt = engine::shift_months(self.inner, months)?;
                let dt = engine::shift_days(dt, days)?;
                engine::shift_duration(
                    dt,
                    chrono::Duration::try_milliseconds(millis)
                        .ok_or(TempusError::ArithmeticOverflow)?,
                )?
            }
            Amount::Span { from, to } => {
                let millis = to
                    .timestamp_millis()
                    .checked_sub(from.timestamp_millis())
                    .ok_or(TempusError::ArithmeticOverflow)?;
                engine::shift_duration(
                    self.inner,
                    chrono::Duration::try_milliseconds(millis)
                        .ok_or(TempusError::ArithmeticOverflow)?,
                )?
            }
        };
        Ok(Self { inner: dt })
    }

    fn shift_fixed(&self, n: i64, millis_per_unit: i64) -> Result<DateTime<FixedOffset>, TempusError> {
        let millis = n
            .checked_mul(millis_per_unit)
            .ok_or(TempusError::ArithmeticOverflow)?;
        engine::shift_duration(
            self.inner,
            chrono::Duration::try_milliseconds(millis).ok_or(TempusError::ArithmeticOverflow)?,
        )
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self { inner: dt }
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            inner: dt.fixed_offset(),
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format(DEFAULT_FORMAT))
    }
}
