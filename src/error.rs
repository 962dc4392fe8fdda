//! Error types for the tempus crate.

use std::fmt;

/// Coarse classification of a [`TempusError`].
///
/// Every failure is either a value outside a stated numeric bound
/// ([`ErrorKind::Range`]) or an argument that cannot be interpreted at all
/// ([`ErrorKind::Type`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument whose shape or syntax is unrecognized.
    Type,
    /// A value that violates a numeric bound or leaves the engine's
    /// representable range.
    Range,
}

/// A time-of-day field named in a bound violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Hour of day (0..=23).
    Hour,
    /// Minute of hour (0..=59).
    Minute,
    /// Second of minute (0..=59).
    Second,
    /// Millisecond of second (0..=999).
    Millisecond,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
            TimeField::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations in the tempus crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TempusError {
    /// Returned when an input string cannot be turned into a valid instant.
    #[error("could not create a valid date from {input:?}")]
    InvalidDate {
        /// The input that failed to parse.
        input: String,
    },

    /// Returned when an epoch-millisecond value is outside the engine's
    /// representable range.
    #[error("timestamp {millis} is outside the representable range")]
    TimestampOutOfRange {
        /// The offending epoch-millisecond value.
        millis: i64,
    },

    /// Returned by the strict time setter when a provided field exceeds its
    /// natural bound.
    #[error("invalid {field}: {value} (must be 0..={max})")]
    TimeFieldOutOfRange {
        /// The field that violated its bound.
        field: TimeField,
        /// The value that was provided.
        value: u32,
        /// The maximum valid value for the field.
        max: u32,
    },

    /// Returned by the strict date setter when the day does not exist in the
    /// given month and year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    DayOutOfRange {
        /// The year the day was checked against.
        year: i32,
        /// The month (1..=12) the day was checked against.
        month: u32,
        /// The invalid day number that was provided.
        day: u32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },

    /// Returned when date arithmetic leaves the engine's representable range.
    #[error("date arithmetic overflowed the representable range")]
    ArithmeticOverflow,

    /// Returned when a string cannot be interpreted as an ISO-8601 duration.
    #[error("cannot interpret {input:?} as a duration")]
    InvalidDurationString {
        /// The input that failed to parse.
        input: String,
    },

    /// Returned when a string is not one of the four inclusivity codes
    /// `()`, `[)`, `(]`, `[]`.
    #[error("unknown inclusivity code {input:?} (expected one of \"()\", \"[)\", \"(]\", \"[]\")")]
    InvalidInclusivity {
        /// The input that failed to parse.
        input: String,
    },
}

impl TempusError {
    /// Classifies this error as a type error or a range error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TempusError::InvalidDate { .. }
            | TempusError::TimestampOutOfRange { .. }
            | TempusError::TimeFieldOutOfRange { .. }
            | TempusError::DayOutOfRange { .. }
            | TempusError::ArithmeticOverflow => ErrorKind::Range,
            TempusError::InvalidDurationString { .. }
            | TempusError::InvalidInclusivity { .. } => ErrorKind::Type,
        }
    }
}
