//! Duration amounts and unit designators.

use std::str::FromStr;

use chrono::Duration;

use crate::error::TempusError;
use crate::moment::Moment;

/// Unit designator for numeric amounts and for comparison granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Calendar days.
    Days,
    /// Seven-day weeks (ISO weeks start on Monday for truncation).
    Weeks,
    /// Calendar months (end-of-month clamping is the engine's policy).
    Months,
    /// Calendar years (twelve calendar months).
    Years,
}

/// An amount of time to add to or subtract from a [`Moment`].
///
/// Accepted shapes mirror the construction inputs of the reference API: an
/// engine duration object, a signed number with a unit designator, an
/// ISO-8601 duration string (via [`FromStr`]), or a from/to pair of moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// A fixed engine duration.
    Duration(Duration),
    /// A signed number of the given unit.
    Value(i64, Unit),
    /// Calendar components parsed from an ISO-8601 duration string.
    ///
    /// Months apply with the engine's calendar rollover; days and
    /// milliseconds apply as fixed spans.
    Calendar {
        /// Whole calendar months (years folded in at twelve per year).
        months: i64,
        /// Whole days (weeks folded in at seven per week).
        days: i64,
        /// Milliseconds (fractional seconds folded in).
        millis: i64,
    },
    /// The span between two moments; the applied duration is `to - from`
    /// in milliseconds.
    Span {
        /// Start of the span.
        from: Moment,
        /// End of the span.
        to: Moment,
    },
}

impl Amount {
    /// Returns the additive inverse of this amount.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::ArithmeticOverflow`] if a component cannot be
    /// negated without overflow.
    pub fn negated(&self) -> Result<Amount, TempusError> {
        let overflow = || TempusError::ArithmeticOverflow;
        match *self {
            Amount::Duration(d) => Duration::zero()
                .checked_sub(&d)
                .map(Amount::Duration)
                .ok_or_else(overflow),
            Amount::Value(n, unit) => {
                Ok(Amount::Value(n.checked_neg().ok_or_else(overflow)?, unit))
            }
            Amount::Calendar {
                months,
                days,
                millis,
            } => Ok(Amount::Calendar {
                months: months.checked_neg().ok_or_else(overflow)?,
                days: days.checked_neg().ok_or_else(overflow)?,
                millis: millis.checked_neg().ok_or_else(overflow)?,
            }),
            Amount::Span { from, to } => Ok(Amount::Span { from: to, to: from }),
        }
    }
}

impl From<Duration> for Amount {
    fn from(d: Duration) -> Self {
        Amount::Duration(d)
    }
}

impl From<(i64, Unit)> for Amount {
    fn from((n, unit): (i64, Unit)) -> Self {
        Amount::Value(n, unit)
    }
}

impl FromStr for Amount {
    type Err = TempusError;

    /// Parses an ISO-8601 duration such as `P1Y2M3DT4H5M6.5S`, `P4W`, or
    /// `-PT90S`.
    ///
    /// Date designators (`Y`, `M`, `W`, `D`) must precede the `T` separator
    /// and time designators (`H`, `M`, `S`) must follow it. A fraction is
    /// accepted on seconds only and is kept at millisecond resolution.
    ///
    /// # Errors
    ///
    /// Returns [`TempusError::InvalidDurationString`] for anything that does
    /// not carry at least one component in this shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TempusError::InvalidDurationString {
            input: s.to_string(),
        };

        let mut rest = s.trim();
        let mut sign: i64 = 1;
        if let Some(r) = rest.strip_prefix('-') {
            sign = -1;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('+') {
            rest = r;
        }
        let rest = rest
            .strip_prefix('P')
            .or_else(|| rest.strip_prefix('p'))
            .ok_or_else(invalid)?;

        let mut months: i64 = 0;
        let mut days: i64 = 0;
        let mut millis: i64 = 0;
        let mut in_time = false;
        let mut any_component = false;
        let mut any_time_component = false;
        let mut num = String::new();

        for c in rest.chars() {
            if c.is_ascii_digit() || c == '.' {
                num.push(c);
                continue;
            }
            let designator = c.to_ascii_uppercase();
            if designator == 'T' {
                if in_time || !num.is_empty() {
                    return Err(invalid());
                }
                in_time = true;
                continue;
            }
            // Every other designator consumes the pending number.
            let text = std::mem::take(&mut num);
            if text.is_empty() {
                return Err(invalid());
            }
            let whole = |t: &str| t.parse::<i64>().map_err(|_| invalid());
            let add = |acc: i64, n: i64| acc.checked_add(n).ok_or_else(invalid);
            match (designator, in_time) {
                ('Y', false) => {
                    let n = whole(&text)?.checked_mul(12).ok_or_else(invalid)?;
                    months = add(months, n)?;
                }
                ('M', false) => months = add(months, whole(&text)?)?,
                ('W', false) => {
                    let n = whole(&text)?.checked_mul(7).ok_or_else(invalid)?;
                    days = add(days, n)?;
                }
                ('D', false) => days = add(days, whole(&text)?)?,
                ('H', true) => {
                    let n = whole(&text)?.checked_mul(3_600_000).ok_or_else(invalid)?;
                    millis = add(millis, n)?;
                }
                ('M', true) => {
                    let n = whole(&text)?.checked_mul(60_000).ok_or_else(invalid)?;
                    millis = add(millis, n)?;
                }
                ('S', true) => {
                    let (sec_text, frac_text) = match text.split_once('.') {
                        Some((sec, frac)) => (sec, Some(frac)),
                        None => (text.as_str(), None),
                    };
                    let n = whole(sec_text)?.checked_mul(1_000).ok_or_else(invalid)?;
                    millis = add(millis, n)?;
                    if let Some(frac) = frac_text {
                        millis = add(millis, parse_fraction_millis(frac).ok_or_else(invalid)?)?;
                    }
                }
                _ => return Err(invalid()),
            }
            any_component = true;
            any_time_component |= in_time;
        }

        if !num.is_empty() || !any_component || (in_time && !any_time_component) {
            return Err(invalid());
        }

        Ok(Amount::Calendar {
            months: months * sign,
            days: days * sign,
            millis: millis * sign,
        })
    }
}

/// Converts the fractional part of a seconds component to milliseconds,
/// truncating below millisecond resolution.
fn parse_fraction_millis(frac: &str) -> Option<i64> {
    if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut padded = String::from(frac);
    while padded.len() < 3 {
        padded.push('0');
    }
    padded[..3].parse::<i64>().ok()
}
