//! Comparison and difference predicates.

use std::str::FromStr;

use crate::amount::Unit;
use crate::engine;
use crate::error::TempusError;
use crate::moment::Moment;

/// Endpoint handling for [`Moment::is_between`].
///
/// The four variants correspond to the two-character codes `()`, `[)`,
/// `(]`, and `[]`; the default is exclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusivity {
    /// `()` — both endpoints excluded.
    #[default]
    Exclusive,
    /// `[)` — start included, end excluded.
    IncludeFrom,
    /// `(]` — start excluded, end included.
    IncludeTo,
    /// `[]` — both endpoints included.
    Inclusive,
}

impl Inclusivity {
    fn endpoints(self) -> (bool, bool) {
        match self {
            Inclusivity::Exclusive => (false, false),
            Inclusivity::IncludeFrom => (true, false),
            Inclusivity::IncludeTo => (false, true),
            Inclusivity::Inclusive => (true, true),
        }
    }
}

impl FromStr for Inclusivity {
    type Err = TempusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "()" => Ok(Inclusivity::Exclusive),
            "[)" => Ok(Inclusivity::IncludeFrom),
            "(]" => Ok(Inclusivity::IncludeTo),
            "[]" => Ok(Inclusivity::Inclusive),
            _ => Err(TempusError::InvalidInclusivity {
                input: s.to_string(),
            }),
        }
    }
}

impl Moment {
    /// Returns this moment truncated to the start of the given unit, in its
    /// own offset. Week starts are ISO Mondays.
    pub fn start_of(&self, unit: Unit) -> Self {
        Self {
            inner: engine::start_of(self.inner, unit),
        }
    }

    /// Signed difference `self - other`, in milliseconds when `unit` is
    /// `None`, otherwise in the given unit truncated toward zero.
    ///
    /// Month and year differences count whole calendar months between the
    /// two instants; everything else divides the millisecond difference.
    ///
    /// `other` may be another moment or a native engine datetime.
    pub fn diff(&self, other: impl Into<Moment>, unit: Option<Unit>) -> i64 {
        let other = other.into();
        let millis = self.timestamp_millis() - other.timestamp_millis();
        match unit {
            None | Some(Unit::Milliseconds) => millis,
            Some(Unit::Seconds) => millis / 1_000,
            Some(Unit::Minutes) => millis / 60_000,
            Some(Unit::Hours) => millis / 3_600_000,
            Some(Unit::Days) => millis / 86_400_000,
            Some(Unit::Weeks) => millis / 604_800_000,
            Some(Unit::Months) => engine::month_diff(self.inner, other.inner),
            Some(Unit::Years) => engine::month_diff(self.inner, other.inner) / 12,
        }
    }

    /// Whether this moment is strictly before `other`, optionally at the
    /// given granularity (both sides truncated to the start of the unit).
    pub fn is_before(&self, other: impl Into<Moment>, granularity: Option<Unit>) -> bool {
        let other = other.into();
        match granularity {
            None => self.inner < other.inner,
            Some(unit) => self.start_of(unit).inner < other.start_of(unit).inner,
        }
    }

    /// Whether this moment is strictly after `other`, optionally at the
    /// given granularity.
    pub fn is_after(&self, other: impl Into<Moment>, granularity: Option<Unit>) -> bool {
        let other = other.into();
        match granularity {
            None => self.inner > other.inner,
            Some(unit) => self.start_of(unit).inner > other.start_of(unit).inner,
        }
    }

    /// Whether this moment lies between `from` and `to`, optionally at the
    /// given granularity, with endpoint handling per `inclusivity`.
    ///
    /// An inverted range (`from` after `to`) is never satisfied.
    pub fn is_between(
        &self,
        from: &Moment,
        to: &Moment,
        granularity: Option<Unit>,
        inclusivity: Inclusivity,
    ) -> bool {
        let (include_from, include_to) = inclusivity.endpoints();
        let lower = if include_from {
            !self.is_before(*from, granularity)
        } else {
            self.is_after(*from, granularity)
        };
        let upper = if include_to {
            !self.is_after(*to, granularity)
        } else {
            self.is_before(*to, granularity)
        };
        lower && upper
    }
}
