//! # tempus
//!
//! Immutable timezone-aware date-time value type built on chrono.
//!
//! A [`Moment`] wraps one already-valid engine instant and exposes derived
//! accessors, comparison predicates, and clone-and-mutate operations that
//! never alter the receiver. All calendar math (parsing, month lengths,
//! rollover, offsets) is delegated to chrono behind a narrow adapter; this
//! crate adds validation, overflow policy, and weekday-skipping arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["input (string / engine value / millis)"] -->|"Moment::parse / From"| B["Moment"]
//!     B -->|".add() / .subtract()"| B
//!     B -->|".set_time() / .set_date()"| B
//!     B -->|".add_weekdays() / .add_working_days()"| B
//!     B -->|".diff() / .is_between()"| C["i64 / bool"]
//!     B -->|".format()"| D["String"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tempus::{Inclusivity, Moment, Month, Unit};
//!
//! let moment = Moment::parse("2021-01-01 08:30:00+0000")?;
//!
//! // Strict setters reject out-of-range fields...
//! assert!(moment.set_time(24, None, None, None).is_err());
//! // ...while the overflow variants roll them over.
//! let rolled = moment.set_time_with_overflow(0, Some(74), None, None)?;
//! assert_eq!((rolled.hour(), rolled.minute()), (1, 14));
//!
//! // Weekday-skipping arithmetic; Friday + 1 weekday lands on Monday.
//! let monday = moment.add_weekdays(1)?;
//!
//! // Granular comparison with explicit endpoint handling.
//! let from = Moment::parse_with_format("2020-01-01", "%Y-%m-%d")?;
//! let to = Moment::parse_with_format("2020-01-31", "%Y-%m-%d")?;
//! from.is_between(&from, &to, Some(Unit::Days), Inclusivity::IncludeFrom);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `moment` | The immutable value type, construction, and accessors |
//! | `amount` | Duration amounts, units, ISO-8601 duration strings |
//! | `set` | Overflow-checked and overflow-permitting field setters |
//! | `compare` | Difference and ordering predicates, inclusivity codes |
//! | `workdays` | Weekday-skipping day arithmetic |
//! | `engine` | Narrow adapter over the chrono calendar engine |
//! | `error` | Error types |

mod amount;
mod compare;
mod engine;
mod error;
mod moment;
mod set;
mod workdays;

pub use amount::{Amount, Unit};
pub use compare::Inclusivity;
pub use error::{ErrorKind, TempusError, TimeField};
pub use moment::{Moment, DEFAULT_FORMAT};

/// Semantic month enum, re-exported from the engine.
pub use chrono::Month;
