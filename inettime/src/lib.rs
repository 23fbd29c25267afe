//! This crate provides *Swatch Internet Time*: a day divided into 1,000
//! *.beats*, each divided into 100 centibeats, measured from midnight at the
//! fixed offset UTC+1.
//!
//! The [`InternetTime`] value pairs a calendar date with a centibeat-of-day and
//! can be used anywhere a date-time from the [`time`] crate is expected. The
//! [`InternetTimeField`] and [`InternetTimeUnit`] types read, write and
//! measure *.beats* on `InternetTime` as well as on [`time::OffsetDateTime`],
//! [`std::time::SystemTime`] and other values that implement the
//! [`TemporalAccessor`] and [`Temporal`] traits.
//!
//! ```
//! use inettime::{beat_formatter, BeatStyle, InternetTime};
//! use time::{Date, Month};
//!
//! let date = Date::from_calendar_date(2025, Month::December, 31).unwrap();
//! let it = InternetTime::of(date, 234, 56, InternetTime::OFFSET).unwrap();
//!
//! assert_eq!(it.format(beat_formatter(BeatStyle::Full)).unwrap(), "@234.56");
//! assert_eq!(it.to_string(), "d31.12.2025 @234.56");
//! ```
//!
//! All types are immutable and may be shared freely between threads.

mod align;
mod clock;
mod error;
mod field;
mod format;
mod internet_time;
mod range;
mod sys;
mod temporal;
mod unit;

#[cfg(feature = "serde")]
mod serde_text;

pub use align::to_start_of;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::Error;
pub use field::{ExternalField, Field, InternetTimeField, RangeUnit};
pub use format::{
    beat_formatter, BeatStyle, FormatField, Formatter, FormatterBuilder, Parsed,
    LOCAL_DATE_BEATS, LOCAL_DATE_CENTIBEATS, OFFSET_DATE_BEATS, OFFSET_DATE_CENTIBEATS,
};
pub use internet_time::InternetTime;
pub use range::ValueRange;
pub use temporal::{ChronoField, ChronoUnit, OffsetTime, Temporal, TemporalAccessor, TemporalView};
pub use unit::{ExternalUnit, InternetTimeUnit, Unit};

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;
const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * MILLIS_PER_SEC;

/// Julian day number of 1970-01-01.
const UNIX_EPOCH_JULIAN_DAY: i64 = 2_440_588;

/// Offset of the Internet Time reference meridian (Biel, UTC+1) in seconds.
const REFERENCE_OFFSET_SECONDS: i64 = 3_600;
const REFERENCE_OFFSET_MILLIS: i64 = REFERENCE_OFFSET_SECONDS * MILLIS_PER_SEC;
