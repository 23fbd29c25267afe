//! A small temporal protocol over the `time` crate.
//!
//! `time` has no open notion of "a value with fields and units", so this
//! module defines one: [`TemporalAccessor`] for read access and [`Temporal`]
//! for adjustment and arithmetic. Both are implemented for the `time` types,
//! for [`SystemTime`] and for [`crate::InternetTime`], which lets the Internet
//! Time fields and units work over all of them.

use crate::{Error, InternetTime, Parsed};
use std::time::SystemTime;
use time::OffsetDateTime;

mod chrono;
mod host;
mod offset_time;

pub use chrono::{ChronoField, ChronoUnit};
pub use offset_time::OffsetTime;

pub(crate) use host::{
    calendar_date, date_from_epoch_day, epoch_day, nanos_of_day, offset_id, system_time,
    system_time_nanos,
};

/// The concrete shape of a temporal value, for callers that can take a faster
/// or more precise path than the generic field protocol.
#[derive(Copy, Clone, Debug)]
pub enum TemporalView<'a> {
    Internet(&'a InternetTime),
    Instant(SystemTime),
    Parsed(&'a Parsed),
    Generic,
}

/// Read-only access to the fields of a date, time or date-time value.
pub trait TemporalAccessor {
    fn supports_field(&self, field: ChronoField) -> bool;

    /// Returns the value of the field, or [`Error::UnsupportedField`] when the
    /// value has no such field.
    fn get_value(&self, field: ChronoField) -> Result<i64, Error>;

    fn view(&self) -> TemporalView<'_> {
        TemporalView::Generic
    }

    /// The value as a fixed-offset date-time, when it identifies one instant.
    fn offset_date_time(&self) -> Option<OffsetDateTime> {
        None
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A temporal value that can be adjusted and used for arithmetic.
///
/// All operations return a new value of the same type.
pub trait Temporal: TemporalAccessor + Sized {
    fn supports_unit(&self, unit: ChronoUnit) -> bool;

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error>;

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error>;

    /// The number of whole units from `self` to `end`, truncated toward zero.
    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error>;
}
