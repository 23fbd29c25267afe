use crate::temporal::{ChronoField, Temporal, TemporalAccessor, TemporalView};
use crate::unit::CENTIBEATS_PER_BEAT;
use crate::{
    Error, InternetTime, InternetTimeUnit, ValueRange, MILLIS_PER_DAY, MILLIS_PER_SEC,
    REFERENCE_OFFSET_MILLIS,
};
use core::fmt::Display;

/// Time-of-day fields measured in Internet Time units.
///
/// The fields need to know the UTC offset of a value, so purely local values
/// such as `time::PrimitiveDateTime` or `time::Time` are not supported. Use
/// them to read *.beats* from ordinary date-times:
///
/// ```
/// use inettime::InternetTimeField;
/// use time::macros::datetime;
///
/// let noon_utc = datetime!(2025-10-12 12:00 UTC);
/// assert_eq!(InternetTimeField::BeatOfDay.get_from(&noon_utc), Ok(541));
/// ```
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum InternetTimeField {
    /// The *.beat* of the day, 0 to 999.
    BeatOfDay,
    /// Centibeats since midnight at UTC+1, 0 to 99,999.
    CentibeatOfDay,
    /// Centibeats since the start of the current beat, 0 to 99.
    CentibeatOfBeat,
}

/// The unit that bounds the range of an [`InternetTimeField`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum RangeUnit {
    Beats,
    Days,
}

impl InternetTimeField {
    pub const ALL: [InternetTimeField; 3] = [
        InternetTimeField::BeatOfDay,
        InternetTimeField::CentibeatOfDay,
        InternetTimeField::CentibeatOfBeat,
    ];

    pub const fn range(self) -> ValueRange {
        match self {
            InternetTimeField::BeatOfDay => ValueRange::new(0, 999),
            InternetTimeField::CentibeatOfDay => ValueRange::new(0, 99_999),
            InternetTimeField::CentibeatOfBeat => ValueRange::new(0, CENTIBEATS_PER_BEAT - 1),
        }
    }

    pub const fn base_unit(self) -> InternetTimeUnit {
        match self {
            InternetTimeField::BeatOfDay => InternetTimeUnit::Beats,
            _ => InternetTimeUnit::Centibeats,
        }
    }

    pub const fn range_unit(self) -> RangeUnit {
        match self {
            InternetTimeField::CentibeatOfBeat => RangeUnit::Beats,
            _ => RangeUnit::Days,
        }
    }

    pub fn is_date_based(self) -> bool {
        self.base_unit().is_date_based()
    }

    pub fn is_time_based(self) -> bool {
        self.base_unit().is_time_based()
    }

    pub fn name(self) -> &'static str {
        match self {
            InternetTimeField::BeatOfDay => "BeatOfDay",
            InternetTimeField::CentibeatOfDay => "CentibeatOfDay",
            InternetTimeField::CentibeatOfBeat => "CentibeatOfBeat",
        }
    }

    /// Returns true for `InternetTime` and `SystemTime` values, and for any
    /// other value that exposes both its millisecond-of-day and its offset.
    pub fn is_supported_by<T: TemporalAccessor + ?Sized>(self, temporal: &T) -> bool {
        match temporal.view() {
            TemporalView::Internet(_) | TemporalView::Instant(_) => true,
            _ => {
                temporal.supports_field(ChronoField::MilliOfDay)
                    && temporal.supports_field(ChronoField::OffsetSeconds)
            }
        }
    }

    fn check_supported<T: TemporalAccessor + ?Sized>(self, temporal: &T) -> Result<(), Error> {
        if self.is_supported_by(temporal) {
            Ok(())
        } else {
            Err(Error::unsupported(self, temporal.type_name()))
        }
    }

    /// The range never varies, but the value must still be supported.
    pub fn range_refined_by<T: TemporalAccessor + ?Sized>(
        self,
        temporal: &T,
    ) -> Result<ValueRange, Error> {
        self.check_supported(temporal)?;
        Ok(self.range())
    }

    pub(crate) fn native_value(self, time: &InternetTime) -> i64 {
        match self {
            InternetTimeField::BeatOfDay => i64::from(time.beat()),
            InternetTimeField::CentibeatOfDay => i64::from(time.centibeat_of_day()),
            InternetTimeField::CentibeatOfBeat => i64::from(time.centibeat_of_beat()),
        }
    }

    /// Reads the field from any supported value, re-expressing its time of day
    /// at the reference offset first.
    pub fn get_from<T: TemporalAccessor + ?Sized>(self, temporal: &T) -> Result<i64, Error> {
        if let TemporalView::Internet(time) = temporal.view() {
            return Ok(self.native_value(time));
        }
        self.check_supported(temporal)?;

        let millis = to_normalized_milli_of_day(
            temporal.get_value(ChronoField::MilliOfDay)?,
            temporal.get_value(ChronoField::OffsetSeconds)?,
        )?;

        let value = self.base_unit().from_millis(millis);
        match self {
            InternetTimeField::CentibeatOfBeat => Ok(value % CENTIBEATS_PER_BEAT),
            _ => Ok(value),
        }
    }

    /// Returns a copy of `temporal` with this field set to `value`, keeping
    /// the value's own offset.
    ///
    /// The range is checked before anything else, so an out-of-range value is
    /// reported as [`Error::OutOfRange`] even for unsupported types.
    pub fn adjust_into<T: Temporal>(self, temporal: T, value: i64) -> Result<T, Error> {
        let value = self.range().check(value, self)?;
        self.check_supported(&temporal)?;

        let value = match self {
            InternetTimeField::CentibeatOfBeat => {
                let centibeats = InternetTimeField::CentibeatOfDay.get_from(&temporal)?;
                centibeats - centibeats % CENTIBEATS_PER_BEAT + value
            }
            _ => value,
        };

        let millis = to_offset_milli_of_day(
            self.base_unit().to_millis(value)?,
            temporal.get_value(ChronoField::OffsetSeconds)?,
        )?;
        temporal.with_value(ChronoField::MilliOfDay, millis)
    }

    /// Rounds a millisecond-of-day down to the start of the field's unit.
    pub(crate) fn truncate(self, milli_of_day: i64) -> Result<i64, Error> {
        let unit = self.base_unit();
        unit.to_millis(unit.from_millis(milli_of_day))
    }
}

impl Display for InternetTimeField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps any millisecond count into `[0, MILLIS_PER_DAY)`, however many days
/// it lies outside that range.
pub(crate) fn wrap_milli_of_day(millis: i64) -> i64 {
    millis.rem_euclid(MILLIS_PER_DAY)
}

fn offset_millis(offset_seconds: i64) -> Result<i64, Error> {
    offset_seconds
        .checked_mul(MILLIS_PER_SEC)
        .ok_or(Error::Overflow)
}

/// Re-expresses a millisecond-of-day observed at `offset_seconds` at the
/// reference offset.
pub(crate) fn to_normalized_milli_of_day(
    milli_of_day: i64,
    offset_seconds: i64,
) -> Result<i64, Error> {
    let millis = milli_of_day
        .checked_sub(offset_millis(offset_seconds)?)
        .and_then(|millis| millis.checked_add(REFERENCE_OFFSET_MILLIS))
        .ok_or(Error::Overflow)?;
    Ok(wrap_milli_of_day(millis))
}

/// The inverse of [`to_normalized_milli_of_day`].
pub(crate) fn to_offset_milli_of_day(
    normalized_milli_of_day: i64,
    offset_seconds: i64,
) -> Result<i64, Error> {
    let millis = normalized_milli_of_day
        .checked_sub(REFERENCE_OFFSET_MILLIS)
        .and_then(|millis| millis.checked_add(offset_millis(offset_seconds).ok()?))
        .ok_or(Error::Overflow)?;
    Ok(wrap_milli_of_day(millis))
}

/// A field defined outside this crate that knows how to operate on
/// [`InternetTime`] values itself.
pub trait ExternalField: Display + core::fmt::Debug + Send + Sync {
    fn is_supported_by(&self, time: &InternetTime) -> bool;

    fn range_refined_by(&self, time: &InternetTime) -> Result<ValueRange, Error>;

    fn get_from(&self, time: &InternetTime) -> Result<i64, Error>;

    fn adjust_into(&self, time: InternetTime, value: i64) -> Result<InternetTime, Error>;
}

/// Any field that `InternetTime` can be queried or adjusted with.
#[derive(Copy, Clone, Debug)]
pub enum Field<'a> {
    Internet(InternetTimeField),
    Chrono(ChronoField),
    External(&'a dyn ExternalField),
}

impl From<InternetTimeField> for Field<'_> {
    fn from(field: InternetTimeField) -> Self {
        Field::Internet(field)
    }
}

impl From<ChronoField> for Field<'_> {
    fn from(field: ChronoField) -> Self {
        Field::Chrono(field)
    }
}

impl<'a> From<&'a dyn ExternalField> for Field<'a> {
    fn from(field: &'a dyn ExternalField) -> Self {
        Field::External(field)
    }
}

impl Display for Field<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Field::Internet(field) => field.fmt(f),
            Field::Chrono(field) => field.fmt(f),
            Field::External(field) => field.fmt(f),
        }
    }
}
