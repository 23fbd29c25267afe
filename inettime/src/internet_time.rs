use crate::field::to_normalized_milli_of_day;
use crate::format::retro_formatter;
use crate::temporal::{
    calendar_date, date_from_epoch_day, epoch_day, nanos_of_day, system_time, system_time_nanos,
};
use crate::unit::CENTIBEATS_PER_BEAT;
use crate::*;
use core::fmt::Display;
use log::trace;
use std::time::SystemTime;
use time::macros::offset;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday};

/// A date and time of day in Swatch Internet Time.
///
/// The value is a calendar date paired with the centibeat of the day, both
/// observed at the fixed reference offset [`InternetTime::OFFSET`] (UTC+1).
/// The finest resolution is one centibeat, 864 milliseconds.
///
/// Values are ordered by date and then by centibeat. Every operation returns
/// a new value.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InternetTime {
    date: Date,
    centibeat_of_day: u32,
}

impl InternetTime {
    /// The reference offset of Internet Time, "Biel Mean Time".
    pub const OFFSET: UtcOffset = offset!(+1);

    const fn new(date: Date, centibeat_of_day: u32) -> Self {
        Self {
            date,
            centibeat_of_day,
        }
    }

    /// The current time from the system realtime clock.
    pub fn now() -> Result<Self, Error> {
        Self::now_with(&SystemClock)
    }

    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, Error> {
        let instant = clock.instant();
        trace!("sampled clock: {instant:?}");
        Self::from_instant(instant)
    }

    pub fn from_instant(instant: SystemTime) -> Result<Self, Error> {
        let millis = system_time_nanos(instant)?.div_euclid(i128::from(NANOS_PER_MILLI));
        Self::from_epoch_millis(i64::try_from(millis).map_err(|_| Error::Overflow)?)
    }

    /// The value containing the instant `millis` milliseconds after the unix
    /// epoch.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, Error> {
        let millis = millis
            .checked_add(REFERENCE_OFFSET_MILLIS)
            .ok_or(Error::Overflow)?;
        let date = date_from_epoch_day(millis.div_euclid(MILLIS_PER_DAY))?;
        let centibeats = InternetTimeUnit::Centibeats.from_millis(millis.rem_euclid(MILLIS_PER_DAY));
        Ok(Self::new(date, centibeats as u32))
    }

    /// The same instant as `date_time`, re-expressed at the reference offset.
    pub fn from_offset_date_time(date_time: OffsetDateTime) -> Result<Self, Error> {
        let local = date_time
            .checked_to_offset(Self::OFFSET)
            .ok_or(Error::Overflow)?;
        let millis = nanos_of_day(local.time()) / NANOS_PER_MILLI;
        let centibeats = InternetTimeUnit::Centibeats.from_millis(millis);
        Ok(Self::new(local.date(), centibeats as u32))
    }

    /// Derives a value from any temporal value that identifies an instant.
    ///
    /// Purely local dates and times carry no offset and return
    /// [`Error::Irreconcilable`].
    pub fn from_temporal<T: TemporalAccessor + ?Sized>(temporal: &T) -> Result<Self, Error> {
        match temporal.view() {
            TemporalView::Internet(time) => Ok(*time),
            TemporalView::Instant(instant) => Self::from_instant(instant),
            TemporalView::Parsed(parsed) => Self::from_parsed(parsed),
            TemporalView::Generic => {
                if let Some(date_time) = temporal.offset_date_time() {
                    Self::from_offset_date_time(date_time)
                } else if temporal.supports_field(ChronoField::InstantSeconds) {
                    let seconds = temporal.get_value(ChronoField::InstantSeconds)?;
                    let millis = if temporal.supports_field(ChronoField::NanoOfSecond) {
                        temporal.get_value(ChronoField::NanoOfSecond)? / NANOS_PER_MILLI
                    } else {
                        0
                    };
                    Self::from_epoch_millis(epoch_millis(seconds, millis)?)
                } else {
                    Err(Error::Irreconcilable(temporal.type_name()))
                }
            }
        }
    }

    /// The value for the beat and centibeat-of-beat on `date`, where `date` is
    /// the calendar date observed at `offset`.
    ///
    /// When midnight at the reference offset falls between the two, the
    /// stored date is one day before or after `date`:
    ///
    /// ```
    /// use inettime::InternetTime;
    /// use time::macros::{date, offset};
    ///
    /// let it = InternetTime::of(date!(2025 - 10 - 12), 999, 99, offset!(+12)).unwrap();
    /// assert_eq!(it.date(), date!(2025 - 10 - 11));
    /// ```
    pub fn of(
        date: Date,
        beat: u32,
        centibeat_of_beat: u32,
        offset: UtcOffset,
    ) -> Result<Self, Error> {
        let millis = beats_to_milli_of_day(beat, centibeat_of_beat)?;
        let date = normalize_date(date, i64::from(offset.whole_seconds()), millis)?;
        Ok(Self::new(
            date,
            beat * CENTIBEATS_PER_BEAT as u32 + centibeat_of_beat,
        ))
    }

    pub fn of_ymd(
        year: i32,
        month: Month,
        day: u8,
        beat: u32,
        centibeat_of_beat: u32,
        offset: UtcOffset,
    ) -> Result<Self, Error> {
        let date = calendar_date(i64::from(year), i64::from(month as u8), i64::from(day))?;
        Self::of(date, beat, centibeat_of_beat, offset)
    }

    /// Parses `text` with `formatter`.
    ///
    /// ```
    /// use inettime::{InternetTime, LOCAL_DATE_CENTIBEATS};
    ///
    /// let it = InternetTime::parse("2025-12-31 @234.56", &LOCAL_DATE_CENTIBEATS).unwrap();
    /// assert_eq!(it.centibeat_of_day(), 23_456);
    /// ```
    pub fn parse(text: &str, formatter: &Formatter) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::MissingArgument("text"));
        }
        Self::from_parsed(&formatter.parse(text)?)
    }

    /// Derives a value from parsed fields.
    ///
    /// The time of day comes from the first of these that is present: the
    /// centibeat of the day, the beat of the day with an optional centibeat
    /// of the beat, a millisecond or clock time of day at the parsed offset,
    /// or the instant seconds. The date defaults to 1970-01-01.
    pub fn from_parsed(parsed: &Parsed) -> Result<Self, Error> {
        let date = match (
            parsed.get(ChronoField::Year),
            parsed.get(ChronoField::MonthOfYear),
            parsed.get(ChronoField::DayOfMonth),
        ) {
            (Some(year), Some(month), Some(day)) => calendar_date(year, month, day)?,
            _ => match parsed.get(ChronoField::EpochDay) {
                Some(day) => date_from_epoch_day(day)?,
                None => OffsetDateTime::UNIX_EPOCH.date(),
            },
        };

        let offset = match parsed.get(ChronoField::OffsetSeconds) {
            Some(seconds) => ChronoField::OffsetSeconds
                .range()
                .check(seconds, ChronoField::OffsetSeconds)?,
            None => REFERENCE_OFFSET_SECONDS,
        };

        let centibeats = if let Some(centibeats) = parsed.get(InternetTimeField::CentibeatOfDay) {
            check(InternetTimeField::CentibeatOfDay, centibeats)?
        } else if let Some(beat) = parsed.get(InternetTimeField::BeatOfDay) {
            let beat = check(InternetTimeField::BeatOfDay, beat)?;
            let centibeat_of_beat = match parsed.get(InternetTimeField::CentibeatOfBeat) {
                Some(value) => check(InternetTimeField::CentibeatOfBeat, value)?,
                None => 0,
            };
            beat * CENTIBEATS_PER_BEAT + centibeat_of_beat
        } else if let Some(millis) = parsed_milli_of_day(parsed)? {
            InternetTimeUnit::Centibeats.from_millis(to_normalized_milli_of_day(millis, offset)?)
        } else if let Some(seconds) = parsed.get(ChronoField::InstantSeconds) {
            let millis = match (
                parsed.get(ChronoField::NanoOfSecond),
                parsed.get(ChronoField::MilliOfSecond),
            ) {
                (Some(nanos), _) => nanos / NANOS_PER_MILLI,
                (None, Some(millis)) => millis,
                (None, None) => 0,
            };
            return Self::from_epoch_millis(epoch_millis(seconds, millis)?);
        } else {
            return Err(Error::Irreconcilable("Parsed"));
        };

        let millis = InternetTimeUnit::Centibeats.to_millis(centibeats)?;
        let date = normalize_date(date, offset, millis)?;
        Ok(Self::new(date, centibeats as u32))
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn ordinal(&self) -> u16 {
        self.date.ordinal()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// The *.beat* of the day, 0 to 999.
    pub fn beat(&self) -> u32 {
        self.centibeat_of_day / CENTIBEATS_PER_BEAT as u32
    }

    pub fn centibeat_of_day(&self) -> u32 {
        self.centibeat_of_day
    }

    pub fn centibeat_of_beat(&self) -> u32 {
        self.centibeat_of_day % CENTIBEATS_PER_BEAT as u32
    }

    /// The calendar date at the reference offset.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Always [`InternetTimeUnit::Centibeats`].
    pub fn precision(&self) -> InternetTimeUnit {
        InternetTimeUnit::Centibeats
    }

    /// Always [`InternetTime::OFFSET`].
    pub fn offset(&self) -> UtcOffset {
        Self::OFFSET
    }

    fn milli_of_day(&self) -> i64 {
        i64::from(self.centibeat_of_day) * InternetTimeUnit::Centibeats.millis()
    }

    /// Milliseconds since the unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        epoch_day(self.date) * MILLIS_PER_DAY + self.milli_of_day() - REFERENCE_OFFSET_MILLIS
    }

    pub fn to_instant(&self) -> Result<SystemTime, Error> {
        system_time(i128::from(self.epoch_millis()) * i128::from(NANOS_PER_MILLI))
    }

    pub fn to_offset_date_time(&self) -> OffsetDateTime {
        self.to_primitive_date_time().assume_offset(Self::OFFSET)
    }

    /// The date and time of day at the reference offset, without the offset.
    pub fn to_primitive_date_time(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.to_time())
    }

    pub fn to_date(&self) -> Date {
        self.date
    }

    pub fn to_time(&self) -> Time {
        Time::MIDNIGHT + time::Duration::milliseconds(self.milli_of_day())
    }

    pub fn to_offset_time(&self) -> OffsetTime {
        OffsetTime::new(self.to_time(), Self::OFFSET)
    }

    /// The time of day at the reference offset at which `beat` starts.
    pub fn time_of_beat(beat: u32) -> Result<OffsetTime, Error> {
        Self::time_of_beats(beat, 0)
    }

    pub fn time_of_beats(beat: u32, centibeat_of_beat: u32) -> Result<OffsetTime, Error> {
        let millis = beats_to_milli_of_day(beat, centibeat_of_beat)?;
        Ok(OffsetTime::new(
            Time::MIDNIGHT + time::Duration::milliseconds(millis),
            Self::OFFSET,
        ))
    }

    /// The date-time at the reference offset rounded to the nearest whole
    /// second. A remainder of exactly 500 milliseconds rounds up.
    ///
    /// Only 800 of the 100,000 centibeats in a day start on a whole second.
    pub fn to_nearest_second(&self) -> Result<OffsetDateTime, Error> {
        let remainder = self.milli_of_day() % MILLIS_PER_SEC;
        let adjustment = if remainder >= 500 {
            MILLIS_PER_SEC - remainder
        } else {
            -remainder
        };
        self.to_offset_date_time()
            .checked_add(time::Duration::milliseconds(adjustment))
            .ok_or(Error::Overflow)
    }

    pub fn format(&self, formatter: &Formatter) -> Result<String, Error> {
        formatter.format(self)
    }

    pub fn is_supported_field(&self, field: Field<'_>) -> bool {
        match field {
            Field::Internet(_) | Field::Chrono(_) => true,
            Field::External(field) => field.is_supported_by(self),
        }
    }

    /// The range of valid values for the field on this date.
    pub fn range(&self, field: Field<'_>) -> Result<ValueRange, Error> {
        match field {
            Field::Internet(field) => Ok(field.range()),
            Field::Chrono(ChronoField::DayOfMonth) => Ok(ValueRange::new(
                1,
                i64::from(self.month().length(self.year())),
            )),
            Field::Chrono(ChronoField::DayOfYear) => Ok(ValueRange::new(
                1,
                i64::from(time::util::days_in_year(self.year())),
            )),
            Field::Chrono(field) => Ok(field.range()),
            Field::External(field) => field.range_refined_by(self),
        }
    }

    pub fn get(&self, field: Field<'_>) -> Result<i64, Error> {
        match field {
            Field::Internet(field) => Ok(field.native_value(self)),
            Field::Chrono(field) => self.get_value(field),
            Field::External(field) => field.get_from(self),
        }
    }

    /// Returns a copy with the field set to `value`.
    ///
    /// Setting [`InternetTimeField::CentibeatOfBeat`] keeps the beat. Chrono
    /// fields are set on the date-time at the reference offset, and the
    /// result is truncated to the centibeat. The offset is not stored, so
    /// setting `OffsetSeconds` only checks the value.
    pub fn with(self, field: Field<'_>, value: i64) -> Result<Self, Error> {
        match field {
            Field::Internet(field) => {
                let value = check(field, value)? as u32;
                let centibeats = match field {
                    InternetTimeField::BeatOfDay => value * CENTIBEATS_PER_BEAT as u32,
                    InternetTimeField::CentibeatOfDay => value,
                    InternetTimeField::CentibeatOfBeat => {
                        self.centibeat_of_day - self.centibeat_of_beat() + value
                    }
                };
                Ok(Self::new(self.date, centibeats))
            }
            Field::Chrono(field) => self.with_value(field, value),
            Field::External(field) => field.adjust_into(self, value),
        }
    }

    /// Units finer than a millisecond are not supported.
    pub fn is_supported_unit(&self, unit: Unit<'_>) -> bool {
        match unit {
            Unit::Internet(_) => true,
            Unit::Chrono(unit) => self.supports_unit(unit),
            Unit::External(unit) => unit.is_supported_by(self),
        }
    }

    pub fn plus(self, amount: i64, unit: Unit<'_>) -> Result<Self, Error> {
        match unit {
            Unit::Internet(unit) => self.plus_units(unit.to_millis(amount)?, ChronoUnit::Millis),
            Unit::Chrono(unit) => self.plus_units(amount, unit),
            Unit::External(unit) => unit.add_to(self, amount),
        }
    }

    pub fn minus(self, amount: i64, unit: Unit<'_>) -> Result<Self, Error> {
        match amount.checked_neg() {
            Some(amount) => self.plus(amount, unit),
            None => self.plus(i64::MAX, unit)?.plus(1, unit),
        }
    }

    /// Adds a [`time::Duration`], truncated to whole milliseconds.
    pub fn plus_duration(self, duration: time::Duration) -> Result<Self, Error> {
        let millis = i64::try_from(duration.whole_milliseconds()).map_err(|_| Error::Overflow)?;
        self.plus_units(millis, ChronoUnit::Millis)
    }

    pub fn minus_duration(self, duration: time::Duration) -> Result<Self, Error> {
        let millis = i64::try_from(-duration.whole_milliseconds()).map_err(|_| Error::Overflow)?;
        self.plus_units(millis, ChronoUnit::Millis)
    }

    /// The number of whole units from this value to `end`, which must
    /// identify an instant.
    pub fn until<T: TemporalAccessor + ?Sized>(
        &self,
        end: &T,
        unit: Unit<'_>,
    ) -> Result<i64, Error> {
        let end = match end.view() {
            TemporalView::Internet(time) => time.to_offset_date_time(),
            _ => end
                .offset_date_time()
                .ok_or(Error::Irreconcilable(end.type_name()))?,
        };
        let start = self.to_offset_date_time();
        match unit {
            Unit::Internet(unit) => unit.between(&start, &end),
            Unit::Chrono(unit) => {
                if !self.supports_unit(unit) {
                    return Err(Error::UnsupportedUnit(unit.to_string()));
                }
                start.units_until(&end, unit)
            }
            Unit::External(unit) => unit.between(self, &end),
        }
    }
}

fn check(field: InternetTimeField, value: i64) -> Result<i64, Error> {
    field.range().check(value, field)
}

fn beats_to_milli_of_day(beat: u32, centibeat_of_beat: u32) -> Result<i64, Error> {
    let beat = check(InternetTimeField::BeatOfDay, i64::from(beat))?;
    let centibeat_of_beat = check(InternetTimeField::CentibeatOfBeat, i64::from(centibeat_of_beat))?;
    Ok(InternetTimeUnit::Beats.to_millis(beat)?
        + InternetTimeUnit::Centibeats.to_millis(centibeat_of_beat)?)
}

fn epoch_millis(seconds: i64, millis: i64) -> Result<i64, Error> {
    seconds
        .checked_mul(MILLIS_PER_SEC)
        .and_then(|seconds| seconds.checked_add(millis))
        .ok_or(Error::Overflow)
}

/// Moves `date`, observed at `offset_seconds`, to the date at the reference
/// offset when the reference midnight falls between the two.
fn normalize_date(date: Date, offset_seconds: i64, milli_of_day: i64) -> Result<Date, Error> {
    let adjust = (offset_seconds - REFERENCE_OFFSET_SECONDS) * MILLIS_PER_SEC;
    if adjust == 0 {
        return Ok(date);
    }
    let adjusted = milli_of_day + adjust;
    if adjusted < 0 {
        date.plus_units(1, ChronoUnit::Days)
    } else if adjusted >= MILLIS_PER_DAY {
        date.plus_units(-1, ChronoUnit::Days)
    } else {
        Ok(date)
    }
}

fn parsed_milli_of_day(parsed: &Parsed) -> Result<Option<i64>, Error> {
    let get = |field: ChronoField| -> Result<Option<i64>, Error> {
        parsed
            .get(field)
            .map(|value| field.range().check(value, field))
            .transpose()
    };

    if let Some(millis) = get(ChronoField::MilliOfDay)? {
        return Ok(Some(millis));
    }
    let hour = match get(ChronoField::HourOfDay)? {
        Some(hour) => hour,
        None => return Ok(None),
    };
    let minute = get(ChronoField::MinuteOfHour)?.unwrap_or(0);
    let second = get(ChronoField::SecondOfMinute)?.unwrap_or(0);
    let millis = match get(ChronoField::NanoOfSecond)? {
        Some(nanos) => nanos / NANOS_PER_MILLI,
        None => get(ChronoField::MilliOfSecond)?.unwrap_or(0),
    };
    Ok(Some(((hour * 60 + minute) * 60 + second) * MILLIS_PER_SEC + millis))
}

impl TemporalAccessor for InternetTime {
    fn supports_field(&self, _field: ChronoField) -> bool {
        true
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::OffsetSeconds => Ok(REFERENCE_OFFSET_SECONDS),
            ChronoField::InstantSeconds => Ok(self.epoch_millis().div_euclid(MILLIS_PER_SEC)),
            field if field.is_time_based() => self.to_time().get_value(field),
            field => self.date.get_value(field),
        }
    }

    fn view(&self) -> TemporalView<'_> {
        TemporalView::Internet(self)
    }

    fn offset_date_time(&self) -> Option<OffsetDateTime> {
        Some(self.to_offset_date_time())
    }
}

impl Temporal for InternetTime {
    fn supports_unit(&self, unit: ChronoUnit) -> bool {
        unit >= ChronoUnit::Millis
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        match field {
            ChronoField::MilliOfDay => {
                let millis = field.range().check(value, field)?;
                let centibeats = InternetTimeUnit::Centibeats.from_millis(millis);
                Ok(Self::new(self.date, centibeats as u32))
            }
            ChronoField::OffsetSeconds => {
                field.range().check(value, field)?;
                Ok(self)
            }
            _ => Self::from_offset_date_time(self.to_offset_date_time().with_value(field, value)?),
        }
    }

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        match unit {
            ChronoUnit::Millis => {
                Self::from_epoch_millis(self.epoch_millis().checked_add(amount).ok_or(Error::Overflow)?)
            }
            unit if self.supports_unit(unit) => {
                Self::from_offset_date_time(self.to_offset_date_time().plus_units(amount, unit)?)
            }
            unit => Err(Error::UnsupportedUnit(unit.to_string())),
        }
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        self.until(end, Unit::Chrono(unit))
    }
}

impl Display for InternetTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = retro_formatter()
            .format(self)
            .map_err(|_| core::fmt::Error)?;
        f.write_str(&text)
    }
}

impl TryFrom<OffsetDateTime> for InternetTime {
    type Error = Error;

    fn try_from(date_time: OffsetDateTime) -> Result<Self, Error> {
        Self::from_offset_date_time(date_time)
    }
}

impl TryFrom<SystemTime> for InternetTime {
    type Error = Error;

    fn try_from(instant: SystemTime) -> Result<Self, Error> {
        Self::from_instant(instant)
    }
}

impl From<InternetTime> for OffsetDateTime {
    fn from(time: InternetTime) -> Self {
        time.to_offset_date_time()
    }
}
