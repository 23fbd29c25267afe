//! Implementations of the temporal protocol for the `time` types and for
//! `SystemTime`, plus the calendar arithmetic they share.

use super::{ChronoField, ChronoUnit, Temporal, TemporalAccessor, TemporalView};
use crate::{Error, NANOS_PER_MILLI, NANOS_PER_SEC, SECONDS_PER_DAY, UNIX_EPOCH_JULIAN_DAY};
use core::time::Duration;
use std::time::SystemTime;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

type TimeDuration = time::Duration;

const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = (SECONDS_PER_DAY * NANOS_PER_SEC) as i128;

pub(crate) fn nanos_of_day(time: Time) -> i64 {
    let (hour, minute, second, nano) = time.as_hms_nano();
    ((i64::from(hour) * 60 + i64::from(minute)) * 60 + i64::from(second)) * NANOS_PER_SEC
        + i64::from(nano)
}

fn time_from_nanos(nanos: i64) -> Result<Time, Error> {
    let nanos = ChronoField::NanoOfDay
        .range()
        .check(nanos, ChronoField::NanoOfDay)?;
    let secs = nanos / NANOS_PER_SEC;
    Ok(Time::from_hms_nano(
        (secs / 3_600) as u8,
        (secs / 60 % 60) as u8,
        (secs % 60) as u8,
        (nanos % NANOS_PER_SEC) as u32,
    )?)
}

pub(crate) fn epoch_day(date: Date) -> i64 {
    i64::from(date.to_julian_day()) - UNIX_EPOCH_JULIAN_DAY
}

pub(crate) fn date_from_epoch_day(day: i64) -> Result<Date, Error> {
    let julian = day
        .checked_add(UNIX_EPOCH_JULIAN_DAY)
        .and_then(|julian| i32::try_from(julian).ok())
        .ok_or(Error::Overflow)?;
    Ok(Date::from_julian_day(julian)?)
}

/// A signed span of `nanos` nanoseconds.
fn nanos_duration(nanos: i128) -> Result<TimeDuration, Error> {
    let nanos_per_sec = i128::from(NANOS_PER_SEC);
    let seconds = i64::try_from(nanos.div_euclid(nanos_per_sec)).map_err(|_| Error::Overflow)?;
    Ok(TimeDuration::new(seconds, nanos.rem_euclid(nanos_per_sec) as i32))
}

fn plus_days(date: Date, days: i64) -> Result<Date, Error> {
    let nanos = i128::from(days) * NANOS_PER_DAY;
    date.checked_add(nanos_duration(nanos)?).ok_or(Error::Overflow)
}

fn month_of(value: i64) -> Result<Month, Error> {
    u8::try_from(value)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| Error::out_of_range(ChronoField::MonthOfYear, value))
}

/// Builds a date from its calendar components, rejecting days that do not
/// exist in the given month.
pub(crate) fn calendar_date(year: i64, month: i64, day: i64) -> Result<Date, Error> {
    let year = ChronoField::Year.range().check(year, ChronoField::Year)? as i32;
    let month = month_of(month)?;
    let last = month.length(year);
    if day < 1 || day > i64::from(last) {
        return Err(Error::out_of_range(ChronoField::DayOfMonth, day));
    }
    Ok(Date::from_calendar_date(year, month, day as u8)?)
}

// the day of month is clamped to the last day of the resulting month
fn clamped_date(year: i32, month: Month, day: u8) -> Result<Date, Error> {
    let day = day.min(month.length(year));
    Ok(Date::from_calendar_date(year, month, day)?)
}

fn proleptic_month(date: Date) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month() as u8) - 1
}

fn plus_months(date: Date, months: i64) -> Result<Date, Error> {
    let total = proleptic_month(date)
        .checked_add(months)
        .ok_or(Error::Overflow)?;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| Error::Overflow)?;
    let month = Month::try_from(total.rem_euclid(12) as u8 + 1)?;
    clamped_date(year, month, date.day())
}

fn months_until(start: Date, end: Date) -> i64 {
    let packed = |date: Date| proleptic_month(date) * 32 + i64::from(date.day());
    (packed(end) - packed(start)) / 32
}

fn time_value(time: Time, field: ChronoField) -> Option<i64> {
    let nanos = nanos_of_day(time);
    let hour = i64::from(time.hour());
    let value = match field {
        ChronoField::NanoOfSecond => i64::from(time.nanosecond()),
        ChronoField::NanoOfDay => nanos,
        ChronoField::MicroOfSecond => i64::from(time.nanosecond()) / 1_000,
        ChronoField::MicroOfDay => nanos / 1_000,
        ChronoField::MilliOfSecond => i64::from(time.nanosecond()) / NANOS_PER_MILLI,
        ChronoField::MilliOfDay => nanos / NANOS_PER_MILLI,
        ChronoField::SecondOfMinute => i64::from(time.second()),
        ChronoField::SecondOfDay => nanos / NANOS_PER_SEC,
        ChronoField::MinuteOfHour => i64::from(time.minute()),
        ChronoField::MinuteOfDay => nanos / NANOS_PER_MINUTE,
        ChronoField::HourOfAmPm => hour % 12,
        ChronoField::ClockHourOfAmPm => {
            if hour % 12 == 0 {
                12
            } else {
                hour % 12
            }
        }
        ChronoField::HourOfDay => hour,
        ChronoField::ClockHourOfDay => {
            if hour == 0 {
                24
            } else {
                hour
            }
        }
        ChronoField::AmPmOfDay => hour / 12,
        _ => return None,
    };
    Some(value)
}

fn date_value(date: Date, field: ChronoField) -> Option<i64> {
    let value = match field {
        ChronoField::DayOfWeek => i64::from(date.weekday().number_from_monday()),
        ChronoField::DayOfMonth => i64::from(date.day()),
        ChronoField::DayOfYear => i64::from(date.ordinal()),
        ChronoField::EpochDay => epoch_day(date),
        ChronoField::MonthOfYear => i64::from(date.month() as u8),
        ChronoField::Year => i64::from(date.year()),
        _ => return None,
    };
    Some(value)
}

fn with_time_value(time: Time, field: ChronoField, value: i64) -> Result<Time, Error> {
    if !field.is_time_based() {
        return Err(Error::UnsupportedField(field.to_string()));
    }
    let value = field.range().check(value, field)?;

    let nanos = nanos_of_day(time);
    let nano = i64::from(time.nanosecond());
    let hour = i64::from(time.hour());

    let nanos = match field {
        ChronoField::NanoOfSecond => nanos - nano + value,
        ChronoField::NanoOfDay => value,
        ChronoField::MicroOfSecond => nanos - nano + value * 1_000,
        ChronoField::MicroOfDay => value * 1_000,
        ChronoField::MilliOfSecond => nanos - nano + value * NANOS_PER_MILLI,
        ChronoField::MilliOfDay => value * NANOS_PER_MILLI,
        ChronoField::SecondOfMinute => nanos + (value - i64::from(time.second())) * NANOS_PER_SEC,
        ChronoField::SecondOfDay => nanos + (value - nanos / NANOS_PER_SEC) * NANOS_PER_SEC,
        ChronoField::MinuteOfHour => {
            nanos + (value - i64::from(time.minute())) * NANOS_PER_MINUTE
        }
        ChronoField::MinuteOfDay => nanos + (value - nanos / NANOS_PER_MINUTE) * NANOS_PER_MINUTE,
        ChronoField::HourOfAmPm => nanos + (value - hour % 12) * NANOS_PER_HOUR,
        ChronoField::ClockHourOfAmPm => {
            let value = if value == 12 { 0 } else { value };
            nanos + (value - hour % 12) * NANOS_PER_HOUR
        }
        ChronoField::HourOfDay => nanos + (value - hour) * NANOS_PER_HOUR,
        ChronoField::ClockHourOfDay => {
            let value = if value == 24 { 0 } else { value };
            nanos + (value - hour) * NANOS_PER_HOUR
        }
        ChronoField::AmPmOfDay => nanos + (value - hour / 12) * 12 * NANOS_PER_HOUR,
        _ => return Err(Error::UnsupportedField(field.to_string())),
    };

    time_from_nanos(nanos)
}

fn with_date_value(date: Date, field: ChronoField, value: i64) -> Result<Date, Error> {
    if !field.is_date_based() {
        return Err(Error::UnsupportedField(field.to_string()));
    }
    let value = field.range().check(value, field)?;

    match field {
        ChronoField::DayOfWeek => {
            plus_days(date, value - i64::from(date.weekday().number_from_monday()))
        }
        ChronoField::DayOfMonth => {
            calendar_date(i64::from(date.year()), i64::from(date.month() as u8), value)
        }
        ChronoField::DayOfYear => Date::from_ordinal_date(date.year(), value as u16)
            .map_err(|_| Error::out_of_range(field, value)),
        ChronoField::EpochDay => date_from_epoch_day(value),
        ChronoField::MonthOfYear => clamped_date(date.year(), month_of(value)?, date.day()),
        ChronoField::Year => clamped_date(value as i32, date.month(), date.day()),
        _ => Err(Error::UnsupportedField(field.to_string())),
    }
}

fn time_unit_nanos(unit: ChronoUnit) -> Option<i128> {
    unit.nanos().filter(|_| unit.is_time_based())
}

fn plus_date(date: Date, amount: i64, unit: ChronoUnit) -> Result<Date, Error> {
    match unit {
        ChronoUnit::Days => plus_days(date, amount),
        ChronoUnit::Weeks => plus_days(date, amount.checked_mul(7).ok_or(Error::Overflow)?),
        _ => match unit.months() {
            Some(months) => plus_months(date, amount.checked_mul(months).ok_or(Error::Overflow)?),
            None => Err(Error::UnsupportedUnit(unit.to_string())),
        },
    }
}

fn date_until(start: Date, end: Date, unit: ChronoUnit) -> Result<i64, Error> {
    match unit {
        ChronoUnit::Days => Ok(epoch_day(end) - epoch_day(start)),
        ChronoUnit::Weeks => Ok((epoch_day(end) - epoch_day(start)) / 7),
        _ => match unit.months() {
            Some(months) => Ok(months_until(start, end) / months),
            None => Err(Error::UnsupportedUnit(unit.to_string())),
        },
    }
}

fn plus_date_time(
    date_time: PrimitiveDateTime,
    amount: i64,
    unit: ChronoUnit,
) -> Result<PrimitiveDateTime, Error> {
    match time_unit_nanos(unit) {
        Some(nanos) => date_time
            .checked_add(nanos_duration(i128::from(amount) * nanos)?)
            .ok_or(Error::Overflow),
        None => Ok(PrimitiveDateTime::new(
            plus_date(date_time.date(), amount, unit)?,
            date_time.time(),
        )),
    }
}

fn nanos_between(start: PrimitiveDateTime, end: PrimitiveDateTime) -> i128 {
    i128::from(epoch_day(end.date()) - epoch_day(start.date())) * NANOS_PER_DAY
        + i128::from(nanos_of_day(end.time()) - nanos_of_day(start.time()))
}

fn date_time_until(
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    unit: ChronoUnit,
) -> Result<i64, Error> {
    if let Some(nanos) = time_unit_nanos(unit) {
        return i64::try_from(nanos_between(start, end) / nanos).map_err(|_| Error::Overflow);
    }

    // a partial day at the end does not count as a whole day
    let mut end_date = end.date();
    if end_date > start.date() && end.time() < start.time() {
        end_date = plus_days(end_date, -1)?;
    } else if end_date < start.date() && end.time() > start.time() {
        end_date = plus_days(end_date, 1)?;
    }
    date_until(start.date(), end_date, unit)
}

fn local_date_time(date_time: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(date_time.date(), date_time.time())
}

/// Nanoseconds since the unix epoch, negative before it.
pub(crate) fn system_time_nanos(instant: SystemTime) -> Result<i128, Error> {
    match instant.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => i128::try_from(duration.as_nanos()).map_err(|_| Error::Overflow),
        Err(e) => i128::try_from(e.duration().as_nanos())
            .map(|nanos| -nanos)
            .map_err(|_| Error::Overflow),
    }
}

pub(crate) fn system_time(nanos: i128) -> Result<SystemTime, Error> {
    let magnitude = nanos.unsigned_abs();
    let secs = u64::try_from(magnitude / NANOS_PER_SEC as u128).map_err(|_| Error::Overflow)?;
    let duration = Duration::new(secs, (magnitude % NANOS_PER_SEC as u128) as u32);
    if nanos >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(duration)
    } else {
        SystemTime::UNIX_EPOCH.checked_sub(duration)
    }
    .ok_or(Error::Overflow)
}

pub(crate) fn utc_date_time(instant: SystemTime) -> Result<OffsetDateTime, Error> {
    Ok(OffsetDateTime::from_unix_timestamp_nanos(system_time_nanos(instant)?)?)
}

/// Renders an offset as `Z` or `+HH:MM`, with `:SS` when seconds are present.
pub(crate) fn offset_id(offset: UtcOffset) -> String {
    if offset.is_utc() {
        return "Z".to_string();
    }
    let (hours, minutes, seconds) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    let mut id = format!(
        "{sign}{:02}:{:02}",
        hours.unsigned_abs(),
        minutes.unsigned_abs()
    );
    if seconds != 0 {
        id.push_str(&format!(":{:02}", seconds.unsigned_abs()));
    }
    id
}

fn unsupported_field(field: ChronoField) -> Error {
    Error::UnsupportedField(field.to_string())
}

fn unsupported_unit(unit: ChronoUnit) -> Error {
    Error::UnsupportedUnit(unit.to_string())
}

impl TemporalAccessor for Time {
    fn supports_field(&self, field: ChronoField) -> bool {
        field.is_time_based()
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        time_value(*self, field).ok_or_else(|| unsupported_field(field))
    }
}

impl Temporal for Time {
    fn supports_unit(&self, unit: ChronoUnit) -> bool {
        unit.is_time_based()
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        with_time_value(self, field, value)
    }

    // wraps around midnight
    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        let nanos = time_unit_nanos(unit).ok_or_else(|| unsupported_unit(unit))?;
        let delta = (i128::from(amount) * nanos).rem_euclid(NANOS_PER_DAY);
        Ok(self + nanos_duration(delta)?)
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        let nanos = time_unit_nanos(unit).ok_or_else(|| unsupported_unit(unit))?;
        Ok(((i128::from(nanos_of_day(*end)) - i128::from(nanos_of_day(*self))) / nanos) as i64)
    }
}

impl TemporalAccessor for Date {
    fn supports_field(&self, field: ChronoField) -> bool {
        field.is_date_based()
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        date_value(*self, field).ok_or_else(|| unsupported_field(field))
    }
}

impl Temporal for Date {
    fn supports_unit(&self, unit: ChronoUnit) -> bool {
        unit.is_date_based()
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        with_date_value(self, field, value)
    }

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        plus_date(self, amount, unit)
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        date_until(*self, *end, unit)
    }
}

impl TemporalAccessor for PrimitiveDateTime {
    fn supports_field(&self, field: ChronoField) -> bool {
        field.is_time_based() || field.is_date_based()
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        time_value(self.time(), field)
            .or_else(|| date_value(self.date(), field))
            .ok_or_else(|| unsupported_field(field))
    }
}

impl Temporal for PrimitiveDateTime {
    fn supports_unit(&self, _unit: ChronoUnit) -> bool {
        true
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        if field.is_time_based() {
            Ok(self.replace_time(with_time_value(self.time(), field, value)?))
        } else {
            Ok(self.replace_date(with_date_value(self.date(), field, value)?))
        }
    }

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        plus_date_time(self, amount, unit)
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        date_time_until(*self, *end, unit)
    }
}

impl TemporalAccessor for OffsetDateTime {
    fn supports_field(&self, _field: ChronoField) -> bool {
        true
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::InstantSeconds => Ok(self.unix_timestamp()),
            ChronoField::OffsetSeconds => Ok(i64::from(self.offset().whole_seconds())),
            _ => local_date_time(*self).get_value(field),
        }
    }

    fn offset_date_time(&self) -> Option<OffsetDateTime> {
        Some(*self)
    }
}

impl Temporal for OffsetDateTime {
    fn supports_unit(&self, _unit: ChronoUnit) -> bool {
        true
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        match field {
            ChronoField::InstantSeconds => {
                let nanos = i128::from(value) * i128::from(NANOS_PER_SEC)
                    + i128::from(self.nanosecond());
                OffsetDateTime::from_unix_timestamp_nanos(nanos)?
                    .checked_to_offset(self.offset())
                    .ok_or(Error::Overflow)
            }
            ChronoField::OffsetSeconds => {
                let value = field.range().check(value, field)?;
                let offset = UtcOffset::from_whole_seconds(value as i32)
                    .map_err(|_| Error::out_of_range(field, value))?;
                Ok(local_date_time(self).assume_offset(offset))
            }
            _ => Ok(local_date_time(self)
                .with_value(field, value)?
                .assume_offset(self.offset())),
        }
    }

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        Ok(plus_date_time(local_date_time(self), amount, unit)?.assume_offset(self.offset()))
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        let end = end.checked_to_offset(self.offset()).ok_or(Error::Overflow)?;
        date_time_until(local_date_time(*self), local_date_time(end), unit)
    }
}

impl TemporalAccessor for SystemTime {
    fn supports_field(&self, field: ChronoField) -> bool {
        matches!(
            field,
            ChronoField::InstantSeconds
                | ChronoField::NanoOfSecond
                | ChronoField::MicroOfSecond
                | ChronoField::MilliOfSecond
                | ChronoField::MilliOfDay
                | ChronoField::OffsetSeconds
        )
    }

    /// Clock fields are read in UTC, so `OffsetSeconds` is always zero.
    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        let nanos = system_time_nanos(*self)?;
        let nanos_per_sec = i128::from(NANOS_PER_SEC);
        let value = match field {
            ChronoField::InstantSeconds => {
                return i64::try_from(nanos.div_euclid(nanos_per_sec)).map_err(|_| Error::Overflow)
            }
            ChronoField::NanoOfSecond => nanos.rem_euclid(nanos_per_sec),
            ChronoField::MicroOfSecond => nanos.rem_euclid(nanos_per_sec) / 1_000,
            ChronoField::MilliOfSecond => nanos.rem_euclid(nanos_per_sec) / 1_000_000,
            ChronoField::MilliOfDay => nanos.rem_euclid(NANOS_PER_DAY) / 1_000_000,
            ChronoField::OffsetSeconds => 0,
            _ => return Err(unsupported_field(field)),
        };
        Ok(value as i64)
    }

    fn view(&self) -> TemporalView<'_> {
        TemporalView::Instant(*self)
    }

    fn offset_date_time(&self) -> Option<OffsetDateTime> {
        utc_date_time(*self).ok()
    }
}

impl Temporal for SystemTime {
    fn supports_unit(&self, unit: ChronoUnit) -> bool {
        unit <= ChronoUnit::Days
    }

    fn with_value(self, field: ChronoField, value: i64) -> Result<Self, Error> {
        if field == ChronoField::OffsetSeconds || !self.supports_field(field) {
            return Err(unsupported_field(field));
        }
        let value = i128::from(field.range().check(value, field)?);

        let nanos = system_time_nanos(self)?;
        let nanos_per_sec = i128::from(NANOS_PER_SEC);
        let second = nanos - nanos.rem_euclid(nanos_per_sec);
        let nanos = match field {
            ChronoField::InstantSeconds => value * nanos_per_sec + nanos.rem_euclid(nanos_per_sec),
            ChronoField::NanoOfSecond => second + value,
            ChronoField::MicroOfSecond => second + value * 1_000,
            ChronoField::MilliOfSecond => second + value * 1_000_000,
            _ => nanos - nanos.rem_euclid(NANOS_PER_DAY) + value * 1_000_000,
        };
        system_time(nanos)
    }

    fn plus_units(self, amount: i64, unit: ChronoUnit) -> Result<Self, Error> {
        let nanos = unit
            .nanos()
            .filter(|_| self.supports_unit(unit))
            .ok_or_else(|| unsupported_unit(unit))?;
        system_time(system_time_nanos(self)? + i128::from(amount) * nanos)
    }

    fn units_until(&self, end: &Self, unit: ChronoUnit) -> Result<i64, Error> {
        let nanos = unit
            .nanos()
            .filter(|_| self.supports_unit(unit))
            .ok_or_else(|| unsupported_unit(unit))?;
        let between = system_time_nanos(*end)? - system_time_nanos(*self)?;
        i64::try_from(between / nanos).map_err(|_| Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset, time};

    #[test]
    fn clock_hours() {
        let midnight = time!(00:00);
        assert_eq!(midnight.get_value(ChronoField::ClockHourOfDay), Ok(24));
        assert_eq!(midnight.get_value(ChronoField::ClockHourOfAmPm), Ok(12));
        assert_eq!(midnight.get_value(ChronoField::AmPmOfDay), Ok(0));

        let evening = time!(18:30);
        assert_eq!(evening.get_value(ChronoField::ClockHourOfDay), Ok(18));
        assert_eq!(evening.get_value(ChronoField::ClockHourOfAmPm), Ok(6));
        assert_eq!(evening.get_value(ChronoField::AmPmOfDay), Ok(1));

        assert_eq!(
            evening.with_value(ChronoField::ClockHourOfDay, 24),
            Ok(time!(00:30))
        );
        assert_eq!(
            evening.with_value(ChronoField::AmPmOfDay, 0),
            Ok(time!(06:30))
        );
    }

    #[test]
    fn month_arithmetic() {
        assert_eq!(
            date!(2024 - 01 - 31).plus_units(1, ChronoUnit::Months),
            Ok(date!(2024 - 02 - 29))
        );
        assert_eq!(
            date!(2024 - 02 - 29).plus_units(1, ChronoUnit::Years),
            Ok(date!(2025 - 02 - 28))
        );
        assert_eq!(
            date!(2024 - 03 - 31).plus_units(-13, ChronoUnit::Months),
            Ok(date!(2023 - 02 - 28))
        );
        assert_eq!(
            date!(2024 - 01 - 31).units_until(&date!(2024 - 02 - 29), ChronoUnit::Months),
            Ok(0)
        );
        assert_eq!(
            date!(2024 - 01 - 31).units_until(&date!(2024 - 03 - 01), ChronoUnit::Months),
            Ok(1)
        );
    }

    #[test]
    fn day_and_time_arithmetic() {
        assert_eq!(
            date!(2024 - 02 - 28).plus_units(2, ChronoUnit::Days),
            Ok(date!(2024 - 03 - 01))
        );
        assert_eq!(
            date!(2024 - 03 - 01).plus_units(-1, ChronoUnit::Weeks),
            Ok(date!(2024 - 02 - 23))
        );
        assert_eq!(Date::MAX.plus_units(1, ChronoUnit::Days), Err(Error::Overflow));
        assert_eq!(
            Date::MIN.plus_units(i64::MIN, ChronoUnit::Days),
            Err(Error::Overflow)
        );

        // times of day wrap around midnight in both directions
        assert_eq!(time!(23:00).plus_units(2, ChronoUnit::Hours), Ok(time!(01:00)));
        assert_eq!(
            time!(00:00:00.5).plus_units(-1, ChronoUnit::Seconds),
            Ok(time!(23:59:59.5))
        );

        assert_eq!(
            datetime!(2025-12-31 23:59:59.5).plus_units(500, ChronoUnit::Millis),
            Ok(datetime!(2026-01-01 00:00))
        );
        assert_eq!(
            PrimitiveDateTime::MAX.plus_units(1, ChronoUnit::Nanos),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn date_time_until() {
        let start = datetime!(2025-10-12 18:00);
        assert_eq!(
            start.units_until(&datetime!(2025-10-13 17:59), ChronoUnit::Days),
            Ok(0)
        );
        assert_eq!(
            start.units_until(&datetime!(2025-10-13 18:00), ChronoUnit::Days),
            Ok(1)
        );
        assert_eq!(
            start.units_until(&datetime!(2025-10-11 18:01), ChronoUnit::Days),
            Ok(0)
        );
        assert_eq!(
            start.units_until(&datetime!(2025-10-12 17:00:00.5), ChronoUnit::Hours),
            Ok(0)
        );
        assert_eq!(
            start.units_until(&datetime!(2025-10-12 16:59), ChronoUnit::Hours),
            Ok(-1)
        );
    }

    #[test]
    fn offsets() {
        let dt = datetime!(2025-10-12 00:00 +01:00);
        let pacific = dt.to_offset(offset!(-8));
        assert_eq!(pacific, dt);
        assert_eq!(local_date_time(pacific), datetime!(2025-10-11 15:00));

        assert_eq!(offset_id(offset!(UTC)), "Z");
        assert_eq!(offset_id(offset!(+1)), "+01:00");
        assert_eq!(offset_id(offset!(-05:30)), "-05:30");
        assert_eq!(offset_id(offset!(+01:02:03)), "+01:02:03");

        assert_eq!(
            dt.units_until(&datetime!(2025-10-11 23:00 UTC), ChronoUnit::Hours),
            Ok(0)
        );
    }

    #[test]
    fn system_time_fields() {
        let instant = SystemTime::UNIX_EPOCH - Duration::from_millis(1);
        assert_eq!(instant.get_value(ChronoField::InstantSeconds), Ok(-1));
        assert_eq!(instant.get_value(ChronoField::MilliOfSecond), Ok(999));
        assert_eq!(instant.get_value(ChronoField::MilliOfDay), Ok(86_399_999));
        assert_eq!(instant.get_value(ChronoField::OffsetSeconds), Ok(0));
        assert!(instant.get_value(ChronoField::Year).is_err());

        let adjusted = instant.with_value(ChronoField::MilliOfDay, 0).unwrap();
        assert_eq!(
            adjusted,
            SystemTime::UNIX_EPOCH - Duration::from_secs(SECONDS_PER_DAY as u64)
        );
        assert_eq!(
            instant.units_until(&adjusted, ChronoUnit::Millis),
            Ok(-86_399_999)
        );
        assert!(instant.plus_units(1, ChronoUnit::Months).is_err());
    }
}
