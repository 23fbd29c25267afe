use crate::{ValueRange, NANOS_PER_SEC, SECONDS_PER_DAY, UNIX_EPOCH_JULIAN_DAY};
use core::fmt::Display;
use time::Date;

/// Standard calendar and clock fields exposed by date-time values.
///
/// Time-based fields count from the start of the local day, date-based fields
/// follow the proleptic Gregorian calendar. `InstantSeconds` and
/// `OffsetSeconds` locate a value on the time-line.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    MonthOfYear,
    Year,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    pub const ALL: [ChronoField; 23] = [
        ChronoField::NanoOfSecond,
        ChronoField::NanoOfDay,
        ChronoField::MicroOfSecond,
        ChronoField::MicroOfDay,
        ChronoField::MilliOfSecond,
        ChronoField::MilliOfDay,
        ChronoField::SecondOfMinute,
        ChronoField::SecondOfDay,
        ChronoField::MinuteOfHour,
        ChronoField::MinuteOfDay,
        ChronoField::HourOfAmPm,
        ChronoField::ClockHourOfAmPm,
        ChronoField::HourOfDay,
        ChronoField::ClockHourOfDay,
        ChronoField::AmPmOfDay,
        ChronoField::DayOfWeek,
        ChronoField::DayOfMonth,
        ChronoField::DayOfYear,
        ChronoField::EpochDay,
        ChronoField::MonthOfYear,
        ChronoField::Year,
        ChronoField::InstantSeconds,
        ChronoField::OffsetSeconds,
    ];

    /// The outer range of the field, independent of any particular value.
    pub fn range(self) -> ValueRange {
        let nanos_per_day = SECONDS_PER_DAY * NANOS_PER_SEC;
        match self {
            ChronoField::NanoOfSecond => ValueRange::new(0, NANOS_PER_SEC - 1),
            ChronoField::NanoOfDay => ValueRange::new(0, nanos_per_day - 1),
            ChronoField::MicroOfSecond => ValueRange::new(0, 999_999),
            ChronoField::MicroOfDay => ValueRange::new(0, nanos_per_day / 1_000 - 1),
            ChronoField::MilliOfSecond => ValueRange::new(0, 999),
            ChronoField::MilliOfDay => ValueRange::new(0, nanos_per_day / 1_000_000 - 1),
            ChronoField::SecondOfMinute => ValueRange::new(0, 59),
            ChronoField::SecondOfDay => ValueRange::new(0, SECONDS_PER_DAY - 1),
            ChronoField::MinuteOfHour => ValueRange::new(0, 59),
            ChronoField::MinuteOfDay => ValueRange::new(0, 24 * 60 - 1),
            ChronoField::HourOfAmPm => ValueRange::new(0, 11),
            ChronoField::ClockHourOfAmPm => ValueRange::new(1, 12),
            ChronoField::HourOfDay => ValueRange::new(0, 23),
            ChronoField::ClockHourOfDay => ValueRange::new(1, 24),
            ChronoField::AmPmOfDay => ValueRange::new(0, 1),
            ChronoField::DayOfWeek => ValueRange::new(1, 7),
            ChronoField::DayOfMonth => ValueRange::new(1, 31),
            ChronoField::DayOfYear => ValueRange::new(1, 366),
            ChronoField::EpochDay => ValueRange::new(
                i64::from(Date::MIN.to_julian_day()) - UNIX_EPOCH_JULIAN_DAY,
                i64::from(Date::MAX.to_julian_day()) - UNIX_EPOCH_JULIAN_DAY,
            ),
            ChronoField::MonthOfYear => ValueRange::new(1, 12),
            ChronoField::Year => {
                ValueRange::new(i64::from(Date::MIN.year()), i64::from(Date::MAX.year()))
            }
            ChronoField::InstantSeconds => ValueRange::new(i64::MIN, i64::MAX),
            ChronoField::OffsetSeconds => ValueRange::new(-18 * 3_600, 18 * 3_600),
        }
    }

    pub fn is_time_based(self) -> bool {
        self <= ChronoField::AmPmOfDay
    }

    pub fn is_date_based(self) -> bool {
        (ChronoField::DayOfWeek..=ChronoField::Year).contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            ChronoField::NanoOfSecond => "NanoOfSecond",
            ChronoField::NanoOfDay => "NanoOfDay",
            ChronoField::MicroOfSecond => "MicroOfSecond",
            ChronoField::MicroOfDay => "MicroOfDay",
            ChronoField::MilliOfSecond => "MilliOfSecond",
            ChronoField::MilliOfDay => "MilliOfDay",
            ChronoField::SecondOfMinute => "SecondOfMinute",
            ChronoField::SecondOfDay => "SecondOfDay",
            ChronoField::MinuteOfHour => "MinuteOfHour",
            ChronoField::MinuteOfDay => "MinuteOfDay",
            ChronoField::HourOfAmPm => "HourOfAmPm",
            ChronoField::ClockHourOfAmPm => "ClockHourOfAmPm",
            ChronoField::HourOfDay => "HourOfDay",
            ChronoField::ClockHourOfDay => "ClockHourOfDay",
            ChronoField::AmPmOfDay => "AmPmOfDay",
            ChronoField::DayOfWeek => "DayOfWeek",
            ChronoField::DayOfMonth => "DayOfMonth",
            ChronoField::DayOfYear => "DayOfYear",
            ChronoField::EpochDay => "EpochDay",
            ChronoField::MonthOfYear => "MonthOfYear",
            ChronoField::Year => "Year",
            ChronoField::InstantSeconds => "InstantSeconds",
            ChronoField::OffsetSeconds => "OffsetSeconds",
        }
    }
}

impl Display for ChronoField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Standard units of time used for date-time arithmetic.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl ChronoUnit {
    pub const ALL: [ChronoUnit; 14] = [
        ChronoUnit::Nanos,
        ChronoUnit::Micros,
        ChronoUnit::Millis,
        ChronoUnit::Seconds,
        ChronoUnit::Minutes,
        ChronoUnit::Hours,
        ChronoUnit::HalfDays,
        ChronoUnit::Days,
        ChronoUnit::Weeks,
        ChronoUnit::Months,
        ChronoUnit::Years,
        ChronoUnit::Decades,
        ChronoUnit::Centuries,
        ChronoUnit::Millennia,
    ];

    /// Nominal length in nanoseconds. Only units up to `Weeks` have one.
    pub(crate) fn nanos(self) -> Option<i128> {
        let nanos: i128 = match self {
            ChronoUnit::Nanos => 1,
            ChronoUnit::Micros => 1_000,
            ChronoUnit::Millis => 1_000_000,
            ChronoUnit::Seconds => 1_000_000_000,
            ChronoUnit::Minutes => 60 * 1_000_000_000,
            ChronoUnit::Hours => 3_600 * 1_000_000_000,
            ChronoUnit::HalfDays => 12 * 3_600 * 1_000_000_000,
            ChronoUnit::Days => 24 * 3_600 * 1_000_000_000,
            ChronoUnit::Weeks => 7 * 24 * 3_600 * 1_000_000_000,
            _ => return None,
        };
        Some(nanos)
    }

    /// Length in months for the month-based units.
    pub(crate) fn months(self) -> Option<i64> {
        match self {
            ChronoUnit::Months => Some(1),
            ChronoUnit::Years => Some(12),
            ChronoUnit::Decades => Some(120),
            ChronoUnit::Centuries => Some(1_200),
            ChronoUnit::Millennia => Some(12_000),
            _ => None,
        }
    }

    pub fn is_time_based(self) -> bool {
        self <= ChronoUnit::HalfDays
    }

    pub fn is_date_based(self) -> bool {
        self >= ChronoUnit::Days
    }

    pub fn name(self) -> &'static str {
        match self {
            ChronoUnit::Nanos => "Nanos",
            ChronoUnit::Micros => "Micros",
            ChronoUnit::Millis => "Millis",
            ChronoUnit::Seconds => "Seconds",
            ChronoUnit::Minutes => "Minutes",
            ChronoUnit::Hours => "Hours",
            ChronoUnit::HalfDays => "HalfDays",
            ChronoUnit::Days => "Days",
            ChronoUnit::Weeks => "Weeks",
            ChronoUnit::Months => "Months",
            ChronoUnit::Years => "Years",
            ChronoUnit::Decades => "Decades",
            ChronoUnit::Centuries => "Centuries",
            ChronoUnit::Millennia => "Millennia",
        }
    }
}

impl Display for ChronoUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
