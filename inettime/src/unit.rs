use crate::temporal::{ChronoUnit, Temporal};
use crate::{Error, InternetTime};
use core::fmt::Display;
use time::OffsetDateTime;

/// The number of centibeats in a beat.
pub(crate) const CENTIBEATS_PER_BEAT: i64 = 100;

/// The native units of Internet Time.
///
/// Both are exact: a beat is 86.4 seconds and a centibeat 864 milliseconds,
/// so a day holds exactly 1,000 beats or 100,000 centibeats.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum InternetTimeUnit {
    Centibeats,
    Beats,
}

impl InternetTimeUnit {
    pub const ALL: [InternetTimeUnit; 2] = [InternetTimeUnit::Centibeats, InternetTimeUnit::Beats];

    /// The length of the unit in milliseconds.
    pub const fn millis(self) -> i64 {
        match self {
            InternetTimeUnit::Beats => 86_400,
            InternetTimeUnit::Centibeats => 864,
        }
    }

    pub fn duration(self) -> time::Duration {
        time::Duration::milliseconds(self.millis())
    }

    /// Converts a count of this unit to milliseconds, returning
    /// [`Error::Overflow`] when the result does not fit in an `i64`.
    pub fn to_millis(self, amount: i64) -> Result<i64, Error> {
        amount.checked_mul(self.millis()).ok_or(Error::Overflow)
    }

    /// Converts milliseconds to a count of this unit, rounding toward negative
    /// infinity.
    pub fn from_millis(self, millis: i64) -> i64 {
        millis.div_euclid(self.millis())
    }

    pub fn is_supported_by<T: Temporal>(self, temporal: &T) -> bool {
        temporal.supports_unit(ChronoUnit::Millis)
    }

    /// Adds `amount` of this unit to `temporal` using its millisecond
    /// arithmetic.
    pub fn add_to<T: Temporal>(self, temporal: T, amount: i64) -> Result<T, Error> {
        if !self.is_supported_by(&temporal) {
            return Err(Error::unsupported(self, temporal.type_name()));
        }
        temporal.plus_units(self.to_millis(amount)?, ChronoUnit::Millis)
    }

    /// The signed number of whole units from `start` to `end`.
    pub fn between<T: Temporal>(self, start: &T, end: &T) -> Result<i64, Error> {
        if !self.is_supported_by(start) {
            return Err(Error::unsupported(self, start.type_name()));
        }
        Ok(self.from_millis(start.units_until(end, ChronoUnit::Millis)?))
    }

    pub fn is_duration_estimated(self) -> bool {
        false
    }

    pub fn is_date_based(self) -> bool {
        false
    }

    pub fn is_time_based(self) -> bool {
        true
    }

    pub fn name(self) -> &'static str {
        match self {
            InternetTimeUnit::Beats => "Beats",
            InternetTimeUnit::Centibeats => "Centibeats",
        }
    }
}

impl Display for InternetTimeUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit defined outside this crate that knows how to operate on
/// [`InternetTime`] values itself.
pub trait ExternalUnit: Display + core::fmt::Debug + Send + Sync {
    fn is_supported_by(&self, time: &InternetTime) -> bool;

    fn add_to(&self, time: InternetTime, amount: i64) -> Result<InternetTime, Error>;

    /// The number of whole units from `start` to `end`.
    fn between(&self, start: &InternetTime, end: &OffsetDateTime) -> Result<i64, Error>;
}

/// Any unit that `InternetTime` arithmetic accepts.
#[derive(Copy, Clone, Debug)]
pub enum Unit<'a> {
    Internet(InternetTimeUnit),
    Chrono(ChronoUnit),
    External(&'a dyn ExternalUnit),
}

impl From<InternetTimeUnit> for Unit<'_> {
    fn from(unit: InternetTimeUnit) -> Self {
        Unit::Internet(unit)
    }
}

impl From<ChronoUnit> for Unit<'_> {
    fn from(unit: ChronoUnit) -> Self {
        Unit::Chrono(unit)
    }
}

impl<'a> From<&'a dyn ExternalUnit> for Unit<'a> {
    fn from(unit: &'a dyn ExternalUnit) -> Self {
        Unit::External(unit)
    }
}

impl Display for Unit<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Unit::Internet(unit) => unit.fmt(f),
            Unit::Chrono(unit) => unit.fmt(f),
            Unit::External(unit) => unit.fmt(f),
        }
    }
}
