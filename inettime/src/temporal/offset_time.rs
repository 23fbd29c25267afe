use super::{offset_id, ChronoField, TemporalAccessor};
use crate::Error;
use core::fmt::Display;
use time::{Time, UtcOffset};

/// A time of day at a fixed offset from UTC, without a date.
///
/// Displays as `HH:MM`, followed by seconds and a fraction only when they are
/// non-zero, then the offset id: `00:01:26.400+01:00`.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct OffsetTime {
    time: Time,
    offset: UtcOffset,
}

impl OffsetTime {
    pub const fn new(time: Time, offset: UtcOffset) -> Self {
        Self { time, offset }
    }

    pub const fn time(&self) -> Time {
        self.time
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// The same moment of the day observed at another offset, wrapping around
    /// midnight.
    pub fn to_offset(self, offset: UtcOffset) -> Self {
        let shift = offset.whole_seconds() - self.offset.whole_seconds();
        Self::new(self.time + time::Duration::seconds(i64::from(shift)), offset)
    }
}

impl Display for OffsetTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (hour, minute, second, nano) = self.time.as_hms_nano();
        write!(f, "{hour:02}:{minute:02}")?;
        if second > 0 || nano > 0 {
            write!(f, ":{second:02}")?;
            if nano % 1_000_000 == 0 && nano > 0 {
                write!(f, ".{:03}", nano / 1_000_000)?;
            } else if nano % 1_000 == 0 && nano > 0 {
                write!(f, ".{:06}", nano / 1_000)?;
            } else if nano > 0 {
                write!(f, ".{nano:09}")?;
            }
        }
        f.write_str(&offset_id(self.offset))
    }
}

impl TemporalAccessor for OffsetTime {
    fn supports_field(&self, field: ChronoField) -> bool {
        field.is_time_based() || field == ChronoField::OffsetSeconds
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::OffsetSeconds => Ok(i64::from(self.offset.whole_seconds())),
            _ => self.time.get_value(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{offset, time};

    #[test]
    fn display() {
        let t = |time| OffsetTime::new(time, offset!(+1)).to_string();
        assert_eq!(t(time!(00:00)), "00:00+01:00");
        assert_eq!(t(time!(00:01:26.4)), "00:01:26.400+01:00");
        assert_eq!(t(time!(12:00:43)), "12:00:43+01:00");
        assert_eq!(t(time!(23:59:59.000001)), "23:59:59.000001+01:00");
        assert_eq!(
            OffsetTime::new(time!(06:30), offset!(UTC)).to_string(),
            "06:30Z"
        );
    }

    #[test]
    fn to_offset() {
        let biel = OffsetTime::new(time!(00:30), offset!(+1));
        assert_eq!(
            biel.to_offset(offset!(UTC)),
            OffsetTime::new(time!(23:30), offset!(UTC))
        );
        assert_eq!(
            biel.to_offset(offset!(+12)),
            OffsetTime::new(time!(11:30), offset!(+12))
        );
        assert_eq!(
            biel.to_offset(offset!(-12)).to_offset(offset!(+1)),
            biel
        );
    }
}
