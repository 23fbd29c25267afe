use crate::field::to_normalized_milli_of_day;
use crate::*;

/// Returns `temporal` moved back to the start of the beat or centibeat that
/// contains it.
///
/// The window is found at the reference offset, using the value's own
/// `OffsetSeconds` when it has one and assuming the reference offset when it
/// does not. Anything finer than a millisecond is cleared as well. Values
/// without a millisecond of day, such as a `time::Date`, are not supported.
///
/// ```
/// use inettime::{to_start_of, InternetTimeField};
/// use time::macros::datetime;
///
/// let t = datetime!(2025-10-12 10:37:51.9 UTC);
/// let aligned = to_start_of(InternetTimeField::BeatOfDay, t).unwrap();
/// assert_eq!(aligned, datetime!(2025-10-12 10:36:57.6 UTC));
/// ```
pub fn to_start_of<T: Temporal>(field: InternetTimeField, temporal: T) -> Result<T, Error> {
    if let TemporalView::Internet(time) = temporal.view() {
        if field.base_unit() == InternetTimeUnit::Centibeats || time.centibeat_of_beat() == 0 {
            return Ok(temporal);
        }
    }

    if !temporal.supports_field(ChronoField::MilliOfDay) {
        return Err(Error::unsupported(field, temporal.type_name()));
    }

    let offset = if temporal.supports_field(ChronoField::OffsetSeconds) {
        temporal.get_value(ChronoField::OffsetSeconds)?
    } else {
        REFERENCE_OFFSET_SECONDS
    };
    let millis =
        to_normalized_milli_of_day(temporal.get_value(ChronoField::MilliOfDay)?, offset)?;

    let aligned = temporal.plus_units(field.truncate(millis)? - millis, ChronoUnit::Millis)?;

    if aligned.supports_field(ChronoField::NanoOfSecond) {
        let nanos = aligned.get_value(ChronoField::NanoOfSecond)?;
        if nanos % NANOS_PER_MILLI != 0 {
            return aligned.with_value(ChronoField::NanoOfSecond, nanos - nanos % NANOS_PER_MILLI);
        }
    }
    Ok(aligned)
}
