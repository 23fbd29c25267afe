use inettime::*;
use std::time::{Duration, SystemTime};
use time::macros::{date, datetime, offset};
use time::{Date, OffsetDateTime, UtcOffset};

#[test]
fn midnight_across_offsets() {
    // midnight on 2025-10-12 at each offset, as (beat, centibeat, date)
    let cases: [(UtcOffset, u32, u32, Date); 6] = [
        (offset!(+1), 0, 0, date!(2025 - 10 - 12)),
        (offset!(UTC), 41, 4_166, date!(2025 - 10 - 12)),
        (offset!(-5), 250, 25_000, date!(2025 - 10 - 12)),
        (offset!(-8), 375, 37_500, date!(2025 - 10 - 12)),
        (offset!(+9), 666, 66_666, date!(2025 - 10 - 11)),
        (offset!(+10), 625, 62_500, date!(2025 - 10 - 11)),
    ];

    for (offset, beat, centibeat, date) in cases {
        let t = datetime!(2025-10-12 0:00).assume_offset(offset);
        let it = InternetTime::from_offset_date_time(t).unwrap();
        assert_eq!(it.beat(), beat, "offset: {offset}");
        assert_eq!(it.centibeat_of_day(), centibeat, "offset: {offset}");
        assert_eq!(it.date(), date, "offset: {offset}");

        // the field protocol agrees with the value type
        assert_eq!(
            InternetTimeField::BeatOfDay.get_from(&t),
            Ok(i64::from(beat)),
            "offset: {offset}"
        );
        assert_eq!(InternetTime::from_temporal(&t), Ok(it));
    }
}

#[test]
fn time_of_beat() {
    let cases = [
        (0, "00:00+01:00"),
        (1, "00:01:26.400+01:00"),
        (250, "06:00+01:00"),
        (499, "11:58:33.600+01:00"),
        (500, "12:00+01:00"),
        (999, "23:58:33.600+01:00"),
    ];
    for (beat, expected) in cases {
        assert_eq!(
            InternetTime::time_of_beat(beat).unwrap().to_string(),
            expected,
            "beat: {beat}"
        );
    }

    assert_eq!(
        InternetTime::time_of_beats(999, 99).unwrap().to_string(),
        "23:59:59.136+01:00"
    );
    assert_eq!(
        InternetTime::time_of_beats(0, 1).unwrap().to_string(),
        "00:00:00.864+01:00"
    );
    assert!(matches!(
        InternetTime::time_of_beat(1_000),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        InternetTime::time_of_beats(1, 100),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn date_rollover() {
    let it = InternetTime::of(date!(2025 - 10 - 12), 999, 99, offset!(+12)).unwrap();
    assert_eq!(it.date(), date!(2025 - 10 - 11));
    assert_eq!(it.centibeat_of_day(), 99_999);

    let it = InternetTime::of(date!(2025 - 10 - 12), 0, 0, offset!(-12)).unwrap();
    assert_eq!(it.date(), date!(2025 - 10 - 13));

    // 11:58 on the same day at -12:00
    let it = InternetTime::of(date!(2025 - 10 - 12), 999, 0, offset!(-12)).unwrap();
    assert_eq!(it.date(), date!(2025 - 10 - 12));

    let it = InternetTime::of(date!(2025 - 12 - 31), 0, 0, offset!(-1)).unwrap();
    assert_eq!(it.date(), date!(2026 - 01 - 01));
}

#[test]
fn offset_round_trip() {
    let offsets = [
        offset!(-12),
        offset!(-9:30),
        offset!(UTC),
        offset!(+1),
        offset!(+5:45),
        offset!(+14),
    ];
    let start = datetime!(2025-10-12 0:00 UTC);

    for offset in offsets {
        for minutes in (0..24 * 60).step_by(7) {
            let t = (start + time::Duration::minutes(minutes) + time::Duration::milliseconds(357))
                .to_offset(offset);
            let back = InternetTime::from_offset_date_time(t)
                .unwrap()
                .to_offset_date_time()
                .to_offset(offset);

            assert!(back <= t, "{back} > {t}");
            assert!(t - back < time::Duration::milliseconds(864), "{t} - {back}");
            assert_eq!(back.offset(), offset);
        }
    }
}

#[test]
fn instants() {
    let it = InternetTime::from_instant(SystemTime::UNIX_EPOCH).unwrap();
    assert_eq!(it.date(), date!(1970 - 01 - 01));
    assert_eq!(it.centibeat_of_day(), 4_166);

    let before = SystemTime::UNIX_EPOCH - Duration::from_secs(3_600);
    let it = InternetTime::from_instant(before).unwrap();
    assert_eq!(it.date(), date!(1970 - 01 - 01));
    assert_eq!(it.centibeat_of_day(), 0);
    assert_eq!(it.to_instant(), Ok(before));

    let clock = FixedClock::new(SystemTime::UNIX_EPOCH + Duration::from_millis(86_400_000));
    let it = InternetTime::now_with(&clock).unwrap();
    assert_eq!(it.date(), date!(1970 - 01 - 02));
    assert_eq!(InternetTime::from_temporal(&clock.instant()), Ok(it));

    let now = InternetTime::now().unwrap();
    assert!(now.year() >= 2024);
}

#[test]
fn fields_on_other_types() {
    let t = datetime!(2025-10-12 05:37:51.9 -05:00);
    assert_eq!(InternetTimeField::BeatOfDay.get_from(&t), Ok(484));
    assert_eq!(InternetTimeField::CentibeatOfDay.get_from(&t), Ok(48_462));
    assert_eq!(InternetTimeField::CentibeatOfBeat.get_from(&t), Ok(62));

    let adjusted = InternetTimeField::BeatOfDay.adjust_into(t, 0).unwrap();
    assert_eq!(adjusted, datetime!(2025-10-12 18:00 -05:00));

    assert!(matches!(
        InternetTimeField::BeatOfDay.get_from(&time::macros::time!(12:00)),
        Err(Error::UnsupportedTemporalType { .. })
    ));
    assert!(matches!(
        InternetTimeField::BeatOfDay.adjust_into(t, 1_000),
        Err(Error::OutOfRange { .. })
    ));

    let plus = InternetTimeUnit::Beats.add_to(t, 10).unwrap();
    assert_eq!(plus - t, time::Duration::seconds(864));
    assert_eq!(InternetTimeUnit::Centibeats.between(&t, &plus), Ok(1_000));
}

#[derive(Debug)]
struct HalfOfDay;

impl core::fmt::Display for HalfOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("HalfOfDay")
    }
}

impl ExternalField for HalfOfDay {
    fn is_supported_by(&self, _time: &InternetTime) -> bool {
        true
    }

    fn range_refined_by(&self, _time: &InternetTime) -> Result<ValueRange, Error> {
        Ok(ValueRange::new(0, 1))
    }

    fn get_from(&self, time: &InternetTime) -> Result<i64, Error> {
        Ok(i64::from(time.beat() / 500))
    }

    fn adjust_into(&self, time: InternetTime, value: i64) -> Result<InternetTime, Error> {
        let value = ValueRange::new(0, 1).check(value, self)?;
        let beat = i64::from(time.beat() % 500) + value * 500;
        time.with(InternetTimeField::BeatOfDay.into(), beat)
    }
}

#[derive(Debug)]
struct Decibeats;

impl core::fmt::Display for Decibeats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Decibeats")
    }
}

impl ExternalUnit for Decibeats {
    fn is_supported_by(&self, _time: &InternetTime) -> bool {
        true
    }

    fn add_to(&self, time: InternetTime, amount: i64) -> Result<InternetTime, Error> {
        time.plus(amount * 10, InternetTimeUnit::Centibeats.into())
    }

    fn between(&self, start: &InternetTime, end: &OffsetDateTime) -> Result<i64, Error> {
        Ok(start.until(end, InternetTimeUnit::Centibeats.into())? / 10)
    }
}

#[test]
fn external_fields_and_units() {
    let it = InternetTime::of(date!(2025 - 10 - 12), 234, 56, InternetTime::OFFSET).unwrap();

    let half: &dyn ExternalField = &HalfOfDay;
    assert!(it.is_supported_field(Field::External(half)));
    assert_eq!(it.get(Field::External(half)), Ok(0));
    assert_eq!(it.range(Field::External(half)), Ok(ValueRange::new(0, 1)));

    let afternoon = it.with(Field::External(half), 1).unwrap();
    assert_eq!(afternoon.beat(), 734);
    assert_eq!(afternoon.centibeat_of_beat(), 0);
    assert!(matches!(
        it.with(Field::External(half), 2),
        Err(Error::OutOfRange { .. })
    ));

    let decibeats: &dyn ExternalUnit = &Decibeats;
    let later = it.plus(3, Unit::External(decibeats)).unwrap();
    assert_eq!(later.centibeat_of_day(), 23_486);
    assert_eq!(it.until(&later, Unit::External(decibeats)), Ok(3));
    assert_eq!(later.minus(3, Unit::External(decibeats)), Ok(it));

    assert_eq!(Field::External(half).to_string(), "HalfOfDay");
    assert_eq!(Unit::External(decibeats).to_string(), "Decibeats");
}

#[test]
fn conversions() {
    let it = InternetTime::of(date!(2025 - 12 - 31), 234, 56, InternetTime::OFFSET).unwrap();
    let t: OffsetDateTime = it.into();
    assert_eq!(t, datetime!(2025-12-31 05:37:45.984 +01:00));
    assert_eq!(InternetTime::try_from(t), Ok(it));
    assert_eq!(it.to_string(), "d31.12.2025 @234.56");
    assert_eq!(it.to_offset_time().to_string(), "05:37:45.984+01:00");
    assert_eq!(it.offset(), InternetTime::OFFSET);
    assert_eq!(it.precision(), InternetTimeUnit::Centibeats);
}
