use inettime::*;
use time::macros::date;

#[test]
fn styles() {
    let it = InternetTime::of(date!(2025 - 12 - 31), 234, 67, InternetTime::OFFSET).unwrap();
    let cases = [
        (BeatStyle::Short, "234"),
        (BeatStyle::Medium, "@234"),
        (BeatStyle::Long, "234.67"),
        (BeatStyle::Full, "@234.67"),
    ];
    for (style, expected) in cases {
        assert_eq!(it.format(beat_formatter(style)).unwrap(), expected);
    }
}

#[test]
fn format_parse_inverse() {
    let date = date!(2025 - 10 - 12);
    let epoch = date!(1970 - 01 - 01);
    // (formatter, keeps the centibeat of the beat)
    let composites: [(&Formatter, bool); 4] = [
        (&*LOCAL_DATE_BEATS, false),
        (&*LOCAL_DATE_CENTIBEATS, true),
        (&*OFFSET_DATE_BEATS, false),
        (&*OFFSET_DATE_CENTIBEATS, true),
    ];

    for centibeats in 0..100_000 {
        let (beat, centibeat) = (centibeats / 100, centibeats % 100);
        let it = InternetTime::of(date, beat, centibeat, InternetTime::OFFSET).unwrap();

        for (formatter, fraction) in composites {
            let expected = if fraction {
                it
            } else {
                InternetTime::of(date, beat, 0, InternetTime::OFFSET).unwrap()
            };
            assert_inverse(&it, formatter, expected);
        }

        // without a date the parsed value falls on the epoch day
        for style in BeatStyle::ALL {
            let fraction = matches!(style, BeatStyle::Long | BeatStyle::Full);
            let expected = InternetTime::of(
                epoch,
                beat,
                if fraction { centibeat } else { 0 },
                InternetTime::OFFSET,
            )
            .unwrap();
            assert_inverse(&it, beat_formatter(style), expected);
        }
    }
}

fn assert_inverse(it: &InternetTime, formatter: &Formatter, expected: InternetTime) {
    let text = it.format(formatter).unwrap();
    let parsed = InternetTime::parse(&text, formatter).unwrap();
    assert_eq!(parsed, expected, "text: {text}");
    assert_eq!(parsed.format(formatter).unwrap(), text);
}

#[test]
fn parse_named_formats() {
    // (text, formatter, date, centibeat of day)
    let cases: [(&str, &Formatter, time::Date, u32); 8] = [
        ("2025-12-31 @234", &*LOCAL_DATE_BEATS, date!(2025 - 12 - 31), 23_400),
        ("2025-12-31 @234.56", &*LOCAL_DATE_CENTIBEATS, date!(2025 - 12 - 31), 23_456),
        ("2025-12-31 @234", &*LOCAL_DATE_CENTIBEATS, date!(2025 - 12 - 31), 23_400),
        ("2025-12-31+01:00 @234", &*OFFSET_DATE_BEATS, date!(2025 - 12 - 31), 23_400),
        ("2026-01-02-12:00 @345", &*OFFSET_DATE_BEATS, date!(2026 - 01 - 03), 34_500),
        ("2026-01-02+12:00 @789.23", &*OFFSET_DATE_CENTIBEATS, date!(2026 - 01 - 01), 78_923),
        ("2026-01-02+12:00 @345.67", &*OFFSET_DATE_CENTIBEATS, date!(2026 - 01 - 02), 34_567),
        ("2026-01-02Z @000", &*OFFSET_DATE_CENTIBEATS, date!(2026 - 01 - 03), 0),
    ];

    for (text, formatter, date, centibeats) in cases {
        let it = InternetTime::parse(text, formatter).unwrap();
        assert_eq!(it.date(), date, "text: {text}");
        assert_eq!(it.centibeat_of_day(), centibeats, "text: {text}");
    }

    let it = InternetTime::parse("d31.12.2025 @234.56", retro()).unwrap();
    assert_eq!(it.to_string(), "d31.12.2025 @234.56");
    let it = InternetTime::parse("31.12.2025 @234.56", retro()).unwrap();
    assert_eq!(it.date(), date!(2025 - 12 - 31));
}

fn retro() -> &'static Formatter {
    static RETRO: once_cell::sync::Lazy<Formatter> = once_cell::sync::Lazy::new(|| {
        FormatterBuilder::new()
            .optional_start()
            .literal("d")
            .optional_end()
            .value(ChronoField::DayOfMonth, 2)
            .literal(".")
            .value(ChronoField::MonthOfYear, 2)
            .literal(".")
            .year()
            .literal(" ")
            .beats(BeatStyle::Full)
            .build()
            .unwrap()
    });
    &RETRO
}

#[test]
fn parse_errors() {
    assert_eq!(
        InternetTime::parse("", &LOCAL_DATE_BEATS),
        Err(Error::MissingArgument("text"))
    );
    assert_eq!(
        InternetTime::parse("2025-12-31 234", &LOCAL_DATE_BEATS),
        Err(Error::Parse {
            text: "2025-12-31 234".to_string(),
            index: 11
        })
    );
    assert!(matches!(
        InternetTime::parse("2025-13-31 @234", &LOCAL_DATE_BEATS),
        Err(Error::Overflow | Error::OutOfRange { .. })
    ));
    assert!(matches!(
        InternetTime::parse("2025-02-30 @234", &LOCAL_DATE_BEATS),
        Err(Error::Overflow | Error::OutOfRange { .. })
    ));

    // an empty bag has no time of day
    assert_eq!(
        InternetTime::from_parsed(&Parsed::new()),
        Err(Error::Irreconcilable("Parsed"))
    );
}

#[test]
fn other_parsed_fields() {
    let clock_time = FormatterBuilder::new()
        .iso_offset_date()
        .literal("T")
        .value(ChronoField::HourOfDay, 2)
        .literal(":")
        .value(ChronoField::MinuteOfHour, 2)
        .build()
        .unwrap();
    let it = InternetTime::parse("2025-10-12T06:30-05:00", &clock_time);
    // the offset is parsed after the date, before the time
    assert!(matches!(it, Err(Error::Parse { .. })));

    let it = InternetTime::parse("2025-10-12-05:00T06:30", &clock_time).unwrap();
    // 11:30 UTC is 12:30 at the reference offset
    assert_eq!(it.date(), date!(2025 - 10 - 12));
    assert_eq!(it.centibeat_of_day(), 52_083);

    let parsed = Parsed::new()
        .with(InternetTimeField::CentibeatOfDay, 12_345)
        .unwrap();
    let it = InternetTime::from_temporal(&parsed).unwrap();
    assert_eq!(it.date(), date!(1970 - 01 - 01));
    assert_eq!(it.centibeat_of_day(), 12_345);

    let parsed = Parsed::new().with(ChronoField::InstantSeconds, 0).unwrap();
    assert_eq!(
        InternetTime::from_parsed(&parsed),
        InternetTime::from_epoch_millis(0)
    );
}
