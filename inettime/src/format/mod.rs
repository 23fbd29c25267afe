//! Text formatting and parsing of Internet Time values.
//!
//! A [`Formatter`] is an immutable sequence of items assembled with a
//! [`FormatterBuilder`]. It formats anything that implements
//! [`TemporalAccessor`] and parses text into a [`Parsed`] field bag, which
//! [`InternetTime::from_parsed`] resolves into a value.
//!
//! The four beat styles are built on first use and cached for the life of the
//! process, as are the composite date formats.

use crate::temporal::offset_id;
use crate::*;
use core::fmt::Display;
use log::debug;
use once_cell::race::OnceBox;
use once_cell::sync::Lazy;

mod builder;
mod parsed;

pub use builder::FormatterBuilder;
pub use parsed::Parsed;

/// Widest value item, in digits, that always fits an `i64`.
const MAX_WIDTH: usize = 18;

/// Digits accepted for a year on parse.
const MAX_YEAR_DIGITS: usize = 10;

/// How a time of day is written in *.beats*.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum BeatStyle {
    /// `457`
    Short,
    /// `@457`
    Medium,
    /// `457.89`, the fraction being optional on parse
    Long,
    /// `@457.89`, the fraction being optional on parse
    Full,
}

impl BeatStyle {
    pub const ALL: [BeatStyle; 4] = [
        BeatStyle::Short,
        BeatStyle::Medium,
        BeatStyle::Long,
        BeatStyle::Full,
    ];

    fn index(self) -> usize {
        match self {
            BeatStyle::Short => 0,
            BeatStyle::Medium => 1,
            BeatStyle::Long => 2,
            BeatStyle::Full => 3,
        }
    }

    fn has_prefix(self) -> bool {
        matches!(self, BeatStyle::Medium | BeatStyle::Full)
    }

    fn has_fraction(self) -> bool {
        matches!(self, BeatStyle::Long | BeatStyle::Full)
    }

    pub fn name(self) -> &'static str {
        match self {
            BeatStyle::Short => "Short",
            BeatStyle::Medium => "Medium",
            BeatStyle::Long => "Long",
            BeatStyle::Full => "Full",
        }
    }
}

impl Display for BeatStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A field that a formatter can print and parse.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormatField {
    Internet(InternetTimeField),
    Chrono(ChronoField),
}

impl FormatField {
    fn is_supported_by<T: TemporalAccessor + ?Sized>(self, temporal: &T) -> bool {
        match self {
            FormatField::Internet(field) => field.is_supported_by(temporal),
            FormatField::Chrono(field) => temporal.supports_field(field),
        }
    }

    fn get_from<T: TemporalAccessor + ?Sized>(self, temporal: &T) -> Result<i64, Error> {
        match self {
            FormatField::Internet(field) => field.get_from(temporal),
            FormatField::Chrono(field) => temporal.get_value(field),
        }
    }
}

impl From<InternetTimeField> for FormatField {
    fn from(field: InternetTimeField) -> Self {
        FormatField::Internet(field)
    }
}

impl From<ChronoField> for FormatField {
    fn from(field: ChronoField) -> Self {
        FormatField::Chrono(field)
    }
}

impl Display for FormatField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatField::Internet(field) => field.fmt(f),
            FormatField::Chrono(field) => field.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Item {
    Literal(String),
    /// A zero-padded, unsigned value of exactly `width` digits.
    Value {
        field: FormatField,
        width: usize,
    },
    /// At least four digits, signed outside 0000-9999.
    Year,
    /// `Z` or `+HH:MM[:SS]`.
    OffsetId,
    Optional(Vec<Item>),
}

impl Item {
    fn is_supported_by<T: TemporalAccessor + ?Sized>(&self, temporal: &T) -> bool {
        match self {
            Item::Literal(_) => true,
            Item::Value { field, .. } => field.is_supported_by(temporal),
            Item::Year => temporal.supports_field(ChronoField::Year),
            Item::OffsetId => temporal.supports_field(ChronoField::OffsetSeconds),
            Item::Optional(items) => items.iter().all(|item| item.is_supported_by(temporal)),
        }
    }

    fn format<T: TemporalAccessor + ?Sized>(
        &self,
        temporal: &T,
        out: &mut String,
    ) -> Result<(), Error> {
        match self {
            Item::Literal(text) => out.push_str(text),
            Item::Value { field, width } => {
                let value = field.get_from(temporal)?;
                let digits = value.to_string();
                if value < 0 || digits.len() > *width {
                    return Err(Error::out_of_range(field, value));
                }
                out.extend(core::iter::repeat('0').take(width - digits.len()));
                out.push_str(&digits);
            }
            Item::Year => {
                let year = temporal.get_value(ChronoField::Year)?;
                if year > 9_999 {
                    out.push('+');
                } else if year < 0 {
                    out.push('-');
                }
                out.push_str(&format!("{:04}", year.unsigned_abs()));
            }
            Item::OffsetId => {
                let seconds = temporal.get_value(ChronoField::OffsetSeconds)?;
                let offset = i32::try_from(seconds)
                    .ok()
                    .and_then(|seconds| time::UtcOffset::from_whole_seconds(seconds).ok())
                    .ok_or_else(|| Error::out_of_range(ChronoField::OffsetSeconds, seconds))?;
                out.push_str(&offset_id(offset));
            }
            Item::Optional(items) => {
                if self.is_supported_by(temporal) {
                    for item in items {
                        item.format(temporal, out)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Parses this item at byte `pos`, returning the position after it or the
    /// position of the failure.
    fn parse(&self, text: &str, pos: usize, parsed: &mut Parsed) -> Result<usize, usize> {
        let bytes = text.as_bytes();
        match self {
            Item::Literal(literal) => {
                if bytes[pos..].starts_with(literal.as_bytes()) {
                    Ok(pos + literal.len())
                } else {
                    Err(pos)
                }
            }
            Item::Value { field, width } => {
                let end = pos + width;
                let value = digits(bytes, pos, end)?;
                parsed.insert(*field, value).map_err(|_| pos)?;
                Ok(end)
            }
            Item::Year => {
                let (negative, start) = match bytes.get(pos) {
                    Some(b'+') => (false, pos + 1),
                    Some(b'-') => (true, pos + 1),
                    _ => (false, pos),
                };
                let count = bytes[start..]
                    .iter()
                    .take(MAX_YEAR_DIGITS)
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if count < 4 {
                    return Err(start + count);
                }
                let end = start + count;
                let year = digits(bytes, start, end)?;
                let year = if negative { -year } else { year };
                parsed.insert(ChronoField::Year, year).map_err(|_| pos)?;
                Ok(end)
            }
            Item::OffsetId => {
                let (seconds, end) = parse_offset(bytes, pos)?;
                parsed
                    .insert(ChronoField::OffsetSeconds, seconds)
                    .map_err(|_| pos)?;
                Ok(end)
            }
            Item::Optional(items) => {
                let mut attempt = parsed.clone();
                match parse_items(items, text, pos, &mut attempt) {
                    Ok(end) => {
                        *parsed = attempt;
                        Ok(end)
                    }
                    Err(_) => Ok(pos),
                }
            }
        }
    }
}

fn parse_items(items: &[Item], text: &str, pos: usize, parsed: &mut Parsed) -> Result<usize, usize> {
    items
        .iter()
        .try_fold(pos, |pos, item| item.parse(text, pos, parsed))
}

/// Reads `bytes[start..end]` as an unsigned decimal number.
fn digits(bytes: &[u8], start: usize, end: usize) -> Result<i64, usize> {
    if end > bytes.len() {
        let valid = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
        return Err(start + valid);
    }
    bytes[start..end]
        .iter()
        .enumerate()
        .try_fold(0_i64, |value, (i, b)| {
            if b.is_ascii_digit() {
                Ok(value * 10 + i64::from(b - b'0'))
            } else {
                Err(start + i)
            }
        })
}

fn parse_offset(bytes: &[u8], pos: usize) -> Result<(i64, usize), usize> {
    let negative = match bytes.get(pos) {
        Some(b'Z') => return Ok((0, pos + 1)),
        Some(b'+') => false,
        Some(b'-') => true,
        _ => return Err(pos),
    };

    let hours = digits(bytes, pos + 1, pos + 3)?;
    if bytes.get(pos + 3) != Some(&b':') {
        return Err(pos + 3);
    }
    let minutes = digits(bytes, pos + 4, pos + 6)?;
    let (seconds, end) = if bytes.get(pos + 6) == Some(&b':') {
        (digits(bytes, pos + 7, pos + 9)?, pos + 9)
    } else {
        (0, pos + 6)
    };

    if hours > 18 || minutes > 59 || seconds > 59 {
        return Err(pos + 1);
    }
    let total = hours * 3_600 + minutes * 60 + seconds;
    if total > 18 * 3_600 {
        return Err(pos + 1);
    }
    Ok((if negative { -total } else { total }, end))
}

/// An immutable formatter and parser.
///
/// Formatters are cheap to share between threads. Build one with
/// [`FormatterBuilder`], or use [`beat_formatter`] and the predefined
/// composite formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatter {
    items: Vec<Item>,
}

impl Formatter {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    /// Formats a value.
    ///
    /// Optional sections are printed whenever every field they contain is
    /// available from `temporal`. A required field that is not available is an
    /// error.
    pub fn format<T: TemporalAccessor + ?Sized>(&self, temporal: &T) -> Result<String, Error> {
        let mut out = String::new();
        for item in &self.items {
            item.format(temporal, &mut out)?;
        }
        Ok(out)
    }

    /// Parses the whole of `text` into a bag of fields.
    ///
    /// Values are only checked for shape here. Ranges and consistency are
    /// checked when the fields are resolved, for example by
    /// [`InternetTime::from_parsed`].
    pub fn parse(&self, text: &str) -> Result<Parsed, Error> {
        let error = |index| Error::Parse {
            text: text.to_string(),
            index,
        };

        let mut parsed = Parsed::new();
        let end = parse_items(&self.items, text, 0, &mut parsed).map_err(error)?;
        if end != text.len() {
            return Err(error(end));
        }
        Ok(parsed)
    }
}

static BEAT_FORMATTERS: [OnceBox<Formatter>; 4] =
    [OnceBox::new(), OnceBox::new(), OnceBox::new(), OnceBox::new()];

/// Returns the shared formatter for a beat style.
///
/// Each style is built on first use. Threads racing on the first use may each
/// build one, but all of them get the one that was published first.
pub fn beat_formatter(style: BeatStyle) -> &'static Formatter {
    BEAT_FORMATTERS[style.index()].get_or_init(|| {
        debug!("building {style} beat formatter");
        Box::new(FormatterBuilder::new().beats(style).seal())
    })
}

fn composite(name: &str, date: FormatterBuilder, style: BeatStyle) -> Formatter {
    debug!("building {name} formatter");
    date.literal(" ").beats(style).seal()
}

/// `2025-12-31 @234`
pub static LOCAL_DATE_BEATS: Lazy<Formatter> = Lazy::new(|| {
    composite(
        "local date beats",
        FormatterBuilder::new().iso_local_date(),
        BeatStyle::Medium,
    )
});

/// `2025-12-31 @234.56`
pub static LOCAL_DATE_CENTIBEATS: Lazy<Formatter> = Lazy::new(|| {
    composite(
        "local date centibeats",
        FormatterBuilder::new().iso_local_date(),
        BeatStyle::Full,
    )
});

/// `2025-12-31+01:00 @234`
pub static OFFSET_DATE_BEATS: Lazy<Formatter> = Lazy::new(|| {
    composite(
        "offset date beats",
        FormatterBuilder::new().iso_offset_date(),
        BeatStyle::Medium,
    )
});

/// `2025-12-31+01:00 @234.56`
pub static OFFSET_DATE_CENTIBEATS: Lazy<Formatter> = Lazy::new(|| {
    composite(
        "offset date centibeats",
        FormatterBuilder::new().iso_offset_date(),
        BeatStyle::Full,
    )
});

static RETRO: Lazy<Formatter> = Lazy::new(|| {
    let date = FormatterBuilder::new()
        .optional_start()
        .literal("d")
        .optional_end()
        .value(ChronoField::DayOfMonth, 2)
        .literal(".")
        .value(ChronoField::MonthOfYear, 2)
        .literal(".")
        .year();
    composite("retro", date, BeatStyle::Full)
});

/// `d31.12.2025 @234.56`, used by `Display`.
pub(crate) fn retro_formatter() -> &'static Formatter {
    &RETRO
}
