use super::{BeatStyle, FormatField, Formatter, Item, MAX_WIDTH};
use crate::{ChronoField, Error, InternetTimeField};

/// A builder that assembles a [`Formatter`] item by item.
///
/// Optional sections are opened with [`optional_start`] and closed with
/// [`optional_end`]. When formatting, a section is printed only if every field
/// in it is available. When parsing, a section that does not match is skipped.
///
/// [`optional_start`]: FormatterBuilder::optional_start
/// [`optional_end`]: FormatterBuilder::optional_end
#[derive(Clone, Debug)]
pub struct FormatterBuilder {
    // the first entry is the top level, each open optional section adds one
    sections: Vec<Vec<Item>>,
    error: Option<&'static str>,
}

impl FormatterBuilder {
    pub fn new() -> Self {
        Self {
            sections: vec![Vec::new()],
            error: None,
        }
    }

    fn push(mut self, item: Item) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.push(item);
        }
        self
    }

    fn fail(mut self, reason: &'static str) -> Self {
        self.error.get_or_insert(reason);
        self
    }

    /// Text that is printed as-is and must match exactly on parse.
    pub fn literal(self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        self.push(Item::Literal(text.to_string()))
    }

    /// A value printed zero-padded to exactly `width` digits.
    ///
    /// # Constraints:
    /// * `width` must be between 1 and 18
    /// * formatting a negative value, or one wider than `width`, is an error
    pub fn value(self, field: impl Into<FormatField>, width: usize) -> Self {
        if width == 0 || width > MAX_WIDTH {
            return self.fail("value width must be between 1 and 18");
        }
        self.push(Item::Value {
            field: field.into(),
            width,
        })
    }

    /// The proleptic year in at least four digits, with a sign outside
    /// 0000-9999.
    pub fn year(self) -> Self {
        self.push(Item::Year)
    }

    /// The offset as `Z` or `+HH:MM`, with `:SS` when there are seconds.
    pub fn offset_id(self) -> Self {
        self.push(Item::OffsetId)
    }

    /// `YYYY-MM-DD`
    pub fn iso_local_date(self) -> Self {
        self.year()
            .literal("-")
            .value(ChronoField::MonthOfYear, 2)
            .literal("-")
            .value(ChronoField::DayOfMonth, 2)
    }

    /// `YYYY-MM-DD` followed by the offset id.
    pub fn iso_offset_date(self) -> Self {
        self.iso_local_date().offset_id()
    }

    /// The beat of the day in one of the [`BeatStyle`]s.
    pub fn beats(self, style: BeatStyle) -> Self {
        let builder = if style.has_prefix() {
            self.literal("@")
        } else {
            self
        };
        let builder = builder.value(InternetTimeField::BeatOfDay, 3);
        if style.has_fraction() {
            builder
                .optional_start()
                .literal(".")
                .value(InternetTimeField::CentibeatOfBeat, 2)
                .optional_end()
        } else {
            builder
        }
    }

    pub fn optional_start(mut self) -> Self {
        self.sections.push(Vec::new());
        self
    }

    pub fn optional_end(mut self) -> Self {
        if self.sections.len() < 2 {
            return self.fail("optional section closed without being opened");
        }
        match self.sections.pop() {
            Some(items) => self.push(Item::Optional(items)),
            None => self,
        }
    }

    /// Appends all the items of an existing formatter.
    pub fn append(self, formatter: &Formatter) -> Self {
        formatter
            .items()
            .iter()
            .cloned()
            .fold(self, |builder, item| builder.push(item))
    }

    /// Consume the builder and produce a formatter.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFormatter`] if an optional section was left
    /// open or closed twice, or a value width is invalid.
    pub fn build(self) -> Result<Formatter, Error> {
        if let Some(reason) = self.error {
            return Err(Error::InvalidFormatter(reason));
        }
        if self.sections.len() != 1 {
            return Err(Error::InvalidFormatter("optional section left open"));
        }
        Ok(self.seal())
    }

    /// Closes any open sections and produces the formatter.
    pub(super) fn seal(mut self) -> Formatter {
        while self.sections.len() > 1 {
            self = self.optional_end();
        }
        Formatter::new(self.sections.pop().unwrap_or_default())
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
