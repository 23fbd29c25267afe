use super::FormatField;
use crate::{ChronoField, Error, InternetTimeField, TemporalAccessor, TemporalView};
use std::collections::BTreeMap;

/// The fields read from text by a [`Formatter`], not yet resolved into a value.
///
/// A `Parsed` can also be assembled by hand and resolved with
/// [`InternetTime::from_parsed`] or [`InternetTime::from_temporal`].
///
/// [`Formatter`]: crate::Formatter
/// [`InternetTime::from_parsed`]: crate::InternetTime::from_parsed
/// [`InternetTime::from_temporal`]: crate::InternetTime::from_temporal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    internet: BTreeMap<InternetTimeField, i64>,
    chrono: BTreeMap<ChronoField, i64>,
}

impl Parsed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: impl Into<FormatField>) -> Option<i64> {
        match field.into() {
            FormatField::Internet(field) => self.internet.get(&field).copied(),
            FormatField::Chrono(field) => self.chrono.get(&field).copied(),
        }
    }

    /// Records a value. Recording the same value twice is allowed, a different
    /// one is not.
    pub fn insert(&mut self, field: impl Into<FormatField>, value: i64) -> Result<(), Error> {
        let field = field.into();
        match self.get(field) {
            Some(previous) if previous != value => Err(Error::Irreconcilable("Parsed")),
            Some(_) => Ok(()),
            None => {
                match field {
                    FormatField::Internet(field) => self.internet.insert(field, value),
                    FormatField::Chrono(field) => self.chrono.insert(field, value),
                };
                Ok(())
            }
        }
    }

    /// Returns the bag with `value` recorded for `field`.
    pub fn with(mut self, field: impl Into<FormatField>, value: i64) -> Result<Self, Error> {
        self.insert(field, value)?;
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.internet.is_empty() && self.chrono.is_empty()
    }
}

impl TemporalAccessor for Parsed {
    fn supports_field(&self, field: ChronoField) -> bool {
        self.chrono.contains_key(&field)
    }

    fn get_value(&self, field: ChronoField) -> Result<i64, Error> {
        self.chrono
            .get(&field)
            .copied()
            .ok_or_else(|| Error::UnsupportedField(field.to_string()))
    }

    fn view(&self) -> TemporalView<'_> {
        TemporalView::Parsed(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let parsed = Parsed::new()
            .with(InternetTimeField::BeatOfDay, 234)
            .unwrap()
            .with(ChronoField::OffsetSeconds, 3_600)
            .unwrap();

        assert_eq!(parsed.get(InternetTimeField::BeatOfDay), Some(234));
        assert_eq!(parsed.get(InternetTimeField::CentibeatOfDay), None);
        assert!(parsed.supports_field(ChronoField::OffsetSeconds));
        assert!(!parsed.supports_field(ChronoField::Year));
        assert_eq!(parsed.get_value(ChronoField::OffsetSeconds), Ok(3_600));
        assert!(parsed.get_value(ChronoField::Year).is_err());
    }

    #[test]
    fn conflicts() {
        let mut parsed = Parsed::new();
        assert!(parsed.is_empty());
        assert_eq!(parsed.insert(ChronoField::Year, 2025), Ok(()));
        assert_eq!(parsed.insert(ChronoField::Year, 2025), Ok(()));
        assert!(parsed.insert(ChronoField::Year, 2026).is_err());
        assert_eq!(parsed.get(ChronoField::Year), Some(2025));
    }
}
