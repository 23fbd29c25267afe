use thiserror::Error;

/// Errors returned when constructing, converting, adjusting, formatting or
/// parsing Internet Time values.
///
/// Every operation is a pure computation, so errors are returned at the point
/// of detection and are never retried or logged by this crate.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("{what} is not supported by {temporal}")]
    UnsupportedTemporalType {
        what: String,
        temporal: &'static str,
    },
    #[error("unsupported field: {0}")]
    UnsupportedField(String),
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),
    #[error("value out of range for {field}: {value}")]
    OutOfRange { field: String, value: i64 },
    #[error("cannot derive InternetTime from {0}")]
    Irreconcilable(&'static str),
    #[error("an overflow occurred")]
    Overflow,
    #[error("text '{text}' could not be parsed at index {index}")]
    Parse { text: String, index: usize },
    #[error("invalid formatter: {0}")]
    InvalidFormatter(&'static str),
}

impl Error {
    pub(crate) fn out_of_range(field: impl core::fmt::Display, value: i64) -> Self {
        Error::OutOfRange {
            field: field.to_string(),
            value,
        }
    }

    pub(crate) fn unsupported(what: impl core::fmt::Display, temporal: &'static str) -> Self {
        Error::UnsupportedTemporalType {
            what: what.to_string(),
            temporal,
        }
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(_: time::error::ComponentRange) -> Self {
        Error::Overflow
    }
}
