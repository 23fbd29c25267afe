use crate::Error;
use core::fmt::Display;

/// The inclusive range of valid values for a field.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn is_valid(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the value if it is within the range, otherwise an
    /// [`Error::OutOfRange`] naming the field.
    pub fn check(&self, value: i64, field: impl Display) -> Result<i64, Error> {
        if self.is_valid(value) {
            Ok(value)
        } else {
            Err(Error::out_of_range(field, value))
        }
    }
}

impl Display for ValueRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check() {
        let range = ValueRange::new(0, 999);
        assert_eq!(range.check(0, "BeatOfDay"), Ok(0));
        assert_eq!(range.check(999, "BeatOfDay"), Ok(999));
        assert_eq!(
            range.check(1000, "BeatOfDay"),
            Err(Error::OutOfRange {
                field: "BeatOfDay".to_string(),
                value: 1000
            })
        );
        assert!(range.check(-1, "BeatOfDay").is_err());
        assert_eq!(range.to_string(), "0 - 999");
    }
}
