//! Error types for the luach crate.

/// Error type for all fallible operations in the crate.
///
/// The first six variants make up the "invalid date" family: they are raised
/// when a date is constructed or parsed and never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the supported range of its calendar.
    #[error("Invalid year: {year} (must be {min}-{max})")]
    InvalidYear { year: i32, min: i32, max: i32 },

    /// Month number that does not exist in the given year.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u8 },

    /// Day beyond the length of the month in that year.
    #[error("Invalid day {day} for month {month} of year {year} (max {max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Julian day number outside the convertible span.
    #[error("Julian day {jdn} is outside the supported range {min}-{max}")]
    OutOfRange { jdn: i32, min: i32, max: i32 },

    /// Text that does not have the expected date shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty input where a date was expected.
    #[error("Empty date string")]
    EmptyInput,

    /// Numeric input outside the bounds an operation supports.
    #[error("Value {value} is out of range (must be {min}-{max})")]
    InvalidRange { value: i64, min: i64, max: i64 },

    /// Date span whose start is after its end.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvertedSpan { start: String, end: String },

    /// Language tag with no name table.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl CalendarError {
    /// True for errors raised while building or parsing a date.
    pub const fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear { .. }
                | Self::InvalidMonth { .. }
                | Self::InvalidDay { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidFormat(_)
                | Self::EmptyInput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        struct TestCase {
            error:    CalendarError,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                error:    CalendarError::InvalidYear { year: 0, min: 1, max: 9999 },
                expected: "Invalid year: 0 (must be 1-9999)",
            },
            TestCase {
                error:    CalendarError::InvalidMonth { year: 5784, month: 6 },
                expected: "Invalid month 6 for year 5784",
            },
            TestCase {
                error:    CalendarError::InvalidDay { year: 5779, month: 2, day: 30, max: 29 },
                expected: "Invalid day 30 for month 2 of year 5779 (max 29)",
            },
            TestCase {
                error:    CalendarError::InvalidRange { value: 0, min: 1, max: 9999 },
                expected: "Value 0 is out of range (must be 1-9999)",
            },
            TestCase {
                error:    CalendarError::UnsupportedLanguage("klingon".into()),
                expected: "Unsupported language: klingon",
            },
        ];

        for case in &cases {
            assert_eq!(case.error.to_string(), case.expected);
        }
    }

    #[test]
    fn test_invalid_date_family() {
        assert!(CalendarError::EmptyInput.is_invalid_date());
        assert!(CalendarError::OutOfRange { jdn: 0, min: 1, max: 2 }.is_invalid_date());
        assert!(!CalendarError::InvalidRange { value: 0, min: 1, max: 2 }.is_invalid_date());
        assert!(!CalendarError::UnsupportedLanguage("x".into()).is_invalid_date());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
