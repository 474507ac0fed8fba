use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::SPAN_SEPARATOR;
use crate::date::CalendarDate;
use crate::gregorian::GregorianDate;
use crate::CalendarError;

/// An inclusive run of days. The start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateSpan {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvertedSpan` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvertedSpan {
                start: start.gregorian().to_string(),
                end:   end.gregorian().to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Span between two dates already known to be in order.
    pub(crate) const fn from_ordered(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Span covering a single day.
    pub const fn single(day: CalendarDate) -> Self {
        Self { start: day, end: day }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Number of days in the span, counting both ends.
    pub fn len(&self) -> u32 {
        self.end.jdn().days_since(self.start.jdn()).unsigned_abs() + 1
    }

    /// Always false: a span holds at least one day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// True when the two spans share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when every day of `self` is also in `other`.
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Iterates over every day of the span in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        let start = self.start;
        let count = self.end.jdn().days_since(start.jdn());
        (0..=count).filter_map(move |offset| start.add_days(offset).ok())
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SPAN_SEPARATOR}{}", self.start.gregorian(), self.end.gregorian())
    }
}

impl FromStr for DateSpan {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let mut parts = trimmed.split(SPAN_SEPARATOR);
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected exactly one '{SPAN_SEPARATOR}' between two dates: {s}"
            )));
        };

        let start = CalendarDate::from_gregorian(start.parse::<GregorianDate>()?)?;
        let end = CalendarDate::from_gregorian(end.parse::<GregorianDate>()?)?;
        Self::new(start, end)
    }
}

impl Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::from_gregorian(GregorianDate::new(year, month, day).unwrap()).unwrap()
    }

    fn span(start: (i32, u8, u8), end: (i32, u8, u8)) -> DateSpan {
        DateSpan::new(day(start.0, start.1, start.2), day(end.0, end.1, end.2)).unwrap()
    }

    #[test]
    fn test_new_span_cases() {
        struct TestCase {
            start:          (i32, u8, u8),
            end:            (i32, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          (2019, 10, 13),
                end:            (2019, 10, 14),
                should_succeed: true,
                description:    "start before end",
            },
            TestCase {
                start:          (2019, 10, 14),
                end:            (2019, 10, 13),
                should_succeed: false,
                description:    "start after end",
            },
            TestCase {
                start:          (2019, 10, 13),
                end:            (2019, 10, 13),
                should_succeed: true,
                description:    "single day",
            },
        ];

        for case in &cases {
            let (sy, sm, sd) = case.start;
            let (ey, em, ed) = case.end;
            let result = DateSpan::new(day(sy, sm, sd), day(ey, em, ed));
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_inverted_error_message() {
        let err = DateSpan::new(day(2019, 10, 14), day(2019, 10, 13)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date span: start (2019-10-14) is after end (2019-10-13)"
        );
    }

    #[test]
    fn test_len_and_days() {
        let sukkot = span((2019, 10, 14), (2019, 10, 16));
        assert_eq!(sukkot.len(), 3);
        assert!(!sukkot.is_empty());
        let days: Vec<_> = sukkot.days().map(|d| d.gregorian().day()).collect();
        assert_eq!(days, vec![14, 15, 16]);
        assert_eq!(DateSpan::single(day(2019, 10, 14)).len(), 1);
    }

    #[test]
    fn test_contains_overlaps_within() {
        let outer = span((2019, 10, 1), (2019, 10, 31));
        let inner = span((2019, 10, 10), (2019, 10, 12));
        let later = span((2019, 10, 31), (2019, 11, 5));
        let disjoint = span((2019, 11, 1), (2019, 11, 5));

        assert!(outer.contains(&day(2019, 10, 1)));
        assert!(outer.contains(&day(2019, 10, 31)));
        assert!(!outer.contains(&day(2019, 11, 1)));

        assert!(outer.overlaps(&later) && later.overlaps(&outer));
        assert!(!outer.overlaps(&disjoint));

        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
        assert!(!later.is_within(&outer));
    }

    #[test]
    fn test_ordering() {
        let a = span((2019, 10, 1), (2019, 10, 5));
        let b = span((2019, 10, 1), (2019, 10, 9));
        let c = span((2019, 10, 2), (2019, 10, 3));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display_and_parse() {
        let parsed: DateSpan = " 2019-10-13/2019-10-14 ".parse().unwrap();
        assert_eq!(parsed, span((2019, 10, 13), (2019, 10, 14)));
        assert_eq!(parsed.to_string(), "2019-10-13/2019-10-14");
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase { input: "", description: "empty" },
            TestCase { input: "2019-10-13", description: "no separator" },
            TestCase { input: "2019-10-13/2019-10-14/2019-10-15", description: "too many separators" },
            TestCase { input: "2019-10-13 to 2019-10-14", description: "other delimiter" },
            TestCase { input: "2019-10-14/2019-10-13", description: "inverted" },
            TestCase { input: "2019-02-30/2019-03-01", description: "invalid start" },
        ];

        for case in &cases {
            assert!(case.input.parse::<DateSpan>().is_err(), "{}", case.description);
        }
        assert!(matches!(
            "2019-10-14/2019-10-13".parse::<DateSpan>(),
            Err(CalendarError::InvertedSpan { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let value = span((2019, 10, 13), (2019, 10, 14));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2019-10-13/2019-10-14""#);
        let parsed: DateSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
