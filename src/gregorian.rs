use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_GREGORIAN_YEAR, MAX_JULIAN_DAY, MAX_MONTH, MIN_GREGORIAN_YEAR, MIN_JULIAN_DAY,
};
use crate::julian::{JulianDay, Weekday};
use crate::CalendarError;

/// A Gregorian month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        NonZeroU8::new(value)
            .filter(|_| value <= MAX_MONTH)
            .map(Self)
            .ok_or(CalendarError::InvalidMonth { year: 0, month: value })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, CalendarError> {
        let max = days_in_month(year, month.get());
        NonZeroU8::new(value)
            .filter(|_| value <= max)
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                year,
                month: month.get(),
                day: value,
                max,
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A proleptic Gregorian date within the span convertible to Hebrew years
/// 1 through 9999. Years use astronomical numbering (year 0 is 1 BCE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns an invalid-date `CalendarError` when a component is out of
    /// range, or `CalendarError::OutOfRange` when the date falls outside the
    /// convertible span.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear {
                year,
                min: MIN_GREGORIAN_YEAR,
                max: MAX_GREGORIAN_YEAR,
            });
        }
        let month = Month::new(month).map_err(|_| CalendarError::InvalidMonth { year, month })?;
        let day = Day::new(day, year, month)?;
        let date = Self { year, month, day };

        let jdn = date.to_julian_day().get();
        if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&jdn) {
            return Err(CalendarError::OutOfRange {
                jdn,
                min: MIN_JULIAN_DAY,
                max: MAX_JULIAN_DAY,
            });
        }
        Ok(date)
    }

    /// Converts a Julian day number to a Gregorian date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the supported span.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self, CalendarError> {
        check_range(jdn)?;
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self::new(year, month, day)
    }

    /// Returns the year (astronomical numbering)
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn to_julian_day(&self) -> JulianDay {
        gregorian_to_jdn(self.year, self.month.get(), self.day.get())
    }

    pub const fn weekday(&self) -> Weekday {
        self.to_julian_day().weekday()
    }
}

pub(crate) const fn check_range(jdn: JulianDay) -> Result<JulianDay, CalendarError> {
    let raw = jdn.get();
    if raw < MIN_JULIAN_DAY || raw > MAX_JULIAN_DAY {
        return Err(CalendarError::OutOfRange {
            jdn: raw,
            min: MIN_JULIAN_DAY,
            max: MAX_JULIAN_DAY,
        });
    }
    Ok(jdn)
}

/// Fliegel and Van Flandern's closed form, valid for the whole proleptic range.
pub const fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> JulianDay {
    let month = month as i32;
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    JulianDay::new(
        day as i32 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) - 32045,
    )
}

/// Inverse of [`gregorian_to_jdn`], returning `(year, month, day)`.
pub const fn jdn_to_gregorian(jdn: JulianDay) -> (i32, u8, u8) {
    let a = jdn.get() + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month as u8, day as u8)
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month(), self.day())
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month(), self.day())
        }
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        // A leading '-' marks a negative year, not a separator
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {s}"
            )));
        }

        let year = parse_number::<i32>(parts[0])?;
        let month = parse_number::<u8>(parts[1])?;
        let day = parse_number::<u8>(parts[2])?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
mod chrono_interop {
    use chrono::Datelike;

    use super::GregorianDate;
    use crate::CalendarError;

    impl TryFrom<chrono::NaiveDate> for GregorianDate {
        type Error = CalendarError;

        fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
            let month = u8::try_from(date.month()).map_err(|_| CalendarError::InvalidFormat(date.to_string()))?;
            let day = u8::try_from(date.day()).map_err(|_| CalendarError::InvalidFormat(date.to_string()))?;
            Self::new(date.year(), month, day)
        }
    }

    impl TryFrom<GregorianDate> for chrono::NaiveDate {
        type Error = CalendarError;

        fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
            Self::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
                .ok_or_else(|| CalendarError::InvalidFormat(date.to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_naive_date_both_ways() {
            let naive = chrono::NaiveDate::from_ymd_opt(2018, 11, 2).unwrap();
            let date = GregorianDate::try_from(naive).unwrap();
            assert_eq!(date.to_string(), "2018-11-02");
            assert_eq!(chrono::NaiveDate::try_from(date).unwrap(), naive);
        }
    }
}
