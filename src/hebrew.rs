use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic::{days_since_epoch, is_leap_year, month_length, new_year_jdn, year_length};
use crate::consts::{HEBREW_EPOCH_JDN, HEBREW_YEAR_OFFSET, LAST_EIGHT_MONTHS_DAYS, MAX_HEBREW_YEAR, MIN_HEBREW_YEAR};
use crate::gematria::hebrew_numeral;
use crate::gregorian::{check_range, jdn_to_gregorian};
use crate::julian::{JulianDay, Weekday};
use crate::language::{Language, Localized};
use crate::month::HebrewMonth;
use crate::CalendarError;

/// A validated date in the Hebrew calendar.
///
/// Ordering follows the civil year: Tishrei first, Elul last, with Adar I and
/// Adar II in their leap-year positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHebrewDate")]
pub struct HebrewDate {
    year:  u16,
    month: HebrewMonth,
    day:   u8,
}

#[derive(Deserialize)]
struct RawHebrewDate {
    year:  u16,
    month: HebrewMonth,
    day:   u8,
}

impl TryFrom<RawHebrewDate> for HebrewDate {
    type Error = CalendarError;

    fn try_from(raw: RawHebrewDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl HebrewDate {
    /// Creates a validated Hebrew date.
    ///
    /// # Errors
    /// - `InvalidYear` outside 1..=9999
    /// - `InvalidMonth` for Adar in a leap year or Adar I/II in a common year
    /// - `InvalidDay` when `day` is 0 or past the end of the month that year
    pub fn new(year: u16, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear {
                year: i32::from(year),
                min:  i32::from(MIN_HEBREW_YEAR),
                max:  i32::from(MAX_HEBREW_YEAR),
            });
        }

        let leap = is_leap_year(year);
        if month.is_adar() && month.is_leap_only() != leap {
            return Err(CalendarError::InvalidMonth {
                year:  i32::from(year),
                month: month.number(),
            });
        }

        let max = month_length(year, month);
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay {
                year: i32::from(year),
                month: month.number(),
                day,
                max,
            });
        }

        Ok(Self { year, month, day })
    }

    /// Converts a Julian day number to a Hebrew date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the supported span.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self, CalendarError> {
        let jdn = check_range(jdn)?;
        let (year, month, day) = jdn_to_hebrew(jdn);
        let month = HebrewMonth::try_from(month)?;
        Self::new(year, month, day)
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn to_julian_day(&self) -> JulianDay {
        hebrew_to_jdn(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> Weekday {
        self.to_julian_day().weekday()
    }

    /// Number of days since 1 Tishrei of the same year.
    pub fn day_of_year(&self) -> u16 {
        let days = self.to_julian_day().days_since(new_year_jdn(i32::from(self.year)));
        // Bounded by the year length
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            days as u16
        }
    }

    /// Drops the year, keeping the month and day for recurring matches.
    pub const fn recurring(&self) -> RecurringDate {
        RecurringDate { month: self.month, day: self.day }
    }

    /// Renders the date in `language`, e.g. `24 Marcheshvan 5779` or
    /// `כ״ד מרחשוון ה׳תשע״ט`.
    pub fn localized(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::Hebrew => {
                let day = hebrew_numeral(u16::from(self.day)).unwrap_or_default();
                let year = hebrew_numeral(self.year).unwrap_or_default();
                format!("{day} {} {year}", self.month.name(language))
            }
        }
    }

    fn sort_key(&self) -> (u16, u8, u8) {
        (self.year, self.month.position(), self.day)
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// A Hebrew month and day without a year, for matching recurring dates.
///
/// Ordering is by position within a year, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRecurringDate")]
pub struct RecurringDate {
    month: HebrewMonth,
    day:   u8,
}

#[derive(Deserialize)]
struct RawRecurringDate {
    month: HebrewMonth,
    day:   u8,
}

impl TryFrom<RawRecurringDate> for RecurringDate {
    type Error = CalendarError;

    fn try_from(raw: RawRecurringDate) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.day)
    }
}

impl RecurringDate {
    /// # Errors
    /// Returns `CalendarError::InvalidDay` when `day` cannot occur in `month`
    /// in any year.
    pub fn new(month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        let max = match month {
            HebrewMonth::Marcheshvan | HebrewMonth::Kislev => 30,
            _ => month_length(1, month),
        };
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay { year: 0, month: month.number(), day, max });
        }
        Ok(Self { month, day })
    }

    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Anchors this month and day in `year`.
    ///
    /// # Errors
    /// Fails when the month or day does not exist in that year.
    pub fn in_year(&self, year: u16) -> Result<HebrewDate, CalendarError> {
        HebrewDate::new(year, self.month, self.day)
    }

    /// True when `date` falls on this month and day.
    pub fn matches(&self, date: &HebrewDate) -> bool {
        date.month == self.month && date.day == self.day
    }
}

impl Ord for RecurringDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.month.position(), self.day, self.month.number()).cmp(&(
            other.month.position(),
            other.day,
            other.month.number(),
        ))
    }
}

impl PartialOrd for RecurringDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RecurringDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// Julian day number of a Hebrew date. Components are not validated.
///
/// Months are accumulated as alternating 30/29 blocks from Tishrei, then
/// corrected for complete, deficient and leap years. Adar II is treated as
/// day 30 onwards of Adar.
pub fn hebrew_to_jdn(year: u16, month: HebrewMonth, day: u8) -> JulianDay {
    let (month, day) = match month {
        HebrewMonth::AdarI => (6, i32::from(day)),
        HebrewMonth::AdarII => (6, i32::from(day) + 30),
        other => (i32::from(other.number()), i32::from(day)),
    };

    let length = i32::from(year_length(year));
    let mut days = days_since_epoch(i32::from(year)) + (59 * (month - 1) + 1) / 2 + day;

    if length % 10 > 4 && month > 2 {
        days += 1;
    }
    if length % 10 < 4 && month > 3 {
        days -= 1;
    }
    if length > 365 && month > 6 {
        days += 30;
    }

    JulianDay::new(days + HEBREW_EPOCH_JDN)
}

/// Splits a Julian day number into `(year, month number, day)`.
///
/// The jdn must lie within the supported span.
pub(crate) fn jdn_to_hebrew(jdn: JulianDay) -> (u16, u8, u8) {
    let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
    let mut year = gregorian_year + HEBREW_YEAR_OFFSET;
    if jdn < new_year_jdn(year) {
        year -= 1;
    }

    // The caller has range-checked jdn, so year is within 1..=9999
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hebrew_year = year as u16;
    let length = i32::from(year_length(hebrew_year));
    let mut days = jdn.days_since(new_year_jdn(year));

    let (month, day) = if days >= length - LAST_EIGHT_MONTHS_DAYS {
        // Shvat (or Adar I) through Elul always spans the same 236 days
        days -= length - LAST_EIGHT_MONTHS_DAYS;
        let month = days * 2 / 59;
        let day = days - (month * 59 + 1) / 2 + 1;
        let month = month + 5;
        if length > 355 && month <= 6 { (month + 8, day) } else { (month, day) }
    } else {
        let (month, day) = if length % 10 > 4 && days == 59 {
            // 30 Marcheshvan
            (1, 30)
        } else if length % 10 > 4 && days > 59 {
            let month = (days - 1) * 2 / 59;
            (month, days - (month * 59 + 1) / 2)
        } else if length % 10 < 4 && days > 87 {
            // after a 29-day Kislev
            let month = (days + 1) * 2 / 59;
            (month, days - (month * 59 + 1) / 2 + 2)
        } else {
            let month = days * 2 / 59;
            (month, days - (month * 59 + 1) / 2 + 1)
        };
        (month + 1, day)
    };

    // month is 1..=14 and day 1..=30
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (hebrew_year, month as u8, day as u8)
    }
}
