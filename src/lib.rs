//! Hebrew and Gregorian calendar arithmetic with holidays, weekly Torah
//! readings and a few derived daily facts (Omer count, Daf Yomi).
//!
//! Every date type is validated on construction and converts losslessly to
//! the others through a Julian day number.
//!
//! ```
//! use luach::{GregorianDate, HebrewMonth, gregorian_to_hebrew};
//!
//! let date = GregorianDate::new(2018, 11, 2).unwrap();
//! let hebrew = gregorian_to_hebrew(date).unwrap();
//! assert_eq!(hebrew.month(), HebrewMonth::Marcheshvan);
//! assert_eq!(hebrew.to_string(), "24 Marcheshvan 5779");
//! ```

mod arithmetic;
mod config;
mod consts;
mod daf_yomi;
mod date;
mod error;
mod gematria;
mod gregorian;
mod hebrew;
mod holiday;
mod holiday_table;
mod info;
mod julian;
mod language;
mod month;
mod navigator;
mod omer;
mod parasha;
mod parasha_table;
mod prelude;
mod span;

pub use arithmetic::{YearKind, is_leap_year, month_length, months_in_year, new_year_jdn, year_length};
pub use config::CalendarConfig;
pub use consts::*;
pub use daf_yomi::{DafYomi, Tractate};
pub use date::CalendarDate;
pub use error::CalendarError;
pub use gematria::hebrew_numeral;
pub use gregorian::{Day, GregorianDate, Month, days_in_month, is_gregorian_leap_year};
pub use hebrew::{HebrewDate, RecurringDate};
pub use holiday::{Holiday, HolidayKind, HolidayName, Region, Rule, Shift, holidays_in_year, holidays_on, occurrences};
pub use info::DateInfo;
pub use julian::{JulianDay, Weekday};
pub use language::{Language, Localized};
pub use month::HebrewMonth;
pub use omer::{OMER_DAYS, omer_day, weeks_and_days};
pub use parasha::{Parasha, reading_for, shabbat_reading, year_type};
pub use span::DateSpan;

/// Hebrew date of a Gregorian day.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the day lies outside the supported
/// span.
pub fn gregorian_to_hebrew(date: GregorianDate) -> Result<HebrewDate, CalendarError> {
    HebrewDate::from_julian_day(date.to_julian_day())
}

/// Gregorian date of a Hebrew day.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the day lies outside the supported
/// span.
pub fn hebrew_to_gregorian(date: HebrewDate) -> Result<GregorianDate, CalendarError> {
    GregorianDate::from_julian_day(date.to_julian_day())
}

/// First Hebrew date on or after `date` for which `predicate` holds.
///
/// Returns `None` when no day up to 29 Elul 9999 qualifies.
pub fn upcoming<F>(date: HebrewDate, predicate: F) -> Option<HebrewDate>
where
    F: Fn(&CalendarDate) -> bool,
{
    let start = CalendarDate::from_hebrew(date).ok()?;
    navigator::upcoming(start, predicate).map(|found| found.hebrew())
}
