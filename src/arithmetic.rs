//! Molad and postponement arithmetic for the fixed Hebrew calendar.
//!
//! All functions here are total: they accept any year and never fail.
//! Validation of year ranges happens where dates are constructed.

use serde::{Deserialize, Serialize};

use crate::consts::{
    EPOCH_MOLAD_PARTS, EPOCH_YEAR, HEBREW_EPOCH_JDN, LEAP_CYCLE, MONTH_EXCESS_PARTS, PARTS_PER_DAY, PARTS_PER_HOUR,
    PARTS_PER_WEEK,
};
use crate::julian::JulianDay;
use crate::month::HebrewMonth;
use crate::prelude::*;

/// Leap-cycle position below which a Tuesday molad past 15h 204p postpones.
const GATARAD_CYCLE_LIMIT: i64 = 12;
/// Leap-cycle position below which a Monday molad past 21h 589p postpones.
const BETUTAKPAT_CYCLE_LIMIT: i64 = 7;
const GATARAD_PARTS: i64 = 15 * PARTS_PER_HOUR + 204;
const BETUTAKPAT_PARTS: i64 = 21 * PARTS_PER_HOUR + 589;

/// Days from the molad of the reference year to 1 Tishrei of `year`.
///
/// Floor division is used throughout so the result stays exact for years
/// before the reference epoch.
pub fn days_since_epoch(year: i32) -> i32 {
    let years = i64::from(year - EPOCH_YEAR);
    let cycle = i64::from(LEAP_CYCLE);
    let leap_months = (7 * years + 1).div_euclid(cycle);
    let leap_left = (7 * years + 1).rem_euclid(cycle);
    let months = 12 * years + leap_months;

    let parts = months * MONTH_EXCESS_PARTS + EPOCH_MOLAD_PARTS;
    let mut days = months * 28 + parts.div_euclid(PARTS_PER_DAY) - 2;

    let parts_left_in_day = parts.rem_euclid(PARTS_PER_DAY);
    let mut week_day = parts.rem_euclid(PARTS_PER_WEEK).div_euclid(PARTS_PER_DAY);

    if (leap_left < GATARAD_CYCLE_LIMIT && week_day == 3 && parts_left_in_day >= GATARAD_PARTS)
        || (leap_left < BETUTAKPAT_CYCLE_LIMIT && week_day == 2 && parts_left_in_day >= BETUTAKPAT_PARTS)
    {
        days += 1;
        week_day += 1;
    }

    // Lo ADU: Sunday, Wednesday and Friday are pushed a day
    if matches!(week_day, 1 | 4 | 6) {
        days += 1;
    }

    // In range for every year up to well past 9999
    #[allow(clippy::cast_possible_truncation)]
    {
        days as i32
    }
}

/// Julian day number of 1 Tishrei of `year`.
pub fn new_year_jdn(year: i32) -> JulianDay {
    JulianDay::new(days_since_epoch(year) + HEBREW_EPOCH_JDN + 1)
}

/// Number of days in `year`: one of 353, 354, 355, 383, 384 or 385.
pub fn year_length(year: u16) -> u16 {
    let year = i32::from(year);
    let length = days_since_epoch(year + 1) - days_since_epoch(year);
    // Always 353..=385
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        length as u16
    }
}

/// True when `year` has thirteen months.
pub const fn is_leap_year(year: u16) -> bool {
    matches!(year % 19, 0 | 3 | 6 | 8 | 11 | 14 | 17)
}

/// Length class of a Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKind {
    /// 353 or 383 days: Kislev has 29 days.
    #[display(fmt = "deficient")]
    Deficient,
    /// 354 or 384 days.
    #[display(fmt = "regular")]
    Regular,
    /// 355 or 385 days: Marcheshvan has 30 days.
    #[display(fmt = "complete")]
    Complete,
}

impl YearKind {
    pub fn of(year: u16) -> Self {
        match year_length(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }

    /// 0 for deficient, 1 for regular, 2 for complete.
    pub const fn class(self) -> u8 {
        match self {
            Self::Deficient => 0,
            Self::Regular => 1,
            Self::Complete => 2,
        }
    }
}

/// Months of `year` in calendar order, starting from Tishrei.
pub fn months_in_year(year: u16) -> &'static [HebrewMonth] {
    if is_leap_year(year) {
        &HebrewMonth::LEAP_YEAR
    } else {
        &HebrewMonth::COMMON_YEAR
    }
}

/// Number of days in `month` of `year` (29 or 30).
///
/// The month is not checked against the year: plain Adar reports 29 even in
/// a leap year.
pub fn month_length(year: u16, month: HebrewMonth) -> u8 {
    match month {
        HebrewMonth::Marcheshvan => {
            if YearKind::of(year) == YearKind::Complete {
                30
            } else {
                29
            }
        }
        HebrewMonth::Kislev => {
            if YearKind::of(year) == YearKind::Deficient {
                29
            } else {
                30
            }
        }
        HebrewMonth::Tishrei
        | HebrewMonth::Shvat
        | HebrewMonth::AdarI
        | HebrewMonth::Nisan
        | HebrewMonth::Sivan
        | HebrewMonth::Av => 30,
        HebrewMonth::Tevet
        | HebrewMonth::Adar
        | HebrewMonth::AdarII
        | HebrewMonth::Iyyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul => 29,
    }
}
