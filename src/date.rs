use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gregorian::GregorianDate;
use crate::hebrew::HebrewDate;
use crate::julian::{JulianDay, Weekday};
use crate::CalendarError;
use crate::consts::{MAX_JULIAN_DAY, MIN_JULIAN_DAY};

/// A day expressed in both calendars at once.
///
/// All three representations are computed when the value is built, so there
/// is never a question of which one is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "GregorianDate", into = "GregorianDate")]
pub struct CalendarDate {
    jdn:       JulianDay,
    gregorian: GregorianDate,
    hebrew:    HebrewDate,
}

impl CalendarDate {
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the supported span.
    pub fn from_jdn(jdn: JulianDay) -> Result<Self, CalendarError> {
        Ok(Self {
            jdn,
            gregorian: GregorianDate::from_julian_day(jdn)?,
            hebrew: HebrewDate::from_julian_day(jdn)?,
        })
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the supported span.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, CalendarError> {
        let jdn = date.to_julian_day();
        Ok(Self {
            jdn,
            gregorian: date,
            hebrew: HebrewDate::from_julian_day(jdn)?,
        })
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the supported span.
    pub fn from_hebrew(date: HebrewDate) -> Result<Self, CalendarError> {
        let jdn = date.to_julian_day();
        Ok(Self {
            jdn,
            gregorian: GregorianDate::from_julian_day(jdn)?,
            hebrew: date,
        })
    }

    pub const fn jdn(&self) -> JulianDay {
        self.jdn
    }

    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub const fn hebrew(&self) -> HebrewDate {
        self.hebrew
    }

    pub const fn weekday(&self) -> Weekday {
        self.jdn.weekday()
    }

    /// # Errors
    /// Fails only on the last supported day.
    pub fn next_day(&self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// # Errors
    /// Fails only on the first supported day.
    pub fn previous_day(&self) -> Result<Self, CalendarError> {
        self.add_days(-1)
    }

    /// The date `days` away (negative goes backwards).
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the supported span.
    pub fn add_days(&self, days: i32) -> Result<Self, CalendarError> {
        let target = self.jdn.get().checked_add(days).ok_or(CalendarError::OutOfRange {
            jdn: if days < 0 { i32::MIN } else { i32::MAX },
            min: MIN_JULIAN_DAY,
            max: MAX_JULIAN_DAY,
        })?;
        Self::from_jdn(JulianDay::new(target))
    }
}

impl TryFrom<GregorianDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(date)
    }
}

impl TryFrom<HebrewDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: HebrewDate) -> Result<Self, Self::Error> {
        Self::from_hebrew(date)
    }
}

impl From<CalendarDate> for GregorianDate {
    fn from(date: CalendarDate) -> Self {
        date.gregorian
    }
}

impl From<CalendarDate> for HebrewDate {
    fn from(date: CalendarDate) -> Self {
        date.hebrew
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.gregorian, self.hebrew)
    }
}
