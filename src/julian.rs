use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A Julian day number: a continuous count of days, used as the pivot
/// between the Gregorian and Hebrew calendars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct JulianDay(i32);

impl JulianDay {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Day of the week this day falls on.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index((self.0 + 1).rem_euclid(7))
    }

    /// The day `days` after (or before, when negative) this one.
    #[must_use]
    pub const fn offset(self, days: i32) -> Self {
        Self(self.0 + days)
    }

    /// Signed number of days from `other` to `self`.
    pub const fn days_since(self, other: Self) -> i32 {
        self.0 - other.0
    }
}

/// Day of the week, numbered Sunday = 1 through Saturday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 1,
    #[display(fmt = "Monday")]
    Monday = 2,
    #[display(fmt = "Tuesday")]
    Tuesday = 3,
    #[display(fmt = "Wednesday")]
    Wednesday = 4,
    #[display(fmt = "Thursday")]
    Thursday = 5,
    #[display(fmt = "Friday")]
    Friday = 6,
    #[display(fmt = "Saturday")]
    Saturday = 7,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Zero-based index with Sunday = 0; wraps modulo 7.
    const fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Day number, Sunday = 1 through Saturday = 7.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Days to advance from `self` to reach `target` (0..=6).
    pub const fn days_until(self, target: Self) -> i32 {
        (target.number() as i32 - self.number() as i32).rem_euclid(7)
    }
}
