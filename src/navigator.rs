//! Walking from one day to the next, or to the next day of interest.

use tracing::trace;

use crate::CalendarError;
use crate::consts::{MAX_HEBREW_YEAR, MAX_JULIAN_DAY};
use crate::date::CalendarDate;
use crate::holiday::yom_tov_days;
use crate::info::DateInfo;
use crate::julian::Weekday;
use crate::span::DateSpan;

impl DateInfo {
    /// # Errors
    /// Fails only on the last supported day.
    pub fn next_day(&self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.date().next_day()?, self.diaspora()))
    }

    /// # Errors
    /// Fails only on the first supported day.
    pub fn previous_day(&self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.date().previous_day()?, self.diaspora()))
    }

    /// This day if it is a Saturday, else the coming one.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if that Saturday is past the
    /// supported span.
    pub fn upcoming_shabbat(&self) -> Result<Self, CalendarError> {
        let ahead = self.date().weekday().days_until(Weekday::Saturday);
        Ok(Self::new(self.date().add_days(ahead)?, self.diaspora()))
    }

    /// This day if it is a Yom Tov, else the first Yom Tov after it.
    ///
    /// Looks through the rest of this Hebrew year, then the next one, which
    /// always holds one.
    pub fn upcoming_yom_tov(&self) -> Option<Self> {
        if self.is_yom_tov() {
            return Some(*self);
        }

        let today = self.date().hebrew();
        let found = yom_tov_days(today.year(), self.diaspora())
            .into_iter()
            .find(|date| *date >= today)
            .or_else(|| {
                let next_year = today.year().checked_add(1).filter(|&next| next <= MAX_HEBREW_YEAR)?;
                trace!(from = %today, next_year, "no Yom Tov left this year");
                yom_tov_days(next_year, self.diaspora()).into_iter().next()
            })?;
        let date = CalendarDate::from_hebrew(found).ok()?;
        Some(Self::new(date, self.diaspora()))
    }

    /// First day of the Yom Tov or Shabbat run containing this day.
    ///
    /// Days outside such a run are their own first day.
    pub fn first_day(&self) -> Self {
        self.walk(Self::previous_day)
    }

    /// Last day of the Yom Tov or Shabbat run containing this day.
    pub fn last_day(&self) -> Self {
        self.walk(Self::next_day)
    }

    /// The Yom Tov or Shabbat run containing this day.
    pub fn span(&self) -> DateSpan {
        DateSpan::from_ordered(self.first_day().date(), self.last_day().date())
    }

    fn is_rest_day(&self) -> bool {
        self.is_shabbat() || self.is_yom_tov()
    }

    fn walk(&self, step: fn(&Self) -> Result<Self, CalendarError>) -> Self {
        let mut current = *self;
        if !current.is_rest_day() {
            return current;
        }
        while let Ok(neighbour) = step(&current) {
            if !neighbour.is_rest_day() {
                break;
            }
            trace!(from = %current.date(), to = %neighbour.date(), "extending rest day run");
            current = neighbour;
        }
        current
    }
}

/// First day on or after `date` that satisfies `predicate`, or `None` if no
/// day up to the end of the supported span does.
pub fn upcoming<F>(date: CalendarDate, predicate: F) -> Option<CalendarDate>
where
    F: Fn(&CalendarDate) -> bool,
{
    let mut current = date;
    loop {
        if predicate(&current) {
            trace!(start = %date, found = %current, "upcoming day found");
            return Some(current);
        }
        if current.jdn().get() >= MAX_JULIAN_DAY {
            trace!(start = %date, "no matching day before the end of the supported span");
            return None;
        }
        current = current.next_day().ok()?;
    }
}
