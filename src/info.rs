//! Everything known about a single day for one observance region.

use serde::Serialize;

use crate::daf_yomi::DafYomi;
use crate::date::CalendarDate;
use crate::holiday::{Holiday, HolidayKind, holidays_on};
use crate::julian::Weekday;
use crate::omer::omer_day;
use crate::parasha::{Parasha, reading_for, shabbat_reading};

/// A day paired with the region whose customs apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateInfo {
    date:     CalendarDate,
    diaspora: bool,
}

impl DateInfo {
    pub const fn new(date: CalendarDate, diaspora: bool) -> Self {
        Self { date, diaspora }
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn diaspora(&self) -> bool {
        self.diaspora
    }

    /// Holidays on this day, in table order (Rosh Chodesh last).
    pub fn holidays(&self) -> Vec<&'static Holiday> {
        holidays_on(&self.date.hebrew(), self.diaspora)
    }

    pub fn is_holiday(&self) -> bool {
        !self.holidays().is_empty()
    }

    /// True when any holiday on this day is a Yom Tov.
    pub fn is_yom_tov(&self) -> bool {
        self.holidays().iter().any(|holiday| holiday.is_yom_tov())
    }

    pub fn is_shabbat(&self) -> bool {
        self.date.weekday() == Weekday::Saturday
    }

    /// Friday, or the eve of a Yom Tov.
    pub fn is_erev_shabbat_or_yom_tov(&self) -> bool {
        self.date.weekday() == Weekday::Friday
            || self
                .holidays()
                .iter()
                .any(|holiday| holiday.kind == HolidayKind::ErevYomTov)
    }

    /// Kind of the first holiday on this day.
    pub fn holiday_kind(&self) -> Option<HolidayKind> {
        self.holidays().first().map(|holiday| holiday.kind)
    }

    /// Reading for this day.
    ///
    /// With `weekly` set, weekdays report the reading of the coming Shabbat;
    /// otherwise only days on which a portion is read yield one.
    pub fn parasha(&self, weekly: bool) -> Option<Parasha> {
        let hebrew = self.date.hebrew();
        if weekly {
            reading_for(&hebrew, self.diaspora)
        } else {
            shabbat_reading(&hebrew, self.diaspora)
        }
    }

    pub const fn omer_day(&self) -> Option<u8> {
        omer_day(&self.date.hebrew())
    }

    pub fn daf_yomi(&self) -> Option<DafYomi> {
        DafYomi::for_day(self.date.jdn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::GregorianDate;
    use crate::holiday::HolidayName;

    fn info(year: i32, month: u8, day: u8, diaspora: bool) -> DateInfo {
        let date = GregorianDate::new(year, month, day).unwrap();
        DateInfo::new(CalendarDate::from_gregorian(date).unwrap(), diaspora)
    }

    #[test]
    fn test_day_flags() {
        struct TestCase {
            date:        (i32, u8, u8),
            diaspora:    bool,
            yom_tov:     bool,
            shabbat:     bool,
            erev:        bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2019, 9, 30),
                diaspora:    false,
                yom_tov:     true,
                shabbat:     false,
                erev:        false,
                description: "Rosh Hashana 5780",
            },
            TestCase {
                date:        (2019, 9, 29),
                diaspora:    false,
                yom_tov:     false,
                shabbat:     false,
                erev:        true,
                description: "Erev Rosh Hashana",
            },
            TestCase {
                date:        (2018, 11, 2),
                diaspora:    true,
                yom_tov:     false,
                shabbat:     false,
                erev:        true,
                description: "plain Friday",
            },
            TestCase {
                date:        (2018, 11, 3),
                diaspora:    true,
                yom_tov:     false,
                shabbat:     true,
                erev:        false,
                description: "plain Shabbat",
            },
            TestCase {
                date:        (2019, 10, 15),
                diaspora:    true,
                yom_tov:     true,
                shabbat:     false,
                erev:        false,
                description: "second day of Sukkot abroad",
            },
            TestCase {
                date:        (2019, 10, 15),
                diaspora:    false,
                yom_tov:     false,
                shabbat:     false,
                erev:        false,
                description: "Chol HaMoed in Israel",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let day = info(y, m, d, case.diaspora);
            assert_eq!(day.is_yom_tov(), case.yom_tov, "{}", case.description);
            assert_eq!(day.is_shabbat(), case.shabbat, "{}", case.description);
            assert_eq!(day.is_erev_shabbat_or_yom_tov(), case.erev, "{}", case.description);
        }
    }

    #[test]
    fn test_holidays_and_kind() {
        let chanukah = info(2018, 12, 3, true);
        assert!(chanukah.is_holiday());
        assert_eq!(chanukah.holidays()[0].name, HolidayName::Chanukah);
        assert_eq!(chanukah.holiday_kind(), Some(HolidayKind::MelachaPermitted));

        let plain = info(2018, 11, 2, true);
        assert!(!plain.is_holiday());
        assert_eq!(plain.holiday_kind(), None);
    }

    #[test]
    fn test_parasha_weekly_and_strict() {
        let friday = info(2018, 11, 2, true);
        assert_eq!(friday.parasha(true), Some(Parasha::ChayeiSara));
        assert_eq!(friday.parasha(false), None);

        let shabbat = info(2018, 11, 3, true);
        assert_eq!(shabbat.parasha(false), Some(Parasha::ChayeiSara));
    }

    #[test]
    fn test_omer_and_daf() {
        // 16 Nisan 5780
        let omer = info(2020, 4, 10, false);
        assert_eq!(omer.omer_day(), Some(1));
        assert_eq!(info(2018, 11, 2, false).omer_day(), None);

        assert_eq!(info(2020, 1, 5, false).daf_yomi().unwrap().to_string(), "Berachos 2");
        assert_eq!(info(1970, 1, 1, false).daf_yomi(), None);
    }
}
