//! Holiday rule engine.
//!
//! Holidays are static records evaluated against a date in three steps: the
//! date's day and month must be among the holiday's candidates, the region
//! must match the caller's, and every [`Rule`] must hold.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic::{is_leap_year, month_length, new_year_jdn, year_length};
use crate::hebrew::HebrewDate;
use crate::holiday_table::HOLIDAYS;
use crate::julian::Weekday;
use crate::language::{Language, Localized};
use crate::month::HebrewMonth;
use crate::prelude::*;

/// Broad category of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    #[display(fmt = "yom_tov")]
    YomTov,
    #[display(fmt = "erev_yom_tov")]
    ErevYomTov,
    #[display(fmt = "hol_hamoed")]
    HolHamoed,
    #[display(fmt = "melacha_permitted")]
    MelachaPermitted,
    #[display(fmt = "fast_day")]
    FastDay,
    #[display(fmt = "modern_holiday")]
    ModernHoliday,
    #[display(fmt = "minor_holiday")]
    MinorHoliday,
    #[display(fmt = "memorial_day")]
    MemorialDay,
    #[display(fmt = "israel_national_holiday")]
    IsraelNationalHoliday,
    #[display(fmt = "rosh_chodesh")]
    RoshChodesh,
}

/// Where a holiday is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Any,
    IsraelOnly,
    DiasporaOnly,
}

impl Region {
    pub const fn applies(self, diaspora: bool) -> bool {
        match self {
            Self::Any => true,
            Self::IsraelOnly => !diaspora,
            Self::DiasporaOnly => diaspora,
        }
    }
}

/// Moves an observance `by` days when its nominal date falls `on` a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    pub on: Weekday,
    pub by: i8,
}

/// A condition a candidate date must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The observance falls on `day` of `month` (the candidate's own month
    /// when `None`), moved by the first shift whose weekday matches. Only the
    /// observed date satisfies the rule, so at most one date a year can.
    Postponable {
        day:    u8,
        month:  Option<HebrewMonth>,
        shifts: &'static [Shift],
    },
    /// The year is at least this.
    Since(u16),
    /// The year is below this.
    Before(u16),
    /// Plain Adar in common years, Adar I and II in leap years.
    CorrectAdar,
    /// Kislev has 29 days this year.
    ShortKislev,
}

impl Rule {
    pub fn holds(&self, date: &HebrewDate) -> bool {
        match *self {
            Self::Postponable { day, month, shifts } => {
                let month = month.unwrap_or_else(|| date.month());
                let Ok(nominal) = HebrewDate::new(date.year(), month, day) else {
                    return false;
                };
                let nominal = nominal.to_julian_day();
                let by = shifts
                    .iter()
                    .find(|shift| shift.on == nominal.weekday())
                    .map_or(0, |shift| i32::from(shift.by));
                date.to_julian_day() == nominal.offset(by)
            }
            Self::Since(year) => date.year() >= year,
            Self::Before(year) => date.year() < year,
            Self::CorrectAdar => match date.month() {
                HebrewMonth::Adar => !is_leap_year(date.year()),
                HebrewMonth::AdarI | HebrewMonth::AdarII => is_leap_year(date.year()),
                _ => true,
            },
            Self::ShortKislev => month_length(date.year(), HebrewMonth::Kislev) == 29,
        }
    }
}

/// Stable identifier of a holiday. Displays as its snake_case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayName {
    ErevRoshHashana,
    RoshHashanaI,
    #[serde(rename = "rosh_hashana_ii")]
    RoshHashanaII,
    TzomGedaliah,
    ErevYomKippur,
    YomKippur,
    ErevSukkot,
    Sukkot,
    #[serde(rename = "sukkot_ii")]
    SukkotII,
    HolHamoedSukkot,
    HoshanaRaba,
    ShminiAtzeret,
    SimchatTorah,
    RabinMemorialDay,
    Sigd,
    Chanukah,
    AsaraBtevet,
    TuBshvat,
    FamilyDay,
    MemorialDayUnknown,
    TaanitEsther,
    Purim,
    ShushanPurim,
    YomHaaliyah,
    ErevPesach,
    Pesach,
    #[serde(rename = "pesach_ii")]
    PesachII,
    HolHamoedPesach,
    #[serde(rename = "pesach_vii")]
    PesachVII,
    #[serde(rename = "pesach_viii")]
    PesachVIII,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    PesachSheni,
    LagBomer,
    YomYerushalayim,
    ErevShavuot,
    Shavuot,
    #[serde(rename = "shavuot_ii")]
    ShavuotII,
    TzomTammuz,
    ZeevZhabotinskyDay,
    TishaBav,
    TuBav,
    RoshChodesh,
}

impl HolidayName {
    /// Stable snake_case key, e.g. `"chanukah"`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ErevRoshHashana => "erev_rosh_hashana",
            Self::RoshHashanaI => "rosh_hashana_i",
            Self::RoshHashanaII => "rosh_hashana_ii",
            Self::TzomGedaliah => "tzom_gedaliah",
            Self::ErevYomKippur => "erev_yom_kippur",
            Self::YomKippur => "yom_kippur",
            Self::ErevSukkot => "erev_sukkot",
            Self::Sukkot => "sukkot",
            Self::SukkotII => "sukkot_ii",
            Self::HolHamoedSukkot => "hol_hamoed_sukkot",
            Self::HoshanaRaba => "hoshana_raba",
            Self::ShminiAtzeret => "shmini_atzeret",
            Self::SimchatTorah => "simchat_torah",
            Self::RabinMemorialDay => "rabin_memorial_day",
            Self::Sigd => "sigd",
            Self::Chanukah => "chanukah",
            Self::AsaraBtevet => "asara_btevet",
            Self::TuBshvat => "tu_bshvat",
            Self::FamilyDay => "family_day",
            Self::MemorialDayUnknown => "memorial_day_unknown",
            Self::TaanitEsther => "taanit_esther",
            Self::Purim => "purim",
            Self::ShushanPurim => "shushan_purim",
            Self::YomHaaliyah => "yom_haaliyah",
            Self::ErevPesach => "erev_pesach",
            Self::Pesach => "pesach",
            Self::PesachII => "pesach_ii",
            Self::HolHamoedPesach => "hol_hamoed_pesach",
            Self::PesachVII => "pesach_vii",
            Self::PesachVIII => "pesach_viii",
            Self::YomHashoah => "yom_hashoah",
            Self::YomHazikaron => "yom_hazikaron",
            Self::YomHaatzmaut => "yom_haatzmaut",
            Self::PesachSheni => "pesach_sheni",
            Self::LagBomer => "lag_bomer",
            Self::YomYerushalayim => "yom_yerushalayim",
            Self::ErevShavuot => "erev_shavuot",
            Self::Shavuot => "shavuot",
            Self::ShavuotII => "shavuot_ii",
            Self::TzomTammuz => "tzom_tammuz",
            Self::ZeevZhabotinskyDay => "zeev_zhabotinsky_day",
            Self::TishaBav => "tisha_bav",
            Self::TuBav => "tu_bav",
            Self::RoshChodesh => "rosh_chodesh",
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Localized for HolidayName {
    fn name(&self, language: Language) -> &'static str {
        let (english, hebrew) = match self {
            Self::ErevRoshHashana => ("Erev Rosh Hashana", "ערב ראש השנה"),
            Self::RoshHashanaI => ("Rosh Hashana I", "א׳ ראש השנה"),
            Self::RoshHashanaII => ("Rosh Hashana II", "ב׳ ראש השנה"),
            Self::TzomGedaliah => ("Tzom Gedaliah", "צום גדליה"),
            Self::ErevYomKippur => ("Erev Yom Kippur", "ערב יום הכפורים"),
            Self::YomKippur => ("Yom Kippur", "יום הכפורים"),
            Self::ErevSukkot => ("Erev Sukkot", "ערב סוכות"),
            Self::Sukkot => ("Sukkot", "סוכות"),
            Self::SukkotII => ("Sukkot II", "שני של סוכות"),
            Self::HolHamoedSukkot => ("Hol HaMoed Sukkot", "חול המועד סוכות"),
            Self::HoshanaRaba => ("Hoshana Raba", "הושענא רבה"),
            Self::ShminiAtzeret => ("Shmini Atzeret", "שמיני עצרת"),
            Self::SimchatTorah => ("Simchat Torah", "שמחת תורה"),
            Self::RabinMemorialDay => ("Yitzhak Rabin memorial day", "יום הזכרון ליצחק רבין"),
            Self::Sigd => ("Sigd", "סיגד"),
            Self::Chanukah => ("Chanukah", "חנוכה"),
            Self::AsaraBtevet => ("Asara B'Tevet", "צום עשרה בטבת"),
            Self::TuBshvat => ("Tu B'Shvat", "ט״ו בשבט"),
            Self::FamilyDay => ("Family Day", "יום המשפחה"),
            Self::MemorialDayUnknown => (
                "Memorial day for fallen whose place of burial is unknown",
                "יום זכרון לחללי מערכות ישראל שמקום קבורתם לא נודע",
            ),
            Self::TaanitEsther => ("Ta'anit Esther", "תענית אסתר"),
            Self::Purim => ("Purim", "פורים"),
            Self::ShushanPurim => ("Shushan Purim", "שושן פורים"),
            Self::YomHaaliyah => ("Yom HaAliyah", "יום העלייה"),
            Self::ErevPesach => ("Erev Pesach", "ערב פסח"),
            Self::Pesach => ("Pesach", "פסח"),
            Self::PesachII => ("Pesach II", "שני של פסח"),
            Self::HolHamoedPesach => ("Hol HaMoed Pesach", "חול המועד פסח"),
            Self::PesachVII => ("Pesach VII", "שביעי פסח"),
            Self::PesachVIII => ("Pesach VIII", "אחרון של פסח"),
            Self::YomHashoah => ("Yom HaShoah", "יום השואה"),
            Self::YomHazikaron => ("Yom HaZikaron", "יום הזכרון"),
            Self::YomHaatzmaut => ("Yom HaAtzmaut", "יום העצמאות"),
            Self::PesachSheni => ("Pesach Sheni", "פסח שני"),
            Self::LagBomer => ("Lag B'Omer", "ל״ג בעומר"),
            Self::YomYerushalayim => ("Yom Yerushalayim", "יום ירושלים"),
            Self::ErevShavuot => ("Erev Shavuot", "ערב שבועות"),
            Self::Shavuot => ("Shavuot", "שבועות"),
            Self::ShavuotII => ("Shavuot II", "שני של שבועות"),
            Self::TzomTammuz => ("Tzom Tammuz", "צום שבעה עשר בתמוז"),
            Self::ZeevZhabotinskyDay => ("Ze'ev Zhabotinsky day", "יום ז׳בוטינסקי"),
            Self::TishaBav => ("Tish'a B'Av", "תשעה באב"),
            Self::TuBav => ("Tu B'Av", "ט״ו באב"),
            Self::RoshChodesh => ("Rosh Chodesh", "ראש חודש"),
        };
        match language {
            Language::English => english,
            Language::Hebrew => hebrew,
        }
    }
}

/// A static holiday definition.
///
/// Candidate dates are every combination of `days` and `months`; a
/// candidate is an occurrence when the region and all `rules` agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    pub kind:   HolidayKind,
    pub name:   HolidayName,
    pub days:   &'static [u8],
    pub months: &'static [HebrewMonth],
    pub rules:  &'static [Rule],
    pub region: Region,
}

impl Holiday {
    /// True when this holiday falls on `date` for the given region.
    pub fn matches(&self, date: &HebrewDate, diaspora: bool) -> bool {
        self.days.contains(&date.day())
            && self.months.contains(&date.month())
            && self.region.applies(diaspora)
            && self.rules.iter().all(|rule| rule.holds(date))
    }

    pub fn is_yom_tov(&self) -> bool {
        self.kind == HolidayKind::YomTov
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

/// Holidays falling on `date`, in table order (Rosh Chodesh last).
pub fn holidays_on(date: &HebrewDate, diaspora: bool) -> Vec<&'static Holiday> {
    HOLIDAYS.iter().filter(|holiday| holiday.matches(date, diaspora)).collect()
}

/// Every day of `year` that has at least one holiday.
pub fn holidays_in_year(year: u16, diaspora: bool) -> BTreeMap<HebrewDate, Vec<&'static Holiday>> {
    let start = new_year_jdn(i32::from(year));
    (0..i32::from(year_length(year)))
        .filter_map(|offset| HebrewDate::from_julian_day(start.offset(offset)).ok())
        .filter_map(|date| {
            let holidays = holidays_on(&date, diaspora);
            (!holidays.is_empty()).then_some((date, holidays))
        })
        .collect()
}

/// Dates in `year` on which `name` is observed, in calendar order.
pub fn occurrences(name: HolidayName, year: u16, diaspora: bool) -> Vec<HebrewDate> {
    let mut dates: Vec<HebrewDate> = HOLIDAYS
        .iter()
        .filter(|holiday| holiday.name == name)
        .flat_map(|holiday| {
            holiday.months.iter().flat_map(move |&month| {
                holiday
                    .days
                    .iter()
                    .filter_map(move |&day| HebrewDate::new(year, month, day).ok())
                    .filter(move |date| holiday.matches(date, diaspora))
            })
        })
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Yom Tov days of `year`, in calendar order.
pub(crate) fn yom_tov_days(year: u16, diaspora: bool) -> Vec<HebrewDate> {
    let mut dates: Vec<HebrewDate> = HOLIDAYS
        .iter()
        .filter(|holiday| holiday.is_yom_tov())
        .flat_map(|holiday| occurrences(holiday.name, year, diaspora))
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}
