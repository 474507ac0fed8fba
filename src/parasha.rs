//! Weekly Torah readings.
//!
//! A year's reading schedule depends only on four facts: whether it is read
//! in the Diaspora, the weekday of Rosh Hashana, the year's length class and
//! the weekday of Pesach. Those are packed into a year-type key that selects
//! one of the tabulated sequences in [`crate::parasha_table`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arithmetic::{YearKind, new_year_jdn};
use crate::hebrew::{HebrewDate, hebrew_to_jdn};
use crate::julian::Weekday;
use crate::language::{Language, Localized};
use crate::month::HebrewMonth;
use crate::parasha_table::sequence;

/// A weekly reading, either a single portion or one of the seven joined pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parasha {
    Bereshit = 1,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldot,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemot,
    Vaera,
    Bo,
    Beshalach,
    Yitro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiTisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMot,
    Kedoshim,
    Emor,
    Behar,
    Bechukotai,
    Bamidbar,
    Nasso,
    Behaalotcha,
    Shlach,
    Korach,
    Chukat,
    Balak,
    Pinchas,
    Matot,
    Masei,
    Devarim,
    Vaetchanan,
    Eikev,
    Reeh,
    Shoftim,
    KiTeitzei,
    KiTavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VezotHaberakhah,
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMotKedoshim,
    BeharBechukotai,
    ChukatBalak,
    MatotMasei,
    NitzavimVayeilech,
}

impl Parasha {
    const ALL: [Self; 61] = [
        Self::Bereshit,
        Self::Noach,
        Self::LechLecha,
        Self::Vayera,
        Self::ChayeiSara,
        Self::Toldot,
        Self::Vayetzei,
        Self::Vayishlach,
        Self::Vayeshev,
        Self::Miketz,
        Self::Vayigash,
        Self::Vayechi,
        Self::Shemot,
        Self::Vaera,
        Self::Bo,
        Self::Beshalach,
        Self::Yitro,
        Self::Mishpatim,
        Self::Terumah,
        Self::Tetzaveh,
        Self::KiTisa,
        Self::Vayakhel,
        Self::Pekudei,
        Self::Vayikra,
        Self::Tzav,
        Self::Shmini,
        Self::Tazria,
        Self::Metzora,
        Self::AchreiMot,
        Self::Kedoshim,
        Self::Emor,
        Self::Behar,
        Self::Bechukotai,
        Self::Bamidbar,
        Self::Nasso,
        Self::Behaalotcha,
        Self::Shlach,
        Self::Korach,
        Self::Chukat,
        Self::Balak,
        Self::Pinchas,
        Self::Matot,
        Self::Masei,
        Self::Devarim,
        Self::Vaetchanan,
        Self::Eikev,
        Self::Reeh,
        Self::Shoftim,
        Self::KiTeitzei,
        Self::KiTavo,
        Self::Nitzavim,
        Self::Vayeilech,
        Self::Haazinu,
        Self::VezotHaberakhah,
        Self::VayakhelPekudei,
        Self::TazriaMetzora,
        Self::AchreiMotKedoshim,
        Self::BeharBechukotai,
        Self::ChukatBalak,
        Self::MatotMasei,
        Self::NitzavimVayeilech,
    ];

    /// Looks up a reading by its stable index (1..=61). Zero and anything
    /// past 61 yield `None`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index == 0 || index as usize > Self::ALL.len() {
            return None;
        }
        Some(Self::ALL[index as usize - 1])
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The two portions of a joined reading.
    pub const fn halves(self) -> Option<(Self, Self)> {
        match self {
            Self::VayakhelPekudei => Some((Self::Vayakhel, Self::Pekudei)),
            Self::TazriaMetzora => Some((Self::Tazria, Self::Metzora)),
            Self::AchreiMotKedoshim => Some((Self::AchreiMot, Self::Kedoshim)),
            Self::BeharBechukotai => Some((Self::Behar, Self::Bechukotai)),
            Self::ChukatBalak => Some((Self::Chukat, Self::Balak)),
            Self::MatotMasei => Some((Self::Matot, Self::Masei)),
            Self::NitzavimVayeilech => Some((Self::Nitzavim, Self::Vayeilech)),
            _ => None,
        }
    }

    pub const fn is_double(self) -> bool {
        self.halves().is_some()
    }
}

impl Localized for Parasha {
    fn name(&self, language: Language) -> &'static str {
        let (english, hebrew) = match self {
            Self::Bereshit => ("Bereshit", "בראשית"),
            Self::Noach => ("Noach", "נח"),
            Self::LechLecha => ("Lech-Lecha", "לך לך"),
            Self::Vayera => ("Vayera", "וירא"),
            Self::ChayeiSara => ("Chayei Sara", "חיי שרה"),
            Self::Toldot => ("Toldot", "תולדות"),
            Self::Vayetzei => ("Vayetzei", "ויצא"),
            Self::Vayishlach => ("Vayishlach", "וישלח"),
            Self::Vayeshev => ("Vayeshev", "וישב"),
            Self::Miketz => ("Miketz", "מקץ"),
            Self::Vayigash => ("Vayigash", "ויגש"),
            Self::Vayechi => ("Vayechi", "ויחי"),
            Self::Shemot => ("Shemot", "שמות"),
            Self::Vaera => ("Vaera", "וארא"),
            Self::Bo => ("Bo", "בא"),
            Self::Beshalach => ("Beshalach", "בשלח"),
            Self::Yitro => ("Yitro", "יתרו"),
            Self::Mishpatim => ("Mishpatim", "משפטים"),
            Self::Terumah => ("Terumah", "תרומה"),
            Self::Tetzaveh => ("Tetzaveh", "תצוה"),
            Self::KiTisa => ("Ki Tisa", "כי תשא"),
            Self::Vayakhel => ("Vayakhel", "ויקהל"),
            Self::Pekudei => ("Pekudei", "פקודי"),
            Self::Vayikra => ("Vayikra", "ויקרא"),
            Self::Tzav => ("Tzav", "צו"),
            Self::Shmini => ("Shmini", "שמיני"),
            Self::Tazria => ("Tazria", "תזריע"),
            Self::Metzora => ("Metzora", "מצורע"),
            Self::AchreiMot => ("Achrei Mot", "אחרי מות"),
            Self::Kedoshim => ("Kedoshim", "קדושים"),
            Self::Emor => ("Emor", "אמור"),
            Self::Behar => ("Behar", "בהר"),
            Self::Bechukotai => ("Bechukotai", "בחקתי"),
            Self::Bamidbar => ("Bamidbar", "במדבר"),
            Self::Nasso => ("Nasso", "נשא"),
            Self::Behaalotcha => ("Beha'alotcha", "בהעלתך"),
            Self::Shlach => ("Sh'lach", "שלח"),
            Self::Korach => ("Korach", "קרח"),
            Self::Chukat => ("Chukat", "חקת"),
            Self::Balak => ("Balak", "בלק"),
            Self::Pinchas => ("Pinchas", "פינחס"),
            Self::Matot => ("Matot", "מטות"),
            Self::Masei => ("Masei", "מסעי"),
            Self::Devarim => ("Devarim", "דברים"),
            Self::Vaetchanan => ("Vaetchanan", "ואתחנן"),
            Self::Eikev => ("Eikev", "עקב"),
            Self::Reeh => ("Re'eh", "ראה"),
            Self::Shoftim => ("Shoftim", "שופטים"),
            Self::KiTeitzei => ("Ki Teitzei", "כי תצא"),
            Self::KiTavo => ("Ki Tavo", "כי תבוא"),
            Self::Nitzavim => ("Nitzavim", "נצבים"),
            Self::Vayeilech => ("Vayeilech", "וילך"),
            Self::Haazinu => ("Ha'Azinu", "האזינו"),
            Self::VezotHaberakhah => ("Vezot Haberakhah", "וזאת הברכה"),
            Self::VayakhelPekudei => ("Vayakhel-Pekudei", "ויקהל-פקודי"),
            Self::TazriaMetzora => ("Tazria-Metzora", "תזריע-מצורע"),
            Self::AchreiMotKedoshim => ("Achrei Mot-Kedoshim", "אחרי מות-קדושים"),
            Self::BeharBechukotai => ("Behar-Bechukotai", "בהר-בחקתי"),
            Self::ChukatBalak => ("Chukat-Balak", "חקת-בלק"),
            Self::MatotMasei => ("Matot-Masei", "מטות-מסעי"),
            Self::NitzavimVayeilech => ("Nitzavim-Vayeilech", "נצבים-וילך"),
        };
        match language {
            Language::English => english,
            Language::Hebrew => hebrew,
        }
    }
}

impl fmt::Display for Parasha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

/// Year-type key selecting the reading sequence of `year`.
pub fn year_type(year: u16, diaspora: bool) -> u16 {
    let rosh_hashana = u16::from(new_year_jdn(i32::from(year)).weekday().number());
    let pesach = u16::from(hebrew_to_jdn(year, HebrewMonth::Nisan, 15).weekday().number());
    let class = u16::from(YearKind::of(year).class());
    1000 * u16::from(diaspora) + 100 * rosh_hashana + 10 * class + pesach
}

const fn is_simchat_torah(date: &HebrewDate, diaspora: bool) -> bool {
    let day = if diaspora { 23 } else { 22 };
    matches!(date.month(), HebrewMonth::Tishrei) && date.day() == day
}

/// Reading of the week containing `date`, i.e. the one read on the Shabbat
/// that ends it. Simchat Torah always yields Vezot Haberakhah.
///
/// Weeks whose Shabbat falls in the next Hebrew year take that year's
/// reading. `None` means the week's Shabbat has a festival reading instead.
pub fn reading_for(date: &HebrewDate, diaspora: bool) -> Option<Parasha> {
    if is_simchat_torah(date, diaspora) {
        return Some(Parasha::VezotHaberakhah);
    }

    let year = date.year();
    let rosh_hashana = new_year_jdn(i32::from(year));
    let jdn = date.to_julian_day();
    let offset = jdn.days_since(rosh_hashana) + i32::from(rosh_hashana.weekday().number()) - 1;
    let week = usize::try_from(offset / 7).ok()?;

    let key = year_type(year, diaspora);
    let table = sequence(key)?;
    debug!(year, diaspora, key, week, "resolved reading year type");

    match table.get(week) {
        Some(&index) => Parasha::from_index(index),
        None => {
            let shabbat = jdn.offset(jdn.weekday().days_until(Weekday::Saturday));
            let next = HebrewDate::from_julian_day(shabbat).ok()?;
            if next.year() == year {
                return None;
            }
            debug!(%date, shabbat = %next, "week ends in the next year");
            reading_for(&next, diaspora)
        }
    }
}

/// Reading for `date` only if it is read on that day: a Shabbat, or Simchat
/// Torah.
pub fn shabbat_reading(date: &HebrewDate, diaspora: bool) -> Option<Parasha> {
    if is_simchat_torah(date, diaspora) {
        return Some(Parasha::VezotHaberakhah);
    }
    if date.weekday() != Weekday::Saturday {
        return None;
    }
    reading_for(date, diaspora)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::gregorian_to_jdn;

    fn hebrew(year: i32, month: u8, day: u8) -> HebrewDate {
        HebrewDate::from_julian_day(gregorian_to_jdn(year, month, day)).unwrap()
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Parasha::from_index(0), None);
        assert_eq!(Parasha::from_index(1), Some(Parasha::Bereshit));
        assert_eq!(Parasha::from_index(54), Some(Parasha::VezotHaberakhah));
        assert_eq!(Parasha::from_index(61), Some(Parasha::NitzavimVayeilech));
        assert_eq!(Parasha::from_index(62), None);
        for index in 1..=61 {
            assert_eq!(Parasha::from_index(index).map(Parasha::index), Some(index));
        }
    }

    #[test]
    fn test_halves() {
        assert_eq!(Parasha::MatotMasei.halves(), Some((Parasha::Matot, Parasha::Masei)));
        assert!(!Parasha::Bereshit.is_double());
        assert_eq!(Parasha::ALL.iter().filter(|p| p.is_double()).count(), 7);
    }

    #[test]
    fn test_year_types() {
        struct TestCase {
            year:     u16,
            diaspora: bool,
            key:      u16,
        }

        let cases = [
            TestCase { year: 5779, diaspora: false, key: 227 },
            TestCase { year: 5779, diaspora: true, key: 1227 },
            TestCase { year: 5780, diaspora: false, key: 225 },
            TestCase { year: 5781, diaspora: false, key: 701 },
            TestCase { year: 5784, diaspora: true, key: 1703 },
            TestCase { year: 5785, diaspora: false, key: 521 },
        ];

        for case in &cases {
            assert_eq!(year_type(case.year, case.diaspora), case.key, "year {}", case.year);
        }
    }

    #[test]
    fn test_known_shabbatot() {
        struct TestCase {
            date:     (i32, u8, u8),
            diaspora: bool,
            expected: Option<Parasha>,
        }

        let cases = [
            // 5779: Bereshit on 27 Tishrei
            TestCase { date: (2018, 10, 6), diaspora: false, expected: Some(Parasha::Bereshit) },
            // 25 Marcheshvan 5779
            TestCase { date: (2018, 11, 3), diaspora: true, expected: Some(Parasha::ChayeiSara) },
            // Shabbat Chol HaMoed Pesach 5780
            TestCase { date: (2020, 4, 11), diaspora: false, expected: None },
            // Diaspora 5780 keeps Chukat-Balak joined
            TestCase { date: (2020, 7, 4), diaspora: true, expected: Some(Parasha::ChukatBalak) },
            TestCase { date: (2020, 7, 4), diaspora: false, expected: Some(Parasha::Balak) },
            // Nitzavim-Vayeilech before Rosh Hashana 5781
            TestCase { date: (2020, 9, 12), diaspora: false, expected: Some(Parasha::NitzavimVayeilech) },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let date = hebrew(y, m, d);
            assert_eq!(shabbat_reading(&date, case.diaspora), case.expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_simchat_torah() {
        let israel = HebrewDate::new(5780, HebrewMonth::Tishrei, 22).unwrap();
        let diaspora = HebrewDate::new(5780, HebrewMonth::Tishrei, 23).unwrap();
        assert_eq!(shabbat_reading(&israel, false), Some(Parasha::VezotHaberakhah));
        assert_eq!(shabbat_reading(&diaspora, true), Some(Parasha::VezotHaberakhah));
        assert_ne!(reading_for(&israel, true), Some(Parasha::VezotHaberakhah));
    }

    #[test]
    fn test_week_crossing_into_next_year() {
        let date = HebrewDate::new(5779, HebrewMonth::Elul, 29).unwrap();
        assert_eq!(date.weekday(), Weekday::Sunday);
        assert_eq!(reading_for(&date, false), Some(Parasha::Vayeilech));
        assert_eq!(reading_for(&date, true), Some(Parasha::Vayeilech));
        assert_eq!(shabbat_reading(&date, false), None);
    }

    #[test]
    fn test_weekdays_share_their_shabbat_reading() {
        let shabbat = hebrew(2018, 11, 3);
        for back in 1..=6 {
            let weekday = HebrewDate::from_julian_day(shabbat.to_julian_day().offset(-back)).unwrap();
            assert_eq!(reading_for(&weekday, false), reading_for(&shabbat, false));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Parasha::Vayeilech.to_string(), "Vayeilech");
        assert_eq!(Parasha::NitzavimVayeilech.name(Language::Hebrew), "נצבים-וילך");
        assert_eq!(serde_json::to_string(&Parasha::LechLecha).unwrap(), "\"lech_lecha\"");
    }
}
