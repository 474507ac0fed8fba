//! The Daf Yomi cycle: one page of the Babylonian Talmud a day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::julian::JulianDay;
use crate::language::{Language, Localized};

/// 2020-01-05, the first day of the 14th cycle (Berachos 2).
const CYCLE_ANCHOR: JulianDay = JulianDay::new(2_458_854);
/// 1975-06-24, the first day of the 8th cycle. Earlier cycles had
/// different lengths.
const FIRST_SUPPORTED: JulianDay = JulianDay::new(2_442_588);
const CYCLE_LENGTH: i32 = 2711;
/// Every tractate starts on daf 2.
const FIRST_DAF: u8 = 2;

/// A tractate in Daf Yomi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tractate {
    Berachos,
    Shabbos,
    Eruvin,
    Pesachim,
    Shekalim,
    Yoma,
    Sukkah,
    Beitzah,
    RoshHashanah,
    Taanis,
    Megillah,
    MoedKatan,
    Chagigah,
    Yevamos,
    Kesubos,
    Nedarim,
    Nazir,
    Sotah,
    Gitin,
    Kiddushin,
    BavaKamma,
    BavaMetzia,
    BavaBasra,
    Sanhedrin,
    Makkos,
    Shevuos,
    AvodahZarah,
    Horiyos,
    Zevachim,
    Menachos,
    Chullin,
    Bechoros,
    Arachin,
    Temurah,
    Kerisos,
    /// Includes Kinnim, Tamid and Middos.
    Meilah,
    Niddah,
}

/// Tractates with the number of pages studied in each.
const CYCLE: [(Tractate, u8); 37] = [
    (Tractate::Berachos, 63),
    (Tractate::Shabbos, 156),
    (Tractate::Eruvin, 104),
    (Tractate::Pesachim, 120),
    (Tractate::Shekalim, 21),
    (Tractate::Yoma, 87),
    (Tractate::Sukkah, 55),
    (Tractate::Beitzah, 39),
    (Tractate::RoshHashanah, 34),
    (Tractate::Taanis, 30),
    (Tractate::Megillah, 31),
    (Tractate::MoedKatan, 28),
    (Tractate::Chagigah, 26),
    (Tractate::Yevamos, 121),
    (Tractate::Kesubos, 111),
    (Tractate::Nedarim, 90),
    (Tractate::Nazir, 65),
    (Tractate::Sotah, 48),
    (Tractate::Gitin, 89),
    (Tractate::Kiddushin, 81),
    (Tractate::BavaKamma, 118),
    (Tractate::BavaMetzia, 118),
    (Tractate::BavaBasra, 175),
    (Tractate::Sanhedrin, 112),
    (Tractate::Makkos, 23),
    (Tractate::Shevuos, 48),
    (Tractate::AvodahZarah, 75),
    (Tractate::Horiyos, 13),
    (Tractate::Zevachim, 119),
    (Tractate::Menachos, 109),
    (Tractate::Chullin, 141),
    (Tractate::Bechoros, 60),
    (Tractate::Arachin, 33),
    (Tractate::Temurah, 33),
    (Tractate::Kerisos, 27),
    (Tractate::Meilah, 36),
    (Tractate::Niddah, 72),
];

impl Localized for Tractate {
    fn name(&self, language: Language) -> &'static str {
        let (english, hebrew) = match self {
            Self::Berachos => ("Berachos", "ברכות"),
            Self::Shabbos => ("Shabbos", "שבת"),
            Self::Eruvin => ("Eruvin", "עירובין"),
            Self::Pesachim => ("Pesachim", "פסחים"),
            Self::Shekalim => ("Shekalim", "שקלים"),
            Self::Yoma => ("Yoma", "יומא"),
            Self::Sukkah => ("Sukkah", "סוכה"),
            Self::Beitzah => ("Beitzah", "ביצה"),
            Self::RoshHashanah => ("Rosh Hashanah", "ראש השנה"),
            Self::Taanis => ("Taanis", "תענית"),
            Self::Megillah => ("Megillah", "מגילה"),
            Self::MoedKatan => ("Moed Katan", "מועד קטן"),
            Self::Chagigah => ("Chagigah", "חגיגה"),
            Self::Yevamos => ("Yevamos", "יבמות"),
            Self::Kesubos => ("Kesubos", "כתובות"),
            Self::Nedarim => ("Nedarim", "נדרים"),
            Self::Nazir => ("Nazir", "נזיר"),
            Self::Sotah => ("Sotah", "סוטה"),
            Self::Gitin => ("Gitin", "גיטין"),
            Self::Kiddushin => ("Kiddushin", "קידושין"),
            Self::BavaKamma => ("Bava Kamma", "בבא קמא"),
            Self::BavaMetzia => ("Bava Metzia", "בבא מציעא"),
            Self::BavaBasra => ("Bava Basra", "בבא בתרא"),
            Self::Sanhedrin => ("Sanhedrin", "סנהדרין"),
            Self::Makkos => ("Makkos", "מכות"),
            Self::Shevuos => ("Shevuos", "שבועות"),
            Self::AvodahZarah => ("Avodah Zarah", "עבודה זרה"),
            Self::Horiyos => ("Horiyos", "הוריות"),
            Self::Zevachim => ("Zevachim", "זבחים"),
            Self::Menachos => ("Menachos", "מנחות"),
            Self::Chullin => ("Chullin", "חולין"),
            Self::Bechoros => ("Bechoros", "בכורות"),
            Self::Arachin => ("Arachin", "ערכין"),
            Self::Temurah => ("Temurah", "תמורה"),
            Self::Kerisos => ("Kerisos", "כריתות"),
            Self::Meilah => ("Meilah", "מעילה"),
            Self::Niddah => ("Niddah", "נדה"),
        };
        match language {
            Language::English => english,
            Language::Hebrew => hebrew,
        }
    }
}

impl fmt::Display for Tractate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

/// The page studied on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DafYomi {
    pub tractate: Tractate,
    pub daf:      u8,
}

impl DafYomi {
    /// Page for `day`, or `None` before 1975-06-24.
    pub fn for_day(day: JulianDay) -> Option<Self> {
        if day < FIRST_SUPPORTED {
            return None;
        }

        let mut remaining = day.days_since(CYCLE_ANCHOR).rem_euclid(CYCLE_LENGTH);
        for (tractate, pages) in CYCLE {
            let pages = i32::from(pages);
            if remaining < pages {
                let daf = u8::try_from(remaining).ok()? + FIRST_DAF;
                return Some(Self { tractate, daf });
            }
            remaining -= pages;
        }
        None
    }
}

impl fmt::Display for DafYomi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tractate, self.daf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::gregorian_to_jdn;

    #[test]
    fn test_cycle_is_complete() {
        let total: i32 = CYCLE.iter().map(|&(_, pages)| i32::from(pages)).sum();
        assert_eq!(total, CYCLE_LENGTH);
        assert_eq!(CYCLE_ANCHOR.days_since(FIRST_SUPPORTED) % CYCLE_LENGTH, 0);
    }

    #[test]
    fn test_known_days() {
        struct TestCase {
            date:     (i32, u8, u8),
            expected: &'static str,
        }

        let cases = [
            TestCase { date: (2020, 1, 4), expected: "Niddah 73" },
            TestCase { date: (2020, 1, 5), expected: "Berachos 2" },
            TestCase { date: (2012, 8, 3), expected: "Berachos 2" },
            TestCase { date: (1975, 6, 24), expected: "Berachos 2" },
            TestCase { date: (2018, 11, 2), expected: "Menachos 84" },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let daf = DafYomi::for_day(gregorian_to_jdn(y, m, d)).unwrap();
            assert_eq!(daf.to_string(), case.expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_before_eighth_cycle() {
        assert_eq!(DafYomi::for_day(gregorian_to_jdn(1975, 6, 23)), None);
        assert_eq!(DafYomi::for_day(gregorian_to_jdn(1923, 9, 11)), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Tractate::MoedKatan.to_string(), "Moed Katan");
        assert_eq!(Tractate::Niddah.name(Language::Hebrew), "נדה");
    }
}
