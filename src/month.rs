use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::prelude::*;

/// A Hebrew month.
///
/// Numbers are stable and follow the civil order starting at Tishrei; the two
/// leap-year months come last so that 1..=12 cover a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HebrewMonth {
    #[display(fmt = "Tishrei")]
    Tishrei = 1,
    #[display(fmt = "Marcheshvan")]
    Marcheshvan = 2,
    #[display(fmt = "Kislev")]
    Kislev = 3,
    #[display(fmt = "Tevet")]
    Tevet = 4,
    #[display(fmt = "Shvat")]
    Shvat = 5,
    #[display(fmt = "Adar")]
    Adar = 6,
    #[display(fmt = "Nisan")]
    Nisan = 7,
    #[display(fmt = "Iyyar")]
    Iyyar = 8,
    #[display(fmt = "Sivan")]
    Sivan = 9,
    #[display(fmt = "Tammuz")]
    Tammuz = 10,
    #[display(fmt = "Av")]
    Av = 11,
    #[display(fmt = "Elul")]
    Elul = 12,
    #[display(fmt = "Adar I")]
    AdarI = 13,
    #[display(fmt = "Adar II")]
    AdarII = 14,
}

impl HebrewMonth {
    pub(crate) const COMMON_YEAR: [Self; 12] = [
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shvat,
        Self::Adar,
        Self::Nisan,
        Self::Iyyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
    ];

    pub(crate) const LEAP_YEAR: [Self; 13] = [
        Self::Tishrei,
        Self::Marcheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shvat,
        Self::AdarI,
        Self::AdarII,
        Self::Nisan,
        Self::Iyyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
    ];

    /// Stable month number (Tishrei = 1, Adar I = 13, Adar II = 14).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Position of the month within its year, used for ordering.
    ///
    /// Adar and Adar I share position 6 and Adar II takes 7, so months after
    /// Adar are numbered as in a leap year. Positions are comparable only
    /// within a single year.
    pub const fn position(self) -> u8 {
        match self {
            Self::Tishrei => 1,
            Self::Marcheshvan => 2,
            Self::Kislev => 3,
            Self::Tevet => 4,
            Self::Shvat => 5,
            Self::Adar | Self::AdarI => 6,
            Self::AdarII => 7,
            Self::Nisan => 8,
            Self::Iyyar => 9,
            Self::Sivan => 10,
            Self::Tammuz => 11,
            Self::Av => 12,
            Self::Elul => 13,
        }
    }

    /// True for the months that only exist in leap years.
    pub const fn is_leap_only(self) -> bool {
        matches!(self, Self::AdarI | Self::AdarII)
    }

    /// True for any of the three Adar variants.
    pub const fn is_adar(self) -> bool {
        matches!(self, Self::Adar | Self::AdarI | Self::AdarII)
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=12 => Ok(Self::COMMON_YEAR[usize::from(value - 1)]),
            13 => Ok(Self::AdarI),
            14 => Ok(Self::AdarII),
            _ => Err(CalendarError::InvalidMonth { year: 0, month: value }),
        }
    }
}

impl From<HebrewMonth> for u8 {
    fn from(month: HebrewMonth) -> Self {
        month.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_u8() {
        for n in 1..=14u8 {
            let month = HebrewMonth::try_from(n).unwrap();
            assert_eq!(month.number(), n);
        }
        assert!(HebrewMonth::try_from(0).is_err());
        assert!(HebrewMonth::try_from(15).is_err());
    }

    #[test]
    fn test_positions() {
        struct TestCase {
            month:    HebrewMonth,
            position: u8,
        }

        let cases = [
            TestCase { month: HebrewMonth::Tishrei, position: 1 },
            TestCase { month: HebrewMonth::Shvat, position: 5 },
            TestCase { month: HebrewMonth::Adar, position: 6 },
            TestCase { month: HebrewMonth::AdarI, position: 6 },
            TestCase { month: HebrewMonth::AdarII, position: 7 },
            TestCase { month: HebrewMonth::Nisan, position: 8 },
            TestCase { month: HebrewMonth::Elul, position: 13 },
        ];

        for case in &cases {
            assert_eq!(case.month.position(), case.position, "{}", case.month);
        }
    }

    #[test]
    fn test_year_layouts_are_ordered() {
        assert!(HebrewMonth::COMMON_YEAR.windows(2).all(|w| w[0].position() < w[1].position()));
        assert!(HebrewMonth::LEAP_YEAR.windows(2).all(|w| w[0].position() < w[1].position()));
        assert!(!HebrewMonth::COMMON_YEAR.iter().any(|m| m.is_leap_only()));
        assert_eq!(HebrewMonth::LEAP_YEAR.iter().filter(|m| m.is_adar()).count(), 2);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(HebrewMonth::AdarII.to_string(), "Adar II");
        assert_eq!(serde_json::to_string(&HebrewMonth::Nisan).unwrap(), "7");
        let month: HebrewMonth = serde_json::from_str("13").unwrap();
        assert_eq!(month, HebrewMonth::AdarI);
        assert!(serde_json::from_str::<HebrewMonth>("0").is_err());
    }
}
