//! Display languages and the static name tables behind them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::CalendarError;
use crate::julian::Weekday;
use crate::month::HebrewMonth;
use crate::prelude::*;

/// Language used when rendering names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    English,
    #[display(fmt = "he")]
    Hebrew,
}

impl Language {
    /// Parses a language tag, falling back to English with a warning when the
    /// tag is not recognized.
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: CalendarError| {
            warn!(tag, error = %err, "falling back to English");
            Self::default()
        })
    }
}

impl FromStr for Language {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "he" | "hebrew" => Ok(Self::Hebrew),
            _ => Err(CalendarError::UnsupportedLanguage(s.to_owned())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag_or_default(&tag))
    }
}

/// A value with a name in every supported [`Language`].
pub trait Localized {
    fn name(&self, language: Language) -> &'static str;
}

impl Localized for HebrewMonth {
    fn name(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Self::Tishrei => "Tishrei",
                Self::Marcheshvan => "Marcheshvan",
                Self::Kislev => "Kislev",
                Self::Tevet => "Tevet",
                Self::Shvat => "Shvat",
                Self::Adar => "Adar",
                Self::Nisan => "Nisan",
                Self::Iyyar => "Iyyar",
                Self::Sivan => "Sivan",
                Self::Tammuz => "Tammuz",
                Self::Av => "Av",
                Self::Elul => "Elul",
                Self::AdarI => "Adar I",
                Self::AdarII => "Adar II",
            },
            Language::Hebrew => match self {
                Self::Tishrei => "תשרי",
                Self::Marcheshvan => "מרחשוון",
                Self::Kislev => "כסלו",
                Self::Tevet => "טבת",
                Self::Shvat => "שבט",
                Self::Adar => "אדר",
                Self::Nisan => "ניסן",
                Self::Iyyar => "אייר",
                Self::Sivan => "סיוון",
                Self::Tammuz => "תמוז",
                Self::Av => "אב",
                Self::Elul => "אלול",
                Self::AdarI => "אדר א׳",
                Self::AdarII => "אדר ב׳",
            },
        }
    }
}

impl Localized for Weekday {
    fn name(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Self::Sunday => "Sunday",
                Self::Monday => "Monday",
                Self::Tuesday => "Tuesday",
                Self::Wednesday => "Wednesday",
                Self::Thursday => "Thursday",
                Self::Friday => "Friday",
                Self::Saturday => "Saturday",
            },
            Language::Hebrew => match self {
                Self::Sunday => "ראשון",
                Self::Monday => "שני",
                Self::Tuesday => "שלישי",
                Self::Wednesday => "רביעי",
                Self::Thursday => "חמישי",
                Self::Friday => "שישי",
                Self::Saturday => "שבת",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        struct TestCase {
            input:    &'static str,
            expected: Option<Language>,
        }

        let cases = [
            TestCase { input: "en", expected: Some(Language::English) },
            TestCase { input: " Hebrew ", expected: Some(Language::Hebrew) },
            TestCase { input: "HE", expected: Some(Language::Hebrew) },
            TestCase { input: "fr", expected: None },
            TestCase { input: "", expected: None },
        ];

        for case in &cases {
            assert_eq!(case.input.parse::<Language>().ok(), case.expected, "input {:?}", case.input);
        }
        assert_eq!(
            "fr".parse::<Language>(),
            Err(CalendarError::UnsupportedLanguage("fr".into()))
        );
    }

    #[test]
    fn test_soft_fallback() {
        assert_eq!(Language::from_tag_or_default("he"), Language::Hebrew);
        assert_eq!(Language::from_tag_or_default("klingon"), Language::English);
    }

    #[test]
    fn test_serde_is_soft() {
        assert_eq!(serde_json::to_string(&Language::Hebrew).unwrap(), "\"he\"");
        let lang: Language = serde_json::from_str("\"hebrew\"").unwrap();
        assert_eq!(lang, Language::Hebrew);
        let fallback: Language = serde_json::from_str("\"xx\"").unwrap();
        assert_eq!(fallback, Language::English);
    }

    #[test]
    fn test_names() {
        assert_eq!(HebrewMonth::AdarII.name(Language::English), "Adar II");
        assert_eq!(HebrewMonth::Nisan.name(Language::Hebrew), "ניסן");
        assert_eq!(Weekday::Saturday.name(Language::Hebrew), "שבת");
        for month in HebrewMonth::LEAP_YEAR {
            assert_eq!(month.name(Language::English), month.to_string());
        }
    }
}
