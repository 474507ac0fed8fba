use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::hebrew::HebrewDate;
use crate::info::DateInfo;
use crate::language::{Language, Localized};

/// Caller preferences that shape every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Follow the customs of communities outside Israel.
    pub diaspora: bool,

    /// Language for rendered names. Unknown tags fall back to English.
    pub language: Language,
}

impl CalendarConfig {
    pub const fn new(diaspora: bool, language: Language) -> Self {
        Self { diaspora, language }
    }

    pub const fn date_info(&self, date: CalendarDate) -> DateInfo {
        DateInfo::new(date, self.diaspora)
    }

    /// Renders `date` in the configured language.
    pub fn format_hebrew(&self, date: &HebrewDate) -> String {
        date.localized(self.language)
    }

    /// Name of `value` in the configured language.
    pub fn name_of<T: Localized>(&self, value: &T) -> &'static str {
        value.name(self.language)
    }
}
