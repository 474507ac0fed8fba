use crate::hebrew::HebrewDate;
use crate::month::HebrewMonth;

/// Days in the Omer count.
pub const OMER_DAYS: u8 = 49;

/// Day of the Omer count (1..=49) for `date`, counting from 16 Nisan to
/// 5 Sivan. Any other date yields `None`.
pub const fn omer_day(date: &HebrewDate) -> Option<u8> {
    let day = match date.month() {
        HebrewMonth::Nisan if date.day() >= 16 => date.day() - 15,
        HebrewMonth::Iyyar => date.day() + 15,
        HebrewMonth::Sivan if date.day() <= 5 => date.day() + 44,
        _ => return None,
    };
    Some(day)
}

/// Splits an Omer day into whole weeks and remaining days.
pub const fn weeks_and_days(day: u8) -> (u8, u8) {
    (day / 7, day % 7)
}
