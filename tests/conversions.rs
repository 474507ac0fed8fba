//! Round trips between the Gregorian, Hebrew and Julian day representations.

use luach::{
    CalendarDate, GregorianDate, HebrewDate, JulianDay, MAX_JULIAN_DAY, MIN_JULIAN_DAY, Weekday,
    gregorian_to_hebrew, hebrew_to_gregorian, is_leap_year, month_length, months_in_year, new_year_jdn,
    year_length,
};
use proptest::prelude::*;

fn gregorian_strategy() -> impl Strategy<Value = GregorianDate> {
    (1i32..=6000, 1u8..=12, 1u8..=28).prop_map(|(year, month, day)| GregorianDate::new(year, month, day).unwrap())
}

fn hebrew_strategy() -> impl Strategy<Value = HebrewDate> {
    (1u16..=9999, 0usize..13, 1u8..=29).prop_map(|(year, index, day)| {
        let months = months_in_year(year);
        HebrewDate::new(year, months[index % months.len()], day).unwrap()
    })
}

fn jdn_strategy() -> impl Strategy<Value = JulianDay> {
    (MIN_JULIAN_DAY..=MAX_JULIAN_DAY).prop_map(JulianDay::new)
}

proptest! {
    #[test]
    fn test_gregorian_round_trip(date in gregorian_strategy()) {
        let hebrew = gregorian_to_hebrew(date).unwrap();
        prop_assert_eq!(hebrew_to_gregorian(hebrew).unwrap(), date);
    }

    #[test]
    fn test_hebrew_round_trip(date in hebrew_strategy()) {
        let gregorian = hebrew_to_gregorian(date).unwrap();
        prop_assert_eq!(gregorian_to_hebrew(gregorian).unwrap(), date);
    }

    #[test]
    fn test_julian_day_agrees(jdn in jdn_strategy()) {
        let date = CalendarDate::from_jdn(jdn).unwrap();
        prop_assert_eq!(date.gregorian().to_julian_day(), jdn);
        prop_assert_eq!(date.hebrew().to_julian_day(), jdn);
        prop_assert_eq!(date.hebrew().weekday(), date.weekday());
    }

    #[test]
    fn test_next_day_is_one_julian_day_later(jdn in (MIN_JULIAN_DAY..MAX_JULIAN_DAY).prop_map(JulianDay::new)) {
        let date = CalendarDate::from_jdn(jdn).unwrap();
        prop_assert_eq!(date.next_day().unwrap(), CalendarDate::from_jdn(jdn.offset(1)).unwrap());
    }

    #[test]
    fn test_hebrew_order_follows_time(a in hebrew_strategy(), b in hebrew_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.to_julian_day().cmp(&b.to_julian_day()));
    }

    #[test]
    fn test_year_structure(year in 1u16..=9999) {
        let length = year_length(year);
        prop_assert!([353, 354, 355, 383, 384, 385].contains(&length));
        prop_assert_eq!(is_leap_year(year), length >= 383);

        let total: u16 = months_in_year(year).iter().map(|&month| u16::from(month_length(year, month))).sum();
        prop_assert_eq!(total, length);

        let weekday = new_year_jdn(i32::from(year)).weekday();
        prop_assert!(![Weekday::Sunday, Weekday::Wednesday, Weekday::Friday].contains(&weekday));
    }
}

#[test]
fn test_range_edges() {
    let first = CalendarDate::from_jdn(JulianDay::new(MIN_JULIAN_DAY)).unwrap();
    assert_eq!(first.hebrew().to_string(), "1 Tishrei 1");
    assert!(CalendarDate::from_jdn(JulianDay::new(MIN_JULIAN_DAY - 1)).is_err());

    let last = CalendarDate::from_jdn(JulianDay::new(MAX_JULIAN_DAY)).unwrap();
    assert_eq!(last.hebrew().to_string(), "29 Elul 9999");
    assert!(CalendarDate::from_jdn(JulianDay::new(MAX_JULIAN_DAY + 1)).is_err());
}

#[test]
fn test_parse_and_convert() {
    let date: GregorianDate = "2018-11-02".parse().unwrap();
    let calendar = CalendarDate::from_gregorian(date).unwrap();
    assert_eq!(calendar.to_string(), "2018-11-02 (24 Marcheshvan 5779)");
    assert!("2018-02-29".parse::<GregorianDate>().unwrap_err().is_invalid_date());
}
