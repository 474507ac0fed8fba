//! Weekly Torah readings through the public API.

use luach::{
    CalendarDate, GregorianDate, HebrewDate, HebrewMonth, JulianDay, Parasha, Weekday, new_year_jdn, reading_for,
    shabbat_reading,
};

fn hebrew(year: i32, month: u8, day: u8) -> HebrewDate {
    CalendarDate::from_gregorian(GregorianDate::new(year, month, day).unwrap())
        .unwrap()
        .hebrew()
}

fn is_simchat_torah(date: &HebrewDate, diaspora: bool) -> bool {
    date.month() == HebrewMonth::Tishrei && date.day() == if diaspora { 23 } else { 22 }
}

#[test]
fn test_shabbatot_of_5785() {
    struct TestCase {
        date:     (i32, u8, u8),
        expected: Option<Parasha>,
    }

    let cases = [
        TestCase { date: (2024, 10, 5), expected: Some(Parasha::Haazinu) },
        TestCase { date: (2024, 10, 12), expected: None },
        TestCase { date: (2024, 10, 26), expected: Some(Parasha::Bereshit) },
        TestCase { date: (2024, 12, 28), expected: Some(Parasha::Miketz) },
        TestCase { date: (2025, 4, 19), expected: None },
        TestCase { date: (2025, 4, 26), expected: Some(Parasha::Shmini) },
        TestCase { date: (2025, 9, 20), expected: Some(Parasha::Nitzavim) },
        TestCase { date: (2025, 9, 27), expected: Some(Parasha::Vayeilech) },
    ];

    for case in &cases {
        let (y, m, d) = case.date;
        let date = hebrew(y, m, d);
        for diaspora in [false, true] {
            assert_eq!(shabbat_reading(&date, diaspora), case.expected, "{y}-{m}-{d} diaspora={diaspora}");
        }
    }
}

#[test]
fn test_vayeilech_on_29_elul_5779() {
    let date = HebrewDate::new(5779, HebrewMonth::Elul, 29).unwrap();
    assert_eq!(reading_for(&date, false), Some(Parasha::Vayeilech));
    assert_eq!(shabbat_reading(&date, false), None);
}

#[test]
fn test_weekdays_follow_their_shabbat() {
    for year in 5760..=5800 {
        let start = new_year_jdn(year);
        let end = new_year_jdn(year + 1);
        for diaspora in [false, true] {
            for jdn in start.get()..end.get() {
                let day = JulianDay::new(jdn);
                let date = HebrewDate::from_julian_day(day).unwrap();
                if is_simchat_torah(&date, diaspora) {
                    continue;
                }
                let shabbat = HebrewDate::from_julian_day(day.offset(day.weekday().days_until(Weekday::Saturday)))
                    .unwrap();
                assert_eq!(reading_for(&date, diaspora), reading_for(&shabbat, diaspora), "{date} diaspora={diaspora}");
            }
        }
    }
}

#[test]
fn test_every_portion_is_read_each_cycle() {
    // Counting Shabbatot from Bereshit to the following Bereshit covers each
    // portion exactly once, joined pairs counting as both halves.
    for year in [5779u16, 5780, 5781, 5784, 5785] {
        for diaspora in [false, true] {
            let mut seen = [0u8; 55];
            let mut day = new_year_jdn(i32::from(year));
            day = day.offset(day.weekday().days_until(Weekday::Saturday));
            let mut started = false;
            loop {
                let date = HebrewDate::from_julian_day(day).unwrap();
                let reading = shabbat_reading(&date, diaspora);
                if reading == Some(Parasha::Bereshit) {
                    if started {
                        break;
                    }
                    started = true;
                }
                if started {
                    match reading.and_then(Parasha::halves) {
                        Some((first, second)) => {
                            seen[usize::from(first.index())] += 1;
                            seen[usize::from(second.index())] += 1;
                        }
                        None => {
                            if let Some(parasha) = reading {
                                seen[usize::from(parasha.index())] += 1;
                            }
                        }
                    }
                }
                day = day.offset(7);
            }
            // Vezot Haberakhah is read on Simchat Torah, never on Shabbat.
            assert!(seen[1..54].iter().all(|&count| count == 1), "{year} diaspora={diaspora}: {seen:?}");
        }
    }
}
