//! Hebrew numerals.

use crate::CalendarError;

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

const UNITS: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 4] = ['ק', 'ר', 'ש', 'ת'];

const MAX_NUMERAL: u16 = 9999;

/// Renders `n` as a Hebrew numeral.
///
/// Thousands are written as a single letter followed by a geresh (5779 is
/// `ה׳תשע״ט`). A lone letter takes a geresh, longer numerals take gershayim
/// before the last letter, and 15 and 16 use the customary `ט״ו` and `ט״ז`.
///
/// # Errors
/// Returns `CalendarError::InvalidRange` when `n` is 0 or above 9999.
pub fn hebrew_numeral(n: u16) -> Result<String, CalendarError> {
    if n == 0 || n > MAX_NUMERAL {
        return Err(CalendarError::InvalidRange {
            value: i64::from(n),
            min:   1,
            max:   i64::from(MAX_NUMERAL),
        });
    }

    let mut out = String::new();
    let thousands = n / 1000;
    if thousands > 0 {
        out.push(UNITS[usize::from(thousands - 1)]);
        out.push(GERESH);
    }

    let rest = n % 1000;
    if rest == 0 {
        return Ok(out);
    }

    let letters = letters_below_thousand(rest);
    match letters.as_slice() {
        [single] => {
            out.push(*single);
            out.push(GERESH);
        }
        [init @ .., last] => {
            out.extend(init);
            out.push(GERSHAYIM);
            out.push(*last);
        }
        [] => {}
    }
    Ok(out)
}

fn letters_below_thousand(n: u16) -> Vec<char> {
    let mut letters = Vec::new();
    let mut hundreds = n / 100;
    while hundreds >= 4 {
        letters.push(HUNDREDS[3]);
        hundreds -= 4;
    }
    if hundreds > 0 {
        letters.push(HUNDREDS[usize::from(hundreds - 1)]);
    }

    let mut rest = n % 100;
    // 15 and 16 would otherwise spell divine names
    if rest == 15 || rest == 16 {
        letters.push(UNITS[8]);
        letters.push(UNITS[usize::from(rest - 10)]);
        return letters;
    }
    if rest >= 10 {
        letters.push(TENS[usize::from(rest / 10 - 1)]);
        rest %= 10;
    }
    if rest > 0 {
        letters.push(UNITS[usize::from(rest - 1)]);
    }
    letters
}
