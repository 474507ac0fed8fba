//! Weekly reading sequences, one per reading-year type.
//!
//! Each entry is a reading index (see `Parasha::from_index`) for the week
//! ending on that Shabbat, counted from the week containing Rosh Hashana.
//! Zero marks a Shabbat taken by a festival reading. Keys encode
//! `1000 * diaspora + 100 * rosh_hashana_weekday + 10 * year_kind_class +
//! pesach_weekday`, with weekdays counted from Sunday = 1.

const TYPE_203_225_315_1203: [u8; 50] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61,
];

const TYPE_205: [u8; 54] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47,
    48, 49, 50, 61,
];

const TYPE_227_317: [u8; 55] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46,
    47, 48, 49, 50, 51,
];

const TYPE_501_1501: [u8; 55] = [
    53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 0, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51,
];

const TYPE_517: [u8; 51] = [
    53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25,
    0, 26, 56, 57, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51,
];

const TYPE_521_1521: [u8; 51] = [
    53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51,
];

const TYPE_523_1523: [u8; 55] = [
    53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 0, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 61,
];

const TYPE_701: [u8; 51] = [
    0, 53, 0, 54, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51,
];

const TYPE_703_725: [u8; 55] = [
    0, 53, 0, 54, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47,
    48, 49, 50, 61,
];

const TYPE_723: [u8; 51] = [
    0, 53, 0, 54, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61,
];

const TYPE_1205: [u8; 54] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 0, 35, 36, 37, 38, 59, 41, 60, 44, 45, 46, 47,
    48, 49, 50, 61,
];

const TYPE_1225_1315: [u8; 50] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 0, 35, 36, 37, 38, 59, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61,
];

const TYPE_1227_1317: [u8; 55] = [
    52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46,
    47, 48, 49, 50, 51,
];

const TYPE_1517: [u8; 51] = [
    53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25,
    0, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51,
];

const TYPE_1701: [u8; 51] = [
    0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51,
];

const TYPE_1703: [u8; 55] = [
    0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47,
    48, 49, 50, 61,
];

const TYPE_1723: [u8; 51] = [
    0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24,
    25, 0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61,
];

const TYPE_1725: [u8; 55] = [
    0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 0, 35, 36, 37, 38, 59, 41, 60, 44, 45, 46, 47,
    48, 49, 50, 61,
];

/// Reading sequence for a year-type key, indexed by week of the year.
pub(crate) const fn sequence(year_type: u16) -> Option<&'static [u8]> {
    match year_type {
        203 | 225 | 315 | 1203 => Some(&TYPE_203_225_315_1203),
        205 => Some(&TYPE_205),
        227 | 317 => Some(&TYPE_227_317),
        501 | 1501 => Some(&TYPE_501_1501),
        517 => Some(&TYPE_517),
        521 | 1521 => Some(&TYPE_521_1521),
        523 | 1523 => Some(&TYPE_523_1523),
        701 => Some(&TYPE_701),
        703 | 725 => Some(&TYPE_703_725),
        723 => Some(&TYPE_723),
        1205 => Some(&TYPE_1205),
        1225 | 1315 => Some(&TYPE_1225_1315),
        1227 | 1317 => Some(&TYPE_1227_1317),
        1517 => Some(&TYPE_1517),
        1701 => Some(&TYPE_1701),
        1703 => Some(&TYPE_1703),
        1723 => Some(&TYPE_1723),
        1725 => Some(&TYPE_1725),
        _ => None,
    }
}
