/// Highest supported Hebrew year (inclusive)
pub const MAX_HEBREW_YEAR: u16 = 9999;

/// Lowest supported Hebrew year (inclusive)
pub const MIN_HEBREW_YEAR: u16 = 1;

/// Julian day number of 1 Tishrei of `MIN_HEBREW_YEAR`
pub const MIN_JULIAN_DAY: i32 = 347_998;

/// Julian day number of 29 Elul of `MAX_HEBREW_YEAR`
pub const MAX_JULIAN_DAY: i32 = 4_000_075;

/// Gregorian year containing `MIN_JULIAN_DAY` (proleptic, astronomical numbering)
pub const MIN_GREGORIAN_YEAR: i32 = -3760;

/// Gregorian year containing `MAX_JULIAN_DAY`
pub const MAX_GREGORIAN_YEAR: i32 = 6239;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Parts (chalakim) in one hour
pub const PARTS_PER_HOUR: i64 = 1080;
/// Parts in one day
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Parts in one week
pub(crate) const PARTS_PER_WEEK: i64 = 7 * PARTS_PER_DAY;
/// Mean synodic month beyond whole 28-day blocks: 1d 12h 793p
pub(crate) const MONTH_EXCESS_PARTS: i64 = PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;
/// Molad of the 3744 reference year shifted by six hours: 7h 779p
pub(crate) const EPOCH_MOLAD_PARTS: i64 = 7 * PARTS_PER_HOUR + 779;
/// Reference year of the molad arithmetic
pub(crate) const EPOCH_YEAR: i32 = 3744;

/// Julian day number offset of the Hebrew day count
pub(crate) const HEBREW_EPOCH_JDN: i32 = 1_715_118;

/// Length of the leap-year cycle in years
pub(crate) const LEAP_CYCLE: i32 = 19;

/// Days in the last eight months of any Hebrew year (Shvat/Adar I through Elul)
pub(crate) const LAST_EIGHT_MONTHS_DAYS: i32 = 236;

/// Hebrew year minus Gregorian year for dates after 1 Tishrei
pub(crate) const HEBREW_YEAR_OFFSET: i32 = 3761;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Span separator (ISO 8601 extended format)
pub const SPAN_SEPARATOR: char = '/';
