/// Maximum valid Persian year (inclusive). Persian 9378-10-10 is the last
/// day with a Gregorian counterpart below the year-10000 ceiling.
pub const MAX_YEAR: u16 = 9378;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Esfand, the only month whose length depends on the year
pub const ESFAND: u8 = 12;

/// Last month of the 31-day half of the year
pub const FIRST_HALF_MONTHS: u8 = 6;

/// Days in each of the first six months
pub const FIRST_HALF_DAYS: u8 = 31;

/// Days in months seven through eleven
pub const SECOND_HALF_DAYS: u8 = 30;

/// Days in Esfand during leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Day of year on which the sixth month ends
pub const FIRST_HALF_DOY: i64 = 186;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Persian month names in English transliteration, for drop-down labels.
pub const JALALI_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Years the 33-year rule marks as leap that the astronomical calendar does
/// not. The year after each is leap instead. The table matches the modified
/// astronomical algorithm (52.5° east meridian) from 1178 AP to 3000 AP.
pub const NON_LEAP_CORRECTION: [i32; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

/// First entry of [`NON_LEAP_CORRECTION`]; years below it follow the plain 33-year rule.
pub(crate) const MIN_NON_LEAP_CORRECTION: i32 = NON_LEAP_CORRECTION[0];

/// Years per Persian leap cycle
pub(crate) const LEAP_CYCLE: i64 = 33;
/// Leap years in each 33-year cycle
pub(crate) const LEAPS_PER_CYCLE: i64 = 8;
/// Common years in each 33-year cycle
pub(crate) const COMMON_YEARS_PER_CYCLE: i64 = 25;
/// Days in a 33-year cycle (25 * 365 + 8 * 366)
pub(crate) const DAYS_PER_CYCLE: i64 = 12_053;

/// Fixed day (Rata Die) anchor of the Persian arithmetic, Julian 622-03-19
/// per Calendrical Calculations.
pub(crate) const PERSIAN_EPOCH: i64 = 226_896;

/// Fixed day of Persian 1-01-01, the first convertible date.
pub(crate) const PERSIAN_MIN_FIXED: i64 = 226_895;

/// Maximum valid Gregorian year (inclusive)
pub(crate) const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Fixed day of Gregorian 0001-01-01
pub(crate) const GREGORIAN_MIN_FIXED: i64 = 1;

/// Fixed day of Gregorian 9999-12-31
pub(crate) const GREGORIAN_MAX_FIXED: i64 = 3_652_059;

/// Fixed day of Gregorian 1970-01-01
pub(crate) const UNIX_EPOCH_FIXED: i64 = 719_163;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator for the `YYYY-MM-DD` string forms
pub const DATE_SEPARATOR: char = '-';

/// Default lower bound of the selectable Persian year window
pub const DEFAULT_START_YEAR: i32 = 1300;
/// Default upper bound of the selectable Persian year window
pub const DEFAULT_END_YEAR: i32 = 1500;
