//! The Gregorian side of the conversion: a date-only value type and its
//! fixed-day (Rata Die) arithmetic, per Calendrical Calculations.

use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_MAX_FIXED,
    GREGORIAN_MIN_FIXED, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR, MAX_MONTH, MIN_DAY, UNIX_EPOCH_FIXED,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Day count since the day before Gregorian 0001-01-01 (Rata Die).
pub(crate) type FixedDay = i64;

const DAYS_IN_YEAR: i64 = 365;
const DAYS_IN_4_YEAR_CYCLE: i64 = DAYS_IN_YEAR * 4 + 1;
const DAYS_IN_100_YEAR_CYCLE: i64 = 25 * DAYS_IN_4_YEAR_CYCLE - 1;
const DAYS_IN_400_YEAR_CYCLE: i64 = 4 * DAYS_IN_100_YEAR_CYCLE + 1;

const SECS_PER_DAY: u64 = 86_400;

/// A Gregorian calendar date with date-only precision, in the years
/// `1..=9999`. This is the bound-value side of the picker; the time of day is
/// always taken as zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Gregorian 1970-01-01, the fallback when the system clock reads before
    /// the Unix epoch.
    const UNIX_EPOCH_DATE: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Creates a date, validating year, month and day against the Gregorian
    /// calendar rules.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for years outside `1..=9999`,
    /// `DateError::InvalidMonth` or `DateError::InvalidDay` otherwise.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year == 0 || year > MAX_GREGORIAN_YEAR {
            return Err(DateError::OutOfRange(format!("Gregorian year {year}")));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The current system date. Clocks before the Unix epoch degrade to
    /// 1970-01-01; clocks past the year-9999 ceiling clamp to 9999-12-31.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let fixed = UNIX_EPOCH_FIXED + (secs / SECS_PER_DAY) as i64;
        Self::from_fixed(fixed.clamp(GREGORIAN_MIN_FIXED, GREGORIAN_MAX_FIXED))
            .unwrap_or(Self::UNIX_EPOCH_DATE)
    }

    pub(crate) fn to_fixed(self) -> FixedDay {
        day_before_year(self.year) + i64::from(days_before_month(self.year, self.month))
            + i64::from(self.day)
    }

    pub(crate) fn from_fixed(fixed: FixedDay) -> Result<Self, DateError> {
        if !(GREGORIAN_MIN_FIXED..=GREGORIAN_MAX_FIXED).contains(&fixed) {
            return Err(DateError::OutOfRange(format!("fixed day {fixed}")));
        }

        let since_epoch = fixed - 1;
        let (n400, rem) = (
            since_epoch.div_euclid(DAYS_IN_400_YEAR_CYCLE),
            since_epoch.rem_euclid(DAYS_IN_400_YEAR_CYCLE),
        );
        let (n100, rem) = (rem / DAYS_IN_100_YEAR_CYCLE, rem % DAYS_IN_100_YEAR_CYCLE);
        let (n4, rem) = (rem / DAYS_IN_4_YEAR_CYCLE, rem % DAYS_IN_4_YEAR_CYCLE);
        let n1 = rem / DAYS_IN_YEAR;

        // The last day of a leap year lands on n100 == 4 or n1 == 4 and
        // belongs to the year just counted, not the next one.
        let year = 400 * n400 + 100 * n100 + 4 * n4 + n1 + i64::from(n100 != 4 && n1 != 4);
        let year = u16::try_from(year)
            .map_err(|_| DateError::OutOfRange(format!("Gregorian year {year}")))?;

        let mut day = fixed - day_before_year(year);
        let mut month = 1u8;
        while day > i64::from(days_in_month(year, month)) {
            day -= i64::from(days_in_month(year, month));
            month += 1;
        }

        Ok(Self {
            year,
            month,
            day: day as u8,
        })
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl TryFrom<String> for GregorianDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GregorianDate> for String {
    fn from(date: GregorianDate) -> Self {
        date.to_string()
    }
}

// Helper functions

pub(crate) fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == 2 && is_leap_year(year) {
        29
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Fixed day of the last day of December before `year` begins.
fn day_before_year(year: u16) -> FixedDay {
    let prev = i64::from(year) - 1;
    DAYS_IN_YEAR * prev + prev / i64::from(LEAP_YEAR_CYCLE) - prev / i64::from(CENTURY_CYCLE)
        + prev / i64::from(GREGORIAN_CYCLE)
}

/// Days of `year` elapsed before `month` begins.
fn days_before_month(year: u16, month: u8) -> u16 {
    let mut days = 0u16;
    let mut m = 1u8;
    while m < month {
        days += u16::from(days_in_month(year, m));
        m += 1;
    }
    days
}
