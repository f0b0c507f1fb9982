//! Headless Persian (Jalali) date picker model: a Jalali/Gregorian date pair
//! kept in sync through three independently editable year/month/day fields.

mod consts;
mod gregorian;
mod options;
mod picker;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use gregorian::GregorianDate;
pub use options::{PickerOptions, SelectionMode};
pub use picker::{PersianDatePicker, PickerError, PickerEvent};
pub use range::YearRange;
pub use types::{Day, Month, Year, days_in_month, is_leap_year, month_day_upper_bound};

use crate::gregorian::FixedDay;
use crate::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid Persian year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date outside the supported range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A validated Persian (Jalali) calendar date.
///
/// Conversion against [`GregorianDate`] uses the 33-year arithmetic rule with
/// the astronomical correction table, the same arithmetic ICU carries for the
/// Persian calendar. Supported window: Persian 1-01-01 (Gregorian 622-03-21)
/// through Persian 9378-10-10 (Gregorian 9999-12-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
}

impl JalaliDate {
    /// Creates a date, validating year, month and day strictly. Out-of-range
    /// parts are rejected, never clamped.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (1..=9378)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Whether this date's year is a Persian leap year
    pub fn is_leap_year(self) -> bool {
        is_leap_year(i32::from(self.year.get()))
    }

    /// The number of days in this date's month
    pub fn days_in_month(self) -> u8 {
        days_in_month(i32::from(self.year.get()), self.month.get())
    }

    /// English transliteration of this date's month name
    pub fn month_name(self) -> &'static str {
        JALALI_MONTHS[usize::from(self.month.get()) - 1]
    }

    /// Decomposes a Gregorian date into its Persian equivalent.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates before Persian 1-01-01.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        Self::from_fixed(date.to_fixed())
    }

    /// Composes this date into its Gregorian equivalent.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates past Gregorian 9999-12-31.
    pub fn to_gregorian(self) -> Result<GregorianDate, DateError> {
        GregorianDate::from_fixed(self.to_fixed())
    }

    /// One-based day of the year: months 1-6 carry 31 days, later months 30.
    fn day_of_year(self) -> i64 {
        let month = i64::from(self.month.get());
        let day = i64::from(self.day.get());
        let before = if month <= 7 {
            31 * (month - 1)
        } else {
            // the first half accumulates a 6-day surplus over 30-day months
            30 * (month - 1) + 6
        };
        before + day
    }

    /// Fixed day of Farvardin 1 of `year`.
    fn first_of_year(year: u16) -> FixedDay {
        let y = i64::from(year);
        let mut first =
            PERSIAN_EPOCH - 1 + 365 * (y - 1) + (LEAPS_PER_CYCLE * y + 21).div_euclid(LEAP_CYCLE);
        // The year after a correction entry starts one day earlier than the
        // plain 33-year rule places it.
        if i32::from(year) > MIN_NON_LEAP_CORRECTION
            && NON_LEAP_CORRECTION
                .binary_search(&(i32::from(year) - 1))
                .is_ok()
        {
            first -= 1;
        }
        first
    }

    pub(crate) fn to_fixed(self) -> FixedDay {
        Self::first_of_year(self.year.get()) - 1 + self.day_of_year()
    }

    pub(crate) fn from_fixed(fixed: FixedDay) -> Result<Self, DateError> {
        if fixed < PERSIAN_MIN_FIXED {
            return Err(DateError::OutOfRange(format!("fixed day {fixed}")));
        }

        let days_since_epoch = fixed - PERSIAN_EPOCH + 1;
        let year = 1 + (LEAP_CYCLE * days_since_epoch + 3).div_euclid(DAYS_PER_CYCLE);
        let mut year = u16::try_from(year)
            .map_err(|_| DateError::OutOfRange(format!("Persian year {year}")))?;

        let mut doy = 1 + fixed - Self::first_of_year(year);
        // Day 366 of a correction year is really Farvardin 1 of the next.
        if doy == 366
            && i32::from(year) >= MIN_NON_LEAP_CORRECTION
            && NON_LEAP_CORRECTION.binary_search(&i32::from(year)).is_ok()
        {
            year += 1;
            doy = 1;
        }

        // `doy` is always positive here, so ceil-division equals the (unstable
        // on signed ints) `i64::div_ceil`.
        let month = if doy <= FIRST_HALF_DOY {
            (doy + 30) / 31
        } else {
            ((doy - 6) + 29) / 30
        };
        let before = if month <= 7 {
            31 * (month - 1)
        } else {
            30 * (month - 1) + 6
        };
        let day = doy - before;

        Self::new(year, month as u8, day as u8)
    }
}

impl FromStr for JalaliDate {
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

impl TryFrom<(u16, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
