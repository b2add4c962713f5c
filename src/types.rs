use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_YEAR,
};
use crate::YearError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1600..=3000)
/// Uses `NonZeroU16` internally so `Option<Year>` stays two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `YearError::OutOfRange` if the value is outside the range.
    pub fn new(value: u16) -> Result<Self, YearError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(YearError::OutOfRange(i64::from(value)));
        }
        let non_zero = NonZeroU16::new(value).ok_or(YearError::OutOfRange(i64::from(value)))?;
        Ok(Self(non_zero))
    }

    /// Creates a Year from any signed integer, validating the range
    ///
    /// # Errors
    /// Returns `YearError::OutOfRange` if the value is outside the range.
    pub fn from_i64(value: i64) -> Result<Self, YearError> {
        u16::try_from(value)
            .map_err(|_| YearError::OutOfRange(value))
            .and_then(Self::new)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = YearError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Year {
    type Error = YearError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. The discriminant is the weekday index, Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for an index in `0..=6`
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the weekday index, Sunday = 0 through Saturday = 6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the weekday
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Saturday and Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    // Day 1 (0001-01-01) was a Monday, so a plain modulo lands on the Sunday = 0 table.
    const fn from_epoch_days(days: u32) -> Self {
        Self::ALL[(days % DAYS_IN_WEEK) as usize]
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Ordinal day within the year, January 1 = 1
pub const fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    let mut total = day as u16;
    let mut m = 1;
    while m < month {
        total += days_in_month(year, m) as u16;
        m += 1;
    }
    total
}

/// Days from the proleptic Gregorian epoch, where 0001-01-01 is day 1
pub const fn days_since_epoch(year: u16, month: u8, day: u8) -> u32 {
    debug_assert!(year != 0);

    let prior = (year - 1) as u32;
    let leap_days = prior / LEAP_YEAR_CYCLE as u32 - prior / CENTURY_CYCLE as u32
        + prior / GREGORIAN_CYCLE as u32;
    prior * DAYS_IN_COMMON_YEAR + leap_days + day_of_year(year, month, day) as u32
}

/// Weekday of a proleptic Gregorian calendar date
pub const fn weekday_of(year: u16, month: u8, day: u8) -> Weekday {
    Weekday::from_epoch_days(days_since_epoch(year, month, day))
}
