use serde::Serialize;

use crate::consts::{
    CANADA_DAY_DAY, CANADA_DAY_MONTH, CENTURY_CYCLE, CONFEDERATION_YEAR, MAX_YEAR, MIN_YEAR,
    QUARTER_CENTURY, SESQUICENTENNIAL_YEAR,
};
use crate::types::weekday_of;
use crate::{Weekday, Year};

/// Error returned when the calculator is handed a year that never went
/// through validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculateError {
    #[error("Year must be an integer between {} and {}", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
}

/// Where Canada Day lands in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanadaDay {
    year: u16,
    date: String,
    day_name: Weekday,
    day_number: u8,
    is_weekend: bool,
    is_weekday: bool,
    fun_fact: String,
}

impl CanadaDay {
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Date label, e.g. `July 1, 2024`
    pub fn date(&self) -> &str {
        &self.date
    }

    pub const fn weekday(&self) -> Weekday {
        self.day_name
    }

    /// Weekday index, Sunday = 0
    pub const fn day_number(&self) -> u8 {
        self.day_number
    }

    pub const fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub const fn is_weekday(&self) -> bool {
        self.is_weekday
    }

    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }
}

/// Computes Canada Day for a validated year.
pub fn canada_day(year: Year) -> CanadaDay {
    let year = year.get();
    let weekday = weekday_of(year, CANADA_DAY_MONTH, CANADA_DAY_DAY);
    let is_weekend = weekday.is_weekend();

    CanadaDay {
        year,
        date: format!("July 1, {year}"),
        day_name: weekday,
        day_number: weekday.index(),
        is_weekend,
        is_weekday: !is_weekend,
        fun_fact: fun_fact(weekday, is_weekend, year),
    }
}

/// Computes Canada Day for a raw integer year, re-checking the range.
///
/// # Errors
/// Returns `CalculateError::InvalidYear` if the year is outside `MIN_YEAR..=MAX_YEAR`.
pub fn calculate_canada_day(year: i64) -> Result<CanadaDay, CalculateError> {
    let year = Year::from_i64(year).map_err(|_| CalculateError::InvalidYear(year))?;
    Ok(canada_day(year))
}

/// Builds the descriptive blurb for a Canada Day result.
pub fn fun_fact(weekday: Weekday, is_weekend: bool, year: u16) -> String {
    let mut facts = Vec::with_capacity(3);

    if is_weekend {
        facts.push(format!(
            "Great news! Canada Day {year} falls on a {weekday}, making it a long weekend for celebrations!"
        ));
    } else {
        facts.push(format!(
            "Canada Day {year} falls on a {weekday}, a weekday. Many Canadians will have a statutory holiday."
        ));
    }

    // First match wins.
    if year == CONFEDERATION_YEAR {
        facts.push("This is the year Canada was founded through Confederation!".to_owned());
    } else if year == SESQUICENTENNIAL_YEAR {
        facts.push("Canada's 150th anniversary year!".to_owned());
    } else if year % CENTURY_CYCLE == 0 {
        facts.push(format!("{year} is a century year - how exciting!"));
    } else if year % QUARTER_CENTURY == 0 {
        facts.push(format!("{year} is a quarter-century milestone year."));
    }

    let day_fact = match weekday {
        Weekday::Monday => Some(
            "A Monday Canada Day means the weekend celebration can extend into the statutory holiday!",
        ),
        Weekday::Friday => Some("A Friday Canada Day creates a perfect long weekend opportunity!"),
        Weekday::Saturday => Some(
            "Saturday Canada Day celebrations can be extra festive with no work the next day for most people!",
        ),
        Weekday::Sunday => Some(
            "Sunday Canada Day often means the statutory holiday is observed on Monday for workers!",
        ),
        Weekday::Tuesday | Weekday::Wednesday | Weekday::Thursday => None,
    };
    if let Some(fact) = day_fact {
        facts.push(fact.to_owned());
    }

    facts.join(" ")
}
