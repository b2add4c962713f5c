mod calculator;
mod consts;
mod prelude;
mod types;
mod validate;

pub mod config;
pub mod report;
pub mod sales;
pub mod server;
pub mod session;

pub use calculator::{CalculateError, CanadaDay, calculate_canada_day, canada_day, fun_fact};
pub use consts::*;
pub use types::{Weekday, Year, day_of_year, days_in_month, is_leap_year, weekday_of};
pub use validate::{YearInput, YearValidation, parse_leading_int, validate_year};

use crate::prelude::*;

/// Why a candidate year was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum YearError {
    /// The input does not start with an integer
    #[display(fmt = "Please enter a valid number for the year.")]
    NotANumber(String),
    /// The input is an integer outside `MIN_YEAR..=MAX_YEAR`
    #[display(fmt = "Year must be between {} and {} (inclusive).", MIN_YEAR, MAX_YEAR)]
    OutOfRange(i64),
}

impl std::error::Error for YearError {}

impl YearError {
    /// The accepted range, reported alongside every rejection
    pub const fn valid_range(&self) -> &'static str {
        VALID_RANGE
    }
}
