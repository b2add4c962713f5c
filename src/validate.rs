use serde::Serialize;

use crate::prelude::*;
use crate::{Year, YearError};

/// A candidate year as it arrives from outside: typed text, a CLI argument,
/// or a JSON number.
#[derive(Debug, Clone, PartialEq, From)]
pub enum YearInput {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<&str> for YearInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for YearInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u16> for YearInput {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl YearInput {
    /// Reads the input as an integer, leniently.
    ///
    /// Text keeps its longest leading integer; floats are truncated toward zero.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Text(text) => parse_leading_int(text),
            Self::Integer(value) => Some(*value),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Float(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

/// Parses the longest base-10 integer at the start of `s`.
///
/// Leading whitespace and a single sign are allowed, anything after the digits
/// is ignored. Returns `None` when no digit follows. Magnitudes past `i64`
/// saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let rest = s.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Validates a candidate year.
///
/// # Errors
/// Returns `YearError::NotANumber` if no integer can be read from the input,
/// or `YearError::OutOfRange` if it falls outside `MIN_YEAR..=MAX_YEAR`.
pub fn validate_year(input: impl Into<YearInput>) -> Result<Year, YearError> {
    let input = input.into();
    let value = input
        .to_integer()
        .ok_or_else(|| YearError::NotANumber(input.describe()))?;
    Year::from_i64(value)
}

/// Serializable outcome of validation: `{ isValid, year?, error? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Year, YearError>> for YearValidation {
    fn from(result: Result<Year, YearError>) -> Self {
        match result {
            Ok(year) => Self {
                is_valid: true,
                year: Some(year.get()),
                error: None,
            },
            Err(err) => Self {
                is_valid: false,
                year: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_year_in_range() {
        let year = validate_year("2024").unwrap();
        assert_eq!(year.get(), 2024);
    }

    #[test]
    fn test_accepts_boundary_years() {
        assert!(validate_year("1600").is_ok());
        assert!(validate_year("3000").is_ok());
    }

    #[test]
    fn test_rejects_years_outside_range() {
        for input in ["1599", "3001", "0", "-2024"] {
            let err = validate_year(input).unwrap_err();
            assert!(matches!(err, YearError::OutOfRange(_)), "{input}");
            assert!(err.to_string().contains("between 1600 and 3000"));
        }
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        for input in ["abc", "", "   ", "-", "+", "x2024"] {
            let err = validate_year(input).unwrap_err();
            assert!(matches!(err, YearError::NotANumber(_)), "{input:?}");
            assert!(err.to_string().contains("valid number"));
        }
    }

    #[test]
    fn test_accepts_numeric_input() {
        assert_eq!(validate_year(2024i64).unwrap().get(), 2024);
        assert_eq!(validate_year(2024u16).unwrap().get(), 2024);
        assert_eq!(validate_year(1867i32).unwrap().get(), 1867);
    }

    #[test]
    fn test_float_input_is_truncated() {
        assert_eq!(validate_year(2024.9).unwrap().get(), 2024);
        assert!(matches!(
            validate_year(f64::NAN),
            Err(YearError::NotANumber(_))
        ));
        assert!(matches!(
            validate_year(f64::INFINITY),
            Err(YearError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_leading_int_cases() {
        let cases = [
            ("2024", Some(2024)),
            ("  2024", Some(2024)),
            ("\t1867\n", Some(1867)),
            ("2024abc", Some(2024)),
            ("2024.5", Some(2024)),
            ("+2000", Some(2000)),
            ("-15", Some(-15)),
            ("1 999", Some(1)),
            ("abc", None),
            ("", None),
            ("- 5", None),
            ("99999999999999999999999", Some(i64::MAX)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_leading_int(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_trailing_garbage_is_accepted() {
        assert_eq!(validate_year("2017 was great").unwrap().get(), 2017);
    }

    #[test]
    fn test_year_validation_shape() {
        let ok = YearValidation::from(validate_year("2024"));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({ "isValid": true, "year": 2024 })
        );

        let err = YearValidation::from(validate_year("abc"));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "isValid": false,
                "error": "Please enter a valid number for the year."
            })
        );
    }
}
