use axum::Json;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::info;

use super::error::ApiError;
use super::response::{ApiResponse, Status, timestamp};
use crate::{CanadaDay, VALID_RANGE, YearInput, calculate_canada_day, validate_year};

fn compute(input: YearInput) -> Result<ApiResponse<CanadaDay>, ApiError> {
    let year = validate_year(input)?;
    let result = calculate_canada_day(i64::from(year.get()))?;
    info!(year = result.year(), weekday = %result.weekday(), "computed canada day");
    Ok(ApiResponse::success(result))
}

/// `GET /api/canada-day/{year}`
pub async fn by_path(Path(year): Path<String>) -> Result<ApiResponse<CanadaDay>, ApiError> {
    compute(YearInput::Text(year))
}

/// `POST /api/canada-day` with `{ "year": ... }`
pub async fn by_body(Json(body): Json<Value>) -> Result<ApiResponse<CanadaDay>, ApiError> {
    let input = body
        .get("year")
        .and_then(year_from_json)
        .ok_or(ApiError::MissingYear)?;
    compute(input)
}

/// Reads `year` from a JSON body. Falsy values (`null`, `false`, `0`, `""`)
/// count as absent. Anything else non-scalar is read through its script
/// string form, so `[2024]` is the text `2024`.
fn year_from_json(value: &Value) -> Option<YearInput> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(YearInput::Text(s.clone())),
        Value::Number(n) => {
            let input = n
                .as_i64()
                .map_or_else(|| YearInput::Float(n.as_f64().unwrap_or(f64::NAN)), YearInput::Integer);
            match input {
                YearInput::Integer(0) => None,
                YearInput::Float(f) if f == 0.0 => None,
                other => Some(other),
            }
        }
        other => Some(YearInput::Text(script_text(other))),
    }
}

/// String conversion as a browser script performs it: arrays join their
/// elements with `,`, `null` inside an array is empty, objects are opaque.
fn script_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.is_finite() => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(script_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// `GET /api/canada-day`
pub async fn about() -> Response {
    Json(json!({
        "status": Status::Success,
        "message": "Canada Day Calculator API",
        "description": "Calculate what day of the week Canada Day (July 1st) falls on for any year between 1600 and 3000",
        "usage": {
            "endpoints": [
                {
                    "method": "GET",
                    "path": "/api/canada-day/{year}",
                    "description": "Calculate Canada Day for specific year",
                    "example": "/api/canada-day/2024"
                },
                {
                    "method": "POST",
                    "path": "/api/canada-day",
                    "description": "Calculate Canada Day with year in request body",
                    "example": "{\"year\": 2024}"
                }
            ],
            "validRange": VALID_RANGE,
            "algorithm": "Proleptic Gregorian day count"
        },
        "timestamp": timestamp(),
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_json_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(year_from_json(&value), None, "{value}");
        }
    }

    #[test]
    fn test_year_from_json_values() {
        assert_eq!(year_from_json(&json!(2024)), Some(YearInput::Integer(2024)));
        assert_eq!(year_from_json(&json!(2024.5)), Some(YearInput::Float(2024.5)));
        assert_eq!(
            year_from_json(&json!("1867")),
            Some(YearInput::Text("1867".to_owned()))
        );
        assert_eq!(
            year_from_json(&json!(true)),
            Some(YearInput::Text("true".to_owned()))
        );
    }

    #[test]
    fn test_year_from_json_arrays_and_objects() {
        let cases = [
            (json!([2024]), "2024"),
            (json!(["1867", 5]), "1867,5"),
            (json!([[2017]]), "2017"),
            (json!([null, 2024]), ",2024"),
            (json!([2024.0]), "2024"),
            (json!([]), ""),
            (json!({ "y": 2024 }), "[object Object]"),
        ];
        for (value, text) in cases {
            assert_eq!(
                year_from_json(&value),
                Some(YearInput::Text(text.to_owned())),
                "{value}"
            );
        }
    }
}
