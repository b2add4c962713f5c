use axum::Json;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Outcome tag carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Current UTC time in RFC 3339 with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Success envelope: `{ "status": "success", "data": ..., "timestamp": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    status: Status,
    data: T,
    timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data,
            timestamp: timestamp(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
