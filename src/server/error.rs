use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use super::response::Status;
use crate::{CalculateError, VALID_RANGE, YearError};

/// Error type for the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// POST body carried no usable `year`.
    #[error("Year is required in request body")]
    MissingYear,

    #[error(transparent)]
    InvalidYear(#[from] YearError),

    /// The calculator refused a year that passed validation.
    #[error("An error occurred while calculating Canada Day")]
    Calculation(#[from] CalculateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingYear | Self::InvalidYear(_) => {
                warn!(error = %self, "rejected year");
                let body = json!({
                    "status": Status::Error,
                    "message": self.to_string(),
                    "validRange": VALID_RANGE,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Calculation(source) => {
                error!(error = %source, "calculation failed after validation");
                let body = json!({
                    "status": Status::Error,
                    "message": self.to_string(),
                    "error": source.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
