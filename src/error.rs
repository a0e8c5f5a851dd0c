use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

use crate::posting::RequiredField;
use crate::predict::PredictorError;

/// Prompt shown when a posting arrives without the minimum input.
pub const MISSING_FIELD_PROMPT: &str =
    "Please fill in at least the Job Title and Job Description for an accurate analysis.";

/// Why a scan produced no verdict. Incomplete input is recoverable by the
/// user; a failing predictor is not, and never degrades into a partial
/// keyword-only verdict.
#[derive(Debug)]
pub enum ScanError {
    MissingRequiredField(RequiredField),
    Predictor(PredictorError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::MissingRequiredField(field) => {
                write!(f, "missing required field: {}", field.name())
            }
            ScanError::Predictor(err) => write!(f, "predictor unavailable: {}", err),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::MissingRequiredField(_) => None,
            ScanError::Predictor(err) => Some(err),
        }
    }
}

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        match self {
            ScanError::MissingRequiredField(field) => {
                let body = Json(json!({
                    "error": "missing_required_field",
                    "field": field.name(),
                    "message": MISSING_FIELD_PROMPT,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ScanError::Predictor(err) => {
                let body = Json(json!({
                    "error": "predictor_unavailable",
                    "message": err.to_string(),
                }));
                (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
            }
        }
    }
}

impl From<PredictorError> for ScanError {
    fn from(value: PredictorError) -> Self {
        Self::Predictor(value)
    }
}
