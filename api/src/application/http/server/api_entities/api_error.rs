use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use staffing_core::domain::{common::entities::app_errors::CoreError, validation::Complaints};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

use super::response::ResponseStatus;

pub const INTERNAL_ERROR_MESSAGE: &str = "Could not reach the database.";
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing API key.";

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Complaints),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,
    #[error("{0}")]
    InternalServerError(String),
}

/// Error body. `message` is either text or the list of complaints.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorEnvelope {
    pub status: ResponseStatus,
    pub code: String,
    pub message: Complaints,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(complaints) => ApiError::Validation(complaints),
            CoreError::InvalidIdentifier(_) => ApiError::BadRequest(error.to_string()),
            CoreError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl ApiError {
    fn parts(self) -> (StatusCode, ErrorEnvelope) {
        let (status, code, message) = match self {
            ApiError::Validation(complaints) => {
                (StatusCode::BAD_REQUEST, "bad_request", complaints)
            }
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                Complaints::Message(message),
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                "not_found",
                Complaints::Message(message),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                Complaints::Message(UNAUTHORIZED_MESSAGE.to_string()),
            ),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                Complaints::Message(message),
            ),
        };

        let envelope = ErrorEnvelope {
            status: if status.is_server_error() {
                ResponseStatus::Error
            } else {
                ResponseStatus::Fail
            },
            code: code.to_string(),
            message,
        };

        (status, envelope)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = self.parts();
        (status, Json(envelope)).into_response()
    }
}

/// Request body read as a raw JSON object.
///
/// An empty body yields an empty map so the "request empty" rule applies to it the
/// same way as to `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadJson(pub Map<String, Value>);

impl<S> FromRequest<S> for PayloadJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(PayloadJson(Map::new()));
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(payload)) => Ok(PayloadJson(payload)),
            Ok(_) => Err(ApiError::BadRequest(
                "request body must be a JSON object".to_string(),
            )),
            Err(e) => {
                debug!("Rejected malformed request body: {}", e);
                Err(ApiError::BadRequest(
                    "request body must be valid JSON".to_string(),
                ))
            }
        }
    }
}
