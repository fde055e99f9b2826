use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    /// The request was rejected (4xx).
    Fail,
    /// The server could not complete a valid request (5xx).
    Error,
}

/// Success body carrying a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
        }
    }
}

/// Success body carrying only a human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageEnvelope {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_envelope_shapes() {
        assert_eq!(
            json!(Envelope::new(json!({ "department_id": 1 }))),
            json!({ "status": "success", "data": { "department_id": 1 } })
        );
        assert_eq!(
            json!(MessageEnvelope::new("done")),
            json!({ "status": "success", "message": "done" })
        );
    }

    #[test]
    fn test_created_status() {
        let response = Response::Created(MessageEnvelope::new("done")).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
