use axum::extract::{Path, State};
use staffing_core::domain::{
    department::{ports::DepartmentService, value_objects::DepartmentPayload},
    validation::parse_identifier,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope, PayloadJson},
        response::{MessageEnvelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    put,
    path = "/{department_id}",
    tag = "department",
    summary = "Update department",
    description = "Overwrites every field of the department.",
    params(
        ("department_id" = i32, Path, description = "Department ID"),
    ),
    security(("api_key" = [])),
    request_body = DepartmentPayload,
    responses(
        (status = 200, body = MessageEnvelope),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn update_department(
    Path(department_id): Path<String>,
    State(state): State<AppState>,
    PayloadJson(payload): PayloadJson,
) -> Result<Response<MessageEnvelope>, ApiError> {
    let department_id = parse_identifier(&department_id)?;

    let message = state
        .service
        .update_department(department_id, payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageEnvelope::new(message)))
}
