use axum::extract::{Path, State};
use staffing_core::domain::{
    employee::{ports::EmployeeService, value_objects::EmployeePayload},
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
    path = "/{employee_id}",
    tag = "employee",
    summary = "Update employee",
    description = "Overwrites every field of the employee. An omitted address is cleared.",
    params(
        ("employee_id" = i32, Path, description = "Employee ID"),
    ),
    security(("api_key" = [])),
    request_body = EmployeePayload,
    responses(
        (status = 200, body = MessageEnvelope),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn update_employee(
    Path(employee_id): Path<String>,
    State(state): State<AppState>,
    PayloadJson(payload): PayloadJson,
) -> Result<Response<MessageEnvelope>, ApiError> {
    let employee_id = parse_identifier(&employee_id)?;

    let message = state
        .service
        .update_employee(employee_id, payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageEnvelope::new(message)))
}
