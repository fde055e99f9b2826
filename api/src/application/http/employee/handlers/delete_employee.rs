use axum::extract::{Path, State};
use staffing_core::domain::{employee::ports::EmployeeService, validation::parse_identifier};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope},
        response::{MessageEnvelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{employee_id}",
    tag = "employee",
    summary = "Delete employee",
    params(
        ("employee_id" = i32, Path, description = "Employee ID"),
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, body = MessageEnvelope),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn delete_employee(
    Path(employee_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MessageEnvelope>, ApiError> {
    let employee_id = parse_identifier(&employee_id)?;

    let message = state
        .service
        .delete_employee(employee_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageEnvelope::new(message)))
}
