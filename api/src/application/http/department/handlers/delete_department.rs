use axum::extract::{Path, State};
use staffing_core::domain::{department::ports::DepartmentService, validation::parse_identifier};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope},
        response::{MessageEnvelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{department_id}",
    tag = "department",
    summary = "Delete department",
    description = "Deletes the department together with all of its employees.",
    params(
        ("department_id" = i32, Path, description = "Department ID"),
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, body = MessageEnvelope),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn delete_department(
    Path(department_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MessageEnvelope>, ApiError> {
    let department_id = parse_identifier(&department_id)?;

    let message = state
        .service
        .delete_department(department_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MessageEnvelope::new(message)))
}
