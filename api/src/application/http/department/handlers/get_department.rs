use axum::extract::{Path, State};
use staffing_core::domain::{
    department::{entities::Department, ports::DepartmentService},
    validation::parse_identifier,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope},
        response::{Envelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{department_id}",
    tag = "department",
    summary = "Get department",
    params(
        ("department_id" = i32, Path, description = "Department ID"),
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, body = Envelope<Department>),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn get_department(
    Path(department_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Envelope<Department>>, ApiError> {
    let department_id = parse_identifier(&department_id)?;

    let department = state
        .service
        .get_department(department_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Envelope::new(department)))
}
