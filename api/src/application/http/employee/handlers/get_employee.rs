use axum::extract::{Path, State};
use staffing_core::domain::{
    employee::{entities::Employee, ports::EmployeeService},
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
    path = "/{employee_id}",
    tag = "employee",
    summary = "Get employee",
    params(
        ("employee_id" = i32, Path, description = "Employee ID"),
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, body = Envelope<Employee>),
        (status = 400, body = ErrorEnvelope),
        (status = 404, body = ErrorEnvelope)
    )
)]
pub async fn get_employee(
    Path(employee_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Envelope<Employee>>, ApiError> {
    let employee_id = parse_identifier(&employee_id)?;

    let employee = state
        .service
        .get_employee(employee_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Envelope::new(employee)))
}
