use axum::extract::State;
use staffing_core::domain::employee::{
    entities::Employee, ports::EmployeeService, value_objects::EmployeePayload,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorEnvelope, PayloadJson},
        response::{Envelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "employee",
    summary = "Create employee",
    security(("api_key" = [])),
    request_body = EmployeePayload,
    responses(
        (status = 201, body = Envelope<Employee>),
        (status = 400, body = ErrorEnvelope)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    PayloadJson(payload): PayloadJson,
) -> Result<Response<Envelope<Employee>>, ApiError> {
    let employee = state
        .service
        .create_employee(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(Envelope::new(employee)))
}
