use axum::extract::State;
use staffing_core::domain::department::{
    entities::Department, ports::DepartmentService, value_objects::DepartmentPayload,
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
    tag = "department",
    summary = "Create department",
    security(("api_key" = [])),
    request_body = DepartmentPayload,
    responses(
        (status = 201, body = Envelope<Department>),
        (status = 400, body = ErrorEnvelope)
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    PayloadJson(payload): PayloadJson,
) -> Result<Response<Envelope<Department>>, ApiError> {
    let department = state
        .service
        .create_department(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(Envelope::new(department)))
}
