use axum::extract::State;
use staffing_core::domain::{
    employee::{entities::Employee, ports::EmployeeService},
    listing::{FilterQuery, Paginated},
};

use crate::application::http::{
    query_extractor::FilterQueryExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorEnvelope},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "employee",
    summary = "List employees",
    description = "Returns one page of employees with their department name. The `department` field searches and sorts on that name.",
    params(FilterQuery),
    security(("api_key" = [])),
    responses(
        (status = 200, body = Envelope<Paginated<Employee>>),
        (status = 400, body = ErrorEnvelope),
        (status = 401, body = ErrorEnvelope)
    )
)]
pub async fn get_employees(
    State(state): State<AppState>,
    FilterQueryExtractor(query): FilterQueryExtractor,
) -> Result<Response<Envelope<Paginated<Employee>>>, ApiError> {
    let employees = state
        .service
        .list_employees(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Envelope::new(employees)))
}
