use axum::extract::State;
use staffing_core::domain::{
    department::{entities::Department, ports::DepartmentService},
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
    tag = "department",
    summary = "List departments",
    description = "Returns one page of departments. `search_by`/`search_for` and `sort_by`/`order_by` take comma-separated lists matched by position.",
    params(FilterQuery),
    security(("api_key" = [])),
    responses(
        (status = 200, body = Envelope<Paginated<Department>>),
        (status = 400, body = ErrorEnvelope),
        (status = 401, body = ErrorEnvelope)
    )
)]
pub async fn get_departments(
    State(state): State<AppState>,
    FilterQueryExtractor(query): FilterQueryExtractor,
) -> Result<Response<Envelope<Paginated<Department>>>, ApiError> {
    let departments = state
        .service
        .list_departments(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(Envelope::new(departments)))
}
