use super::handlers::create_employee::{__path_create_employee, create_employee};
use super::handlers::delete_employee::{__path_delete_employee, delete_employee};
use super::handlers::get_employee::{__path_get_employee, get_employee};
use super::handlers::get_employees::{__path_get_employees, get_employees};
use super::handlers::update_employee::{__path_update_employee, update_employee};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_employees,
    get_employee,
    create_employee,
    update_employee,
    delete_employee
))]
pub struct EmployeeApiDoc;

pub fn employee_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/employees", state.args.server.root_path),
            get(get_employees).post(create_employee),
        )
        .route(
            &format!(
                "{}/employees/{{employee_id}}",
                state.args.server.root_path
            ),
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
