use super::handlers::create_department::{__path_create_department, create_department};
use super::handlers::delete_department::{__path_delete_department, delete_department};
use super::handlers::get_department::{__path_get_department, get_department};
use super::handlers::get_departments::{__path_get_departments, get_departments};
use super::handlers::update_department::{__path_update_department, update_department};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_departments,
    get_department,
    create_department,
    update_department,
    delete_department
))]
pub struct DepartmentApiDoc;

pub fn department_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/departments", state.args.server.root_path),
            get(get_departments).post(create_department),
        )
        .route(
            &format!(
                "{}/departments/{{department_id}}",
                state.args.server.root_path
            ),
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
