use crate::application::{
    auth::API_KEY_HEADER,
    http::{
        department::router::DepartmentApiDoc,
        employee::router::EmployeeApiDoc,
        health::__path_hello,
    },
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffing API"
    ),
    paths(hello),
    modifiers(&ApiKeySecurity),
    nest(
        (path = "/departments", api = DepartmentApiDoc),
        (path = "/employees", api = EmployeeApiDoc),
    )
)]
pub struct ApiDoc;
