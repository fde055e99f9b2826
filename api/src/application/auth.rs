use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects the request with 401 unless `x-api-key` matches the configured key.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match provided_key.as_deref() {
        Some(key) if key == state.args.api_key => Ok(next.run(req).await),
        Some(_) => {
            warn!(uri = %req.uri(), "Invalid API key provided");
            Err(ApiError::Unauthorized)
        }
        None => {
            debug!(uri = %req.uri(), "No API key provided");
            Err(ApiError::Unauthorized)
        }
    }
}
