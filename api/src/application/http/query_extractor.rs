use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};
use staffing_core::domain::listing::FilterQuery;

use super::server::api_entities::api_error::ApiError;

/// Extracts the list filter-query parameters.
///
/// Values stay raw text; unknown keys are ignored. Validation happens in the
/// list operation so every problem can be reported at once.
#[derive(Debug, Clone)]
pub struct FilterQueryExtractor(pub FilterQuery);

impl<S> FromRequestParts<S> for FilterQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("malformed query string: {e}")))?;

        Ok(FilterQueryExtractor(FilterQuery::from_query_map(&query_map)))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(uri: &str) -> Result<FilterQuery, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        FilterQueryExtractor::from_request_parts(&mut parts, &())
            .await
            .map(|FilterQueryExtractor(query)| query)
    }

    #[tokio::test]
    async fn test_extracts_known_parameters() {
        let query = extract("/v1/employees?search_by=name,gender&search_for=Alice,female&page=2&foo=bar")
            .await
            .unwrap();

        assert_eq!(query.search_by.as_deref(), Some("name,gender"));
        assert_eq!(query.search_for.as_deref(), Some("Alice,female"));
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.sort_by, None);
    }

    #[tokio::test]
    async fn test_decodes_percent_escapes() {
        let query = extract("/v1/departments?search_by=name&search_for=Research%20%26%20Development")
            .await
            .unwrap();

        assert_eq!(query.search_for.as_deref(), Some("Research & Development"));
    }

    #[tokio::test]
    async fn test_missing_query_is_empty() {
        assert_eq!(extract("/v1/departments").await.unwrap(), FilterQuery::default());
    }
}
