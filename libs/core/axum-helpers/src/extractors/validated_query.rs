//! Query string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Non-numeric values for numeric fields and out-of-range values are both
/// rejected with 400 before the handler runs.
///
/// ```ignore
/// async fn list(ValidatedQuery(query): ValidatedQuery<ListQuery>) -> String { .. }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Window {
        #[serde(default)]
        #[validate(range(min = 0))]
        skip: i64,
        #[serde(default = "default_limit")]
        #[validate(range(min = 0, max = 50))]
        limit: i64,
    }

    fn default_limit() -> i64 {
        50
    }

    async fn window(ValidatedQuery(w): ValidatedQuery<Window>) -> String {
        format!("{}:{}", w.skip, w.limit)
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/", get(window))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_defaults_apply_when_absent() {
        assert_eq!(status_for("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_out_of_range_is_bad_request() {
        assert_eq!(status_for("/?skip=-1").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("/?limit=51").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_is_bad_request() {
        assert_eq!(status_for("/?skip=abc").await, StatusCode::BAD_REQUEST);
    }
}
