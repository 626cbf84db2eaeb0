use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(Uuid),

    #[error("Inventory item {0} already exists")]
    Conflict(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => {
                AppError::NotFound(format!("Inventory item {} not found", id))
            }
            InventoryError::Conflict(id) => {
                AppError::Conflict(format!("Inventory item {} already exists", id))
            }
            InventoryError::Validation(errors) => AppError::ValidationError(errors),
            InventoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        // Missing and duplicate items answer with a bare status.
        match self {
            InventoryError::NotFound(id) => {
                tracing::debug!(item_id = %id, "Inventory item not found");
                StatusCode::NOT_FOUND.into_response()
            }
            InventoryError::Conflict(id) => {
                tracing::info!(item_id = %id, "Rejected duplicate inventory item");
                StatusCode::CONFLICT.into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_not_found_and_conflict_have_empty_bodies() {
        let response = InventoryError::NotFound(Uuid::nil()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());

        let response = InventoryError::Conflict(Uuid::nil()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_validation_is_bad_request_with_message() {
        let errors = Named { name: String::new() }.validate().unwrap_err();
        let response = InventoryError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(
            body["message"],
            "Invalid due to validation error: name: must not be empty"
        );
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response =
            InventoryError::Internal("Database error: pool timed out".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["message"], "An internal server error occurred");
    }

    #[test]
    fn test_app_error_conversion_keeps_status_family() {
        assert!(matches!(
            AppError::from(InventoryError::Conflict(Uuid::nil())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(InventoryError::NotFound(Uuid::nil())),
            AppError::NotFound(_)
        ));
    }
}
