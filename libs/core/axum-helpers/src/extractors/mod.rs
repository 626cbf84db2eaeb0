//! Custom extractors for Axum handlers.
//!
//! Every rejection is rendered as an [`AppError`](crate::errors::AppError),
//! so clients always receive an `ErrorResponse` body with a 400 status.

pub mod uuid_path;
pub mod validated_json;
pub mod validated_query;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
