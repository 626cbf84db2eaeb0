//! Connection cleanup used during graceful shutdown.

use tracing::{error, info};

/// Closes a SeaORM connection pool and logs the outcome.
///
/// The pool would close on drop as well; closing explicitly lets in-flight
/// connections finish inside the shutdown timeout and leaves a log line.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
