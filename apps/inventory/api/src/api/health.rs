//! Readiness check against the configured inventory store.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint that pings the database when one is configured.
///
/// The in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let check: HealthCheckFuture<'_> = match &state.db {
        Some(db) => Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
        None => Box::pin(async { Ok(()) }),
    };
    let name = if state.db.is_some() { "database" } else { "memory" };

    match run_health_checks(vec![(name, check)]).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
