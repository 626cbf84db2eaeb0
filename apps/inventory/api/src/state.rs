//! Application state management.
//!
//! Holds the configuration and, when `DATABASE_URL` is set, the PostgreSQL
//! pool shared by the inventory repository and the readiness check.

/// Shared application state, cloned for each handler (cheap `Arc` clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool; `None` runs on the in-memory store
    pub db: Option<database::postgres::DatabaseConnection>,
}
