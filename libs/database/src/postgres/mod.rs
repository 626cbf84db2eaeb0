//! PostgreSQL connector, health checks and schema bootstrap

mod config;
mod connector;
mod health;
mod schema;

pub use config::PostgresConfig;
pub use connector::{connect_from_config_with_retry, connect_with_options};
pub use health::{HealthStatus, check_health, check_health_detailed, check_health_with_query};
pub use schema::bootstrap_schema;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
