//! Server infrastructure: router assembly with OpenAPI docs, health
//! endpoints, and graceful shutdown with cleanup.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, config.server.cors_allowed_origin.as_deref())?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &config.server, async move { /* close pools */ }).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
