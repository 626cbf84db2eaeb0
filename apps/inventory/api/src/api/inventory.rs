use axum::Router;
use domain_inventory::{
    InMemoryInventoryRepository, InventoryService, PgInventoryRepository, handlers,
};

use crate::state::AppState;

/// Inventory routes backed by PostgreSQL when a pool is configured,
/// otherwise by a process-local store.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgInventoryRepository::new(db.clone());
            handlers::router(InventoryService::new(repository))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, inventory is kept in memory");
            handlers::router(InventoryService::new(InMemoryInventoryRepository::new()))
        }
    }
}
