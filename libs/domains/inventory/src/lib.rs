//! Inventory Domain
//!
//! Inventory items, each owning exactly one manufacturer, listed through
//! offset-based pages.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, duplicate check, wire/storage mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Paged data access (trait + in-memory/PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Wire models, stored records, SeaORM entities
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     repository::InMemoryInventoryRepository,
//!     service::InventoryService,
//! };
//!
//! let repository = InMemoryInventoryRepository::new();
//! let service = InventoryService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{InventoryError, InventoryResult};
pub use handlers::ApiDoc;
pub use models::{InventoryItem, InventoryRecord, ListInventoryQuery, Manufacturer, ManufacturerRecord};
pub use pagination::{Page, PageRequest, SortDirection, SortField, SortOrder};
pub use postgres::{PgInventoryRepository, bootstrap_schema};
pub use repository::{InMemoryInventoryRepository, InventoryRepository};
pub use service::InventoryService;
