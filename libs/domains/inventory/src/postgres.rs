use async_trait::async_trait;
use database::{BaseRepository, DatabaseResult};
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder, QuerySelect, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity::{inventory_item, manufacturer},
    error::{InventoryError, InventoryResult},
    models::InventoryRecord,
    pagination::{Page, PageRequest, SortDirection, SortField},
    repository::InventoryRepository,
};

/// DDL for the inventory tables, applied at startup when bootstrapping is on
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS inventory_items (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    release_date TIMESTAMPTZ NOT NULL
)",
    "CREATE TABLE IF NOT EXISTS manufacturers (
    id UUID PRIMARY KEY REFERENCES inventory_items (id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    home_page TEXT,
    phone TEXT
)",
];

/// Create the inventory tables if they do not exist
pub async fn bootstrap_schema(db: &DatabaseConnection) -> DatabaseResult<()> {
    database::postgres::bootstrap_schema(db, SCHEMA).await
}

pub struct PgInventoryRepository {
    base: BaseRepository<inventory_item::Entity>,
}

impl PgInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(e: DbErr) -> InventoryError {
    InventoryError::Internal(format!("Database error: {}", e))
}

fn insert_error(id: Uuid, e: DbErr) -> InventoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => InventoryError::Conflict(id),
        _ => db_error(e),
    }
}

fn sort_column(field: SortField) -> inventory_item::Column {
    match field {
        SortField::Id => inventory_item::Column::Id,
        SortField::Name => inventory_item::Column::Name,
        SortField::ReleaseDate => inventory_item::Column::ReleaseDate,
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn find_by_id(&self, id: Uuid) -> InventoryResult<Option<InventoryRecord>> {
        let row = inventory_item::Entity::find_by_id(id)
            .find_also_related(manufacturer::Entity)
            .one(self.base.db())
            .await
            .map_err(db_error)?;

        row.map(|(item, maker)| InventoryRecord::from_rows(item, maker))
            .transpose()
    }

    async fn exists_by_id(&self, id: Uuid) -> InventoryResult<bool> {
        self.base.exists_by_id(id).await.map_err(db_error)
    }

    async fn save(&self, record: InventoryRecord) -> InventoryResult<()> {
        let id = record.id;
        let (item, maker) = record.into_active_models();

        let txn = self.base.db().begin().await.map_err(db_error)?;

        inventory_item::Entity::insert(item)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| insert_error(id, e))?;

        manufacturer::Entity::insert(maker)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| insert_error(id, e))?;

        txn.commit().await.map_err(db_error)?;

        tracing::info!(item_id = %id, "Created inventory item");
        Ok(())
    }

    async fn find_all(&self, request: PageRequest) -> InventoryResult<Page<InventoryRecord>> {
        if request.page_size() == 0 {
            return Ok(Page::new(Vec::new(), self.count().await?, request));
        }

        let sort = request.sort();
        let order = match sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let mut query = inventory_item::Entity::find()
            .find_also_related(manufacturer::Entity)
            .order_by(sort_column(sort.field), order.clone());
        if sort.field != SortField::Id {
            query = query.order_by(inventory_item::Column::Id, order);
        }

        let rows = query
            .offset(request.offset())
            .limit(request.page_size())
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        let items = rows
            .into_iter()
            .map(|(item, maker)| InventoryRecord::from_rows(item, maker))
            .collect::<InventoryResult<Vec<_>>>()?;

        let total = match request.known_total(items.len()) {
            Some(total) => total,
            None => self.count().await?,
        };

        tracing::debug!(
            offset = request.offset(),
            limit = request.page_size(),
            fetched = items.len(),
            total,
            "Listed inventory items"
        );
        Ok(Page::new(items, total, request))
    }

    async fn count(&self) -> InventoryResult<u64> {
        self.base.count().await.map_err(db_error)
    }
}
