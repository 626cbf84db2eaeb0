use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{InventoryItem, InventoryRecord, ListInventoryQuery};
use crate::pagination::Page;
use crate::repository::InventoryRepository;

/// Service layer for inventory business logic
#[derive(Clone)]
pub struct InventoryService<R: InventoryRepository> {
    repository: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One window of the inventory.
    ///
    /// A zero limit is answered without touching the store.
    #[instrument(skip(self, query), fields(offset = query.skip, limit = query.limit))]
    pub async fn list_items(&self, query: ListInventoryQuery) -> InventoryResult<Page<InventoryItem>> {
        query.validate()?;

        let request = query.page_request();
        if request.page_size() == 0 {
            tracing::debug!("Zero limit requested, returning empty page");
            return Ok(Page::empty(request));
        }

        let page = self.repository.find_all(request).await?;
        Ok(page.map(InventoryItem::from))
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> InventoryResult<InventoryItem> {
        self.repository
            .find_by_id(id)
            .await?
            .map(InventoryItem::from)
            .ok_or(InventoryError::NotFound(id))
    }

    /// Add an item and its manufacturer.
    ///
    /// Validates the item itself, so callers that bypass `ValidatedJson`
    /// get the same checks as HTTP requests. The existence check and the insert are separate store calls; a
    /// concurrent insert of the same id surfaces as a conflict from `save`.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn create_item(&self, item: InventoryItem) -> InventoryResult<()> {
        item.validate()?;

        if self.repository.exists_by_id(item.id).await? {
            return Err(InventoryError::Conflict(item.id));
        }

        self.repository.save(InventoryRecord::from(item)).await
    }
}
