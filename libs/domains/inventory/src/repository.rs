use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};
use crate::models::InventoryRecord;
use crate::pagination::{Page, PageRequest, SortDirection, SortField, SortOrder};

/// Repository trait for inventory persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Get an item and its manufacturer by ID
    async fn find_by_id(&self, id: Uuid) -> InventoryResult<Option<InventoryRecord>>;

    async fn exists_by_id(&self, id: Uuid) -> InventoryResult<bool>;

    /// Insert an item together with its manufacturer.
    ///
    /// An id that is already stored yields [`InventoryError::Conflict`].
    async fn save(&self, record: InventoryRecord) -> InventoryResult<()>;

    /// One sorted window of all items plus the total item count
    async fn find_all(&self, request: PageRequest) -> InventoryResult<Page<InventoryRecord>>;

    async fn count(&self) -> InventoryResult<u64>;
}

/// In-memory implementation of InventoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryInventoryRepository {
    items: Arc<RwLock<BTreeMap<Uuid, InventoryRecord>>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(sort: SortOrder, a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
    let primary = match sort.field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
        SortField::ReleaseDate => a
            .release_date
            .cmp(&b.release_date)
            .then_with(|| a.id.cmp(&b.id)),
    };

    match sort.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn find_by_id(&self, id: Uuid) -> InventoryResult<Option<InventoryRecord>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> InventoryResult<bool> {
        let items = self.items.read().await;
        Ok(items.contains_key(&id))
    }

    async fn save(&self, record: InventoryRecord) -> InventoryResult<()> {
        let mut items = self.items.write().await;

        match items.entry(record.id) {
            Entry::Occupied(_) => Err(InventoryError::Conflict(record.id)),
            Entry::Vacant(slot) => {
                tracing::info!(item_id = %record.id, "Stored inventory item");
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn find_all(&self, request: PageRequest) -> InventoryResult<Page<InventoryRecord>> {
        let items = self.items.read().await;

        let mut sorted: Vec<&InventoryRecord> = items.values().collect();
        let sort = request.sort();
        // The map already iterates in ascending id order.
        if sort != SortOrder::default() {
            sorted.sort_by(|a, b| compare(sort, a, b));
        }

        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        let window = sorted.into_iter().skip(skip).take(take).cloned().collect();

        Ok(Page::new(window, items.len() as u64, request))
    }

    async fn count(&self) -> InventoryResult<u64> {
        let items = self.items.read().await;
        Ok(items.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManufacturerRecord;
    use chrono::{DateTime, Duration};

    fn record(id: u128, name: &str, day: i64) -> InventoryRecord {
        let id = Uuid::from_u128(id);
        let base = DateTime::parse_from_rfc3339("2016-08-29T09:12:33.001Z").unwrap();
        InventoryRecord {
            id,
            name: name.to_string(),
            release_date: base + Duration::days(day),
            manufacturer: ManufacturerRecord {
                id,
                name: "ACME Corporation".to_string(),
                home_page: None,
                phone: None,
            },
        }
    }

    async fn seeded(count: u128) -> InMemoryInventoryRepository {
        let repo = InMemoryInventoryRepository::new();
        // insert in reverse to prove ordering does not follow insertion
        for i in (1..=count).rev() {
            repo.save(record(i, &format!("item-{:02}", i), i as i64))
                .await
                .unwrap();
        }
        repo
    }

    fn ids(page: &Page<InventoryRecord>) -> Vec<u128> {
        page.items().iter().map(|r| r.id.as_u128()).collect()
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryInventoryRepository::new();
        let item = record(7, "Widget Adapter", 0);
        repo.save(item.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(item.id).await.unwrap(), Some(item.clone()));
        assert!(repo.exists_by_id(item.id).await.unwrap());
        assert!(!repo.exists_by_id(Uuid::from_u128(8)).await.unwrap());
        assert!(repo.find_by_id(Uuid::from_u128(8)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_save_is_conflict_and_keeps_original() {
        let repo = InMemoryInventoryRepository::new();
        let original = record(1, "original", 0);
        repo.save(original.clone()).await.unwrap();

        let result = repo.save(record(1, "replacement", 3)).await;
        assert!(matches!(result, Err(InventoryError::Conflict(id)) if id == original.id));
        assert_eq!(repo.find_by_id(original.id).await.unwrap(), Some(original));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_windows_ascending_ids() {
        let repo = seeded(10).await;

        let page = repo.find_all(PageRequest::new(10, 0)).await.unwrap();
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total(), 10);

        let page = repo.find_all(PageRequest::new(10, 5)).await.unwrap();
        assert_eq!(ids(&page), vec![6, 7, 8, 9, 10]);

        let page = repo.find_all(PageRequest::new(2, 8)).await.unwrap();
        assert_eq!(ids(&page), vec![9, 10]);

        let page = repo.find_all(PageRequest::new(50, 10)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total(), 10);
    }

    #[tokio::test]
    async fn test_find_all_with_sort() {
        let repo = seeded(4).await;

        let request = PageRequest::new(3, 0).with_sort(SortOrder::desc(SortField::ReleaseDate));
        let page = repo.find_all(request).await.unwrap();
        assert_eq!(ids(&page), vec![4, 3, 2]);

        let page = repo.find_all(request.next()).await.unwrap();
        assert_eq!(ids(&page), vec![1]);
    }

    #[tokio::test]
    async fn test_sort_ties_break_on_id() {
        let repo = InMemoryInventoryRepository::new();
        for i in [3, 1, 2] {
            repo.save(record(i, "same", 0)).await.unwrap();
        }

        let asc = PageRequest::new(10, 0).with_sort(SortOrder::asc(SortField::Name));
        assert_eq!(ids(&repo.find_all(asc).await.unwrap()), vec![1, 2, 3]);

        let desc = PageRequest::new(10, 0).with_sort(SortOrder::desc(SortField::Name));
        assert_eq!(ids(&repo.find_all(desc).await.unwrap()), vec![3, 2, 1]);
    }
}
