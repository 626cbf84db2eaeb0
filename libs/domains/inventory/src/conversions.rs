//! Mapping between wire models, stored records and database rows.

use sea_orm::ActiveValue::Set;

use crate::entity::{inventory_item, manufacturer};
use crate::error::InventoryError;
use crate::models::{InventoryItem, InventoryRecord, Manufacturer, ManufacturerRecord};

/// The manufacturer takes the item's id.
impl From<InventoryItem> for InventoryRecord {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            release_date: item.release_date,
            manufacturer: ManufacturerRecord {
                id: item.id,
                name: item.manufacturer.name,
                home_page: item.manufacturer.home_page,
                phone: item.manufacturer.phone,
            },
        }
    }
}

impl From<InventoryRecord> for InventoryItem {
    fn from(record: InventoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            release_date: record.release_date,
            manufacturer: Manufacturer {
                name: record.manufacturer.name,
                home_page: record.manufacturer.home_page,
                phone: record.manufacturer.phone,
            },
        }
    }
}

impl From<manufacturer::Model> for ManufacturerRecord {
    fn from(model: manufacturer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            home_page: model.home_page,
            phone: model.phone,
        }
    }
}

impl InventoryRecord {
    /// Joins an item row with its manufacturer row.
    ///
    /// A missing manufacturer row means the table invariant is broken.
    pub fn from_rows(
        item: inventory_item::Model,
        manufacturer: Option<manufacturer::Model>,
    ) -> Result<Self, InventoryError> {
        let manufacturer = manufacturer.ok_or_else(|| {
            InventoryError::Internal(format!("Manufacturer row missing for item {}", item.id))
        })?;

        Ok(Self {
            id: item.id,
            name: item.name,
            release_date: item.release_date,
            manufacturer: manufacturer.into(),
        })
    }

    /// Active models for the item and manufacturer rows, in insert order
    pub fn into_active_models(self) -> (inventory_item::ActiveModel, manufacturer::ActiveModel) {
        let item = inventory_item::ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            release_date: Set(self.release_date),
        };
        let manufacturer = manufacturer::ActiveModel {
            id: Set(self.manufacturer.id),
            name: Set(self.manufacturer.name),
            home_page: Set(self.manufacturer.home_page),
            phone: Set(self.manufacturer.phone),
        };
        (item, manufacturer)
    }
}
