//! SeaORM entities for the inventory tables.
//!
//! `manufacturers.id` references `inventory_items.id`, so an item and its
//! manufacturer share one identifier and deleting the item removes its
//! manufacturer.

pub mod inventory_item;
pub mod manufacturer;
