use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::pagination::{PageRequest, SortOrder};

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 50;

/// Inventory item as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Client-assigned identifier
    pub id: Uuid,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    /// Release instant, RFC 3339 with offset
    pub release_date: DateTime<FixedOffset>,

    #[validate(nested)]
    pub manufacturer: Manufacturer,
}

/// Manufacturer owned by an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub home_page: Option<String>,

    pub phone: Option<String>,
}

/// Query parameters for listing inventory
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListInventoryQuery {
    /// Number of records to skip
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[param(minimum = 0, default = 0)]
    pub skip: i64,

    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, max = 50, message = "must be between 0 and 50"))]
    #[param(minimum = 0, maximum = 50, default = 50)]
    pub limit: i64,

    /// Sort order as `field[,asc|desc]`; fields are `id`, `name`, `release_date`
    #[serde(default)]
    #[param(value_type = Option<String>, example = "release_date,desc")]
    pub sort: Option<SortOrder>,
}

fn default_limit() -> i64 {
    MAX_PAGE_SIZE
}

impl ListInventoryQuery {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit,
            sort: None,
        }
    }

    /// Descriptor for a validated query. Negative values clamp to 0.
    pub fn page_request(&self) -> PageRequest {
        let limit = u64::try_from(self.limit).unwrap_or(0);
        let offset = u64::try_from(self.skip).unwrap_or(0);
        PageRequest::new(limit, offset).with_sort(self.sort.unwrap_or_default())
    }
}

/// Stored form of an inventory item
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub name: String,
    pub release_date: DateTime<FixedOffset>,
    pub manufacturer: ManufacturerRecord,
}

/// Stored form of a manufacturer. `id` is always the owning item's id.
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturerRecord {
    pub id: Uuid,
    pub name: String,
    pub home_page: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::SortField;
    use serde_json::json;

    fn item_json() -> serde_json::Value {
        json!({
            "id": "d290f1ee-6c54-4b01-90e6-d701748f0851",
            "name": "Widget Adapter",
            "releaseDate": "2016-08-29T09:12:33.001Z",
            "manufacturer": {
                "name": "ACME Corporation",
                "homePage": "https://www.acme-corp.com",
                "phone": "408-867-5309"
            }
        })
    }

    #[test]
    fn test_item_uses_camel_case_wire_names() {
        let item: InventoryItem = serde_json::from_value(item_json()).unwrap();
        assert_eq!(item.name, "Widget Adapter");
        assert_eq!(item.release_date.timestamp_subsec_millis(), 1);
        assert_eq!(
            item.manufacturer.home_page.as_deref(),
            Some("https://www.acme-corp.com")
        );

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("releaseDate").is_some());
        assert!(value["manufacturer"].get("homePage").is_some());
        assert!(value["manufacturer"].get("id").is_none());
    }

    #[test]
    fn test_optional_manufacturer_fields_default_to_null() {
        let mut body = item_json();
        body["manufacturer"] = json!({ "name": "ACME Corporation" });

        let item: InventoryItem = serde_json::from_value(body).unwrap();
        assert!(item.manufacturer.home_page.is_none());
        assert!(item.manufacturer.phone.is_none());

        let value = serde_json::to_value(&item).unwrap();
        assert!(value["manufacturer"]["homePage"].is_null());
        assert!(value["manufacturer"]["phone"].is_null());
    }

    #[test]
    fn test_required_fields_are_enforced_by_deserialization() {
        for field in ["id", "name", "releaseDate", "manufacturer"] {
            let mut body = item_json();
            body.as_object_mut().unwrap().remove(field);
            assert!(
                serde_json::from_value::<InventoryItem>(body).is_err(),
                "missing {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_names_fail_validation() {
        let mut item: InventoryItem = serde_json::from_value(item_json()).unwrap();
        item.manufacturer.name = String::new();
        let errors = item.validate().unwrap_err();
        assert!(errors.errors().contains_key("manufacturer"));

        item.manufacturer.name = "ACME".to_string();
        item.name = String::new();
        assert!(item.validate().unwrap_err().errors().contains_key("name"));
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListInventoryQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 50);
        assert!(query.sort.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_list_query_bounds() {
        assert!(ListInventoryQuery::new(0, 0).validate().is_ok());
        assert!(ListInventoryQuery::new(0, 50).validate().is_ok());
        assert!(ListInventoryQuery::new(-1, 50).validate().is_err());
        assert!(ListInventoryQuery::new(0, 51).validate().is_err());
        assert!(ListInventoryQuery::new(0, -1).validate().is_err());
    }

    #[test]
    fn test_list_query_page_request() {
        let query: ListInventoryQuery =
            serde_json::from_value(json!({ "skip": 5, "limit": 10, "sort": "name,desc" }))
                .unwrap();
        let request = query.page_request();
        assert_eq!(request.offset(), 5);
        assert_eq!(request.page_size(), 10);
        assert_eq!(request.sort(), SortOrder::desc(SortField::Name));
    }

    #[test]
    fn test_list_query_rejects_unknown_sort() {
        let result = serde_json::from_value::<ListInventoryQuery>(json!({ "sort": "price" }));
        assert!(result.is_err());
    }
}
