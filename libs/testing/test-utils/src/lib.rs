//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::with_schema(&["CREATE TABLE ..."]).await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let id = builder.item_id(0);
//!     let name = builder.name("item", "main");
//! }
//! ```

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same ids, names and timestamps, so
/// failures reproduce exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derive the seed from the test name (recommended).
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic id for the `index`-th entity of a test.
    ///
    /// Ids sort in `index` order (the index occupies the leading bytes), which
    /// keeps "ascending by id" expectations easy to state.
    pub fn item_id(&self, index: u64) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&index.to_be_bytes());
        bytes[8..].copy_from_slice(&self.seed.to_le_bytes());
        Uuid::from_bytes(bytes)
    }

    /// `count` ids in ascending order
    pub fn item_ids(&self, count: u64) -> Vec<Uuid> {
        (0..count).map(|i| self.item_id(i)).collect()
    }

    /// Unique name, e.g. `test-item-12345-main`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("item", "main"), "test-item-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Millisecond-precision timestamp with a non-UTC offset, `index` days
    /// after a fixed base date.
    pub fn release_date(&self, index: u64) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let base = Utc
            .with_ymd_and_hms(2016, 8, 29, 9, 12, 33)
            .single()
            .expect("valid base date")
            + TimeDelta::milliseconds((self.seed % 1000) as i64);

        (base + TimeDelta::days(index as i64)).with_timezone(&offset)
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that ids are strictly ascending
    pub fn assert_ascending(ids: &[Uuid], context: &str) {
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not ascending: {} then {}",
                context,
                pair[0],
                pair[1]
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.item_id(3), builder2.item_id(3));
        assert_eq!(builder1.name("item", "a"), builder2.name("item", "a"));
        assert_eq!(builder1.release_date(1), builder2.release_date(1));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.item_id(0), builder2.item_id(0));
    }

    #[test]
    fn test_item_ids_are_ascending() {
        let ids = TestDataBuilder::from_test_name("ordering").item_ids(12);
        assert_eq!(ids.len(), 12);
        assertions::assert_ascending(&ids, "item_ids");
    }

    #[test]
    fn test_release_date_keeps_offset_and_millis() {
        let date = TestDataBuilder::new(1234).release_date(0);
        assert_eq!(date.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(date.timestamp_subsec_millis(), 234);
    }
}
