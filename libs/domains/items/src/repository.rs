use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// This trait is the narrow interface the service calls through: find all,
/// find by id, insert, update, remove. Implementations can use different
/// storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns its id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn find_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Fetch the full collection, in store-native order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite name and completion flag of an existing item.
    ///
    /// Returns `Ok(None)` when no item has the given id; this is never
    /// an upsert.
    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Remove an item, returning its last known values.
    ///
    /// Returns `Ok(None)` when no item has the given id.
    async fn delete(&self, id: i32) -> ItemResult<Option<Item>>;
}
