//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer handles validation, existence checks, and orchestrates
/// repository operations.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// List all items
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Update an existing item
    #[instrument(skip(self, input), fields(item_id = %id))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Delete an item, returning its last known values
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;

    fn item(id: i32, name: &str, is_complete: bool) -> Item {
        Item {
            id,
            name: name.to_string(),
            is_complete,
        }
    }

    #[tokio::test]
    async fn create_item_passes_valid_input_to_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .withf(|input| input.name == "buy milk" && !input.is_complete)
            .returning(|input| {
                Ok(Item {
                    id: 1,
                    name: input.name,
                    is_complete: input.is_complete,
                })
            });

        let service = ItemService::new(repo);
        let created = service
            .create_item(CreateItem {
                name: "buy milk".to_string(),
                is_complete: false,
            })
            .await
            .unwrap();

        assert_eq!(created, item(1, "buy milk", false));
    }

    #[tokio::test]
    async fn create_item_rejects_empty_name_before_reaching_store() {
        // No expectations: the repository must never be called
        let service = ItemService::new(MockItemRepository::new());

        let result = service
            .create_item(CreateItem {
                name: String::new(),
                is_complete: false,
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn create_item_rejects_overlong_name() {
        let service = ItemService::new(MockItemRepository::new());

        let result = service
            .create_item(CreateItem {
                name: "x".repeat(256),
                is_complete: false,
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn update_item_maps_missing_record_to_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ItemService::new(repo);
        let result = service
            .update_item(
                99,
                UpdateItem {
                    name: "buy milk".to_string(),
                    is_complete: true,
                },
            )
            .await;

        assert!(matches!(result, Err(ItemError::NotFound(99))));
    }

    #[tokio::test]
    async fn update_item_returns_updated_record() {
        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .withf(|id, input| *id == 1 && input.is_complete)
            .returning(|id, input| {
                Ok(Some(Item {
                    id,
                    name: input.name,
                    is_complete: input.is_complete,
                }))
            });

        let service = ItemService::new(repo);
        let updated = service
            .update_item(
                1,
                UpdateItem {
                    name: "buy milk".to_string(),
                    is_complete: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, item(1, "buy milk", true));
    }

    #[tokio::test]
    async fn delete_item_maps_missing_record_to_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let result = service.delete_item(42).await;

        assert!(matches!(result, Err(ItemError::NotFound(42))));
    }

    #[tokio::test]
    async fn delete_item_returns_last_known_values() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(item(1, "buy milk", true))));

        let service = ItemService::new(repo);
        let deleted = service.delete_item(1).await.unwrap();

        assert_eq!(deleted, item(1, "buy milk", true));
    }

    #[tokio::test]
    async fn list_items_propagates_storage_failure() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .returning(|| Err(ItemError::Database("connection closed".to_string())));

        let service = ItemService::new(repo);
        let result = service.list_items().await;

        match result {
            Err(ItemError::Database(msg)) => assert_eq!(msg, "connection closed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
