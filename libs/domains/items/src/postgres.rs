use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    TransactionTrait,
};

use crate::{
    entity,
    error::ItemResult,
    models::{CreateItem, Item, UpdateItem},
    repository::ItemRepository,
};

/// PostgreSQL-backed item repository.
///
/// Holds a pooled `DatabaseConnection`; every operation acquires a scoped
/// handle from the pool. The lookup-then-mutate operations (update, delete)
/// run inside a single transaction so a concurrent writer cannot slip
/// between the existence check and the mutation.
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find().all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        // Overwrite the mutable fields in place; the id column is untouched
        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);
        active_model.is_complete = Set(input.is_complete);

        let updated_model = active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(updated_model.into()))
    }

    async fn delete(&self, id: i32) -> ItemResult<Option<Item>> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let item: Item = model.clone().into();
        model.delete(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(Some(item))
    }
}
