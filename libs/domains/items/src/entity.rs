use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            is_complete: model.is_complete,
        }
    }
}

// Conversion from domain CreateItem to Sea-ORM ActiveModel.
// `id` stays NotSet: the store assigns it on insert.
impl From<crate::models::CreateItem> for ActiveModel {
    fn from(input: crate::models::CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            is_complete: Set(input.is_complete),
        }
    }
}
