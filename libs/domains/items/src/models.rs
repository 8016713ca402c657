use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item entity - a single task-list entry
///
/// Serialized with camelCase keys, so `is_complete` appears as
/// `isComplete` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned by the store on creation
    pub id: i32,
    /// Item name
    pub name: String,
    /// Whether the item is completed
    pub is_complete: bool,
}

/// DTO for creating a new item
///
/// Carries no `id`: the store assigns one on insert, and any `id` key in
/// the request body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// DTO for updating an existing item
///
/// This is a full replacement of the mutable fields: both `name` and
/// `isComplete` are overwritten. `id` is never part of the payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub is_complete: bool,
}
