mod http;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        http::liveness,
        http::list_items,
        http::create_item,
        http::update_item,
        http::delete_item,
    ),
    components(schemas(Item, CreateItem, UpdateItem)),
    tags(
        (name = "items", description = "Task-list item operations")
    )
)]
pub struct ItemsApiDoc;

/// Create the items router with all HTTP endpoints.
///
/// The route table mirrors the public surface of the service:
/// - `GET /` liveness string, `POST /` create
/// - `GET /items` list
/// - `PUT /{id}` update, `DELETE /{id}` delete
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(http::liveness).post(http::create_item))
        .route("/items", get(http::list_items))
        .route("/{id}", put(http::update_item).delete(http::delete_item))
        .with_state(shared_service)
}
