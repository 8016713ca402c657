use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Root liveness probe: a fixed string, no store access
#[utoipa::path(
    get,
    path = "/",
    tag = "items",
    responses(
        (status = 200, description = "Service is running", body = String)
    )
)]
pub async fn liveness() -> &'static str {
    "API is running!!!"
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item,
            headers(("Location" = String, description = "Path of the new item"))),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Json(input): Json<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;

    let location = [(header::LOCATION, format!("/{}", item.id))];
    Ok((StatusCode::CREATED, location, Json(item)))
}

/// Update an item, overwriting its name and completion flag
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item, returning its last known values
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = Item),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<i32>,
) -> ItemResult<Json<Item>> {
    let item = service.delete_item(id).await?;
    Ok(Json(item))
}

#[cfg(test)]
mod tests {
    use crate::error::ItemError;
    use crate::models::Item;
    use crate::repository::MockItemRepository;
    use crate::service::ItemService;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn item(id: i32, name: &str, is_complete: bool) -> Item {
        Item {
            id,
            name: name.to_string(),
            is_complete,
        }
    }

    fn app(repo: MockItemRepository) -> Router {
        crate::handlers::router(ItemService::new(repo))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn liveness_returns_fixed_string() {
        let app = app(MockItemRepository::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"API is running!!!");
    }

    #[tokio::test]
    async fn list_items_returns_empty_array() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn list_items_returns_collection_with_wire_shape() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![item(1, "buy milk", false), item(2, "walk dog", true)]));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!([
                {"id": 1, "name": "buy milk", "isComplete": false},
                {"id": 2, "name": "walk dog", "isComplete": true}
            ])
        );
    }

    #[tokio::test]
    async fn create_item_returns_201_with_location_header() {
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

        let request = json_request(
            "POST",
            "/",
            serde_json::json!({"name": "buy milk", "isComplete": false}),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/1");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 1, "name": "buy milk", "isComplete": false})
        );
    }

    #[tokio::test]
    async fn create_item_ignores_client_supplied_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().returning(|input| {
            Ok(Item {
                id: 5,
                name: input.name,
                is_complete: input.is_complete,
            })
        });

        let request = json_request(
            "POST",
            "/",
            serde_json::json!({"id": 42, "name": "buy milk", "isComplete": false}),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/5");
        assert_eq!(body_json(response).await["id"], 5);
    }

    #[tokio::test]
    async fn create_item_with_empty_name_is_rejected() {
        // No expectations: the store must never see the payload
        let request = json_request(
            "POST",
            "/",
            serde_json::json!({"name": "", "isComplete": false}),
        );
        let response = app(MockItemRepository::new()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "BadRequest");
    }

    #[tokio::test]
    async fn update_item_overwrites_fields_and_keeps_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .withf(|id, input| *id == 1 && input.name == "buy milk" && input.is_complete)
            .returning(|id, input| {
                Ok(Some(Item {
                    id,
                    name: input.name,
                    is_complete: input.is_complete,
                }))
            });

        let request = json_request(
            "PUT",
            "/1",
            serde_json::json!({"name": "buy milk", "isComplete": true}),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 1, "name": "buy milk", "isComplete": true})
        );
    }

    #[tokio::test]
    async fn update_missing_item_returns_404_without_body() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let request = json_request(
            "PUT",
            "/99",
            serde_json::json!({"name": "buy milk", "isComplete": true}),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn update_with_non_numeric_id_is_rejected() {
        let request = json_request(
            "PUT",
            "/not-a-number",
            serde_json::json!({"name": "buy milk", "isComplete": true}),
        );
        let response = app(MockItemRepository::new()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_item_returns_last_known_values() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(item(1, "buy milk", true))));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 1, "name": "buy milk", "isComplete": true})
        );
    }

    #[tokio::test]
    async fn delete_missing_item_returns_404_without_body() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_500_with_error_text() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .returning(|| Err(ItemError::Database("connection closed".to_string())));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "InternalServerError");
        assert_eq!(body["message"], "connection closed");
    }
}
