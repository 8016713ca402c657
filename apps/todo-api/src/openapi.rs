use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "CRUD API over a persisted collection of task-list items"
    )
)]
struct ApiDocBase;

pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        // Mount the items API at the server root. utoipa's `nest(path = "")`
        // is rejected at compile time (empty path), and any non-empty prefix
        // would corrupt the documented paths (`/`, `/items`, `/{id}`), so merge
        // at the root — equivalent to nesting with an empty base path.
        let mut api = ApiDocBase::openapi();
        api.merge(domain_items::ItemsApiDoc::openapi());
        api
    }
}
