use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            // 404 carries no body: absence is the whole answer
            ItemError::NotFound(id) => {
                tracing::info!(item_id = id, "Item not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ItemError::Validation(msg) => {
                tracing::info!("Validation failed: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "BadRequest".to_string(),
                        message: msg,
                        details: None,
                    }),
                )
                    .into_response()
            }
            // The raw storage error text is surfaced verbatim to the caller
            ItemError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "InternalServerError".to_string(),
                        message: msg,
                        details: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<sea_orm::DbErr> for ItemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ItemError::Database(err.to_string())
    }
}
