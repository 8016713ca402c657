pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// This structure is returned for all JSON error responses, providing
/// consistent error information to clients:
/// - `error`: Machine-readable error identifier (e.g., "NotFound")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "InternalServerError",
///   "message": "connection closed",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            error: "NotFound".to_string(),
            message: "The requested resource was not found".to_string(),
            details: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "NotFound");
        assert_eq!(json["message"], "The requested resource was not found");
        // `details` is skipped when None
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let response = ErrorResponse {
            error: "BadRequest".to_string(),
            message: "Request validation failed".to_string(),
            details: Some(serde_json::json!({"name": ["length"]})),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["name"][0], "length");
    }
}
