use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// mapping store failures and request problems to HTTP status codes and
/// formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// A store operation rejected the request
    Store(StoreError),
    /// Request body was not valid JSON for the expected payload
    JsonError(serde_json::Error),
    /// No route matches the method and path
    RouteNotFound,
    /// Missing or unrecognized bearer token
    MissingToken,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Store(err) => {
                let status = match err {
                    StoreError::InvalidInput(_) | StoreError::DuplicateEmail => {
                        StatusCode::BAD_REQUEST
                    }
                    StoreError::ItemNotFound(_) | StoreError::UserNotFound(_) => {
                        StatusCode::NOT_FOUND
                    }
                    StoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                };
                (status, err.to_string())
            }
            ApiError::JsonError(err) => {
                tracing::debug!("Rejected request body: {}", err);
                (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string())
            }
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::MissingToken => return StatusCode::UNAUTHORIZED.into_response(),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Vec<u8>) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_store_errors_map_to_status_codes() {
        let cases = [
            (StoreError::InvalidInput("Name is required"), StatusCode::BAD_REQUEST, "Name is required"),
            (StoreError::DuplicateEmail, StatusCode::BAD_REQUEST, "Email already exists"),
            (StoreError::ItemNotFound(5), StatusCode::NOT_FOUND, "Item not found"),
            (StoreError::UserNotFound(5), StatusCode::NOT_FOUND, "User not found"),
            (StoreError::InvalidCredentials, StatusCode::UNAUTHORIZED, "Invalid credentials"),
        ];

        for (err, expected_status, expected_message) in cases {
            let (status, body) = render(ApiError::from(err)).await;
            let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(status, expected_status);
            assert_eq!(error.error, expected_message);
        }
    }

    #[tokio::test]
    async fn test_json_error_is_generic() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();

        let (status, body) = render(ApiError::from(parse_error)).await;

        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Invalid JSON body");
    }

    #[tokio::test]
    async fn test_missing_token_has_empty_body() {
        let (status, body) = render(ApiError::MissingToken).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
    }
}
