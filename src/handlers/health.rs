use crate::models::{MessageResponse, StatusResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /status handler - Liveness check
#[utoipa::path(
    get,
    path = routes::STATUS,
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn status_handler() -> (StatusCode, Json<StatusResponse>) {
    tracing::debug!("Status check");
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "OK".to_string(),
        }),
    )
}

/// GET /ping handler - Plain-text liveness check
#[utoipa::path(
    get,
    path = routes::PING,
    responses(
        (status = 200, description = "Pong", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// GET /message handler - Greeting
#[utoipa::path(
    get,
    path = routes::MESSAGE,
    responses(
        (status = 200, description = "Greeting message", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn message_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world!".to_string(),
    })
}
