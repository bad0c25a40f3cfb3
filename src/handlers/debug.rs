use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// POST /debug/reset handler - Restore seed data between contract-test runs
///
/// Only mounted when debug routes are enabled.
#[utoipa::path(
    post,
    path = routes::DEBUG_RESET,
    responses(
        (status = 204, description = "Store reset to seed data")
    ),
    tag = "debug"
)]
pub async fn reset_handler(State(state): State<AppState>) -> StatusCode {
    state.store.reset();
    StatusCode::NO_CONTENT
}
