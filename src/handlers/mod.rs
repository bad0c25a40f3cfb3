pub mod auth;
pub mod debug;
pub mod health;
pub mod items;
pub mod users;

pub use auth::{config_handler, login_handler};
pub use debug::reset_handler;
pub use health::{message_handler, ping_handler, status_handler};
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use users::{create_user_handler, get_user_handler, list_users_handler};

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::RawPathParams;
use serde::de::DeserializeOwned;

/// Fallback for every unmatched method/path pair
pub async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

/// Parse a JSON request body, treating an empty body as `{}`
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Parse a numeric path id. Anything other than ASCII digits fitting in a
/// `u64` does not match the route.
pub(crate) fn parse_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse::<u64>().map_err(|_| ApiError::RouteNotFound)
}

/// The `{id}` segment as written in the request URI, before percent-decoding
pub(crate) fn path_id(params: &RawPathParams) -> Result<u64, ApiError> {
    let (_, raw) = params
        .iter()
        .find(|(key, _)| *key == "id")
        .ok_or(ApiError::RouteNotFound)?;
    parse_id(raw)
}
