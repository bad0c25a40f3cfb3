//! Login and the token-gated config endpoint.
//!
//! Tokens are fake: login mints `fake-jwt-token-<uuid>` and `/config` only
//! checks the header prefix. Nothing here is a security boundary.

use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_body;
use crate::models::{ConfigResponse, LoginRequest, TokenResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::{required, StoreError, CREDENTIALS_REQUIRED};
use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use uuid::Uuid;

pub const TOKEN_PREFIX: &str = "fake-jwt-token-";
const STATIC_TOKEN: &str = "valid-token";

/// POST /login handler - Exchange credentials for a token
#[utoipa::path(
    post,
    path = routes::LOGIN,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 400, description = "Missing credentials or invalid JSON", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    let request: LoginRequest = parse_body(&body)?;
    let (Some(username), Some(password)) = (required(request.username), required(request.password))
    else {
        return Err(StoreError::InvalidInput(CREDENTIALS_REQUIRED).into());
    };

    let user = state
        .store
        .verify_credentials(&username, &password)
        .inspect_err(|_| tracing::info!("Failed login for username: {}", username))?;

    tracing::info!("User {} logged in", user.id);
    Ok(Json(TokenResponse {
        token: format!("{}{}", TOKEN_PREFIX, Uuid::new_v4()),
    }))
}

/// GET /config handler - Feature flags for holders of a bearer token
#[utoipa::path(
    get,
    path = routes::CONFIG,
    responses(
        (status = 200, description = "Feature flags", body = ConfigResponse),
        (status = 401, description = "Missing or malformed bearer token")
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
pub async fn config_handler(headers: HeaderMap) -> Result<Json<ConfigResponse>, ApiError> {
    let token = extract_bearer(&headers)?;
    if !token.starts_with(TOKEN_PREFIX) && token != STATIC_TOKEN {
        return Err(ApiError::MissingToken);
    }

    Ok(Json(ConfigResponse::default()))
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(ApiError::MissingToken)?;

    let header = header.to_str().map_err(|_| ApiError::MissingToken)?;

    header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::MissingToken)
}
