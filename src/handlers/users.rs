use crate::error::{ApiError, ErrorResponse};
use crate::handlers::{parse_body, path_id};
use crate::models::{CreateUserRequest, UserPublic};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::RawPathParams, extract::State, http::StatusCode, Json};

/// GET /users handler - List all users (passwords never included)
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "All users", body = Vec<UserPublic>)
    ),
    tag = "users"
)]
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<UserPublic>> {
    Json(state.store.list_users())
}

/// POST /users handler - Register a user
///
/// Emails are unique across users; a clash is reported as 400.
#[utoipa::path(
    post,
    path = routes::USERS,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserPublic),
        (status = 400, description = "Missing fields, duplicate email or invalid JSON", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserPublic>), ApiError> {
    let request: CreateUserRequest = parse_body(&body)?;
    let user = state.store.create_user(request)?;

    tracing::info!("Created user with id: {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id} handler
#[utoipa::path(
    get,
    path = routes::USER,
    params(
        ("id" = u64, Path, description = "Numeric user id")
    ),
    responses(
        (status = 200, description = "User found", body = UserPublic),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    params: RawPathParams,
) -> Result<Json<UserPublic>, ApiError> {
    let id = path_id(&params)?;
    Ok(Json(state.store.get_user(id)?))
}
