use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    ConfigResponse, CreateItemRequest, CreateUserRequest, FeatureFlags, Item, ItemPatch,
    LoginRequest, MessageResponse, StatusResponse, TokenResponse, UserPublic,
};

/// OpenAPI documentation
///
/// Served at `/api-docs/openapi.json`; it is the contract the handlers'
/// responses are checked against.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-items-api",
        version = "1.0.0",
        description = "A minimal in-memory items and users API for contract testing"
    ),
    paths(
        handlers::health::status_handler,
        handlers::health::ping_handler,
        handlers::health::message_handler,
        handlers::items::list_items_handler,
        handlers::items::create_item_handler,
        handlers::items::get_item_handler,
        handlers::items::update_item_handler,
        handlers::items::delete_item_handler,
        handlers::users::list_users_handler,
        handlers::users::create_user_handler,
        handlers::users::get_user_handler,
        handlers::auth::login_handler,
        handlers::auth::config_handler,
        handlers::debug::reset_handler
    ),
    components(
        schemas(
            Item,
            CreateItemRequest,
            ItemPatch,
            UserPublic,
            CreateUserRequest,
            LoginRequest,
            TokenResponse,
            StatusResponse,
            MessageResponse,
            FeatureFlags,
            ConfigResponse,
            ErrorResponse
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "items", description = "Item CRUD operations"),
        (name = "users", description = "User registration and lookup"),
        (name = "auth", description = "Fake login and token-gated config"),
        (name = "debug", description = "Test support endpoints")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
