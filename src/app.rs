use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{self, not_found_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the full route table
///
/// Every unmatched path, and every unsupported method on a known path,
/// answers 404 `{"error":"Not Found"}`. HEAD is answered wherever GET is.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            routes::STATUS,
            get(handlers::status_handler).fallback(not_found_handler),
        )
        .route(
            routes::PING,
            get(handlers::ping_handler).fallback(not_found_handler),
        )
        .route(
            routes::MESSAGE,
            get(handlers::message_handler).fallback(not_found_handler),
        )
        .route(
            routes::ITEMS,
            get(handlers::list_items_handler)
                .post(handlers::create_item_handler)
                .fallback(not_found_handler),
        )
        .route(
            routes::ITEM,
            get(handlers::get_item_handler)
                .put(handlers::update_item_handler)
                .delete(handlers::delete_item_handler)
                .fallback(not_found_handler),
        )
        .route(
            routes::USERS,
            get(handlers::list_users_handler)
                .post(handlers::create_user_handler)
                .fallback(not_found_handler),
        )
        .route(
            routes::USER,
            get(handlers::get_user_handler).fallback(not_found_handler),
        )
        .route(
            routes::LOGIN,
            post(handlers::login_handler).fallback(not_found_handler),
        )
        .route(
            routes::CONFIG,
            get(handlers::config_handler).fallback(not_found_handler),
        );

    if state.config.debug_routes {
        router = router.route(
            routes::DEBUG_RESET,
            post(handlers::reset_handler).fallback(not_found_handler),
        );
    }

    router
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
