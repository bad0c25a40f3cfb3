// Route path constants - single source of truth for all API paths

pub const STATUS: &str = "/status";
pub const PING: &str = "/ping";
pub const MESSAGE: &str = "/message";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{id}";
pub const USERS: &str = "/users";
pub const USER: &str = "/users/{id}";
pub const LOGIN: &str = "/login";
pub const CONFIG: &str = "/config";
pub const DEBUG_RESET: &str = "/debug/reset";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
