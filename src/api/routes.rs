//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, empty_key_handler, get_handler, health_handler, not_implemented_handler,
    set_handler, stats_handler, AppState,
};

/// Base path of the key/value resource.
pub const BASE_PATH: &str = "/api/v1/cached";

/// Path of the statistics resource.
pub const STAT_PATH: &str = "/api/v1/stat";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /api/v1/cached/{key}` - Store the raw body under a key
/// - `GET /api/v1/cached/{key}` - Fetch the raw payload
/// - `DELETE /api/v1/cached/{key}` - Remove a key
/// - `GET /api/v1/stat` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// Keys are everything after the base path and may contain `/`. Other
/// methods on the cache paths answer `501 Not Implemented`.
///
/// # Middleware
/// - Body limit: request bodies are capped at the cache capacity
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Anything at or above capacity is refused by the cache anyway
    let body_limit = usize::try_from(state.cache.capacity()).unwrap_or(usize::MAX);

    let key_routes: MethodRouter<AppState> = put(set_handler)
        .get(get_handler)
        .delete(delete_handler)
        .fallback(not_implemented_handler);

    let base_routes: MethodRouter<AppState> = put(empty_key_handler)
        .get(empty_key_handler)
        .delete(empty_key_handler)
        .fallback(not_implemented_handler);

    // `/*key` needs a non-empty capture, so the trailing-slash form of the
    // base path is routed to the empty key handler explicitly
    Router::new()
        .route(BASE_PATH, base_routes.clone())
        .route(&format!("{BASE_PATH}/"), base_routes)
        .route(&format!("{BASE_PATH}/*key"), key_routes)
        .route(
            STAT_PATH,
            get(stats_handler).fallback(not_implemented_handler),
        )
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
