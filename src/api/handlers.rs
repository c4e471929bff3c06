//! API Handlers
//!
//! HTTP request handlers translating requests into cache calls.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{CacheKey, DeleteResponse, HealthResponse, SetResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache locks internally, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache
    pub cache: Arc<LruCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: LruCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LruCache::new(
            config.capacity,
            config.expiration(),
            config.cleanup_interval(),
        ))
    }
}

/// Handler for PUT {base}/{key}
///
/// Stores the raw request body under the key.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<SetResponse>)> {
    let key = CacheKey::parse(key)?;
    let body = body.map_err(|rejection| body_error(&state, &headers, rejection))?;
    let size = body.len() as u64;

    state.cache.set(key.as_str(), body)?;
    debug!(key = key.as_str(), size, "stored item");

    Ok((
        StatusCode::CREATED,
        Json(SetResponse::new(key.into_inner(), size)),
    ))
}

/// Maps a failed body read to a cache error.
///
/// A body cut off by the capacity limit is an oversized item and is counted
/// as a rejected write.
fn body_error(state: &AppState, headers: &HeaderMap, rejection: BytesRejection) -> CacheError {
    if rejection.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return CacheError::Internal(rejection.body_text());
    }

    // Only a lower bound is known unless the client declared the length
    let size = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| state.cache.capacity().saturating_add(1));

    state.cache.reject_oversized(size)
}

/// Handler for GET {base}/{key}
///
/// Returns the raw payload on a hit.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    let key = CacheKey::parse(key)?;

    match state.cache.get(key.as_str()) {
        Some(payload) => {
            debug!(key = key.as_str(), size = payload.len(), "cache hit");
            Ok((
                [(header::CONTENT_TYPE, "application/octet-stream")],
                payload,
            )
                .into_response())
        }
        None => {
            debug!(key = key.as_str(), "cache miss");
            Err(CacheError::NotFound(key.into_inner()))
        }
    }
}

/// Handler for DELETE {base}/{key}
///
/// Succeeds whether or not the key was cached.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let key = CacheKey::parse(key)?;

    state.cache.remove(key.as_str());
    debug!(key = key.as_str(), "removed item");

    Ok(Json(DeleteResponse::new(key.into_inner())))
}

/// Handler for PUT/GET/DELETE on the bare base path.
pub async fn empty_key_handler() -> CacheError {
    CacheError::EmptyKey
}

/// Handler for any method the cache paths don't support.
pub async fn not_implemented_handler() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

/// Handler for GET /api/v1/stat
///
/// Returns occupancy and activity counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();

    Json(StatsResponse::new(
        &stats,
        state.cache.expiration().as_secs(),
        state.cache.cleanup_interval().as_secs(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
