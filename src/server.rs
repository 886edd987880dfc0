//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, PassSettings, ResizeRequest, SettingsUpdate};
use crate::services::RenderService;

/// Largest accepted request body (PNG frames).
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<RenderService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> AppState {
    let config = AppConfig::load_from_assets(asset_loader);
    create_app_state_from_config(&config)
}

/// Create application state from an already loaded config.
pub fn create_app_state_from_config(config: &AppConfig) -> AppState {
    AppState {
        renderer: Arc::new(RenderService::from_config(config)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/pixelate", post(handle_pixelate))
        .route(
            "/api/settings",
            get(handle_get_settings).put(handle_put_settings),
        )
        .route("/api/resize", post(handle_resize))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_pixelate(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::PixelateQuery>,
    body: axum::body::Bytes,
) -> Result<axum::response::Response, ApiError> {
    api::handle_pixelate(axum::extract::State(state.renderer), query, body).await
}

async fn handle_get_settings(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<PassSettings> {
    api::handle_get_settings(axum::extract::State(state.renderer)).await
}

async fn handle_put_settings(
    axum::extract::State(state): axum::extract::State<AppState>,
    update: axum::Json<SettingsUpdate>,
) -> Result<axum::Json<PassSettings>, ApiError> {
    api::handle_put_settings(axum::extract::State(state.renderer), update).await
}

async fn handle_resize(
    axum::extract::State(state): axum::extract::State<AppState>,
    request: axum::Json<ResizeRequest>,
) -> Result<axum::Json<PassSettings>, ApiError> {
    api::handle_resize(axum::extract::State(state.renderer), request).await
}
