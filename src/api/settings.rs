use axum::{
    extract::State,
    response::Json,
    Json as JsonExtractor,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{PassSettings, ResizeRequest, SettingsUpdate};
use crate::services::RenderService;

/// Get the current pass settings
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current settings", body = PassSettings),
    ),
    tag = "Settings"
)]
pub async fn handle_get_settings(
    State(renderer): State<Arc<RenderService>>,
) -> Json<PassSettings> {
    Json(renderer.settings().await)
}

/// Update the pass settings
///
/// Fields that are absent are left unchanged. The pixel size is snapped to
/// the 2..=32 step-2 range. Nothing is applied if any field is invalid.
#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = SettingsUpdate,
    responses(
        (status = 200, description = "Updated settings", body = PassSettings),
        (status = 400, description = "Invalid value"),
    ),
    tag = "Settings"
)]
pub async fn handle_put_settings(
    State(renderer): State<Arc<RenderService>>,
    JsonExtractor(update): JsonExtractor<SettingsUpdate>,
) -> Result<Json<PassSettings>, ApiError> {
    let settings = renderer.update_settings(&update).await?;
    Ok(Json(settings))
}

/// Report a new output surface size
///
/// Must be called whenever the surface changes size so that blocks keep
/// their configured size in device pixels.
#[utoipa::path(
    post,
    path = "/api/resize",
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "Updated settings", body = PassSettings),
        (status = 400, description = "Empty surface or invalid pixel ratio"),
    ),
    tag = "Settings"
)]
pub async fn handle_resize(
    State(renderer): State<Arc<RenderService>>,
    JsonExtractor(request): JsonExtractor<ResizeRequest>,
) -> Result<Json<PassSettings>, ApiError> {
    let settings = renderer.resize(&request).await?;
    Ok(Json(settings))
}
