use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Surface;
use crate::rendering::PassSnapshot;
use crate::services::RenderService;

/// Per-frame overrides; nothing here changes the stored settings
#[derive(Debug, Default, Deserialize)]
pub struct PixelateQuery {
    /// Block size for this frame only (not snapped)
    pub pixel_size: Option<f32>,
    /// Bypass or force the filter for this frame
    pub enabled: Option<bool>,
    /// Pixel ratio for this frame, scaling the stored surface size
    pub device_pixel_ratio: Option<f32>,
    /// Size blocks from the uploaded image instead of the surface
    #[serde(default)]
    pub fit: bool,
}

impl PixelateQuery {
    fn apply(&self, snapshot: &mut PassSnapshot, surface: Surface) -> Result<(), ApiError> {
        if let Some(size) = self.pixel_size {
            if !size.is_normal() || size <= 0.0 {
                return Err(ApiError::BadRequest(format!(
                    "pixel_size must be positive, got {size}"
                )));
            }
            snapshot.pixel_size = size;
        }
        if let Some(enabled) = self.enabled {
            snapshot.enabled = enabled;
        }
        if let Some(ratio) = self.device_pixel_ratio {
            let scaled = Surface::new(surface.width, surface.height, ratio)?;
            snapshot.resolution = Some(scaled.resolution());
        }
        if self.fit {
            snapshot.resolution = None;
        }
        Ok(())
    }
}

/// Pixelate a PNG frame
///
/// The body is a PNG image of any color type. The response is the filtered
/// frame as an opaque RGBA PNG of the same dimensions. Blocks are sized from
/// the stored surface resolution unless `fit=true`.
#[utoipa::path(
    post,
    path = "/api/pixelate",
    request_body(content = Vec<u8>, content_type = "image/png", description = "Source frame"),
    responses(
        (status = 200, description = "Filtered frame", body = Vec<u8>, content_type = "image/png"),
        (status = 400, description = "Invalid PNG or parameters"),
        (status = 413, description = "Image too large"),
    ),
    params(
        ("pixel_size" = Option<f32>, Query, description = "Block size for this frame"),
        ("enabled" = Option<bool>, Query, description = "Bypass (false) or force (true) the filter"),
        ("device_pixel_ratio" = Option<f32>, Query, description = "Pixel ratio for this frame"),
        ("fit" = Option<bool>, Query, description = "Size blocks from the uploaded image"),
    ),
    tag = "Pixelate"
)]
pub async fn handle_pixelate(
    State(renderer): State<Arc<RenderService>>,
    Query(query): Query<PixelateQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest(
            "request body must be a PNG image".to_string(),
        ));
    }

    let (mut snapshot, surface) = renderer.frame_settings().await;
    query.apply(&mut snapshot, surface)?;

    tracing::debug!(
        bytes = body.len(),
        enabled = snapshot.enabled,
        pixel_size = snapshot.pixel_size,
        resolution = ?snapshot.resolution,
        "Pixelate request"
    );

    let png = renderer.render_png(body.to_vec(), snapshot).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png,
    )
        .into_response())
}
