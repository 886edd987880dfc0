use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hue_pixelate::PixelateError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Image too large: {pixels} pixels (max {max})")]
    ImageTooLarge { pixels: u64, max: u64 },

    #[error("Filter error: {0}")]
    Filter(#[from] PixelateError),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected changes to the pass settings.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("pixel size must be finite, got {0}")]
    InvalidPixelSize(f32),

    #[error("hue shift step must be finite and non-negative, got {0}")]
    InvalidHueShiftStep(f32),

    #[error("surface must be non-empty with a positive pixel ratio, got {width}x{height}@{device_pixel_ratio}")]
    InvalidSurface {
        width: u32,
        height: u32,
        device_pixel_ratio: f32,
    },
}

impl RenderError {
    fn status_code(&self) -> StatusCode {
        match self {
            RenderError::PngDecode(_)
            | RenderError::UnsupportedDimensions { .. }
            | RenderError::Filter(_) => StatusCode::BAD_REQUEST,
            RenderError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RenderError::PngEncode(_) | RenderError::Task(_) | RenderError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Settings(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Render(e) => (e.status_code(), e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::debug!(error = %message, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
