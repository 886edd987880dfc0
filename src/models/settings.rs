use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::surface::Surface;

/// Current state of the pixelation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PassSettings {
    /// Whether frames are filtered
    pub enabled: bool,
    /// Block edge length in device pixels
    pub pixel_size: f32,
    /// Maximum hue shift per brightness step, degrees
    pub hue_shift_step: f32,
    /// Hue anchors in degrees
    pub hues: Vec<f32>,
    /// Output surface in CSS pixels
    pub surface: Surface,
    /// Filter resolution in device pixels
    #[schema(value_type = Vec<f32>)]
    pub resolution: [f32; 2],
}

/// Partial update of the pass settings; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SettingsUpdate {
    pub enabled: Option<bool>,
    /// Snapped to 2..=32 in steps of 2
    pub pixel_size: Option<f32>,
    pub hue_shift_step: Option<f32>,
}

/// New output surface size
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResizeRequest {
    pub width: u32,
    pub height: u32,
    /// Keeps the current ratio when absent
    pub device_pixel_ratio: Option<f32>,
}
