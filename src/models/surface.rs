use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::SettingsError;

/// Smallest block size the pass accepts.
pub const PIXEL_SIZE_MIN: f32 = 2.0;
/// Largest block size the pass accepts.
pub const PIXEL_SIZE_MAX: f32 = 32.0;
/// Block sizes are multiples of this.
pub const PIXEL_SIZE_STEP: f32 = 2.0;

/// Snap a requested block size onto the `2..=32` step-2 slider range.
///
/// Returns `None` for non-finite input.
pub fn snap_pixel_size(value: f32) -> Option<f32> {
    if !value.is_finite() {
        return None;
    }
    let clamped = value.clamp(PIXEL_SIZE_MIN, PIXEL_SIZE_MAX);
    Some((clamped / PIXEL_SIZE_STEP).round() * PIXEL_SIZE_STEP)
}

/// The output surface the pass renders into.
///
/// Dimensions are in CSS pixels; the filter works in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f32,
}

fn default_device_pixel_ratio() -> f32 {
    1.0
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Surface {
    /// Create a validated surface.
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Result<Self, SettingsError> {
        let surface = Self {
            width,
            height,
            device_pixel_ratio,
        };
        surface.validate()?;
        Ok(surface)
    }

    /// Reject empty surfaces and non-positive pixel ratios.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let ratio_ok = self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0;
        if self.width == 0 || self.height == 0 || !ratio_ok {
            return Err(SettingsError::InvalidSurface {
                width: self.width,
                height: self.height,
                device_pixel_ratio: self.device_pixel_ratio,
            });
        }
        Ok(())
    }

    /// Filter resolution in device pixels.
    pub fn resolution(&self) -> [f32; 2] {
        [
            self.width as f32 * self.device_pixel_ratio,
            self.height as f32 * self.device_pixel_ratio,
        ]
    }
}
