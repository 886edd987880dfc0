use crate::assets::AssetLoader;
use hue_pixelate::{HuePalette, PaletteError, DEFAULT_HUE_SHIFT_STEP, DEFAULT_PIXEL_SIZE};
use serde::Deserialize;

use super::surface::Surface;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Pixelation stage settings
    #[serde(default)]
    pub pixelate: PixelateConfig,

    /// Initial output surface
    #[serde(default)]
    pub surface: Surface,
}

/// Settings of the pixelation stage
#[derive(Debug, Deserialize, Clone)]
pub struct PixelateConfig {
    /// Run the stage; when false frames pass through
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Block edge length in output pixels
    #[serde(default = "default_pixel_size")]
    pub pixel_size: f32,

    /// Maximum hue shift per brightness step, degrees
    #[serde(default = "default_hue_shift_step")]
    pub hue_shift_step: f32,

    /// Hue anchors in degrees (built-in palette if absent)
    #[serde(default)]
    pub hues: Option<Vec<f32>>,
}

fn default_enabled() -> bool {
    true
}

fn default_pixel_size() -> f32 {
    DEFAULT_PIXEL_SIZE
}

fn default_hue_shift_step() -> f32 {
    DEFAULT_HUE_SHIFT_STEP
}

impl Default for PixelateConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            pixel_size: default_pixel_size(),
            hue_shift_step: default_hue_shift_step(),
            hues: None,
        }
    }
}

impl PixelateConfig {
    /// The configured hue palette.
    pub fn palette(&self) -> Result<HuePalette, PaletteError> {
        match self.hues {
            Some(ref degrees) => HuePalette::from_degrees(degrees),
            None => Ok(HuePalette::default()),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        enabled = config.pixelate.enabled,
                        pixel_size = config.pixelate.pixel_size,
                        width = config.surface.width,
                        height = config.surface.height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
