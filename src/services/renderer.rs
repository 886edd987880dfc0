use tokio::sync::RwLock;

use crate::error::{RenderError, SettingsError};
use crate::models::{AppConfig, PassSettings, ResizeRequest, SettingsUpdate, Surface};
use crate::rendering::{decode_png, encode_png, PassSnapshot, PixelPass};

/// Owns the live pass settings and runs frames through the filter.
///
/// Settings changes take the write lock; each frame takes the read lock
/// only long enough to copy a [`PassSnapshot`], so a resize never lands in
/// the middle of a frame.
pub struct RenderService {
    pass: RwLock<PixelPass>,
}

impl RenderService {
    pub fn new(pass: PixelPass) -> Self {
        Self {
            pass: RwLock::new(pass),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(PixelPass::from_config(config))
    }

    /// Current settings
    pub async fn settings(&self) -> PassSettings {
        self.pass.read().await.settings()
    }

    /// Apply a partial settings update
    pub async fn update_settings(
        &self,
        update: &SettingsUpdate,
    ) -> Result<PassSettings, SettingsError> {
        let mut pass = self.pass.write().await;
        pass.apply(update)?;
        Ok(pass.settings())
    }

    /// Record a new surface size
    pub async fn resize(&self, request: &ResizeRequest) -> Result<PassSettings, SettingsError> {
        let mut pass = self.pass.write().await;
        let ratio = request
            .device_pixel_ratio
            .unwrap_or(pass.surface().device_pixel_ratio);
        pass.set_size(request.width, request.height, ratio)?;
        Ok(pass.settings())
    }

    /// Settings for one frame, plus the surface they were taken from
    pub async fn frame_settings(&self) -> (PassSnapshot, Surface) {
        let pass = self.pass.read().await;
        (pass.snapshot(), pass.surface())
    }

    /// Decode, filter and re-encode a PNG frame
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// the CPU-bound decode, filter and oxipng passes.
    pub async fn render_png(
        &self,
        png_data: Vec<u8>,
        snapshot: PassSnapshot,
    ) -> Result<Vec<u8>, RenderError> {
        tokio::task::spawn_blocking(move || {
            let frame = decode_png(&png_data)?;
            let out = snapshot.render(&frame)?;
            encode_png(&out)
        })
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
    }
}
