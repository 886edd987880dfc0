//! The pixelation compositing stage.
//!
//! [`PixelPass`] holds the mutable settings a host changes between frames
//! (toggle, slider, resize). Frames are never rendered from the live
//! settings: [`PixelPass::snapshot`] copies them into a [`PassSnapshot`]
//! that stays fixed for the whole frame.

use hue_pixelate::{HuePalette, Pixelator, DEFAULT_HUES_DEGREES};

use crate::error::{RenderError, SettingsError};
use crate::models::{snap_pixel_size, AppConfig, PassSettings, SettingsUpdate, Surface};

use super::frame::Frame;

/// Mutable state of the pixelation stage.
#[derive(Debug, Clone)]
pub struct PixelPass {
    enabled: bool,
    pixel_size: f32,
    hue_shift_step: f32,
    palette: HuePalette,
    hues: Vec<f32>,
    surface: Surface,
}

impl PixelPass {
    /// Build the stage from config.
    ///
    /// Invalid config values are replaced by defaults with a warning, the
    /// same way an unreadable config file is.
    pub fn from_config(config: &AppConfig) -> Self {
        let settings = &config.pixelate;

        let (palette, hues) = match (settings.palette(), settings.hues.as_ref()) {
            (Ok(palette), Some(hues)) => (palette, hues.clone()),
            (Ok(palette), None) => (palette, DEFAULT_HUES_DEGREES.to_vec()),
            (Err(e), _) => {
                tracing::warn!(%e, "Invalid hue palette in config, using built-in palette");
                (HuePalette::default(), DEFAULT_HUES_DEGREES.to_vec())
            }
        };

        let pixel_size = snap_pixel_size(settings.pixel_size).unwrap_or_else(|| {
            tracing::warn!(pixel_size = settings.pixel_size, "Invalid pixel size in config");
            hue_pixelate::DEFAULT_PIXEL_SIZE
        });

        let hue_shift_step = if valid_step(settings.hue_shift_step) {
            settings.hue_shift_step
        } else {
            tracing::warn!(step = settings.hue_shift_step, "Invalid hue shift step in config");
            hue_pixelate::DEFAULT_HUE_SHIFT_STEP
        };

        let surface = match config.surface.validate() {
            Ok(()) => config.surface,
            Err(e) => {
                tracing::warn!(%e, "Invalid surface in config, using default");
                Surface::default()
            }
        };

        Self {
            enabled: settings.enabled,
            pixel_size,
            hue_shift_step,
            palette,
            hues,
            surface,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Turn the stage on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::info!(enabled, "Pixelation toggled");
        }
        self.enabled = enabled;
    }

    /// Set the block size, snapped to the slider range. Returns the snapped value.
    pub fn set_pixel_size(&mut self, pixel_size: f32) -> Result<f32, SettingsError> {
        let snapped =
            snap_pixel_size(pixel_size).ok_or(SettingsError::InvalidPixelSize(pixel_size))?;
        if snapped != self.pixel_size {
            tracing::info!(requested = pixel_size, pixel_size = snapped, "Pixel size changed");
        }
        self.pixel_size = snapped;
        Ok(snapped)
    }

    /// Set the perceptual hue shift step in degrees.
    pub fn set_hue_shift_step(&mut self, step: f32) -> Result<(), SettingsError> {
        if !valid_step(step) {
            return Err(SettingsError::InvalidHueShiftStep(step));
        }
        self.hue_shift_step = step;
        tracing::info!(step, "Hue shift step changed");
        Ok(())
    }

    /// Resize contract: record the new surface before the next frame.
    pub fn set_size(
        &mut self,
        width: u32,
        height: u32,
        device_pixel_ratio: f32,
    ) -> Result<(), SettingsError> {
        self.surface = Surface::new(width, height, device_pixel_ratio)?;
        let [res_w, res_h] = self.surface.resolution();
        tracing::debug!(width, height, device_pixel_ratio, res_w, res_h, "Surface resized");
        Ok(())
    }

    /// Apply a partial update. Nothing changes unless every field is valid.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<(), SettingsError> {
        if let Some(size) = update.pixel_size {
            snap_pixel_size(size).ok_or(SettingsError::InvalidPixelSize(size))?;
        }
        if let Some(step) = update.hue_shift_step {
            if !valid_step(step) {
                return Err(SettingsError::InvalidHueShiftStep(step));
            }
        }

        if let Some(enabled) = update.enabled {
            self.set_enabled(enabled);
        }
        if let Some(size) = update.pixel_size {
            self.set_pixel_size(size)?;
        }
        if let Some(step) = update.hue_shift_step {
            self.set_hue_shift_step(step)?;
        }
        Ok(())
    }

    /// Read-only copy of the settings for one frame.
    pub fn snapshot(&self) -> PassSnapshot {
        PassSnapshot {
            enabled: self.enabled,
            pixel_size: self.pixel_size,
            resolution: Some(self.surface.resolution()),
            hue_shift_step: self.hue_shift_step,
            palette: self.palette.clone(),
        }
    }

    /// Public view of the current settings.
    pub fn settings(&self) -> PassSettings {
        PassSettings {
            enabled: self.enabled,
            pixel_size: self.pixel_size,
            hue_shift_step: self.hue_shift_step,
            hues: self.hues.clone(),
            surface: self.surface,
            resolution: self.surface.resolution(),
        }
    }

    /// Render one frame with the current settings.
    pub fn render(&self, frame: &Frame) -> Result<Frame, RenderError> {
        self.snapshot().render(frame)
    }
}

fn valid_step(step: f32) -> bool {
    step.is_finite() && step >= 0.0
}

/// Settings frozen for the evaluation of one frame.
#[derive(Debug, Clone)]
pub struct PassSnapshot {
    pub enabled: bool,
    pub pixel_size: f32,
    /// `None` sizes blocks from the frame itself
    pub resolution: Option<[f32; 2]>,
    pub hue_shift_step: f32,
    pub palette: HuePalette,
}

impl PassSnapshot {
    /// Kernel configured from this snapshot.
    pub fn pixelator(&self) -> Pixelator {
        let pixelator = Pixelator::new()
            .palette(self.palette.clone())
            .hue_shift_step(self.hue_shift_step)
            .pixel_size(self.pixel_size);
        match self.resolution {
            Some([width, height]) => pixelator.resolution(width, height),
            None => pixelator,
        }
    }

    /// Filter `frame`, or return it unchanged when the stage is disabled.
    ///
    /// A frame whose size differs from the snapshot resolution is still
    /// filtered; its blocks are just not `pixel_size` pixels wide.
    pub fn render(&self, frame: &Frame) -> Result<Frame, RenderError> {
        if !self.enabled {
            tracing::debug!(
                width = frame.width(),
                height = frame.height(),
                "Pixelation disabled, passing frame through"
            );
            return Ok(frame.clone());
        }

        let started = std::time::Instant::now();
        let image = self.pixelator().pixelate_rgba8(
            frame.rgba(),
            frame.width() as usize,
            frame.height() as usize,
        )?;
        let out = Frame::new(frame.width(), frame.height(), image.to_rgba8())?;

        tracing::debug!(
            width = frame.width(),
            height = frame.height(),
            pixel_size = self.pixel_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Frame pixelated"
        );
        Ok(out)
    }
}
