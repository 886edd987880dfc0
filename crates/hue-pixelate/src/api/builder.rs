//! Pixelator builder -- the primary ergonomic entry point for the crate.
//!
//! [`Pixelator`] wraps the kernel with fluent configuration and does the
//! precondition checks the kernel itself leaves to its caller.

use crate::color::Rgb;
use crate::filter::{pixelate_into, BlockGrid, FilterOptions, HueShift, Stylizer};
use crate::output::PixelatedImage;
use crate::palette::HuePalette;

use super::error::PixelateError;

/// High-level pixelation builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`pixelate()`](Self::pixelate) takes `&self` so one builder can filter
///   every frame; build a new one (or use [`with_options`](Self::with_options))
///   when the resolution changes
/// - Invalid configuration surfaces as [`PixelateError`] from `pixelate()`,
///   never as a panic or NaN output
///
/// # Example
///
/// ```
/// use hue_pixelate::{Pixelator, Rgb};
///
/// let pixelator = Pixelator::new().pixel_size(2.0);
///
/// let pixels = vec![Rgb::new(1.0, 0.0, 0.0); 16];
/// let image = pixelator.pixelate(&pixels, 4, 4).unwrap();
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.pixel(0, 0), image.pixel(1, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pixelator {
    palette: HuePalette,
    hue_shift_step: f32,
    options: FilterOptions,
}

impl Pixelator {
    /// Create a pixelator with the default palette, a 16 degree hue shift
    /// step and 4-pixel blocks sized from each image's own dimensions.
    pub fn new() -> Self {
        Self {
            palette: HuePalette::default(),
            hue_shift_step: crate::filter::DEFAULT_HUE_SHIFT_STEP,
            options: FilterOptions::default(),
        }
    }

    /// Set the block edge length in output pixels.
    #[inline]
    pub fn pixel_size(mut self, pixel_size: f32) -> Self {
        self.options = self.options.pixel_size(pixel_size);
        self
    }

    /// Set the output resolution used to size blocks.
    #[inline]
    pub fn resolution(mut self, width: f32, height: f32) -> Self {
        self.options = self.options.resolution(width, height);
        self
    }

    /// Set the hue palette.
    #[inline]
    pub fn palette(mut self, palette: HuePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the perceptual hue shift step in degrees.
    #[inline]
    pub fn hue_shift_step(mut self, step: f32) -> Self {
        self.hue_shift_step = step;
        self
    }

    /// Enable or disable parallel evaluation.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.options = self.options.parallel(enabled);
        self
    }

    /// Replace all filter options at once.
    #[inline]
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Current filter options.
    #[inline]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current hue palette.
    #[inline]
    pub fn hue_palette(&self) -> &HuePalette {
        &self.palette
    }

    /// The stylizer this configuration produces.
    ///
    /// Useful for inspecting how single colors are treated without running
    /// a whole image through the filter.
    pub fn stylizer(&self) -> Result<Stylizer, PixelateError> {
        let step = self.hue_shift_step;
        if !step.is_finite() || step < 0.0 {
            return Err(PixelateError::InvalidHueShiftStep(step));
        }
        Ok(Stylizer::new(self.palette.clone(), HueShift::new(step)))
    }

    /// Pixelate a row-major buffer of colors.
    ///
    /// # Errors
    ///
    /// - [`PixelateError::BufferSizeMismatch`] if `pixels.len() != width * height`
    /// - [`PixelateError::InvalidPixelSize`] if the pixel size is not positive and finite
    /// - [`PixelateError::InvalidResolution`] if a resolution component is not
    ///   positive and finite (including a zero-sized image with no explicit resolution)
    /// - [`PixelateError::InvalidHueShiftStep`] if the hue shift step is negative or not finite
    pub fn pixelate(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<PixelatedImage, PixelateError> {
        let expected = width.checked_mul(height).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(PixelateError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let grid = self.grid_for(width, height)?;
        let stylizer = self.stylizer()?;

        if expected == 0 {
            return Ok(PixelatedImage::new(Vec::new(), width, height));
        }

        let mut out = vec![Rgb::BLACK; expected];
        pixelate_into(
            pixels,
            width,
            height,
            &grid,
            &stylizer,
            &mut out,
            self.options.parallel,
        );

        Ok(PixelatedImage::new(out, width, height))
    }

    /// Pixelate packed `[R, G, B, A, ...]` bytes.
    ///
    /// Alpha is ignored on input; the output is fully opaque.
    pub fn pixelate_rgba8(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<PixelatedImage, PixelateError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if rgba.len() != expected {
            return Err(PixelateError::BufferSizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        let pixels: Vec<Rgb> = rgba
            .chunks_exact(4)
            .map(|p| Rgb::from_u8(p[0], p[1], p[2]))
            .collect();
        self.pixelate(&pixels, width, height)
    }

    fn grid_for(&self, width: usize, height: usize) -> Result<BlockGrid, PixelateError> {
        let pixel_size = self.options.pixel_size;
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(PixelateError::InvalidPixelSize(pixel_size));
        }

        let [res_w, res_h] = self.options.resolution_for(width, height);
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(res_w) || !valid(res_h) {
            return Err(PixelateError::InvalidResolution {
                width: res_w,
                height: res_h,
            });
        }

        // A block narrower than the smallest normal float collapses to zero
        let grid = BlockGrid::new(pixel_size, [res_w, res_h]);
        if !grid.dxy().iter().all(|d| d.is_normal()) {
            return Err(PixelateError::InvalidPixelSize(pixel_size));
        }

        Ok(grid)
    }
}
