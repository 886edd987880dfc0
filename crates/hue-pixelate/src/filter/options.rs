//! Filter options and configuration.
//!
//! This module provides the [`FilterOptions`] struct for configuring the
//! sampling grid and the evaluation strategy.

/// Default block edge length in output pixels.
pub const DEFAULT_PIXEL_SIZE: f32 = 4.0;

/// Images with fewer pixels than this are evaluated on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// Configuration options for one pixelation pass.
///
/// # Example
///
/// ```
/// use hue_pixelate::FilterOptions;
///
/// let options = FilterOptions::new()
///     .pixel_size(8.0)
///     .resolution(1600.0, 1200.0);
///
/// assert_eq!(options.pixel_size, 8.0);
/// assert_eq!(options.resolution, Some([1600.0, 1200.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Block edge length in output pixels.
    ///
    /// Default: `4.0`
    pub pixel_size: f32,

    /// Output resolution used to size blocks, in device pixels.
    ///
    /// `None` uses the dimensions of the image being filtered. A value that
    /// differs from the image size produces blocks of the wrong size but is
    /// otherwise harmless.
    ///
    /// Default: `None`
    pub resolution: Option<[f32; 2]>,

    /// Evaluate rows on the rayon thread pool.
    ///
    /// Output is identical either way; small images always run on the
    /// calling thread.
    ///
    /// Default: `true`
    pub parallel: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            resolution: None,
            parallel: true,
        }
    }
}

impl FilterOptions {
    /// Create new filter options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block edge length in output pixels.
    #[inline]
    pub fn pixel_size(mut self, pixel_size: f32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Set the output resolution used to size blocks.
    #[inline]
    pub fn resolution(mut self, width: f32, height: f32) -> Self {
        self.resolution = Some([width, height]);
        self
    }

    /// Size blocks from the filtered image's own dimensions.
    #[inline]
    pub fn fit_resolution(mut self) -> Self {
        self.resolution = None;
        self
    }

    /// Enable or disable parallel evaluation.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Resolution for an image of the given size.
    #[inline]
    pub fn resolution_for(&self, width: usize, height: usize) -> [f32; 2] {
        self.resolution
            .unwrap_or([width as f32, height as f32])
    }
}
