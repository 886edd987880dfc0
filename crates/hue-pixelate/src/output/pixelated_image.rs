//! PixelatedImage struct with packed byte output.

use crate::color::Rgb;

/// The output of a pixelation pass.
///
/// Stores one [`Rgb`] per pixel in row-major order. Output is always fully
/// opaque; there is no alpha channel to carry.
///
/// # Example
///
/// ```
/// use hue_pixelate::{PixelatedImage, Rgb};
///
/// let image = PixelatedImage::new(vec![Rgb::new(1.0, 0.0, 0.0); 4], 2, 2);
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.to_rgba8()[..4], [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelatedImage {
    /// Output colors, row-major.
    pixels: Vec<Rgb>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl PixelatedImage {
    /// Wrap filtered pixels.
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixels length ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// The output colors, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the image, returning its pixel buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Packed `[R, G, B, A, ...]` bytes with alpha fixed at 255.
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            let [r, g, b] = color.to_bytes();
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
        rgba
    }

    /// Packed `[R, G, B, ...]` bytes.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }
}
