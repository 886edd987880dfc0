//! Unified error type for the hue-pixelate public API.
//!
//! The kernel itself cannot fail; every variant here is a precondition the
//! [`Pixelator`](crate::Pixelator) checks before handing work to it.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the hue-pixelate public API.
///
/// # Example
///
/// ```
/// use hue_pixelate::{HuePalette, PixelateError};
///
/// fn custom_palette() -> Result<HuePalette, PixelateError> {
///     let palette = HuePalette::from_degrees(&[0.0, 120.0, 240.0])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PixelateError {
    /// Pixel size is zero, negative or not finite
    InvalidPixelSize(f32),
    /// A resolution component is zero, negative or not finite
    InvalidResolution {
        /// Horizontal resolution
        width: f32,
        /// Vertical resolution
        height: f32,
    },
    /// Hue shift step is negative or not finite
    InvalidHueShiftStep(f32),
    /// Pixel buffer length does not match the stated dimensions
    BufferSizeMismatch {
        /// `width * height` (times 4 for RGBA input)
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },
    /// Hue palette validation error
    Palette(PaletteError),
}

impl fmt::Display for PixelateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelateError::InvalidPixelSize(size) => {
                write!(f, "pixel size must be positive and finite, got {}", size)
            }
            PixelateError::InvalidResolution { width, height } => {
                write!(
                    f,
                    "resolution must be positive and finite, got {}x{}",
                    width, height
                )
            }
            PixelateError::InvalidHueShiftStep(step) => {
                write!(f, "hue shift step must be non-negative and finite, got {}", step)
            }
            PixelateError::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} elements, expected {}",
                    actual, expected
                )
            }
            PixelateError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for PixelateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelateError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for PixelateError {
    fn from(err: PaletteError) -> Self {
        PixelateError::Palette(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PixelateError::InvalidPixelSize(0.0).to_string(),
            "pixel size must be positive and finite, got 0"
        );
        assert_eq!(
            PixelateError::InvalidResolution {
                width: 0.0,
                height: 600.0
            }
            .to_string(),
            "resolution must be positive and finite, got 0x600"
        );
        assert_eq!(
            PixelateError::BufferSizeMismatch {
                expected: 16,
                actual: 12
            }
            .to_string(),
            "pixel buffer has 12 elements, expected 16"
        );
    }

    #[test]
    fn test_from_palette_error() {
        use std::error::Error;

        let err: PixelateError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, PixelateError::Palette(_)));
        assert!(err.source().is_some());
    }
}
