//! Hue palette: the small fixed set of hues every stylized pixel snaps to.

use std::borrow::Cow;

use super::error::PaletteError;
use super::nearest_index;

/// Hue anchors of the default palette, in degrees.
///
/// Red, red-orange, orange, amber, green, azure and violet.
pub const DEFAULT_HUES_DEGREES: [f32; 7] = [0.0, 20.0, 40.0, 50.0, 110.0, 210.0, 275.0];

/// Hue anchors of the default palette as fractions of a full turn.
pub const DEFAULT_HUES: [f32; 7] = [
    0.0,
    20.0 / 360.0,
    40.0 / 360.0,
    50.0 / 360.0,
    110.0 / 360.0,
    210.0 / 360.0,
    275.0 / 360.0,
];

/// An ordered, immutable sequence of hue anchors.
///
/// Hues are stored as fractions of a full turn in strictly ascending order.
/// The default palette borrows [`DEFAULT_HUES`]; custom palettes built with
/// [`HuePalette::from_degrees`] own their storage.
///
/// # Matching
///
/// [`HuePalette::nearest`] compares plain `|hue - entry|` distances: the
/// color wheel is *not* treated as circular, so a hue of 350 degrees matches
/// the last anchor (275) rather than 0.
///
/// # Example
///
/// ```
/// use hue_pixelate::HuePalette;
///
/// let palette = HuePalette::default();
/// assert_eq!(palette.len(), 7);
///
/// // 10 degrees is exactly between 0 and 20: the later entry wins.
/// let (index, hue) = palette.nearest(10.0 / 360.0);
/// assert_eq!(index, 1);
/// assert_eq!(hue, 20.0 / 360.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HuePalette {
    hues: Cow<'static, [f32]>,
}

impl Default for HuePalette {
    fn default() -> Self {
        Self {
            hues: Cow::Borrowed(&DEFAULT_HUES),
        }
    }
}

impl HuePalette {
    /// Build a palette from hue angles in degrees.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `degrees` is empty
    /// - [`PaletteError::OutOfRange`] if an angle is not finite or not in `[0, 360)`
    /// - [`PaletteError::NotAscending`] if an angle is not greater than the one before it
    pub fn from_degrees(degrees: &[f32]) -> Result<Self, PaletteError> {
        if degrees.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        for (index, &angle) in degrees.iter().enumerate() {
            if !angle.is_finite() || !(0.0..360.0).contains(&angle) {
                return Err(PaletteError::OutOfRange { index });
            }
            if index > 0 && angle <= degrees[index - 1] {
                return Err(PaletteError::NotAscending { index });
            }
        }

        let hues: Vec<f32> = degrees.iter().map(|&d| d / 360.0).collect();
        Ok(Self {
            hues: Cow::Owned(hues),
        })
    }

    /// Number of hue anchors.
    #[inline]
    pub fn len(&self) -> usize {
        self.hues.len()
    }

    /// Always false for a validated palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }

    /// Hue anchors as fractions of a full turn.
    #[inline]
    pub fn hues(&self) -> &[f32] {
        &self.hues
    }

    /// Hue anchors in degrees.
    pub fn degrees(&self) -> Vec<f32> {
        self.hues.iter().map(|&h| h * 360.0).collect()
    }

    /// Hue anchor at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn hue(&self, index: usize) -> f32 {
        self.hues[index]
    }

    /// Find the anchor closest to `hue`, returning `(index, anchor)`.
    ///
    /// Exact ties resolve to the later (higher) anchor. See the crate-level
    /// notes on tie-breaking.
    #[inline]
    pub fn nearest(&self, hue: f32) -> (usize, f32) {
        let index = nearest_index(&self.hues, hue);
        (index, self.hues[index])
    }
}
