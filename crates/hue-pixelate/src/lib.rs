#![allow(clippy::module_inception)]

//! hue-pixelate: Stylized pixelation filter
//!
//! This library turns a rendered frame into a low-resolution, palette-limited
//! image: the frame is split into square blocks, each block takes the color
//! of one representative sample, and saturated colors are snapped to a small
//! set of hue anchors with five brightness levels.
//!
//! # Quick Start
//!
//! The [`Pixelator`] builder is the primary entry point:
//!
//! ```
//! use hue_pixelate::{Pixelator, Rgb};
//!
//! let pixelator = Pixelator::new().pixel_size(4.0);
//! let pixels = vec![Rgb::from_u8(200, 30, 30); 64];
//! let image = pixelator.pixelate(&pixels, 8, 8).unwrap();
//!
//! assert_eq!(image.width(), 8);
//! assert_eq!(image.height(), 8);
//! ```
//!
//! For packed RGBA bytes use [`Pixelator::pixelate_rgba8()`].
//!
//! # Pipeline
//!
//! ```text
//! output pixel (x, y)
//!     |
//!     v
//! uv = pixel centre / size      (normalized coordinate)
//!     |
//!     v
//! coord = dxy * floor(uv / dxy) (dxy = pixel_size / resolution)
//!     |
//!     v
//! sample source at coord         (block's top-left texel)
//!     |
//!     v
//! RGB -> HSV
//!     |
//!     +-- s < 0.4 --> input color unchanged
//!     |
//!     v
//! hue   -> nearest palette anchor
//! value -> compress to [0.4, 0.8] -> nearest of 5 buckets
//!     |
//!     v
//! hue   shifted toward yellow (bright) or blue (dark)
//! sat   = 0.7 - 0.05 * |bucket - 2|
//! value = bucket level
//!     |
//!     v
//! HSV -> RGB
//! ```
//!
//! # Behavioral Notes
//!
//! - **Ties.** Hue and brightness matching both keep the *last* candidate at
//!   equal distance: a hue exactly between two anchors takes the higher
//!   one, a value exactly between two levels the brighter one.
//! - **No hue wraparound when matching.** Palette distance is a plain
//!   difference of hue fractions, so a hue of 350 degrees snaps to the
//!   275 degree anchor rather than to 0.
//! - **Not idempotent.** Stylized colors carry saturation 0.6 to 0.7, above
//!   the 0.4 threshold, and their values are re-compressed on a second pass.
//!   Pure red settles at value 0.8 after one pass and 0.7 after two.
//! - **Stateless.** Every output pixel depends only on the source and the
//!   configuration, so evaluation order does not affect the result.
//!   Rows are spread across the rayon pool for large images.

pub mod api;
pub mod color;
pub mod filter;
pub mod output;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{PixelateError, Pixelator};
pub use color::{Hsv, Rgb};
pub use filter::{
    FilterOptions, HueShift, Stylized, Stylizer, BASE_SATURATION, DEFAULT_HUE_SHIFT_STEP,
    DEFAULT_PIXEL_SIZE, SATURATION_THRESHOLD,
};
pub use output::PixelatedImage;
pub use palette::{
    BrightnessBucket, HuePalette, PaletteError, ParseColorError, BRIGHTNESS_LEVELS, DEFAULT_HUES,
    DEFAULT_HUES_DEGREES,
};
