//! Per-color stylization: palette snap, brightness bucket, hue shift.

use crate::color::{Hsv, Rgb};
use crate::palette::{BrightnessBucket, HuePalette};

use super::hue_shift::HueShift;

/// Below this saturation a color is treated as neutral (greys, skin, hair)
/// and left untouched.
pub const SATURATION_THRESHOLD: f32 = 0.4;

/// Saturation of stylized colors before the bucket's saturation shift.
pub const BASE_SATURATION: f32 = 0.7;

/// How a single color is treated by the stylizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stylized {
    /// Saturation below [`SATURATION_THRESHOLD`]: hue, saturation and value
    /// pass through unchanged.
    PassThrough,
    /// Snapped to `palette_index` and quantized into `bucket`.
    Quantized {
        /// Index of the matched hue anchor
        palette_index: usize,
        /// Matched brightness bucket
        bucket: BrightnessBucket,
        /// Final HSV written to the output
        hsv: Hsv,
    },
}

/// Maps one input color to its stylized output color.
///
/// Stateless apart from its configuration; shared by reference across
/// worker threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylizer {
    palette: HuePalette,
    shift: HueShift,
}

impl Stylizer {
    /// Create a stylizer from a hue palette and shift configuration.
    pub fn new(palette: HuePalette, shift: HueShift) -> Self {
        Self { palette, shift }
    }

    /// The hue palette.
    #[inline]
    pub fn palette(&self) -> &HuePalette {
        &self.palette
    }

    /// The hue shift configuration.
    #[inline]
    pub fn shift(&self) -> HueShift {
        self.shift
    }

    /// Decide how `hsv` is treated and compute its output HSV.
    pub fn classify(&self, hsv: Hsv) -> Stylized {
        if hsv.s < SATURATION_THRESHOLD {
            return Stylized::PassThrough;
        }

        let (palette_index, snapped_hue) = self.palette.nearest(hsv.h);
        let bucket = BrightnessBucket::for_value(hsv.v);

        Stylized::Quantized {
            palette_index,
            bucket,
            hsv: Hsv::new(
                self.shift.apply(snapped_hue, bucket.hue_shift_distance()),
                BASE_SATURATION + bucket.saturation_shift(),
                bucket.level(),
            ),
        }
    }

    /// Stylize one color.
    ///
    /// Pass-through colors are returned bit-for-bit; no HSV round trip is
    /// applied to them.
    #[inline]
    pub fn stylize(&self, color: Rgb) -> Rgb {
        match self.classify(Hsv::from(color)) {
            Stylized::PassThrough => color,
            Stylized::Quantized { hsv, .. } => Rgb::from(hsv),
        }
    }
}
