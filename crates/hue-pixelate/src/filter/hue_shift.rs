//! Perceptual hue shift.
//!
//! Brighter buckets pull hues toward yellow (60 degrees), darker buckets
//! toward blue (240 degrees), the way a painter warms highlights and cools
//! shadows. The step is proportional to how far the hue is from the anchor
//! it moves toward, so hues near an anchor barely move and hues opposite
//! it move by the full step.
//!
//! ```text
//!   region        brighten (d > 0)              darken (d < 0)
//!   [0, 60)       +(60 - h)      toward 60      -(h + 120)   toward 240 via 0
//!   [60, 240]     -(h - 60)      toward 60      +(240 - h)   toward 240
//!   (240, 360)    +(420 - h)     toward 60 via 360   -(h - 240)   toward 240
//!
//!   shifted = h + sign * (factor / 180) * step * |d|
//! ```

use crate::color::wrap_hue;

/// Hue of the warm anchor, degrees.
pub const YELLOW_DEGREES: f32 = 60.0;
/// Hue of the cool anchor, degrees.
pub const BLUE_DEGREES: f32 = 240.0;
/// Default maximum shift per bucket step, degrees.
pub const DEFAULT_HUE_SHIFT_STEP: f32 = 16.0;

/// Largest step for which a two-bucket shift cannot overshoot its anchor.
pub const MAX_HUE_SHIFT_STEP: f32 = 45.0;

/// Pure, stateless hue shifter parameterised by its step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueShift {
    step: f32,
}

impl Default for HueShift {
    fn default() -> Self {
        Self {
            step: DEFAULT_HUE_SHIFT_STEP,
        }
    }
}

impl HueShift {
    /// Create a shifter with the given step in degrees.
    ///
    /// The step is a cosmetic parameter; validation lives in
    /// [`Pixelator`](crate::Pixelator).
    #[inline]
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    /// Step in degrees.
    #[inline]
    pub fn step(self) -> f32 {
        self.step
    }

    /// Shift `hue` (fraction of a turn) by `distance` bucket steps.
    ///
    /// Positive distances move toward yellow, negative toward blue, zero
    /// returns the hue unchanged. The result is wrapped into `[0, 1)`.
    ///
    /// ```
    /// use hue_pixelate::HueShift;
    ///
    /// // Red brightened two steps: 60 degrees from yellow, 2 * 16 * 60/180.
    /// let shifted = HueShift::default().apply(0.0, 2);
    /// assert!((shifted * 360.0 - 32.0 / 3.0).abs() < 1e-3);
    /// ```
    pub fn apply(self, hue: f32, distance: i32) -> f32 {
        if distance == 0 {
            return hue;
        }

        let degrees = wrap_hue(hue) * 360.0;
        let scale = self.step / 180.0 * distance as f32;

        let shifted = if degrees < YELLOW_DEGREES {
            if distance > 0 {
                degrees + (YELLOW_DEGREES - degrees) * scale
            } else {
                degrees + (degrees + 360.0 - BLUE_DEGREES) * scale
            }
        } else if degrees <= BLUE_DEGREES {
            if distance > 0 {
                degrees - (degrees - YELLOW_DEGREES) * scale
            } else {
                degrees - (BLUE_DEGREES - degrees) * scale
            }
        } else if distance > 0 {
            degrees + (360.0 - degrees + YELLOW_DEGREES) * scale
        } else {
            degrees + (degrees - BLUE_DEGREES) * scale
        };

        wrap_hue(shifted / 360.0)
    }
}
