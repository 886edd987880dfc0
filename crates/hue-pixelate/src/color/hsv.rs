//! HSV (hue, saturation, value) color type.
//!
//! Hue is stored as a fraction of a full turn in `[0, 1)` rather than in
//! degrees, so palette anchors and shifted hues can be compared directly.

use super::rgb::Rgb;

/// A color in hue/saturation/value form.
///
/// - `h`: hue as a fraction of 360 degrees, `[0, 1)`
/// - `s`: saturation, `(max - min) / max`, `[0, 1]`
/// - `v`: value (brightness), the largest channel, `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue, fraction of a full turn
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color. The hue is used as given.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue_degrees(self) -> f32 {
        self.h * 360.0
    }
}

/// Wrap a hue fraction into `[0, 1)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `1.0`, which
/// is folded back onto `0.0`.
#[inline]
pub(crate) fn wrap_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Rgb> for Hsv {
    /// Standard piecewise conversion, branching on which channel is largest.
    ///
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0;
    /// black gets saturation 0.
    fn from(c: Rgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };

        let h = if delta == 0.0 {
            0.0
        } else if max == c.r {
            ((c.g - c.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == c.g {
            ((c.b - c.r) / delta + 2.0) / 6.0
        } else {
            ((c.r - c.g) / delta + 4.0) / 6.0
        };

        Self {
            h: wrap_hue(h),
            s,
            v: max,
        }
    }
}

impl From<Hsv> for Rgb {
    /// Branch-free conversion, the form used in fragment shaders:
    ///
    /// ```text
    /// p   = |fract(h + (1, 2/3, 1/3)) * 6 - 3|
    /// rgb = v * mix(1, clamp(p - 1, 0, 1), s)
    /// ```
    ///
    /// Hues outside `[0, 1)` wrap naturally through `fract`.
    fn from(c: Hsv) -> Self {
        let channel = |offset: f32| {
            let x = c.h + offset;
            let p = ((x - x.floor()) * 6.0 - 3.0).abs();
            let k = (p - 1.0).clamp(0.0, 1.0);
            c.v * (1.0 + (k - 1.0) * c.s)
        };

        Rgb::new(channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        assert!(
            actual.max_channel_difference(expected) < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_primaries_to_hsv() {
        let red = Hsv::from(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(red, Hsv::new(0.0, 1.0, 1.0));

        let green = Hsv::from(Rgb::new(0.0, 1.0, 0.0));
        assert!((green.h - 1.0 / 3.0).abs() < TOLERANCE);

        let blue = Hsv::from(Rgb::new(0.0, 0.0, 1.0));
        assert!((blue.h - 2.0 / 3.0).abs() < TOLERANCE);
        assert_eq!(blue.s, 1.0);
        assert_eq!(blue.v, 1.0);
    }

    #[test]
    fn test_magenta_wraps_below_one() {
        // Red max with blue > green: negative sector wraps to 300 degrees.
        let magenta = Hsv::from(Rgb::new(1.0, 0.0, 1.0));
        assert!((magenta.hue_degrees() - 300.0).abs() < 1e-3);
        assert!(magenta.h < 1.0);
    }

    #[test]
    fn test_grey_and_black() {
        let grey = Hsv::from(Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(grey, Hsv::new(0.0, 0.0, 0.5));

        let black = Hsv::from(Rgb::BLACK);
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_to_rgb_known_values() {
        assert_rgb_close(Rgb::from(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(1.0, 0.0, 0.0));
        assert_rgb_close(
            Rgb::from(Hsv::new(1.0 / 6.0, 1.0, 1.0)),
            Rgb::new(1.0, 1.0, 0.0),
        );
        assert_rgb_close(Rgb::from(Hsv::new(0.5, 0.5, 0.8)), Rgb::new(0.4, 0.8, 0.8));
    }

    #[test]
    fn test_zero_saturation_is_exact_grey() {
        let rgb = Rgb::from(Hsv::new(0.37, 0.0, 0.5));
        assert_eq!(rgb, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_hue_outside_unit_range_wraps() {
        let a = Rgb::from(Hsv::new(0.25, 0.7, 0.6));
        let b = Rgb::from(Hsv::new(1.25, 0.7, 0.6));
        let c = Rgb::from(Hsv::new(-0.75, 0.7, 0.6));
        assert_rgb_close(a, b);
        assert_rgb_close(a, c);
    }

    #[test]
    fn test_round_trip_grid() {
        let steps = [0.0, 0.1, 0.25, 0.5, 0.6, 0.75, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let original = Rgb::new(r, g, b);
                    let back = Rgb::from(Hsv::from(original));
                    assert_rgb_close(back, original);
                }
            }
        }
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(1.0), 0.0);
        assert!((wrap_hue(1.25) - 0.25).abs() < TOLERANCE);
        assert!((wrap_hue(-0.25) - 0.75).abs() < TOLERANCE);
        assert!(wrap_hue(-1e-9) < 1.0);
    }
}
