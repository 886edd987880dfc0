//! Brightness buckets.
//!
//! Value is first compressed from `[0, 1]` into `[0.4, 0.8]` and then
//! snapped to one of five levels. The bucket index also decides how far the
//! hue is pushed toward yellow or blue and how much saturation is removed:
//!
//! | bucket | level | hue shift distance | saturation shift |
//! |--------|-------|--------------------|------------------|
//! | 0      | 0.4   | -2                 | -0.10            |
//! | 1      | 0.5   | -1                 | -0.05            |
//! | 2      | 0.6   |  0                 |  0.00            |
//! | 3      | 0.7   | +1                 | -0.05            |
//! | 4      | 0.8   | +2                 | -0.10            |

use super::nearest_index;

/// The five brightness levels, ascending.
pub const BRIGHTNESS_LEVELS: [f32; 5] = [0.4, 0.5, 0.6, 0.7, 0.8];

/// Saturation removed per step away from the middle bucket.
pub const SATURATION_STEP: f32 = 0.05;

const COMPRESSION_SCALE: f32 = 0.4;
const COMPRESSION_OFFSET: f32 = 0.4;
const MIDDLE_BUCKET: i32 = 2;

/// Map an HSV value from `[0, 1]` into `[0.4, 0.8]`.
#[inline]
pub fn compress_brightness(value: f32) -> f32 {
    COMPRESSION_SCALE * value + COMPRESSION_OFFSET
}

/// One of the five brightness buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrightnessBucket {
    index: usize,
}

impl BrightnessBucket {
    /// Bucket for an HSV value, after compression.
    ///
    /// Exact ties between two levels resolve to the brighter one.
    ///
    /// ```
    /// use hue_pixelate::BrightnessBucket;
    ///
    /// let bucket = BrightnessBucket::for_value(1.0);
    /// assert_eq!(bucket.index(), 4);
    /// assert_eq!(bucket.hue_shift_distance(), 2);
    /// ```
    #[inline]
    pub fn for_value(value: f32) -> Self {
        Self {
            index: nearest_index(&BRIGHTNESS_LEVELS, compress_brightness(value)),
        }
    }

    /// Bucket by index.
    ///
    /// Returns `None` for indices outside `0..5`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BRIGHTNESS_LEVELS.len()).then_some(Self { index })
    }

    /// All five buckets, darkest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BRIGHTNESS_LEVELS.len()).map(|index| Self { index })
    }

    /// Bucket index, `0..5`.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    /// The matched brightness level; becomes the output value.
    #[inline]
    pub fn level(self) -> f32 {
        BRIGHTNESS_LEVELS[self.index]
    }

    /// Signed hue shift distance, `index - 2`.
    #[inline]
    pub fn hue_shift_distance(self) -> i32 {
        self.index as i32 - MIDDLE_BUCKET
    }

    /// Saturation delta, `-|index - 2| * 0.05`.
    #[inline]
    pub fn saturation_shift(self) -> f32 {
        -(self.hue_shift_distance().abs() as f32) * SATURATION_STEP
    }
}
