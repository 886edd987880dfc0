//! Palette types and utilities
//!
//! This module provides the hue palette, the brightness buckets, and error
//! types for parsing and validation.
//!
//! Both lookups use the same linear scan: candidates are visited in
//! ascending order and the current best is replaced whenever the new
//! distance is *less than or equal to* the best so far. Exact ties therefore
//! go to the last (highest) candidate. Output compatibility depends on this,
//! so it must stay `<=` even though `<` would be the more common choice.

mod brightness;
mod error;
mod hue_palette;

pub use brightness::{compress_brightness, BrightnessBucket, BRIGHTNESS_LEVELS, SATURATION_STEP};
pub use error::{PaletteError, ParseColorError};
pub use hue_palette::{HuePalette, DEFAULT_HUES, DEFAULT_HUES_DEGREES};

/// Index of the candidate closest to `target`, last candidate winning ties.
///
/// `candidates` must not be empty. A NaN target never compares as closer,
/// so it resolves to index 0.
#[inline]
pub(crate) fn nearest_index(candidates: &[f32], target: f32) -> usize {
    let mut best = 0;
    let mut min_distance = (target - candidates[0]).abs();

    for (index, &candidate) in candidates.iter().enumerate().skip(1) {
        let distance = (target - candidate).abs();
        if distance <= min_distance {
            min_distance = distance;
            best = index;
        }
    }

    best
}
