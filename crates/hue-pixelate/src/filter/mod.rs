//! The pixelation kernel.
//!
//! [`pixelate_into`] evaluates every output pixel independently:
//!
//! 1. find the block anchor for the pixel's normalized coordinate
//! 2. sample the source at the anchor
//! 3. stylize the sample (see [`Stylizer`])
//!
//! There is no state shared between pixels, so rows are handed to the rayon
//! pool as independent chunks of the output buffer.

mod grid;
mod hue_shift;
mod options;
mod stylize;

pub use grid::{BlockGrid, SourceView};
pub use hue_shift::{
    HueShift, BLUE_DEGREES, DEFAULT_HUE_SHIFT_STEP, MAX_HUE_SHIFT_STEP, YELLOW_DEGREES,
};
pub use options::{FilterOptions, DEFAULT_PIXEL_SIZE, PARALLEL_THRESHOLD};
pub use stylize::{Stylized, Stylizer, BASE_SATURATION, SATURATION_THRESHOLD};

use rayon::prelude::*;

use crate::color::Rgb;

/// Pixelate `source` into `out`.
///
/// Preconditions, checked only in debug builds:
///
/// - `source.len() == out.len() == width * height`, both dimensions non-zero
/// - `grid` was built from a positive, finite pixel size and resolution
///
/// [`Pixelator`](crate::Pixelator) validates these before calling in.
pub fn pixelate_into(
    source: &[Rgb],
    width: usize,
    height: usize,
    grid: &BlockGrid,
    stylizer: &Stylizer,
    out: &mut [Rgb],
    parallel: bool,
) {
    debug_assert_eq!(source.len(), width * height);
    debug_assert_eq!(out.len(), width * height);

    let view = SourceView::new(source, width, height);
    let render_row = |(y, row): (usize, &mut [Rgb])| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let uv = BlockGrid::pixel_uv(x, y, width, height);
            *pixel = stylizer.stylize(view.sample(grid.anchor(uv)));
        }
    };

    if parallel && out.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(width).enumerate().for_each(render_row);
    } else {
        out.chunks_mut(width).enumerate().for_each(render_row);
    }
}
