//! Block sampling grid.
//!
//! Every output pixel computes the same normalized-coordinate formula a
//! fragment shader would:
//!
//! ```text
//! dxy   = pixel_size / resolution
//! coord = dxy * floor(uv / dxy)
//! ```
//!
//! so all pixels inside one `pixel_size x pixel_size` cell read the same
//! source texel, the one at the cell's top-left corner.

use crate::color::Rgb;

/// Normalized block size for one frame.
///
/// Built from a validated `pixel_size` and `resolution`; the constructor
/// does not check its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGrid {
    dxy: [f32; 2],
}

impl BlockGrid {
    /// Grid for `pixel_size` output pixels per block at `resolution`.
    ///
    /// Both `pixel_size` and each `resolution` component must be finite and
    /// positive.
    #[inline]
    pub fn new(pixel_size: f32, resolution: [f32; 2]) -> Self {
        Self {
            dxy: [pixel_size / resolution[0], pixel_size / resolution[1]],
        }
    }

    /// Block size in normalized coordinates.
    #[inline]
    pub fn dxy(&self) -> [f32; 2] {
        self.dxy
    }

    /// Normalized coordinate of the centre of output pixel `(x, y)`.
    #[inline]
    pub fn pixel_uv(x: usize, y: usize, width: usize, height: usize) -> [f32; 2] {
        [
            (x as f32 + 0.5) / width as f32,
            (y as f32 + 0.5) / height as f32,
        ]
    }

    /// Representative sample coordinate of the block containing `uv`.
    #[inline]
    pub fn anchor(&self, uv: [f32; 2]) -> [f32; 2] {
        [
            self.dxy[0] * (uv[0] / self.dxy[0]).floor(),
            self.dxy[1] * (uv[1] / self.dxy[1]).floor(),
        ]
    }
}

/// Read-only view of the source frame addressed by normalized coordinate.
#[derive(Debug, Clone, Copy)]
pub struct SourceView<'a> {
    pixels: &'a [Rgb],
    width: usize,
    height: usize,
}

impl<'a> SourceView<'a> {
    /// Wrap a row-major pixel buffer. `pixels.len()` must equal
    /// `width * height`, and both dimensions must be non-zero.
    #[inline]
    pub fn new(pixels: &'a [Rgb], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Sample the texel whose top-left corner is nearest to `coord`.
    ///
    /// Block anchors land on texel corners; rounding rather than flooring
    /// keeps `k * dxy * width` from falling one texel short when the
    /// product comes out a hair below the integer. Coordinates outside
    /// `[0, 1]` clamp to the edge texel.
    #[inline]
    pub fn sample(&self, coord: [f32; 2]) -> Rgb {
        let x = texel_index(coord[0], self.width);
        let y = texel_index(coord[1], self.height);
        self.pixels[y * self.width + x]
    }
}

#[inline]
fn texel_index(coord: f32, size: usize) -> usize {
    let texel = (coord * size as f32).round();
    if texel > 0.0 {
        (texel as usize).min(size - 1)
    } else {
        0
    }
}
