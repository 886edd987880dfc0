//! Output types for the pixelation pipeline.
//!
//! [`PixelatedImage`] holds the filtered colors with dimension metadata and
//! converts to packed byte buffers on demand:
//!
//! - **RGBA** ([`PixelatedImage::to_rgba8`]): fully opaque, for compositing
//! - **RGB** ([`PixelatedImage::to_rgb8`]): for encoders without alpha

mod pixelated_image;

pub use pixelated_image::PixelatedImage;
