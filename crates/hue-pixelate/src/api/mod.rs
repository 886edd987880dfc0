//! Public API for the hue-pixelate crate.
//!
//! This module provides the high-level API: [`Pixelator`] builder and
//! [`PixelateError`] unified error type.

mod builder;
mod error;

pub use builder::Pixelator;
pub use error::PixelateError;
