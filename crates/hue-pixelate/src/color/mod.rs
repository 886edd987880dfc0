//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Rgb`]: display color as read from the rendered frame and written back.
//! - [`Hsv`]: hue/saturation/value, where palette matching and hue shifting
//!   happen.
//!
//! # Example
//!
//! ```
//! use hue_pixelate::{Hsv, Rgb};
//!
//! let hsv = Hsv::from(Rgb::new(1.0, 0.0, 0.0));
//! assert_eq!(hsv, Hsv::new(0.0, 1.0, 1.0));
//!
//! let back = Rgb::from(hsv);
//! assert_eq!(back.to_bytes(), [255, 0, 0]);
//! ```

mod hsv;
mod rgb;

pub(crate) use hsv::wrap_hue;
pub use hsv::Hsv;
pub use rgb::Rgb;
