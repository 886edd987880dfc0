pub mod frame;
pub mod pass;
pub mod png_codec;

pub use frame::{Frame, MAX_PIXELS};
pub use pass::{PassSnapshot, PixelPass};
pub use png_codec::{decode_png, encode_png};
