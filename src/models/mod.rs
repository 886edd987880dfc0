pub mod config;
pub mod settings;
pub mod surface;

pub use config::{AppConfig, PixelateConfig};
pub use settings::{PassSettings, ResizeRequest, SettingsUpdate};
pub use surface::{snap_pixel_size, Surface, PIXEL_SIZE_MAX, PIXEL_SIZE_MIN, PIXEL_SIZE_STEP};
