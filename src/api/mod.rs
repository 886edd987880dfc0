pub mod pixelate;
pub mod settings;

pub use pixelate::{handle_pixelate, PixelateQuery, __path_handle_pixelate};
pub use settings::{
    handle_get_settings, handle_put_settings, handle_resize, __path_handle_get_settings,
    __path_handle_put_settings, __path_handle_resize,
};
