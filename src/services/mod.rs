pub mod renderer;

pub use renderer::RenderService;
