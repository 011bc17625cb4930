pub mod renderer;
pub mod core;
pub mod config;

pub use renderer::SkiaRenderer;
