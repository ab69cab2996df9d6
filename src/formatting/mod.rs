pub mod renderer;
pub mod templates;
pub mod utils;

pub use renderer::Renderer;
