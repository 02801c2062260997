pub mod canvas;
pub mod renderer;

pub use canvas::CellBuffer;
pub use renderer::Renderer;
