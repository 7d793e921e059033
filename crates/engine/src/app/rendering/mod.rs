mod renderer;
mod surface;
mod text;

pub use renderer::Renderer;
pub use surface::{Frame, Rgba};
pub use text::Font;
