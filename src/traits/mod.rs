pub mod projector;
pub mod renderer;

pub use projector::*;
pub use renderer::*;
