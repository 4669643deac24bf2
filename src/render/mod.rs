pub mod canvas;
pub mod renderer;
pub mod scene;

pub use canvas::{Canvas, CellCanvas, Rgb};
pub use renderer::Renderer;
pub use scene::{draw_scene, score_line};
