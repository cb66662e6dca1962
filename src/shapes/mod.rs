pub mod geometry;
pub mod heart;
pub mod shape_renderer;
mod text;
