//! Parametric 2D shapes (line, triangle, circle, polygon, star, heart, styled
//! text) emitted as path primitives onto an immediate-mode drawing surface.

pub mod core;
pub mod demo;
pub mod platform;
pub mod shapes;

pub use crate::core::error::{ColorParseError, GradientError, RenderError, SurfaceError};
pub use crate::core::style::{
    GradientDirection, GradientSpec, OutlineSpec, Paint, ShadowSpec, ShapeStyle, TextAlign,
    TextBaseline, TextOptions,
};
pub use crate::core::types::{Color, Point};
pub use crate::platform::surface::Surface;
pub use crate::platform::surface_cairo::CairoSurface;
pub use crate::platform::surface_recording::RecordingSurface;
pub use crate::shapes::shape_renderer::ShapeRenderer;
