/// Styled text: shadow, outline and gradient fill inside one saved-state block.

use super::shape_renderer::ShapeRenderer;
use crate::core::error::RenderError;
use crate::core::font::font_pixel_size;
use crate::core::style::{GradientDirection, GradientSpec, LinearGradient, Paint, TextOptions};
use crate::core::types::Point;
use crate::platform::surface::{with_saved_state, Surface};

impl<S: Surface> ShapeRenderer<S> {
    /// Draw `text` anchored at `at`.
    ///
    /// Order inside the block: font/align/baseline, shadow registers, paint
    /// resolution (gradient or color), outline stroke, fill. The shadow, when
    /// set, applies to both the outline and the fill. All registers are
    /// restored on return, also when measuring or painting fails.
    pub fn draw_text(&mut self, text: &str, at: Point, options: &TextOptions) -> Result<(), RenderError> {
        let font = options.font_or_default();
        log::trace!("text {:?} at {:?} font {:?}", text, at, font);

        with_saved_state(&mut self.surface, |s| {
            s.set_font(font);
            s.set_text_align(options.align.unwrap_or_default());
            s.set_text_baseline(options.baseline.unwrap_or_default());

            if let Some(spec) = &options.shadow {
                let shadow = spec.resolve();
                s.set_shadow_color(shadow.color);
                s.set_shadow_blur(shadow.blur);
                s.set_shadow_offset_x(shadow.offset_x);
                s.set_shadow_offset_y(shadow.offset_y);
            }

            let paint = match &options.gradient {
                Some(spec) => Paint::Linear(text_gradient(s, spec, text, at, font)?),
                None => Paint::Solid(options.color_or_default()),
            };

            if let Some(spec) = &options.outline {
                let outline = spec.resolve();
                s.set_stroke_style(Paint::Solid(outline.color));
                s.set_line_width(outline.line_width);
                s.stroke_text(text, at.x, at.y)?;
            }

            s.set_fill_style(paint);
            s.fill_text(text, at.x, at.y)?;
            Ok(())
        })
    }
}

/// Gradient spanning the measured text width (horizontal) or the font's
/// pixel size (vertical), starting at the anchor point.
fn text_gradient<S: Surface + ?Sized>(
    surface: &mut S,
    spec: &GradientSpec,
    text: &str,
    at: Point,
    font: &str,
) -> Result<LinearGradient, RenderError> {
    spec.validate()?;
    let end = match spec.direction {
        GradientDirection::Vertical => Point::new(at.x, at.y + font_pixel_size(font)),
        GradientDirection::Horizontal => Point::new(at.x + surface.measure_text(text)?, at.y),
    };

    let mut gradient = surface.create_linear_gradient(at, end);
    spec.place_stops(&mut gradient)?;
    Ok(gradient)
}
