/// Abstract immediate-mode 2D drawing surface.
///
/// Paint-state registers (stroke/fill paint, line width, shadow, font, text
/// alignment) are global to the surface. Callers set every register they
/// depend on before use and never assume a previous call left it in any
/// particular state.

use crate::core::error::SurfaceError;
use crate::core::style::{LinearGradient, Paint, TextAlign, TextBaseline};
use crate::core::types::{Color, Point};

pub trait Surface {
    /// Live dimensions, re-read on every call.
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    // Path construction
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    // Painting the current path (the path survives both calls)
    fn stroke(&mut self) -> Result<(), SurfaceError>;
    fn fill(&mut self) -> Result<(), SurfaceError>;

    // Paint-state registers
    fn set_stroke_style(&mut self, paint: Paint);
    fn set_fill_style(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow_color(&mut self, color: Color);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_shadow_offset_x(&mut self, offset: f64);
    fn set_shadow_offset_y(&mut self, offset: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    // Text
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;
    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> Result<f64, SurfaceError>;

    fn create_linear_gradient(&mut self, start: Point, end: Point) -> LinearGradient {
        LinearGradient::new(start, end)
    }

    // Scoped state: transform + all paint registers
    fn save(&mut self) -> Result<(), SurfaceError>;
    fn restore(&mut self) -> Result<(), SurfaceError>;

    // Transform
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        (**self).bezier_curve_to(c1x, c1y, c2x, c2y, x, y)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        (**self).arc(cx, cy, radius, start_angle, end_angle)
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        (**self).stroke()
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        (**self).fill()
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        (**self).set_stroke_style(paint)
    }

    fn set_fill_style(&mut self, paint: Paint) {
        (**self).set_fill_style(paint)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn set_shadow_color(&mut self, color: Color) {
        (**self).set_shadow_color(color)
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        (**self).set_shadow_blur(blur)
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        (**self).set_shadow_offset_x(offset)
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        (**self).set_shadow_offset_y(offset)
    }

    fn set_font(&mut self, font: &str) {
        (**self).set_font(font)
    }

    fn set_text_align(&mut self, align: TextAlign) {
        (**self).set_text_align(align)
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        (**self).set_text_baseline(baseline)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        (**self).fill_text(text, x, y)
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        (**self).stroke_text(text, x, y)
    }

    fn measure_text(&mut self, text: &str) -> Result<f64, SurfaceError> {
        (**self).measure_text(text)
    }

    fn create_linear_gradient(&mut self, start: Point, end: Point) -> LinearGradient {
        (**self).create_linear_gradient(start, end)
    }

    fn save(&mut self) -> Result<(), SurfaceError> {
        (**self).save()
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        (**self).restore()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy)
    }

    fn rotate(&mut self, radians: f64) {
        (**self).rotate(radians)
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        (**self).scale(sx, sy)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height)
    }
}

/// Run `draw` between `save()` and `restore()`.
///
/// `restore()` runs whether or not `draw` succeeds; the first error wins.
pub fn with_saved_state<S, T, E, F>(surface: &mut S, draw: F) -> Result<T, E>
where
    S: Surface + ?Sized,
    E: From<SurfaceError>,
    F: FnOnce(&mut S) -> Result<T, E>,
{
    surface.save()?;
    let result = draw(surface);
    let restored = surface.restore();
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_recording::{Command, RecordingSurface};
    use crate::shapes::shape_renderer::ShapeRenderer;
    use crate::core::style::ShapeStyle;

    #[test]
    fn test_renderer_borrows_surface() {
        let mut rec = RecordingSurface::new(200.0, 100.0);
        {
            let mut r = ShapeRenderer::new(&mut rec);
            assert_eq!(r.center(), Point::new(100.0, 50.0));
            r.draw_circle(Point::new(20.0, 20.0), 5.0, &ShapeStyle::new().fill(Color::RED))
                .unwrap();
            r.draw_heart(Point::new(50.0, 50.0), 40.0, &ShapeStyle::default()).unwrap();
        }
        assert!(rec
            .commands()
            .contains(&Command::Fill { paint: Paint::Solid(Color::RED) }));
        assert_eq!(rec.commands().last(), Some(&Command::Restore));
        assert_eq!(rec.save_depth(), 0);
    }

    #[test]
    fn test_saved_state_restores_after_error() {
        let mut rec = RecordingSurface::new(10.0, 10.0);
        let result: Result<(), SurfaceError> = with_saved_state(&mut rec, |s| {
            s.set_line_width(7.0);
            Err(SurfaceError::RestoreWithoutSave)
        });
        assert!(result.is_err());
        assert_eq!(rec.save_depth(), 0);
        assert_eq!(rec.state().line_width, 1.0);
    }
}
