/// Parametric shape drawing on top of a `Surface`.
///
/// Each draw call is a one-shot emission of path primitives. The renderer
/// keeps only the surface and the size captured at construction.

use super::geometry;
use super::heart;
use crate::core::config;
use crate::core::error::RenderError;
use crate::core::style::{Paint, ShapeStyle, StrokeStyle};
use crate::core::types::{Color, Point};
use crate::platform::surface::{with_saved_state, Surface};
use std::f64::consts::TAU;

pub struct ShapeRenderer<S: Surface> {
    pub(super) surface: S,
    width: f64,
    height: f64,
    center: Point,
}

impl<S: Surface> ShapeRenderer<S> {
    /// Capture the surface size and center. Not updated on resize: build a
    /// new renderer when the surface changes size.
    pub fn new(surface: S) -> Self {
        let width = surface.width();
        let height = surface.height();
        let center = Point::new(width / 2.0, height / 2.0);
        log::info!(
            "Shape renderer ready: {}x{}, center ({}, {})",
            width,
            height,
            center.x,
            center.y
        );
        Self {
            surface,
            width,
            height,
            center,
        }
    }

    /// Fallible construction for callers that may not have a surface yet.
    pub fn try_new(surface: Option<S>) -> Result<Self, RenderError> {
        match surface {
            Some(surface) => Ok(Self::new(surface)),
            None => {
                log::error!("Shape renderer construction failed: no drawing surface");
                Err(RenderError::MissingSurface)
            }
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center captured at construction.
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Erase the rectangle captured at construction.
    pub fn clear(&mut self) {
        self.surface.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Open two-point path, stroked. Writes stroke style and line width.
    pub fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Color,
        line_width: f64,
    ) -> Result<(), RenderError> {
        let s = &mut self.surface;
        s.begin_path();
        s.move_to(start.x, start.y);
        s.line_to(end.x, end.y);
        s.set_stroke_style(Paint::Solid(color));
        s.set_line_width(line_width);
        s.stroke()?;
        Ok(())
    }

    /// Diagonal cross of extent `size`, line width 2, at the surface's live
    /// center (re-read now, not the center captured at construction).
    pub fn mark_center(&mut self, color: Color, size: f64) -> Result<(), RenderError> {
        let c = Point::new(self.surface.width() / 2.0, self.surface.height() / 2.0);
        let h = size / 2.0;
        log::debug!("mark_center at ({}, {}) size {}", c.x, c.y, size);
        self.draw_line(
            Point::new(c.x - h, c.y - h),
            Point::new(c.x + h, c.y + h),
            color,
            config::MARK_LINE_WIDTH,
        )?;
        self.draw_line(
            Point::new(c.x + h, c.y - h),
            Point::new(c.x - h, c.y + h),
            color,
            config::MARK_LINE_WIDTH,
        )
    }

    /// `mark_center` with the default red color and size 20.
    pub fn mark_center_default(&mut self) -> Result<(), RenderError> {
        self.mark_center(config::MARK_COLOR, config::MARK_SIZE)
    }

    /// Equilateral triangle, apex up. Stroke only: `style.fill` and
    /// `style.rotation` are ignored.
    pub fn draw_triangle(&mut self, center: Point, size: f64, style: &ShapeStyle) -> Result<(), RenderError> {
        let vertices = geometry::triangle_vertices(center, size);
        log::trace!("triangle {:?}", vertices);
        self.trace_closed(&vertices);
        self.apply_stroke(style.stroke_or(config::DEFAULT_STROKE))
    }

    /// Full circle. Stroked first, then filled when `style.fill` is set.
    pub fn draw_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) -> Result<(), RenderError> {
        let s = &mut self.surface;
        s.begin_path();
        s.arc(center.x, center.y, radius, 0.0, TAU);
        self.apply_stroke(style.stroke_or(config::DEFAULT_STROKE))?;
        self.apply_fill(style.fill)
    }

    /// Regular polygon with vertices at `rotation + i * 2π / sides`.
    /// Filled (when set) before stroking. `sides < 3` is not checked.
    pub fn draw_regular_polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: usize,
        style: &ShapeStyle,
    ) -> Result<(), RenderError> {
        let vertices = geometry::regular_polygon_vertices(center, radius, sides, style.rotation);
        log::trace!("polygon sides={} {:?}", sides, vertices);
        self.trace_closed(&vertices);
        self.apply_fill(style.fill)?;
        self.apply_stroke(style.stroke_or(config::DEFAULT_STROKE))
    }

    /// Star with `points` tips. Filled (when set) before stroking.
    pub fn draw_star(
        &mut self,
        center: Point,
        outer_radius: f64,
        inner_radius: f64,
        points: usize,
        style: &ShapeStyle,
    ) -> Result<(), RenderError> {
        let vertices = geometry::star_vertices(center, outer_radius, inner_radius, points, style.rotation);
        log::trace!("star points={} {:?}", points, vertices);
        self.trace_closed(&vertices);
        self.apply_fill(style.fill)?;
        self.apply_stroke(style.stroke_or(config::DEFAULT_STROKE))
    }

    /// Heart of width/height `size`, default stroke red. The transform and
    /// registers are restored on return, including on error. Filled (when
    /// set) before stroking.
    ///
    /// `line_width` is in surface pixels: it is divided by the local scale,
    /// so the outline does not thicken or thin with `size` the way a width
    /// set inside a plain canvas scale would.
    ///
    /// A zero or non-finite scale would leave a singular transform on the
    /// surface; such a heart emits nothing inside its save/restore pair.
    pub fn draw_heart(&mut self, center: Point, size: f64, style: &ShapeStyle) -> Result<(), RenderError> {
        let scale = size / config::HEART_DESIGN_SIZE;
        let stroke = style.stroke_or(config::HEART_STROKE);
        log::trace!("heart at {:?} size {} rotation {}", center, size, style.rotation);

        with_saved_state(&mut self.surface, |s| {
            let drawable = scale != 0.0
                && scale.is_finite()
                && style.rotation.is_finite()
                && center.x.is_finite()
                && center.y.is_finite();
            if !drawable {
                log::debug!("heart skipped: degenerate transform (size {})", size);
                return Ok(());
            }

            s.translate(center.x, center.y);
            s.rotate(style.rotation);
            s.scale(scale, scale);

            s.begin_path();
            s.move_to(heart::HEART_START.x, heart::HEART_START.y);
            for seg in &heart::HEART_SEGMENTS {
                s.bezier_curve_to(seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.end.x, seg.end.y);
            }
            s.close_path();

            if let Some(fill) = style.fill {
                s.set_fill_style(Paint::Solid(fill));
                s.fill()?;
            }

            s.set_stroke_style(Paint::Solid(stroke.color));
            s.set_line_width(stroke.line_width / scale.abs());
            s.stroke()?;
            Ok(())
        })
    }

    fn trace_closed(&mut self, vertices: &[Point]) {
        let s = &mut self.surface;
        s.begin_path();
        if let Some((first, rest)) = vertices.split_first() {
            s.move_to(first.x, first.y);
            for p in rest {
                s.line_to(p.x, p.y);
            }
        }
        s.close_path();
    }

    fn apply_stroke(&mut self, stroke: StrokeStyle) -> Result<(), RenderError> {
        self.surface.set_stroke_style(Paint::Solid(stroke.color));
        self.surface.set_line_width(stroke.line_width);
        self.surface.stroke()?;
        Ok(())
    }

    fn apply_fill(&mut self, fill: Option<Color>) -> Result<(), RenderError> {
        if let Some(color) = fill {
            self.surface.set_fill_style(Paint::Solid(color));
            self.surface.fill()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_recording::{Command, Operation, RecordingSurface};

    fn renderer() -> ShapeRenderer<RecordingSurface> {
        ShapeRenderer::new(RecordingSurface::new(400.0, 300.0))
    }

    fn is_stroke(c: &Command) -> bool {
        matches!(c, Command::Stroke { .. })
    }

    fn is_fill(c: &Command) -> bool {
        matches!(c, Command::Fill { .. })
    }

    fn assert_near(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_construction_captures_center() {
        let r = renderer();
        assert_eq!(r.width(), 400.0);
        assert_eq!(r.height(), 300.0);
        assert_eq!(r.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_missing_surface_is_an_error() {
        let r = ShapeRenderer::<RecordingSurface>::try_new(None);
        assert!(matches!(r, Err(RenderError::MissingSurface)));
        assert!(ShapeRenderer::try_new(Some(RecordingSurface::new(1.0, 1.0))).is_ok());
    }

    #[test]
    fn test_clear_uses_captured_size() {
        let mut r = renderer();
        r.surface_mut().resize(800.0, 800.0);
        r.clear();
        r.clear();
        let clears: Vec<_> = r.surface().commands().to_vec();
        assert_eq!(clears.len(), 2);
        assert_eq!(
            clears[0],
            Command::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 300.0
            }
        );
        assert_eq!(clears[0], clears[1]);
    }

    #[test]
    fn test_line_is_stroked_never_filled() {
        let mut r = renderer();
        r.draw_line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), Color::RED, 5.0)
            .unwrap();
        let s = r.surface();
        assert_eq!(s.path_points(), vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert!(s.position(is_fill).is_none());
        assert!(!s.commands().contains(&Command::ClosePath));
        assert_eq!(
            s.commands().last(),
            Some(&Command::Stroke {
                paint: Paint::Solid(Color::RED),
                line_width: 5.0
            })
        );
        // Registers are left as set.
        assert_eq!(s.state().line_width, 5.0);
    }

    #[test]
    fn test_mark_center_uses_live_size() {
        let mut r = renderer();
        r.surface_mut().resize(100.0, 60.0);
        r.mark_center_default().unwrap();
        let pts = r.surface().path_points();
        assert_eq!(
            pts,
            vec![
                Point::new(40.0, 20.0),
                Point::new(60.0, 40.0),
                Point::new(60.0, 20.0),
                Point::new(40.0, 40.0),
            ]
        );
        let strokes = r.surface().commands().iter().filter(|c| is_stroke(c)).count();
        assert_eq!(strokes, 2);
        assert_eq!(r.surface().state().line_width, 2.0);
        assert_eq!(r.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_triangle_closed_stroke_only() {
        let mut r = renderer();
        let style = ShapeStyle::new().fill(Color::RED);
        r.draw_triangle(Point::new(100.0, 100.0), 50.0, &style).unwrap();
        let s = r.surface();
        assert_eq!(s.path_points().len(), 3);
        assert!(s.commands().contains(&Command::ClosePath));
        assert!(s.position(is_fill).is_none());
        assert_eq!(
            s.commands().last(),
            Some(&Command::Stroke {
                paint: Paint::Solid(Color::BLACK),
                line_width: 1.0
            })
        );
    }

    #[test]
    fn test_circle_strokes_before_fill() {
        let mut r = renderer();
        let yellow = Color::parse("yellow").unwrap();
        let style = ShapeStyle::new().stroke(Color::BLACK).line_width(1.0).fill(yellow);
        r.draw_circle(Point::new(100.0, 100.0), 50.0, &style).unwrap();
        let s = r.surface();
        let stroke = s.position(is_stroke).unwrap();
        let fill = s.position(is_fill).unwrap();
        assert!(stroke < fill);
        assert_eq!(
            s.commands()[fill],
            Command::Fill {
                paint: Paint::Solid(yellow)
            }
        );
        assert!(matches!(
            s.commands()[1],
            Command::Arc { radius, start_angle, end_angle, .. }
                if radius == 50.0 && start_angle == 0.0 && end_angle == TAU
        ));
    }

    #[test]
    fn test_circle_without_fill_is_only_stroked() {
        let mut r = renderer();
        r.draw_circle(Point::new(10.0, 10.0), 5.0, &ShapeStyle::default()).unwrap();
        assert!(r.surface().position(is_fill).is_none());
        assert!(r.surface().position(is_stroke).is_some());
    }

    #[test]
    fn test_polygon_and_star_fill_before_stroke() {
        let style = ShapeStyle::new().fill(Color::RED);

        let mut r = renderer();
        r.draw_regular_polygon(Point::new(50.0, 50.0), 20.0, 6, &style).unwrap();
        let s = r.surface();
        assert!(s.position(is_fill).unwrap() < s.position(is_stroke).unwrap());

        let mut r = renderer();
        r.draw_star(Point::new(50.0, 50.0), 20.0, 8.0, 5, &style).unwrap();
        let s = r.surface();
        assert!(s.position(is_fill).unwrap() < s.position(is_stroke).unwrap());

        // The circle does the opposite.
        let mut r = renderer();
        r.draw_circle(Point::new(50.0, 50.0), 20.0, &style).unwrap();
        let s = r.surface();
        assert!(s.position(is_stroke).unwrap() < s.position(is_fill).unwrap());
    }

    #[test]
    fn test_polygon_emits_rotated_vertices() {
        let mut r = renderer();
        let center = Point::new(100.0, 100.0);
        let style = ShapeStyle::new().rotation(0.25);
        r.draw_regular_polygon(center, 30.0, 5, &style).unwrap();
        let pts = r.surface().path_points();
        assert_eq!(pts, geometry::regular_polygon_vertices(center, 30.0, 5, 0.25));
        for p in &pts {
            assert!((p.distance(center) - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_emits_alternating_vertices() {
        let mut r = renderer();
        let center = Point::new(0.0, 0.0);
        r.draw_star(center, 10.0, 4.0, 3, &ShapeStyle::default()).unwrap();
        let pts = r.surface().path_points();
        assert_eq!(pts.len(), 6);
        for (i, p) in pts.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((p.distance(center) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_heart_restores_state() {
        let mut r = renderer();
        r.surface_mut().set_line_width(9.0);
        r.surface_mut().translate(3.0, 4.0);
        let before = r.surface().state().clone();
        let style = ShapeStyle::new().fill(Color::RED).rotation(0.8).line_width(3.0);
        r.draw_heart(Point::new(120.0, 80.0), 60.0, &style).unwrap();
        assert_eq!(r.surface().state(), &before);
        assert_eq!(r.surface().save_depth(), 0);
    }

    #[test]
    fn test_heart_restores_state_on_failure() {
        let mut r = renderer();
        let before = r.surface().state().clone();
        r.surface_mut().fail_on(Some(Operation::Fill));
        let style = ShapeStyle::new().fill(Color::RED);
        let result = r.draw_heart(Point::new(50.0, 50.0), 40.0, &style);
        assert!(matches!(result, Err(RenderError::Surface(_))));
        assert_eq!(r.surface().state(), &before);
        assert_eq!(r.surface().save_depth(), 0);
        assert_eq!(r.surface().commands().last(), Some(&Command::Restore));
    }

    #[test]
    fn test_heart_translation_invariance() {
        let (cx, cy, dx, dy, size) = (100.0, 90.0, 35.0, -20.0, 70.0);
        let style = ShapeStyle::new().fill(Color::RED);

        let mut shifted = renderer();
        shifted.surface_mut().translate(dx, dy);
        shifted.draw_heart(Point::new(cx, cy), size, &style).unwrap();

        let mut direct = renderer();
        direct.draw_heart(Point::new(cx + dx, cy + dy), size, &style).unwrap();

        let a = shifted.surface().path_points();
        let b = direct.surface().path_points();
        assert_eq!(a.len(), 5);
        for (p, q) in a.iter().zip(&b) {
            assert_near(*p, *q);
        }
    }

    #[test]
    fn test_heart_matches_outline_and_default_stroke() {
        let mut r = renderer();
        let style = ShapeStyle::new().rotation(0.4).line_width(2.0);
        r.draw_heart(Point::new(60.0, 60.0), 50.0, &style).unwrap();
        let (start, segs) = heart::heart_outline(Point::new(60.0, 60.0), 50.0, 0.4);
        let pts = r.surface().path_points();
        assert_near(pts[0], start);
        for (p, seg) in pts[1..].iter().zip(&segs) {
            assert_near(*p, seg.end);
        }
        let stroke = r
            .surface()
            .commands()
            .iter()
            .find(|c| is_stroke(c))
            .cloned()
            .unwrap();
        match stroke {
            Command::Stroke { paint, line_width } => {
                assert_eq!(paint, Paint::Solid(Color::RED));
                assert!((line_width - 2.0).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
        assert!(r.surface().position(is_fill).is_none());
    }

    #[test]
    fn test_degenerate_heart_emits_nothing() {
        for size in [0.0, f64::NAN, f64::INFINITY] {
            let mut r = renderer();
            let before = r.surface().state().clone();
            let style = ShapeStyle::new().fill(Color::RED);
            r.draw_heart(Point::new(50.0, 50.0), size, &style).unwrap();
            assert_eq!(r.surface().commands(), &[Command::Save, Command::Restore], "{size}");
            assert_eq!(r.surface().state(), &before);
            assert_eq!(r.surface().save_depth(), 0);

            // Sibling calls are unaffected.
            r.draw_circle(Point::new(10.0, 10.0), 5.0, &style).unwrap();
            assert!(r.surface().position(is_fill).is_some());
        }
    }

    #[test]
    fn test_heart_line_width_is_in_surface_pixels() {
        for size in [20.0, 100.0, 400.0] {
            let mut r = renderer();
            let style = ShapeStyle::new().line_width(3.0);
            r.draw_heart(Point::new(150.0, 150.0), size, &style).unwrap();
            let width = r.surface().commands().iter().find_map(|c| match c {
                Command::Stroke { line_width, .. } => Some(*line_width),
                _ => None,
            });
            let width = width.unwrap();
            assert!((width - 3.0).abs() < 1e-9, "size {size}: {width}");
        }
    }

    #[test]
    fn test_shapes_overwrite_stale_registers() {
        let dirty = |r: &mut ShapeRenderer<RecordingSurface>| {
            let s = r.surface_mut();
            s.set_line_width(9.0);
            s.set_stroke_style(Paint::Solid(Color::RED));
            s.set_fill_style(Paint::Solid(Color::RED));
        };
        let default_stroke = Command::Stroke {
            paint: Paint::Solid(Color::BLACK),
            line_width: 1.0,
        };

        let mut r = renderer();
        dirty(&mut r);
        r.draw_circle(Point::new(50.0, 50.0), 10.0, &ShapeStyle::default()).unwrap();
        assert_eq!(r.surface().commands().last(), Some(&default_stroke));
        assert!(r.surface().position(is_fill).is_none());

        let mut r = renderer();
        dirty(&mut r);
        r.draw_triangle(Point::new(50.0, 50.0), 10.0, &ShapeStyle::default()).unwrap();
        assert_eq!(r.surface().commands().last(), Some(&default_stroke));

        let mut r = renderer();
        dirty(&mut r);
        let yellow = Color::parse("yellow").unwrap();
        r.draw_star(Point::new(50.0, 50.0), 10.0, 4.0, 5, &ShapeStyle::new().fill(yellow))
            .unwrap();
        let fill = &r.surface().commands()[r.surface().position(is_fill).unwrap()];
        assert_eq!(fill, &Command::Fill { paint: Paint::Solid(yellow) });
        assert_eq!(r.surface().commands().last(), Some(&default_stroke));
    }
}
