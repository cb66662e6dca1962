/// Cairo-backed surface.
///
/// Cairo keeps a single source pattern, so the stroke/fill paints, shadow and
/// text registers live here and are saved/restored alongside `cairo::Context`.
/// Shadows are rendered for text only.
///
/// A transform cairo cannot invert (zero scale, non-finite arguments) is not
/// handed to the context, where it would poison every later call. Painting is
/// suppressed instead until the enclosing `restore`.

use crate::core::error::SurfaceError;
use crate::core::font::FontSpec;
use crate::core::style::{Paint, Shadow, TextAlign, TextBaseline};
use crate::core::types::Color;
use crate::platform::surface::Surface;
use cairo::{Context, FontSlant, FontWeight, Operator};

const SHADOW_STEPS: usize = 4;
const SHADOW_HALO_ALPHA: f64 = 0.3;

#[derive(Debug, Clone)]
struct Registers {
    stroke: Paint,
    fill: Paint,
    shadow: Shadow,
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
    collapsed: bool,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            stroke: Paint::default(),
            fill: Paint::default(),
            shadow: Shadow::NONE,
            font: "10px sans-serif".to_string(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            collapsed: false,
        }
    }
}

pub struct CairoSurface {
    cr: Context,
    width: f64,
    height: f64,
    regs: Registers,
    saved: Vec<Registers>,
}

impl CairoSurface {
    pub fn new(cr: Context, width: f64, height: f64) -> Self {
        let mut surface = Self {
            cr,
            width,
            height,
            regs: Registers::default(),
            saved: Vec::new(),
        };
        let font = surface.regs.font.clone();
        surface.set_font(&font);
        surface
    }

    pub fn context(&self) -> &Context {
        &self.cr
    }

    fn set_source(&self, paint: &Paint) -> Result<(), SurfaceError> {
        match paint {
            Paint::Solid(c) => self.cr.set_source_rgba(c.r, c.g, c.b, c.a),
            Paint::Linear(g) => {
                let pattern = cairo::LinearGradient::new(g.start.x, g.start.y, g.end.x, g.end.y);
                for stop in &g.stops {
                    let c = stop.color;
                    pattern.add_color_stop_rgba(stop.offset, c.r, c.g, c.b, c.a);
                }
                self.cr.set_source(&pattern)?;
            }
        }
        Ok(())
    }

    /// Move the anchor so `text` honours the current align/baseline registers.
    fn text_origin(&self, text: &str, x: f64, y: f64) -> Result<(f64, f64), SurfaceError> {
        let advance = self.cr.text_extents(text)?.x_advance();
        let dx = match self.regs.align {
            TextAlign::Start | TextAlign::Left => 0.0,
            TextAlign::Center => -advance / 2.0,
            TextAlign::End | TextAlign::Right => -advance,
        };

        let fe = self.cr.font_extents()?;
        let dy = match self.regs.baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Top | TextBaseline::Hanging => fe.ascent(),
            TextBaseline::Middle => (fe.ascent() - fe.descent()) / 2.0,
            TextBaseline::Bottom | TextBaseline::Ideographic => -fe.descent(),
        };

        Ok((x + dx, y + dy))
    }

    fn collapse(&mut self, what: &str) {
        if !self.regs.collapsed {
            log::debug!("{} would make the transform singular; painting suppressed until restore", what);
        }
        self.regs.collapsed = true;
    }

    /// Approximate a blurred shadow with faded copies around the offset.
    fn draw_text_shadow(&self, text: &str, x: f64, y: f64, stroke: bool) -> Result<(), SurfaceError> {
        let shadow = self.regs.shadow;
        if !shadow.is_visible() {
            return Ok(());
        }

        // Shadow offsets are in device pixels regardless of the transform.
        let (ox, oy) = self.cr.device_to_user_distance(shadow.offset_x, shadow.offset_y)?;
        for (jx, jy, alpha) in shadow_passes(&shadow) {
            let c = shadow.color.with_alpha(alpha);
            self.cr.set_source_rgba(c.r, c.g, c.b, c.a);
            self.cr.move_to(x + ox + jx, y + oy + jy);
            if stroke {
                self.cr.text_path(text);
                self.cr.stroke()?;
            } else {
                self.cr.show_text(text)?;
            }
        }
        Ok(())
    }
}

/// `(dx, dy, alpha)` for each shadow copy. Every visible shadow gets one copy
/// at the offset with the shadow color's own alpha; blur adds a halo of
/// fainter copies spread over `blur` pixels.
fn shadow_passes(shadow: &Shadow) -> Vec<(f64, f64, f64)> {
    let mut passes = vec![(0.0, 0.0, shadow.color.a)];
    if shadow.blur > 0.0 {
        for i in 0..SHADOW_STEPS {
            let expand = shadow.blur * (i as f64 + 1.0) / (2.0 * SHADOW_STEPS as f64);
            let alpha = shadow.color.a * (1.0 - i as f64 / SHADOW_STEPS as f64) * SHADOW_HALO_ALPHA;
            passes.extend([
                (expand, 0.0, alpha),
                (-expand, 0.0, alpha),
                (0.0, expand, alpha),
                (0.0, -expand, alpha),
            ]);
        }
    }
    passes
}

impl Surface for CairoSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.cr.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cr.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.cr.line_to(x, y);
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.cr.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn close_path(&mut self) {
        self.cr.close_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.cr.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        if self.regs.collapsed {
            return Ok(());
        }
        self.set_source(&self.regs.stroke)?;
        self.cr.stroke_preserve()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        if self.regs.collapsed {
            return Ok(());
        }
        self.set_source(&self.regs.fill)?;
        self.cr.fill_preserve()?;
        Ok(())
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.regs.stroke = paint;
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.regs.fill = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.cr.set_line_width(width);
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.regs.shadow.color = color;
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.regs.shadow.blur = blur;
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        self.regs.shadow.offset_x = offset;
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        self.regs.shadow.offset_y = offset;
    }

    fn set_font(&mut self, font: &str) {
        let spec = FontSpec::parse(font);
        let slant = if spec.italic {
            FontSlant::Italic
        } else {
            FontSlant::Normal
        };
        let weight = if spec.bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        self.cr.select_font_face(&spec.family, slant, weight);
        self.cr.set_font_size(spec.size_px);
        self.regs.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.regs.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.regs.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        if self.regs.collapsed {
            return Ok(());
        }
        let (x, y) = self.text_origin(text, x, y)?;
        let path = self.cr.copy_path()?;
        self.cr.new_path();
        self.draw_text_shadow(text, x, y, false)?;
        self.set_source(&self.regs.fill)?;
        self.cr.move_to(x, y);
        self.cr.show_text(text)?;
        self.cr.new_path();
        self.cr.append_path(&path);
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        if self.regs.collapsed {
            return Ok(());
        }
        let (x, y) = self.text_origin(text, x, y)?;
        let path = self.cr.copy_path()?;
        self.cr.new_path();
        self.draw_text_shadow(text, x, y, true)?;
        self.set_source(&self.regs.stroke)?;
        self.cr.move_to(x, y);
        self.cr.text_path(text);
        self.cr.stroke()?;
        self.cr.append_path(&path);
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> Result<f64, SurfaceError> {
        Ok(self.cr.text_extents(text)?.x_advance())
    }

    fn save(&mut self) -> Result<(), SurfaceError> {
        self.cr.save()?;
        self.saved.push(self.regs.clone());
        Ok(())
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        let regs = self.saved.pop().ok_or(SurfaceError::RestoreWithoutSave)?;
        self.regs = regs;
        self.cr.restore()?;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        if !(dx.is_finite() && dy.is_finite()) {
            return self.collapse("translate");
        }
        self.cr.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        if !radians.is_finite() {
            return self.collapse("rotate");
        }
        self.cr.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if sx == 0.0 || sy == 0.0 || !(sx.is_finite() && sy.is_finite()) {
            return self.collapse("scale");
        }
        self.cr.scale(sx, sy);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let cleared = self.cr.save().and_then(|_| {
            self.cr.set_operator(Operator::Clear);
            self.cr.new_path();
            self.cr.rectangle(x, y, width, height);
            let filled = self.cr.fill();
            let restored = self.cr.restore();
            filled.and(restored)
        });
        if let Err(e) = cleared {
            log::warn!("clear_rect({}, {}, {}, {}) failed: {}", x, y, width, height, e);
        }
    }
}
