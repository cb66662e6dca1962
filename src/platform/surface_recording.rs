/// In-memory surface that tracks register state and records every command.
///
/// Coordinates in recorded commands are in device space (the current
/// transform is applied), so output can be compared independently of how a
/// shape chose to position itself.

use crate::core::config;
use crate::core::error::SurfaceError;
use crate::core::font::font_pixel_size;
use crate::core::style::{Paint, Shadow, TextAlign, TextBaseline};
use crate::core::types::{Color, Point, Transform};
use crate::platform::surface::Surface;

/// Save/restore-able register set.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub stroke_style: Paint,
    pub fill_style: Paint,
    pub line_width: f64,
    pub shadow: Shadow,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub transform: Transform,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            stroke_style: Paint::default(),
            fill_style: Paint::default(),
            line_width: 1.0,
            shadow: Shadow::NONE,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            transform: Transform::IDENTITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    /// `line_width` is the device-space width.
    Stroke { paint: Paint, line_width: f64 },
    Fill { paint: Paint },
    FillText {
        text: String,
        at: Point,
        paint: Paint,
        font: String,
        align: TextAlign,
        baseline: TextBaseline,
        shadow: Shadow,
    },
    StrokeText {
        text: String,
        at: Point,
        paint: Paint,
        line_width: f64,
        align: TextAlign,
        baseline: TextBaseline,
        shadow: Shadow,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Save,
    Restore,
}

/// Fallible operations that can be made to fail on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Stroke,
    Fill,
    FillText,
    StrokeText,
    MeasureText,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Stroke => "stroke",
            Operation::Fill => "fill",
            Operation::FillText => "fill_text",
            Operation::StrokeText => "stroke_text",
            Operation::MeasureText => "measure_text",
        }
    }
}

pub struct RecordingSurface {
    width: f64,
    height: f64,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    commands: Vec<Command>,
    failing: Option<Operation>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: SurfaceState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
            failing: None,
        }
    }

    /// Change the reported size; nothing else is affected.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Make every call of `operation` fail until cleared with `None`.
    pub fn fail_on(&mut self, operation: Option<Operation>) {
        self.failing = operation;
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Vertices (move/line targets and curve end points) of every recorded path.
    pub fn path_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::MoveTo(p) | Command::LineTo(p) => Some(*p),
                Command::CurveTo(_, _, p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Index of the first command matching `pred`.
    pub fn position(&self, pred: impl Fn(&Command) -> bool) -> Option<usize> {
        self.commands.iter().position(pred)
    }

    fn check(&self, operation: Operation) -> Result<(), SurfaceError> {
        if self.failing == Some(operation) {
            return Err(SurfaceError::Operation {
                operation: operation.name(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.state.transform.apply(Point::new(x, y))
    }

    fn device_scale(&self) -> f64 {
        let [a, b, c, d, _, _] = self.state.transform.0;
        (a * d - b * c).abs().sqrt()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.device(x, y);
        self.commands.push(Command::LineTo(p));
    }

    fn bezier_curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        let cmd = Command::CurveTo(self.device(c1x, c1y), self.device(c2x, c2y), self.device(x, y));
        self.commands.push(cmd);
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let cmd = Command::Arc {
            center: self.device(cx, cy),
            radius: radius * self.device_scale(),
            start_angle,
            end_angle,
        };
        self.commands.push(cmd);
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.check(Operation::Stroke)?;
        let cmd = Command::Stroke {
            paint: self.state.stroke_style.clone(),
            line_width: self.state.line_width * self.device_scale(),
        };
        self.commands.push(cmd);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.check(Operation::Fill)?;
        let paint = self.state.fill_style.clone();
        self.commands.push(Command::Fill { paint });
        Ok(())
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.state.stroke_style = paint;
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.state.fill_style = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.state.shadow.color = color;
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow.blur = blur;
    }

    fn set_shadow_offset_x(&mut self, offset: f64) {
        self.state.shadow.offset_x = offset;
    }

    fn set_shadow_offset_y(&mut self, offset: f64) {
        self.state.shadow.offset_y = offset;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.check(Operation::FillText)?;
        let cmd = Command::FillText {
            text: text.to_string(),
            at: self.device(x, y),
            paint: self.state.fill_style.clone(),
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            shadow: self.state.shadow,
        };
        self.commands.push(cmd);
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.check(Operation::StrokeText)?;
        let cmd = Command::StrokeText {
            text: text.to_string(),
            at: self.device(x, y),
            paint: self.state.stroke_style.clone(),
            line_width: self.state.line_width * self.device_scale(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
            shadow: self.state.shadow,
        };
        self.commands.push(cmd);
        Ok(())
    }

    /// Fixed-pitch approximation: every character is `0.6 em` wide.
    fn measure_text(&mut self, text: &str) -> Result<f64, SurfaceError> {
        self.check(Operation::MeasureText)?;
        let size = font_pixel_size(&self.state.font);
        Ok(text.chars().count() as f64 * size * config::APPROX_CHAR_WIDTH)
    }

    fn save(&mut self) -> Result<(), SurfaceError> {
        self.stack.push(self.state.clone());
        self.commands.push(Command::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        let state = self.stack.pop().ok_or(SurfaceError::RestoreWithoutSave)?;
        self.state = state;
        self.commands.push(Command::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform.scale(sx, sy);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::ClearRect { x, y, width, height });
    }
}
