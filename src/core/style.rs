/// Paint and style descriptions.
///
/// Every optional field resolves to its documented default on its own,
/// independent of which sibling fields are present.

use super::config;
use super::error::GradientError;
use super::types::{Color, Point};

/// A color stop at a fractional position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(ColorStop { offset, color });
    }
}

/// Value of a stroke or fill paint register.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Linear(gradient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDirection {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub colors: Vec<Color>,
    pub direction: GradientDirection,
}

impl GradientSpec {
    pub fn new(colors: Vec<Color>, direction: GradientDirection) -> Result<Self, GradientError> {
        let spec = Self { colors, direction };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), GradientError> {
        if self.colors.len() < 2 {
            return Err(GradientError::TooFewColors(self.colors.len()));
        }
        Ok(())
    }

    /// Evenly spaced stop offsets `i / (n - 1)`.
    pub fn stop_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        let last = (self.colors.len().max(2) - 1) as f64;
        (0..self.colors.len()).map(move |i| i as f64 / last)
    }

    /// Add one evenly spaced stop per color to a gradient the surface created.
    pub fn place_stops(&self, gradient: &mut LinearGradient) -> Result<(), GradientError> {
        self.validate()?;
        for (offset, color) in self.stop_offsets().zip(&self.colors) {
            gradient.add_color_stop(offset, *color);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowSpec {
    pub color: Option<Color>,
    pub blur: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

/// Shadow registers with every field filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    /// Register values of a surface with no shadow.
    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        blur: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.color.a > 0.0 && (self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::NONE
    }
}

impl ShadowSpec {
    pub fn resolve(&self) -> Shadow {
        Shadow {
            color: self.color.unwrap_or(config::SHADOW_COLOR),
            blur: self.blur.unwrap_or(config::SHADOW_BLUR),
            offset_x: self.offset_x.unwrap_or(config::SHADOW_OFFSET_X),
            offset_y: self.offset_y.unwrap_or(config::SHADOW_OFFSET_Y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: config::DEFAULT_STROKE,
            line_width: config::DEFAULT_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutlineSpec {
    pub color: Option<Color>,
    pub width: Option<f64>,
}

impl OutlineSpec {
    pub fn resolve(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.unwrap_or(config::OUTLINE_COLOR),
            line_width: self.width.unwrap_or(config::OUTLINE_WIDTH),
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Options for `ShapeRenderer::draw_text`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextOptions {
    pub font: Option<String>,
    pub color: Option<Color>,
    pub align: Option<TextAlign>,
    pub baseline: Option<TextBaseline>,
    pub shadow: Option<ShadowSpec>,
    pub outline: Option<OutlineSpec>,
    pub gradient: Option<GradientSpec>,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn shadow(mut self, shadow: ShadowSpec) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn outline(mut self, outline: OutlineSpec) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn font_or_default(&self) -> &str {
        self.font.as_deref().unwrap_or(config::DEFAULT_FONT)
    }

    pub fn color_or_default(&self) -> Color {
        self.color.unwrap_or(config::DEFAULT_TEXT_COLOR)
    }
}

/// Stroke, fill and rotation for the closed shapes.
///
/// `stroke_color` falls back to the shape's own default (black, or red for
/// the heart); `line_width` to 1. `fill: None` means the shape is not filled.
/// `rotation` is in radians and only read by polygon, star and heart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub stroke_color: Option<Color>,
    pub line_width: Option<f64>,
    pub fill: Option<Color>,
    pub rotation: f64,
}

impl ShapeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    pub fn stroke_or(&self, default_color: Color) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color.unwrap_or(default_color),
            line_width: self.line_width.unwrap_or(config::DEFAULT_LINE_WIDTH),
        }
    }
}
