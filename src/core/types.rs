/// Value types shared by the geometry generators and the surfaces.

use super::error::ColorParseError;
use regex::Regex;
use std::sync::OnceLock;

/// 2D coordinate in surface pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians, y down).
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// RGBA color, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` or a named color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        if let Some(color) = Self::parse_functional(s) {
            return color;
        }

        Self::named(&s.to_ascii_lowercase()).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }

    /// Parse an optional fill color. An empty string means "no fill".
    pub fn parse_fill(input: &str) -> Result<Option<Self>, ColorParseError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(input).map(Some)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let channel = |v: u8| v as f64 / 255.0;

        match hex.len() {
            3 => Some(Self::rgb(channel(nibble(0)?), channel(nibble(1)?), channel(nibble(2)?))),
            4 => Some(Self::rgba(
                channel(nibble(0)?),
                channel(nibble(1)?),
                channel(nibble(2)?),
                channel(nibble(3)?),
            )),
            6 => Some(Self::rgb(channel(byte(0)?), channel(byte(2)?), channel(byte(4)?))),
            8 => Some(Self::rgba(
                channel(byte(0)?),
                channel(byte(2)?),
                channel(byte(4)?),
                channel(byte(6)?),
            )),
            _ => None,
        }
    }

    /// `rgb()` / `rgba()` notation. Returns `None` when `s` is not functional
    /// notation at all, `Some(Err)` when it is but the arguments are bad.
    fn parse_functional(s: &str) -> Option<Result<Self, ColorParseError>> {
        static RGBA_RE: OnceLock<Regex> = OnceLock::new();
        let re = RGBA_RE.get_or_init(|| {
            Regex::new(r"(?i)^rgba?\(\s*([^,\s)]+)\s*,\s*([^,\s)]+)\s*,\s*([^,\s)]+)\s*(?:,\s*([^,\s)]+)\s*)?\)$")
                .unwrap()
        });

        if !s.to_ascii_lowercase().starts_with("rgb") {
            return None;
        }
        let invalid = || ColorParseError::InvalidFunction(s.to_string());
        let Some(caps) = re.captures(s) else {
            return Some(Err(invalid()));
        };

        let component = |i: usize| -> Result<f64, ColorParseError> {
            let v: f64 = caps[i].parse().map_err(|_| invalid())?;
            Ok((v / 255.0).clamp(0.0, 1.0))
        };
        let alpha = match caps.get(4) {
            Some(m) => match m.as_str().parse::<f64>() {
                Ok(a) => a.clamp(0.0, 1.0),
                Err(_) => return Some(Err(invalid())),
            },
            None => 1.0,
        };

        Some(match (component(1), component(2), component(3)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgba(r, g, b, alpha)),
            _ => Err(invalid()),
        })
    }

    fn named(name: &str) -> Option<Self> {
        let hex = match name {
            "black" => 0x000000,
            "white" => 0xFFFFFF,
            "red" => 0xFF0000,
            "green" => 0x008000,
            "lime" => 0x00FF00,
            "blue" => 0x0000FF,
            "yellow" => 0xFFFF00,
            "cyan" | "aqua" => 0x00FFFF,
            "magenta" | "fuchsia" => 0xFF00FF,
            "orange" => 0xFFA500,
            "purple" => 0x800080,
            "pink" => 0xFFC0CB,
            "gold" => 0xFFD700,
            "navy" => 0x000080,
            "teal" => 0x008080,
            "gray" | "grey" => 0x808080,
            "transparent" => return Some(Self::TRANSPARENT),
            _ => return None,
        };
        Some(Self::from_hex(hex, 1.0))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 2D affine transform `[a, b, c, d, e, f]`:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub [f64; 6]);

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn translate(&mut self, tx: f64, ty: f64) {
        let [a, b, c, d, e, f] = self.0;
        self.0[4] = a * tx + c * ty + e;
        self.0[5] = b * tx + d * ty + f;
    }

    pub fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let [a, b, c, d, e, f] = self.0;
        self.0 = [
            a * cos + c * sin,
            b * cos + d * sin,
            c * cos - a * sin,
            d * cos - b * sin,
            e,
            f,
        ];
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.0[0] *= sx;
        self.0[1] *= sx;
        self.0[2] *= sy;
        self.0[3] *= sy;
    }

    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point {
            x: a * p.x + c * p.y + e,
            y: b * p.x + d * p.y + f,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#FF0000").unwrap(), Color::RED);
        let c = Color::parse("#00000080").unwrap();
        assert_close(c.a, 128.0 / 255.0);
        assert!(matches!(Color::parse("#12"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Color::parse("#zzz"), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_functional_and_named() {
        let c = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(c, Color::RED.with_alpha(0.5));
        assert_eq!(Color::parse("rgb(0,0,0)").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("Yellow").unwrap(), Color::from_hex(0xFFFF00, 1.0));
        assert!(matches!(Color::parse("rgb(1,2)"), Err(ColorParseError::InvalidFunction(_))));
        assert!(matches!(Color::parse("chartreuse-ish"), Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn test_empty_fill_means_no_fill() {
        assert_eq!(Color::parse_fill("").unwrap(), None);
        assert_eq!(Color::parse_fill("  ").unwrap(), None);
        assert_eq!(Color::parse_fill("red").unwrap(), Some(Color::RED));
        assert!(matches!(Color::parse(""), Err(ColorParseError::Empty)));
    }

    #[test]
    fn test_transform_composition() {
        let mut t = Transform::IDENTITY;
        t.translate(10.0, 20.0);
        t.rotate(std::f64::consts::FRAC_PI_2);
        t.scale(2.0, 2.0);
        // (1, 0) -> scale (2, 0) -> rotate 90deg (0, 2) -> translate (10, 22)
        let p = t.apply(Point::new(1.0, 0.0));
        assert_close(p.x, 10.0);
        assert_close(p.y, 22.0);
    }

    #[test]
    fn test_point_polar() {
        let p = Point::new(5.0, 5.0).polar(2.0, 0.0);
        assert_eq!(p, Point::new(7.0, 5.0));
        assert_close(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
