/// Heart silhouette as four cubic Bezier segments.
///
/// Designed in a 100×100 local frame centered on the origin: the top notch
/// sits at (0, -20), the lobes reach x = ±50 and the tip is at (0, 45).
/// Segments run counter-clockwise on screen: notch, left lobe, tip, right lobe.

use crate::core::config;
use crate::core::types::{Point, Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CubicSegment {
    const fn new(c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            c1: Point::new(c1.0, c1.1),
            c2: Point::new(c2.0, c2.1),
            end: Point::new(end.0, end.1),
        }
    }

    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            c1: t.apply(self.c1),
            c2: t.apply(self.c2),
            end: t.apply(self.end),
        }
    }

    /// Point at parameter `t` in `0..=1`, starting from `start`.
    pub fn point_at(&self, start: Point, t: f64) -> Point {
        let u = 1.0 - t;
        start * (u * u * u) + self.c1 * (3.0 * u * u * t) + self.c2 * (3.0 * u * t * t) + self.end * (t * t * t)
    }
}

pub const HEART_START: Point = Point::new(0.0, -20.0);

pub const HEART_SEGMENTS: [CubicSegment; 4] = [
    CubicSegment::new((-5.0, -45.0), (-50.0, -45.0), (-50.0, -15.0)),
    CubicSegment::new((-50.0, 10.0), (-20.0, 25.0), (0.0, 45.0)),
    CubicSegment::new((20.0, 25.0), (50.0, 10.0), (50.0, -15.0)),
    CubicSegment::new((50.0, -45.0), (5.0, -45.0), (0.0, -20.0)),
];

/// Local-to-surface transform: translate to `center`, rotate, then scale
/// uniformly by `size / 100`.
pub fn heart_transform(center: Point, size: f64, rotation: f64) -> Transform {
    let scale = size / config::HEART_DESIGN_SIZE;
    let mut t = Transform::IDENTITY;
    t.translate(center.x, center.y);
    t.rotate(rotation);
    t.scale(scale, scale);
    t
}

/// Start point and segments of the heart in surface coordinates.
pub fn heart_outline(center: Point, size: f64, rotation: f64) -> (Point, [CubicSegment; 4]) {
    let t = heart_transform(center, size, rotation);
    (t.apply(HEART_START), HEART_SEGMENTS.map(|s| s.transformed(&t)))
}
