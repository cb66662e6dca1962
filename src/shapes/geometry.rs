/// Vertex generators for the polygonal shapes.
///
/// Angles are in radians, measured from +x towards +y (down on screen).
/// Degenerate input (`sides < 3`, negative radii) is not rejected: it yields
/// an empty or self-intersecting vertex list.

use crate::core::types::Point;
use std::f64::consts::{PI, TAU};

/// Equilateral triangle with its apex pointing up, centered on the centroid.
pub fn triangle_vertices(center: Point, size: f64) -> [Point; 3] {
    let h = size * 3f64.sqrt() / 2.0;
    [
        Point::new(center.x, center.y - 2.0 * h / 3.0),
        Point::new(center.x - size / 2.0, center.y + h / 3.0),
        Point::new(center.x + size / 2.0, center.y + h / 3.0),
    ]
}

/// `sides` vertices at angle `rotation + i * 2π / sides`.
pub fn regular_polygon_vertices(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| center.polar(radius, rotation + i as f64 * step))
        .collect()
}

/// `2 * points` vertices at angle `rotation + i * π / points`, even indices on
/// the outer radius and odd indices on the inner one.
pub fn star_vertices(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    points: usize,
    rotation: f64,
) -> Vec<Point> {
    let step = PI / points as f64;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            center.polar(radius, rotation + i as f64 * step)
        })
        .collect()
}
