/// Showcase scene exercising every shape and text style.

use crate::core::error::RenderError;
use crate::core::style::{
    GradientDirection, GradientSpec, OutlineSpec, ShadowSpec, ShapeStyle, TextAlign, TextBaseline,
    TextOptions,
};
use crate::core::types::{Color, Point};
use crate::platform::surface::Surface;
use crate::shapes::shape_renderer::ShapeRenderer;
use std::f64::consts::PI;

/// Lay the scene out on a 4×2 grid relative to the renderer's captured size.
pub fn draw_showcase<S: Surface>(r: &mut ShapeRenderer<S>) -> Result<(), RenderError> {
    let (w, h) = (r.width(), r.height());
    let cell = |col: f64, row: f64| Point::new(w * (col + 0.5) / 4.0, h * (row + 0.5) / 3.0);
    let unit = (w / 4.0).min(h / 3.0) * 0.35;

    let navy = Color::from_hex(0x1F3A5F, 1.0);
    let sky = Color::from_hex(0x7FB3D5, 1.0);
    let gold = Color::from_hex(0xF4C542, 1.0);
    let rose = Color::from_hex(0xE94560, 1.0);

    r.draw_triangle(cell(0.0, 0.0), unit * 1.8, &ShapeStyle::new().stroke(navy).line_width(3.0))?;
    r.draw_circle(
        cell(1.0, 0.0),
        unit,
        &ShapeStyle::new().stroke(navy).line_width(2.0).fill(gold),
    )?;
    r.draw_regular_polygon(
        cell(2.0, 0.0),
        unit,
        6,
        &ShapeStyle::new().stroke(navy).line_width(2.0).fill(sky),
    )?;
    r.draw_star(
        cell(3.0, 0.0),
        unit,
        unit * 0.45,
        5,
        &ShapeStyle::new().stroke(navy).fill(gold).rotation(-PI / 2.0),
    )?;

    r.draw_heart(cell(0.0, 1.0), unit * 2.0, &ShapeStyle::new().fill(rose).line_width(2.0))?;
    r.draw_heart(
        cell(1.0, 1.0),
        unit * 1.5,
        &ShapeStyle::new().stroke(navy).rotation(PI / 8.0),
    )?;
    r.draw_regular_polygon(
        cell(2.0, 1.0),
        unit,
        3,
        &ShapeStyle::new().stroke(rose).line_width(2.0).rotation(-PI / 2.0),
    )?;
    r.draw_star(cell(3.0, 1.0), unit, unit * 0.7, 12, &ShapeStyle::new().fill(sky))?;

    let label = |font: &str| {
        TextOptions::new()
            .font(font)
            .align(TextAlign::Center)
            .baseline(TextBaseline::Middle)
    };
    r.draw_text("Plain text", cell(0.0, 2.0), &label("18px sans-serif"))?;
    r.draw_text(
        "Shadow",
        cell(1.0, 2.0),
        &label("bold 22px sans-serif").color(navy).shadow(ShadowSpec::default()),
    )?;
    r.draw_text(
        "Outline",
        cell(2.0, 2.0),
        &label("bold 26px serif").color(gold).outline(OutlineSpec {
            color: Some(navy),
            width: Some(3.0),
        }),
    )?;
    let gradient = GradientSpec::new(vec![rose, gold, sky], GradientDirection::Horizontal)?;
    r.draw_text(
        "Gradient",
        Point::new(cell(3.0, 2.0).x - unit * 1.2, cell(3.0, 2.0).y),
        &TextOptions::new().font("bold 28px sans-serif").gradient(gradient),
    )?;

    r.draw_line(
        Point::new(0.0, h * 2.0 / 3.0),
        Point::new(w, h * 2.0 / 3.0),
        navy.with_alpha(0.25),
        1.0,
    )?;
    r.mark_center_default()
}
