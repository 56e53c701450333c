use std::f64::consts::PI;

use kurbo::{Circle, Ellipse, Shape};

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::scene::shape::{ShadowAxis, ShapeKind};

const FLATTEN_TOLERANCE: f64 = 0.1;
const STAR_POINTS: usize = 5;

/// Outline of `kind` for extents `(rx, ry)`, in local space around the shape origin.
pub fn shape_path(kind: ShapeKind, rx: f64, ry: f64) -> BezPath {
    match kind {
        ShapeKind::Ellipse => {
            Ellipse::new(Point::ORIGIN, (rx * 0.75, ry), 0.0).to_path(FLATTEN_TOLERANCE)
        }
        ShapeKind::Circle => Circle::new(Point::ORIGIN, rx.min(ry) * 0.6).to_path(FLATTEN_TOLERANCE),
        ShapeKind::Droplet => droplet(rx * 1.5, ry * 2.2),
        ShapeKind::Diamond => diamond(rx * 2.0, ry * 2.0),
        ShapeKind::Star => star(rx * 0.5, ry, STAR_POINTS),
        ShapeKind::Petal => petal(rx * 1.5, ry * 1.5),
    }
}

/// Local displacement of a shadow copy drawn at `offset` pixels.
pub fn shadow_shift(kind: ShapeKind, offset: f64) -> Vec2 {
    match kind.shadow_axis() {
        ShadowAxis::X => Vec2::new(offset, 0.0),
        ShadowAxis::Y => Vec2::new(0.0, offset),
    }
}

fn diamond(w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, -h / 2.0));
    p.line_to((w / 2.0, 0.0));
    p.line_to((0.0, h / 2.0));
    p.line_to((-w / 2.0, 0.0));
    p.close_path();
    p
}

fn star(inner: f64, outer: f64, points: usize) -> BezPath {
    let mut p = BezPath::new();
    for i in 0..points * 2 {
        let angle = PI * i as f64 / points as f64;
        let r = if i % 2 == 0 { outer } else { inner };
        let v = Point::new(angle.cos() * r, angle.sin() * r);
        if i == 0 {
            p.move_to(v);
        } else {
            p.line_to(v);
        }
    }
    p.close_path();
    p
}

fn droplet(w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, -h / 2.0));
    p.curve_to((w / 2.0, -h / 2.0), (w / 2.0, h / 6.0), (0.0, h / 2.0));
    p.curve_to((-w / 2.0, h / 6.0), (-w / 2.0, -h / 2.0), (0.0, -h / 2.0));
    p.close_path();
    p
}

fn petal(w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.curve_to((w / 2.0, -h / 2.0), (w / 2.0, h / 2.0), (0.0, h));
    p.curve_to((-w / 2.0, h / 2.0), (-w / 2.0, -h / 2.0), (0.0, 0.0));
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
