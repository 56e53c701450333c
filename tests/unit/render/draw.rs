use super::*;
use crate::color::lch::Lch;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::ChromaError;
use crate::scene::shape::ShapeKind;
use crate::shadow::policy::{ShadowColor, ShadowPair};

#[derive(Default)]
struct Recording {
    clears: Vec<u8>,
    fills: Vec<(Affine, Rgb8)>,
    fail_after: Option<usize>,
}

impl DrawSurface for Recording {
    fn clear(&mut self, gray: u8) -> ChromaResult<()> {
        self.clears.push(gray);
        Ok(())
    }

    fn fill_path(&mut self, transform: Affine, _path: &BezPath, color: Rgb8) -> ChromaResult<()> {
        if self.fail_after == Some(self.fills.len()) {
            return Err(ChromaError::render("surface lost"));
        }
        self.fills.push((transform, color));
        Ok(())
    }
}

fn shape(kind: ShapeKind) -> ShapeDescriptor {
    let color = Lch::new(50.0, 40.0, 120.0);
    ShapeDescriptor {
        index: 0,
        position: Point::new(100.0, 50.0),
        rx: 10.0,
        ry: 10.0,
        color,
        fill: color.to_rgb8(),
        rotation: 0.0,
        kind,
        shadow: ShadowPair {
            left: ShadowColor::Black,
            right: ShadowColor::White,
        },
    }
}

fn frame() -> FrameState {
    FrameState {
        background: 17,
        left_offset: -2.0,
        right_offset: 2.0,
    }
}

#[test]
fn draws_shadows_then_fill() {
    let mut rec = Recording::default();
    let s = shape(ShapeKind::Diamond);
    draw_scene(&mut rec, &[s], &frame()).unwrap();

    assert_eq!(rec.clears, vec![17]);
    assert_eq!(rec.fills.len(), 3);
    assert_eq!(rec.fills[0].1, Rgb8::gray(0));
    assert_eq!(rec.fills[1].1, Rgb8::gray(255));
    assert_eq!(rec.fills[2].1, s.fill);

    let origin = |t: Affine| t * Point::ORIGIN;
    assert_eq!(origin(rec.fills[0].0), Point::new(98.0, 50.0));
    assert_eq!(origin(rec.fills[1].0), Point::new(102.0, 50.0));
    assert_eq!(origin(rec.fills[2].0), Point::new(100.0, 50.0));
}

#[test]
fn vertical_kinds_shift_along_local_y() {
    let mut rec = Recording::default();
    draw_scene(&mut rec, &[shape(ShapeKind::Petal)], &frame()).unwrap();
    let origin = |t: Affine| t * Point::ORIGIN;
    assert_eq!(origin(rec.fills[0].0), Point::new(100.0, 48.0));
    assert_eq!(origin(rec.fills[1].0), Point::new(100.0, 52.0));
}

#[test]
fn shadow_shift_is_applied_in_rotated_space() {
    let mut rec = Recording::default();
    let mut s = shape(ShapeKind::Star);
    s.rotation = std::f64::consts::FRAC_PI_2;
    draw_scene(&mut rec, &[s], &frame()).unwrap();
    let p = rec.fills[1].0 * Point::ORIGIN;
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 52.0).abs() < 1e-9);
}

#[test]
fn scopes_unwind_on_error() {
    let mut rec = Recording {
        fail_after: Some(1),
        ..Recording::default()
    };
    let mut painter = Painter::new(&mut rec);
    let s = shape(ShapeKind::Circle);
    assert!(draw_shape(&mut painter, &s, &frame()).is_err());
    assert_eq!(painter.depth(), 0);
    assert_eq!(painter.transform(), Affine::IDENTITY);
}

#[test]
fn nested_scopes_compose() {
    let mut rec = Recording::default();
    let mut painter = Painter::new(&mut rec);
    painter
        .with_transform(Affine::translate(Vec2::new(10.0, 0.0)), |p| {
            p.with_transform(Affine::translate(Vec2::new(0.0, 5.0)), |p| {
                assert_eq!(p.depth(), 2);
                assert_eq!(p.transform() * Point::ORIGIN, Point::new(10.0, 5.0));
                Ok(())
            })
        })
        .unwrap();
    assert_eq!(painter.depth(), 0);
}
