use super::*;
use crate::foundation::core::{Point, Vec2};

fn canvas() -> Canvas {
    Canvas {
        width: 32,
        height: 32,
    }
}

#[test]
fn rejects_oversized_and_empty_canvas() {
    assert!(
        CpuSurface::new(Canvas {
            width: 70_000,
            height: 10
        })
        .is_err()
    );
    assert!(
        CpuSurface::new(Canvas {
            width: 0,
            height: 10
        })
        .is_err()
    );
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    s.begin_frame();
    s.clear(200).unwrap();
    let f = s.finish_frame();
    assert_eq!(f.data.len(), 32 * 32 * 4);
    assert_eq!(f.pixel(0, 0), Some([200, 200, 200, 255]));
    assert_eq!(f.pixel(31, 31), Some([200, 200, 200, 255]));
    assert_eq!(f.pixel(32, 0), None);
}

#[test]
fn fill_path_lands_under_transform() {
    let mut s = CpuSurface::new(canvas()).unwrap();
    s.begin_frame();
    s.clear(0).unwrap();
    let mut square = BezPath::new();
    square.move_to(Point::new(-4.0, -4.0));
    square.line_to(Point::new(4.0, -4.0));
    square.line_to(Point::new(4.0, 4.0));
    square.line_to(Point::new(-4.0, 4.0));
    square.close_path();
    s.fill_path(
        Affine::translate(Vec2::new(20.0, 10.0)),
        &square,
        Rgb8::new(255, 0, 0),
    )
    .unwrap();
    let f = s.finish_frame();
    assert_eq!(f.pixel(20, 10), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(5, 25), Some([0, 0, 0, 255]));
}
