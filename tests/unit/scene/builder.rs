use super::*;
use crate::scene::params::FixedColor;
use crate::scene::shape::{ShapeFilter, ShapeKind};
use crate::shadow::policy::{ShadowColor, ShadowMode};

fn canvas() -> Canvas {
    Canvas {
        width: 1500,
        height: 800,
    }
}

fn fixed(params: GenerationParams) -> GenerationParams {
    GenerationParams {
        fixed_color: FixedColor {
            enabled: true,
            ..FixedColor::default()
        },
        ..params
    }
}

#[test]
fn rebuild_length_matches_total() {
    let mut b = SceneBuilder::new(canvas(), 1);
    let anim = AnimationState::new();
    for total in [36, 100, 324, 800] {
        for layout in LayoutMode::ALL {
            let params = GenerationParams {
                total_shapes: total,
                layout,
                ..GenerationParams::default()
            };
            let shapes = b.rebuild(&params, &anim);
            assert_eq!(shapes.len(), total);
            for (i, s) in shapes.iter().enumerate() {
                assert_eq!(s.index, i);
            }
        }
    }
    assert_eq!(b.generation(), 16);
}

#[test]
fn same_seed_same_scene() {
    let anim = AnimationState::new();
    let params = GenerationParams::default();
    let mut a = SceneBuilder::new(canvas(), 42);
    let mut b = SceneBuilder::new(canvas(), 42);
    assert_eq!(*a.rebuild(&params, &anim), *b.rebuild(&params, &anim));
    assert_eq!(*a.rebuild(&params, &anim), *b.rebuild(&params, &anim));
}

#[test]
fn random_mode_redraws_hues_each_rebuild() {
    let anim = AnimationState::new();
    let params = GenerationParams::default();
    let mut b = SceneBuilder::new(canvas(), 7);
    let first = b.rebuild(&params, &anim);
    let second = b.rebuild(&params, &anim);
    assert_ne!(*first, *second);
    // Geometry does not depend on the hue draws.
    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.color.l, y.color.l);
        assert!((0.0..360.0).contains(&x.color.h));
        assert_eq!(x.color.c, RANDOM_CHROMA);
    }
}

#[test]
fn fixed_color_rebuild_is_idempotent() {
    let anim = AnimationState::new();
    let params = fixed(GenerationParams::default());
    let mut b = SceneBuilder::new(canvas(), 3);
    let first = b.rebuild(&params, &anim);
    let second = b.rebuild(&params, &anim);
    assert_eq!(*first, *second);
    for s in first.iter() {
        assert_eq!(s.color, Lch::new(60.0, 100.0, 180.0));
        assert_eq!(s.fill, first[0].fill);
    }

    let mut other = SceneBuilder::new(canvas(), 999);
    assert_eq!(*other.rebuild(&params, &anim), *first);
}

#[test]
fn lightness_bands_by_quartile() {
    let params = GenerationParams {
        total_shapes: 100,
        ..GenerationParams::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    assert_eq!(shapes[0].color.l, 30.0);
    assert_eq!(shapes[24].color.l, 30.0);
    assert_eq!(shapes[25].color.l, 50.0);
    assert_eq!(shapes[49].color.l, 50.0);
    assert_eq!(shapes[50].color.l, 70.0);
    assert_eq!(shapes[75].color.l, 90.0);
    assert_eq!(shapes[99].color.l, 90.0);
}

#[test]
fn wave_lightness_follows_columns() {
    let params = GenerationParams {
        total_shapes: 324,
        layout: LayoutMode::Wave,
        ..GenerationParams::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    // 18 columns: t = col / 17.
    assert_eq!(shapes[0].color.l, 30.0);
    assert_eq!(shapes[4].color.l, 30.0);
    assert_eq!(shapes[5].color.l, 50.0);
    assert_eq!(shapes[9].color.l, 70.0);
    assert_eq!(shapes[17].color.l, 90.0);
    // Next row starts over at column 0.
    assert_eq!(shapes[18].color.l, 30.0);
}

#[test]
fn wave_scene_for_324_is_18_by_18() {
    let params = GenerationParams {
        total_shapes: 324,
        layout: LayoutMode::Wave,
        ..GenerationParams::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    let c = canvas().center();
    let x0 = c.x - 17.0 * 36.0 / 2.0;
    let y0 = c.y - 17.0 * 42.0 / 2.0;
    assert!((shapes[0].position.x - x0).abs() < 1e-9);
    assert!((shapes[0].position.y - y0).abs() < 1e-9);
    // Shape 18 is column 0 of row 1.
    assert!((shapes[18].position.x - x0).abs() < 1e-9);
    assert!((shapes[18].position.y - (y0 + 42.0)).abs() < 1e-9);
    for s in shapes.iter() {
        assert_eq!(s.rx, BASE_RADIUS);
        assert_eq!(s.rotation, 0.0);
    }
}

#[test]
fn kinds_cycle_through_filter() {
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&GenerationParams::default(), canvas(), false, &mut rng);
    for (i, s) in shapes.iter().enumerate() {
        assert_eq!(s.kind, ShapeKind::ALL[i % 6]);
    }

    let params = GenerationParams {
        shape: ShapeFilter::from_index(42),
        ..GenerationParams::default()
    };
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    assert_eq!(shapes[1].kind, ShapeKind::Ellipse);

    let params = GenerationParams {
        shape: ShapeFilter::Only(ShapeKind::Star),
        ..GenerationParams::default()
    };
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    assert!(shapes.iter().all(|s| s.kind == ShapeKind::Star));
}

#[test]
fn wave_shadow_mode_shares_one_pair() {
    for inverted in [false, true] {
        let params = GenerationParams {
            shadow: ShadowMode::Wave,
            ..GenerationParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let shapes = build_shapes(&params, canvas(), inverted, &mut rng);
        let first = shapes[0].shadow;
        assert!(shapes.iter().all(|s| s.shadow == first));
        let expected = if inverted {
            ShadowColor::White
        } else {
            ShadowColor::Black
        };
        assert_eq!(first.left, expected);
    }
}

#[test]
fn horizontal_shadow_mode_opposes_halves() {
    let params = GenerationParams {
        layout: LayoutMode::Golden,
        ..GenerationParams::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    let mid = f64::from(canvas().height) / 2.0;
    let above: Vec<_> = shapes.iter().filter(|s| s.position.y < mid).collect();
    let below: Vec<_> = shapes.iter().filter(|s| s.position.y >= mid).collect();
    assert!(!above.is_empty() && !below.is_empty());
    for a in &above {
        assert_eq!(a.shadow.left, ShadowColor::Black);
    }
    for b in &below {
        assert_eq!(b.shadow.left, ShadowColor::White);
    }
}

#[test]
fn inversion_is_read_from_fade_direction() {
    let params = fixed(GenerationParams::default());
    let mut b = SceneBuilder::new(canvas(), 0);
    let upright = b.rebuild(&params, &AnimationState::new());

    let mut anim = AnimationState::new();
    let fast = crate::animation::state::AnimationSettings {
        background_fading: true,
        fade_speed: 300.0,
    };
    anim.update(&fast);
    assert!(anim.is_inverted());
    let flipped = b.rebuild(&params, &anim);
    for (u, f) in upright.iter().zip(flipped.iter()) {
        assert_eq!(u.shadow.left, f.shadow.left.opposite());
    }
}

#[test]
fn spiral_extents_scale_with_radius() {
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&GenerationParams::default(), canvas(), false, &mut rng);
    assert!((shapes[0].rx - BASE_RADIUS * 0.4).abs() < 1e-12);
    assert!(shapes[323].rx > shapes[0].rx);
    assert!(shapes.iter().all(|s| s.rx == s.ry && s.rx > 0.0));
}

#[test]
fn pick_selects_first_within_threshold() {
    let params = fixed(GenerationParams {
        layout: LayoutMode::Wave,
        total_shapes: 36,
        ..GenerationParams::default()
    });
    let mut b = SceneBuilder::new(canvas(), 0);
    assert_eq!(b.pick(canvas().center()), None);
    let shapes = b.rebuild(&params, &AnimationState::new());

    let target = shapes[7].position;
    assert_eq!(b.pick(target + kurbo::Vec2::new(3.0, -4.0)), Some(7));
    assert_eq!(b.pick(Point::new(-500.0, -500.0)), None);
    // Exactly at the threshold does not count.
    assert_eq!(
        pick_first(&shapes[7..8], target + kurbo::Vec2::new(25.0, 0.0), 25.0),
        None
    );
}

#[test]
fn pick_prefers_draw_order_over_distance() {
    let params = fixed(GenerationParams {
        total_shapes: 36,
        ..GenerationParams::default()
    });
    let mut rng = StdRng::seed_from_u64(0);
    let shapes = build_shapes(&params, canvas(), false, &mut rng);
    // Shape 1 is closer to its own center, but shape 0 also lies within 25 units.
    let p = shapes[1].position;
    let d0 = (shapes[0].position - p).hypot();
    if d0 < PICK_THRESHOLD {
        assert_eq!(pick_first(&shapes, p, PICK_THRESHOLD), Some(0));
    } else {
        assert_eq!(pick_first(&shapes, p, PICK_THRESHOLD), Some(1));
    }
}
