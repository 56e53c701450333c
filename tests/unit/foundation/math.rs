use super::*;

#[test]
fn map_range_hits_endpoints_and_midpoint() {
    assert_eq!(map_range(30.0, 30.0, 130.0, 0.4, 1.0), 0.4);
    assert!((map_range(130.0, 30.0, 130.0, 0.4, 1.0) - 1.0).abs() < 1e-12);
    assert!((map_range(80.0, 30.0, 130.0, 0.4, 1.0) - 0.7).abs() < 1e-12);
}

#[test]
fn map_range_degenerate_source_returns_low_target() {
    assert_eq!(map_range(5.0, 2.0, 2.0, 0.0, 1.0), 0.0);
}

#[test]
fn lerp_moves_fraction_of_gap() {
    assert_eq!(lerp(1.0, -1.0, 0.0), 1.0);
    assert!((lerp(1.0, -1.0, 0.05) - 0.9).abs() < 1e-12);
    assert_eq!(lerp(1.0, -1.0, 1.0), -1.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
}
