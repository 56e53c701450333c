/// Re-map `v` from `[from_lo, from_hi]` onto `[to_lo, to_hi]` without clamping.
///
/// A degenerate source interval maps everything onto `to_lo`.
pub(crate) fn map_range(v: f64, from_lo: f64, from_hi: f64, to_lo: f64, to_hi: f64) -> f64 {
    let span = from_hi - from_lo;
    if span == 0.0 {
        return to_lo;
    }
    to_lo + (v - from_lo) / span * (to_hi - to_lo)
}

/// Linear interpolation from `a` towards `b` by `t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
