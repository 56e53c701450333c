use crate::foundation::core::Rgb8;

// D65 reference white.
const XN: f64 = 95.047;
const YN: f64 = 100.0;
const ZN: f64 = 108.883;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

const MAX_GAMUT_ATTEMPTS: u32 = 5;
const CHROMA_REDUCTION: f64 = 0.85;

/// A color in cylindrical CIE Lab.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lch {
    /// Lightness in `[0, 100]`.
    pub l: f64,
    /// Chroma, `>= 0` (typically `<= 100`).
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Lch {
    /// Build an LCh triple.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to a displayable 8-bit sRGB color.
    pub fn to_rgb8(self) -> Rgb8 {
        to_display_color(self.l, self.c, self.h)
    }
}

/// Outcome of a conversion, including how much gamut clipping it took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GamutMapped {
    /// Final display color.
    pub rgb: Rgb8,
    /// Chroma actually used after reductions.
    pub chroma: f64,
    /// Number of chroma reductions applied (at most 5).
    pub attempts: u32,
    /// `true` when channels were still out of range and had to be hard-clamped.
    pub clamped: bool,
}

/// Convert `(L, C, H°)` to 8-bit sRGB.
///
/// Never fails: colors the display cannot show lose chroma (up to five times by 15%) and whatever
/// is still out of range is clamped per channel.
pub fn to_display_color(l: f64, c: f64, h_deg: f64) -> Rgb8 {
    map_to_gamut(l, c, h_deg).rgb
}

/// Same as [`to_display_color`] but reports the gamut clipping work.
pub fn map_to_gamut(l: f64, c: f64, h_deg: f64) -> GamutMapped {
    let h = (h_deg % 360.0).to_radians();
    let fy = (l + 16.0) / 116.0;
    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };

    let mut chroma = c;
    let mut rgb = lab_to_linear_srgb(fy, yr, chroma * h.cos(), chroma * h.sin());
    let mut attempts = 0;
    while !in_unit_cube(rgb) && chroma > 0.0 && attempts < MAX_GAMUT_ATTEMPTS {
        chroma *= CHROMA_REDUCTION;
        rgb = lab_to_linear_srgb(fy, yr, chroma * h.cos(), chroma * h.sin());
        attempts += 1;
    }

    let clamped = !in_unit_cube(rgb);
    if clamped {
        tracing::trace!(l, c, h_deg, attempts, "lch color clamped to display gamut");
    }

    let [r, g, b] = rgb.map(|u| encode_srgb(u.clamp(0.0, 1.0)));
    GamutMapped {
        rgb: Rgb8::new(r, g, b),
        chroma,
        attempts,
        clamped,
    }
}

// `yr` is carried in from the caller: lightness is fixed while chroma shrinks.
fn lab_to_linear_srgb(fy: f64, yr: f64, a: f64, b: f64) -> [f64; 3] {
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    let x = XN * inverse_f(fx) / 100.0;
    let y = YN * yr / 100.0;
    let z = ZN * inverse_f(fz) / 100.0;

    [
        3.2406 * x - 1.5372 * y - 0.4986 * z,
        -0.9689 * x + 1.8758 * y + 0.0415 * z,
        0.0557 * x - 0.2040 * y + 1.0570 * z,
    ]
}

fn inverse_f(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

fn in_unit_cube(rgb: [f64; 3]) -> bool {
    rgb.iter().all(|u| (0.0..=1.0).contains(u))
}

fn encode_srgb(u: f64) -> u8 {
    let v = if u <= 0.003_130_8 {
        12.92 * u
    } else {
        1.055 * u.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/color/lch.rs"]
mod tests;
