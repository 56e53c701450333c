use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::foundation::core::Rgb8;

/// One of the two fixed shadow colors. Never interpolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowColor {
    /// Pure black.
    Black,
    /// Pure white.
    White,
}

impl ShadowColor {
    /// The other color.
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Display color.
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::Black => Rgb8::gray(0),
            Self::White => Rgb8::gray(255),
        }
    }
}

/// Left and right shadow colors of one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShadowPair {
    /// Copy drawn at the negative offset.
    pub left: ShadowColor,
    /// Copy drawn at the positive offset.
    pub right: ShadowColor,
}

impl ShadowPair {
    fn with_left(left: ShadowColor) -> Self {
        Self {
            left,
            right: left.opposite(),
        }
    }
}

/// How shadow sides are chosen per shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadowMode {
    /// Black on the left above the canvas midline.
    #[default]
    Horizontal,
    /// Black on the left when the spiral angle is in the first half turn.
    Angular,
    /// Black on the left when the spiral angle points right (`cos > 0`).
    Rotation,
    /// Same assignment for every shape, flipped by the background fade.
    Wave,
}

impl ShadowMode {
    /// All modes in control-surface order.
    pub const ALL: [ShadowMode; 4] = [Self::Horizontal, Self::Angular, Self::Rotation, Self::Wave];

    /// Coerce a control-surface index; anything outside `0..=3` becomes `Horizontal`.
    pub fn from_index(i: i64) -> Self {
        usize::try_from(i)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    /// Control-surface index of this mode.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Angular => "angular",
            Self::Rotation => "rotation",
            Self::Wave => "wave",
        }
    }

    /// Parse a display name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ShadowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the left/right shadow colors of one shape.
///
/// `inverted` is global for a rebuild: every shape flips together when the background fade
/// bounces.
pub fn assign_shadow_colors(
    mode: ShadowMode,
    angle: f64,
    y: f64,
    canvas_height: f64,
    inverted: bool,
) -> ShadowPair {
    let condition = match mode {
        ShadowMode::Horizontal => y < canvas_height / 2.0,
        ShadowMode::Angular => angle.rem_euclid(TAU) < PI,
        ShadowMode::Rotation => angle.cos() > 0.0,
        ShadowMode::Wave => {
            let left = if inverted {
                ShadowColor::White
            } else {
                ShadowColor::Black
            };
            return ShadowPair::with_left(left);
        }
    };

    if condition != inverted {
        ShadowPair::with_left(ShadowColor::Black)
    } else {
        ShadowPair::with_left(ShadowColor::White)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shadow/policy.rs"]
mod tests;
