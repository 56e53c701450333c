use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ChromaError, ChromaResult};
use crate::layout::engine::LayoutMode;
use crate::scene::shape::{ShapeFilter, ShapeKind};
use crate::shadow::policy::ShadowMode;

/// Control range of `total_shapes`.
pub const TOTAL_SHAPES_RANGE: RangeInclusive<usize> = 36..=800;
/// Control range of `angle_step`.
pub const ANGLE_STEP_RANGE: RangeInclusive<f64> = 1.5..=6.0;
/// Control range of `radius_step`.
pub const RADIUS_STEP_RANGE: RangeInclusive<f64> = 1.0..=3.0;

/// Fixed-color mode: one lightness, hue and chroma for every shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedColor {
    /// When off, lightness comes from the index band and hue is random.
    pub enabled: bool,
    /// Lightness, `[0, 100]`.
    pub lightness: f64,
    /// Hue in degrees, `[0, 360]`.
    pub hue: f64,
    /// Chroma, `[0, 100]`.
    pub chroma: f64,
}

impl Default for FixedColor {
    fn default() -> Self {
        Self {
            enabled: false,
            lightness: 60.0,
            hue: 180.0,
            chroma: 100.0,
        }
    }
}

/// Everything a scene rebuild depends on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Layout algorithm.
    pub layout: LayoutMode,
    /// Shape kinds to cycle through.
    pub shape: ShapeFilter,
    /// Shadow side assignment.
    pub shadow: ShadowMode,
    /// Number of shapes, `[36, 800]`.
    pub total_shapes: usize,
    /// Angle multiplier of the Linear and Double spirals, `[1.5, 6.0]`.
    pub angle_step: f64,
    /// Radial step of the Linear and Double spirals, `[1.0, 3.0]`.
    pub radius_step: f64,
    /// Rotate spiral shapes to their angle.
    pub rotate_shapes: bool,
    /// Fixed-color override.
    pub fixed_color: FixedColor,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Linear,
            shape: ShapeFilter::All,
            shadow: ShadowMode::Horizontal,
            total_shapes: 324,
            angle_step: 2.5,
            radius_step: 1.0,
            rotate_shapes: true,
            fixed_color: FixedColor::default(),
        }
    }
}

impl GenerationParams {
    /// Reject values no control could produce (non-finite numbers).
    pub fn validate(&self) -> ChromaResult<()> {
        let fc = &self.fixed_color;
        for (name, v) in [
            ("angle_step", self.angle_step),
            ("radius_step", self.radius_step),
            ("fixed_color.lightness", fc.lightness),
            ("fixed_color.hue", fc.hue),
            ("fixed_color.chroma", fc.chroma),
        ] {
            if !v.is_finite() {
                return Err(ChromaError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    /// Return a copy with every numeric field clamped into its control range.
    pub fn clamped(self) -> Self {
        let fc = self.fixed_color;
        Self {
            total_shapes: self
                .total_shapes
                .clamp(*TOTAL_SHAPES_RANGE.start(), *TOTAL_SHAPES_RANGE.end()),
            angle_step: self
                .angle_step
                .clamp(*ANGLE_STEP_RANGE.start(), *ANGLE_STEP_RANGE.end()),
            radius_step: self
                .radius_step
                .clamp(*RADIUS_STEP_RANGE.start(), *RADIUS_STEP_RANGE.end()),
            fixed_color: FixedColor {
                lightness: fc.lightness.clamp(0.0, 100.0),
                hue: fc.hue.clamp(0.0, 360.0),
                chroma: fc.chroma.clamp(0.0, 100.0),
                ..fc
            },
            ..self
        }
    }
}

// Mode fields accept either a control-surface index or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexOrName {
    Index(i64),
    Name(String),
}

impl Serialize for LayoutMode {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LayoutMode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match IndexOrName::deserialize(d)? {
            IndexOrName::Index(i) => Ok(Self::from_index(i)),
            IndexOrName::Name(n) => Self::from_name(&n)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown layout mode \"{n}\""))),
        }
    }
}

impl Serialize for ShadowMode {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ShadowMode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match IndexOrName::deserialize(d)? {
            IndexOrName::Index(i) => Ok(Self::from_index(i)),
            IndexOrName::Name(n) => Self::from_name(&n)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown shadow mode \"{n}\""))),
        }
    }
}

impl Serialize for ShapeFilter {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => s.serialize_str("all"),
            Self::Only(k) => s.serialize_str(k.name()),
        }
    }
}

impl<'de> Deserialize<'de> for ShapeFilter {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match IndexOrName::deserialize(d)? {
            IndexOrName::Index(i) => Ok(Self::from_index(i)),
            IndexOrName::Name(n) if n.trim().eq_ignore_ascii_case("all") => Ok(Self::All),
            IndexOrName::Name(n) => ShapeKind::from_name(&n)
                .map(Self::Only)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown shape kind \"{n}\""))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/params.rs"]
mod tests;
