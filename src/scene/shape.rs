use std::fmt;

use crate::color::lch::Lch;
use crate::foundation::core::{Point, Rgb8};
use crate::shadow::policy::ShadowPair;

/// Closed set of drawable shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Teardrop built from two cubic curves.
    Droplet,
    /// Axis-aligned ellipse.
    Ellipse,
    /// Circle sized by the smaller extent.
    Circle,
    /// Rhombus.
    Diamond,
    /// Five-pointed star.
    Star,
    /// Leaf shape hanging from its origin.
    Petal,
}

/// Axis along which a kind's shadow copies are displaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowAxis {
    /// Local x.
    X,
    /// Local y.
    Y,
}

impl ShapeKind {
    /// All kinds in control-surface order.
    pub const ALL: [ShapeKind; 6] = [
        Self::Droplet,
        Self::Ellipse,
        Self::Circle,
        Self::Diamond,
        Self::Star,
        Self::Petal,
    ];

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Droplet => "droplet",
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Star => "star",
            Self::Petal => "petal",
        }
    }

    /// Parse a display name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Droplets and petals hang vertically, so their shadows shift along y.
    pub fn shadow_axis(self) -> ShadowAxis {
        match self {
            Self::Droplet | Self::Petal => ShadowAxis::Y,
            Self::Ellipse | Self::Circle | Self::Diamond | Self::Star => ShadowAxis::X,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which kinds a scene cycles through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeFilter {
    /// Cycle through every kind by index.
    #[default]
    All,
    /// Use a single kind.
    Only(ShapeKind),
}

impl ShapeFilter {
    /// Coerce a control-surface index: `0..=5` picks a kind, anything else means all kinds.
    pub fn from_index(i: i64) -> Self {
        usize::try_from(i)
            .ok()
            .and_then(|i| ShapeKind::ALL.get(i).copied())
            .map_or(Self::All, Self::Only)
    }

    /// Control-surface index (`-1` for all kinds).
    pub fn index(self) -> i64 {
        match self {
            Self::All => -1,
            Self::Only(k) => k as i64,
        }
    }

    /// Kinds to cycle through, never empty.
    pub fn kinds(&self) -> &[ShapeKind] {
        match self {
            Self::All => &ShapeKind::ALL,
            Self::Only(k) => std::slice::from_ref(k),
        }
    }

    /// Kind of shape `i`: `kinds[i mod len]`.
    pub fn kind_at(&self, i: usize) -> ShapeKind {
        let kinds = self.kinds();
        kinds[i % kinds.len()]
    }
}

/// Fully resolved description of one shape. Never mutated after a rebuild.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShapeDescriptor {
    /// Position in the scene, which is also the z-order.
    pub index: usize,
    /// Canvas position of the shape center.
    pub position: Point,
    /// Horizontal base radius.
    pub rx: f64,
    /// Vertical base radius.
    pub ry: f64,
    /// Perceptual fill color.
    pub color: Lch,
    /// Display fill color resolved from `color`.
    pub fill: Rgb8,
    /// Rotation in radians.
    pub rotation: f64,
    /// Drawn shape.
    pub kind: ShapeKind,
    /// Shadow colors.
    pub shadow: ShadowPair,
}
