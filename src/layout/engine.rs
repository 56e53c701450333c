use std::f64::consts::TAU;
use std::fmt;

use crate::foundation::core::Point;
use crate::foundation::math::map_range;

/// Radius of the first shape in the spiral layouts.
pub const START_RADIUS: f64 = 30.0;
/// Fixed radial step of the golden spiral.
pub const GOLDEN_RADIUS_STEP: f64 = 1.5;
/// Golden angle in degrees.
pub const GOLDEN_ANGLE_DEG: f64 = 137.5;

const MIN_SCALE: f64 = 0.4;
const MAX_SCALE: f64 = 1.0;

const WAVE_DX: f64 = 36.0;
const WAVE_DY: f64 = 42.0;
const WAVE_AMPLITUDE: f64 = 30.0;
const WAVE_CYCLES: f64 = 4.0;

/// Spatial layout algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Archimedean spiral with a configurable angle step.
    #[default]
    Linear,
    /// Phyllotaxis spiral using the golden angle.
    Golden,
    /// Spiral whose angular direction alternates with index parity.
    Double,
    /// Centered grid with a sine displacement per column.
    Wave,
}

impl LayoutMode {
    /// All modes in control-surface order.
    pub const ALL: [LayoutMode; 4] = [Self::Linear, Self::Golden, Self::Double, Self::Wave];

    /// Coerce a control-surface index; anything outside `0..=3` falls back to `Linear`.
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
            Self::Linear => "linear",
            Self::Golden => "golden",
            Self::Double => "double",
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

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs shared by every index of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Algorithm.
    pub mode: LayoutMode,
    /// Total number of shapes `N`.
    pub total: usize,
    /// Angle multiplier for Linear and Double, fed to `sin`/`cos` as-is.
    pub angle_step: f64,
    /// Radial step for Linear and Double.
    pub radius_step: f64,
    /// Layout origin (canvas center).
    pub center: Point,
    /// Whether spiral layouts rotate each shape to its angle.
    pub rotate: bool,
}

/// Where one shape goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Canvas position of the shape center.
    pub position: Point,
    /// Rotation in radians.
    pub rotation: f64,
    /// Size multiplier applied to the base extents.
    pub scale: f64,
}

/// Grid dimensions of the wave layout for `N` shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveGrid {
    /// `floor(sqrt(N))`, at least 1.
    pub columns: usize,
    /// `ceil(N / columns)`.
    pub rows: usize,
}

impl WaveGrid {
    /// Grid for `total` shapes.
    pub fn for_total(total: usize) -> Self {
        let columns = total.isqrt().max(1);
        Self {
            columns,
            rows: total.div_ceil(columns),
        }
    }

    /// `(column, row)` of shape `i`.
    pub fn cell(self, i: usize) -> (usize, usize) {
        (i % self.columns, i / self.columns)
    }

    /// Column position normalized to `[0, 1]`; a single column maps to 0.
    pub fn column_t(self, column: usize) -> f64 {
        map_range(column as f64, 0.0, (self.columns - 1) as f64, 0.0, 1.0)
    }
}

/// Compute the placement of shape `i`.
pub fn layout(spec: &LayoutSpec, i: usize) -> Placement {
    let fi = i as f64;
    let n = spec.total as f64;
    match spec.mode {
        LayoutMode::Linear => {
            let angle = fi * spec.angle_step;
            let radius = START_RADIUS + fi * spec.radius_step;
            spiral(spec, angle, radius, START_RADIUS + n * spec.radius_step)
        }
        LayoutMode::Golden => {
            let angle = fi * GOLDEN_ANGLE_DEG.to_radians();
            let radius = START_RADIUS + fi * GOLDEN_RADIUS_STEP;
            spiral(spec, angle, radius, START_RADIUS + n * GOLDEN_RADIUS_STEP)
        }
        LayoutMode::Double => {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let angle = fi * spec.angle_step * direction;
            let radius = START_RADIUS + fi * spec.radius_step;
            spiral(spec, angle, radius, START_RADIUS + n * spec.radius_step)
        }
        LayoutMode::Wave => wave(spec, i),
    }
}

fn spiral(spec: &LayoutSpec, angle: f64, radius: f64, outer_radius: f64) -> Placement {
    Placement {
        position: Point::new(
            spec.center.x + radius * angle.cos(),
            spec.center.y + radius * angle.sin(),
        ),
        rotation: if spec.rotate { angle } else { 0.0 },
        scale: map_range(radius, START_RADIUS, outer_radius, MIN_SCALE, MAX_SCALE),
    }
}

fn wave(spec: &LayoutSpec, i: usize) -> Placement {
    let grid = WaveGrid::for_total(spec.total);
    let (col, row) = grid.cell(i);
    let cols = grid.columns as f64;
    let rows = grid.rows as f64;

    let k = TAU * WAVE_CYCLES / cols;
    let y_offset = (k * col as f64).sin() * WAVE_AMPLITUDE;
    Placement {
        position: Point::new(
            spec.center.x + col as f64 * WAVE_DX - (cols - 1.0) * WAVE_DX / 2.0,
            spec.center.y + row as f64 * WAVE_DY - (rows - 1.0) * WAVE_DY / 2.0 + y_offset,
        ),
        rotation: 0.0,
        scale: 1.0,
    }
}

/// Angle of shape `i` on the plain linear spiral, `i * angle_step`.
///
/// Shadow modes key off this angle whatever the layout.
pub fn base_angle(i: usize, angle_step: f64) -> f64 {
    i as f64 * angle_step
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
