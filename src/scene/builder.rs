use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::state::AnimationState;
use crate::color::lch::Lch;
use crate::foundation::core::{Canvas, Point};
use crate::layout::engine::{LayoutMode, LayoutSpec, WaveGrid, base_angle, layout};
use crate::scene::params::GenerationParams;
use crate::scene::shape::ShapeDescriptor;
use crate::shadow::policy::assign_shadow_colors;

/// Base radius of every shape before layout scaling.
pub const BASE_RADIUS: f64 = 16.0;
/// Chroma used when colors are random.
pub const RANDOM_CHROMA: f64 = 100.0;
/// Pointer distance within which a press selects a shape.
pub const PICK_THRESHOLD: f64 = 25.0;

const LIGHTNESS_BANDS: [f64; 4] = [30.0, 50.0, 70.0, 90.0];

/// Owns the current shape collection and regenerates it wholesale.
///
/// Random hues are drawn from a seeded stream that continues across rebuilds, so a builder with
/// the same seed fed the same parameter sequence reproduces the same scenes.
pub struct SceneBuilder {
    canvas: Canvas,
    rng: StdRng,
    shapes: Arc<[ShapeDescriptor]>,
    generation: u64,
}

impl SceneBuilder {
    /// Create a builder with an empty collection.
    pub fn new(canvas: Canvas, seed: u64) -> Self {
        Self {
            canvas,
            rng: StdRng::seed_from_u64(seed),
            shapes: Arc::from(Vec::new()),
            generation: 0,
        }
    }

    /// Regenerate the whole collection and publish it.
    ///
    /// The shadow inversion flag is read from `anim` once, before any shape is built.
    #[tracing::instrument(skip(self, params, anim), fields(layout = %params.layout, total = params.total_shapes))]
    pub fn rebuild(
        &mut self,
        params: &GenerationParams,
        anim: &AnimationState,
    ) -> Arc<[ShapeDescriptor]> {
        let shapes = build_shapes(params, self.canvas, anim.is_inverted(), &mut self.rng);
        self.shapes = Arc::from(shapes);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            shapes = self.shapes.len(),
            inverted = anim.is_inverted(),
            "scene rebuilt"
        );
        Arc::clone(&self.shapes)
    }

    /// Current collection, always fully built.
    pub fn shapes(&self) -> Arc<[ShapeDescriptor]> {
        Arc::clone(&self.shapes)
    }

    /// Number of rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Canvas the scene is laid out on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// First shape in draw order whose center is within [`PICK_THRESHOLD`] of `point`.
    pub fn pick(&self, point: Point) -> Option<usize> {
        pick_first(&self.shapes, point, PICK_THRESHOLD)
    }
}

/// Build the ordered descriptors for `params`.
///
/// Hues are drawn from `rng` only when fixed-color mode is off, one draw per shape in index order.
pub fn build_shapes<R: Rng>(
    params: &GenerationParams,
    canvas: Canvas,
    inverted: bool,
    rng: &mut R,
) -> Vec<ShapeDescriptor> {
    let n = params.total_shapes;
    let spec = LayoutSpec {
        mode: params.layout,
        total: n,
        angle_step: params.angle_step,
        radius_step: params.radius_step,
        center: canvas.center(),
        rotate: params.rotate_shapes,
    };
    let grid = WaveGrid::for_total(n);
    let height = f64::from(canvas.height);
    let fixed = params.fixed_color;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let placement = layout(&spec, i);
        let shadow = assign_shadow_colors(
            params.shadow,
            base_angle(i, params.angle_step),
            placement.position.y,
            height,
            inverted,
        );

        let color = if fixed.enabled {
            Lch::new(fixed.lightness, fixed.chroma, fixed.hue)
        } else {
            let lightness = if params.layout == LayoutMode::Wave {
                let (col, _) = grid.cell(i);
                band_lightness(grid.column_t(col))
            } else {
                band_lightness(i as f64 / n as f64)
            };
            Lch::new(lightness, RANDOM_CHROMA, rng.random_range(0.0..360.0))
        };

        out.push(ShapeDescriptor {
            index: i,
            position: placement.position,
            rx: BASE_RADIUS * placement.scale,
            ry: BASE_RADIUS * placement.scale,
            color,
            fill: color.to_rgb8(),
            rotation: placement.rotation,
            kind: params.shape.kind_at(i),
            shadow,
        });
    }
    out
}

// Quartile bands: [0, .25) -> 30, [.25, .5) -> 50, [.5, .75) -> 70, rest -> 90.
fn band_lightness(t: f64) -> f64 {
    let band = if t < 0.25 {
        0
    } else if t < 0.5 {
        1
    } else if t < 0.75 {
        2
    } else {
        3
    };
    LIGHTNESS_BANDS[band]
}

/// Linear scan in draw order; the first shape strictly within `threshold` wins.
pub fn pick_first(shapes: &[ShapeDescriptor], point: Point, threshold: f64) -> Option<usize> {
    shapes
        .iter()
        .position(|s| (s.position - point).hypot() < threshold)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
