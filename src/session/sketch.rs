use std::sync::Arc;

use crate::animation::state::{AnimationSettings, AnimationState, FrameState};
use crate::config::sketch::SketchConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point};
use crate::foundation::error::{ChromaError, ChromaResult};
use crate::render::cpu::CpuSurface;
use crate::render::draw::draw_scene;
use crate::render::surface::{DrawSurface, FrameRGBA};
use crate::scene::builder::SceneBuilder;
use crate::scene::params::{ANGLE_STEP_RANGE, GenerationParams, RADIUS_STEP_RANGE};
use crate::scene::shape::ShapeDescriptor;

/// Angle-step change per wheel notch.
pub const WHEEL_ANGLE_STEP: f64 = 0.1;
/// Angle-step change per wheel notch with Shift held.
pub const WHEEL_ANGLE_STEP_FAST: f64 = 0.5;
/// Radius-step change per wheel notch (Alt held).
pub const WHEEL_RADIUS_STEP: f64 = 0.05;
/// Radius-step change per wheel notch with Alt and Shift held.
pub const WHEEL_RADIUS_STEP_FAST: f64 = 0.2;

/// Modifier keys held during a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelModifiers {
    /// Larger steps.
    pub shift: bool,
    /// Adjust `radius_step` instead of `angle_step`.
    pub alt: bool,
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames drawn and pushed to the sink.
    pub frames_rendered: u64,
    /// Frames ticked without drawing to reach the range start.
    pub frames_skipped: u64,
    /// Background fade bounces seen while rendering.
    pub bounces: u64,
}

/// Owner of everything that changes while a sketch runs.
///
/// Parameter changes rebuild synchronously; the shape collection is published as one
/// `Arc<[ShapeDescriptor]>` so callers holding the previous collection keep a complete one.
pub struct SketchSession {
    canvas: Canvas,
    fps: Fps,
    params: GenerationParams,
    settings: AnimationSettings,
    builder: SceneBuilder,
    anim: AnimationState,
    selected: Option<usize>,
    ticks: u64,
}

impl SketchSession {
    /// Validate `config`, clamp its controls and build the first scene.
    pub fn new(config: SketchConfig) -> ChromaResult<Self> {
        let config = config.resolved()?;
        let anim = AnimationState::new();
        let mut builder = SceneBuilder::new(config.canvas, config.seed);
        builder.rebuild(&config.params, &anim);
        Ok(Self {
            canvas: config.canvas,
            fps: config.fps,
            params: config.params,
            settings: config.animation,
            builder,
            anim,
            selected: None,
            ticks: 0,
        })
    }

    /// Canvas the scene is laid out on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Current generation parameters (clamped).
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Current background fade settings.
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Animation state after the last tick.
    pub fn animation(&self) -> &AnimationState {
        &self.anim
    }

    /// Replace the generation parameters.
    ///
    /// Values are clamped into their control ranges. Returns `true` when the scene was rebuilt;
    /// unchanged parameters keep the current collection.
    pub fn set_params(&mut self, params: GenerationParams) -> ChromaResult<bool> {
        params.validate()?;
        let params = params.clamped();
        if params == self.params {
            return Ok(false);
        }
        self.params = params;
        self.rebuild();
        Ok(true)
    }

    /// Edit the generation parameters in place, then apply them like [`Self::set_params`].
    pub fn update_params(
        &mut self,
        edit: impl FnOnce(&mut GenerationParams),
    ) -> ChromaResult<bool> {
        let mut params = self.params;
        edit(&mut params);
        self.set_params(params)
    }

    /// Replace the background fade settings. Never rebuilds.
    pub fn set_animation(&mut self, settings: AnimationSettings) -> ChromaResult<()> {
        if !settings.fade_speed.is_finite() {
            return Err(ChromaError::validation(
                "animation.fade_speed must be finite",
            ));
        }
        self.settings = settings.clamped();
        Ok(())
    }

    /// Mouse wheel: scroll up (`delta_y < 0`) raises the step, anything else lowers it.
    ///
    /// Without Alt the angle step moves; with Alt the radius step does. Always rebuilds.
    pub fn wheel(&mut self, delta_y: f64, mods: WheelModifiers) {
        let sign = if delta_y < 0.0 { 1.0 } else { -1.0 };
        if mods.alt {
            let step = if mods.shift {
                WHEEL_RADIUS_STEP_FAST
            } else {
                WHEEL_RADIUS_STEP
            };
            self.params.radius_step = (self.params.radius_step + sign * step)
                .clamp(*RADIUS_STEP_RANGE.start(), *RADIUS_STEP_RANGE.end());
        } else {
            let step = if mods.shift {
                WHEEL_ANGLE_STEP_FAST
            } else {
                WHEEL_ANGLE_STEP
            };
            self.params.angle_step = (self.params.angle_step + sign * step)
                .clamp(*ANGLE_STEP_RANGE.start(), *ANGLE_STEP_RANGE.end());
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.builder.rebuild(&self.params, &self.anim);
        self.selected = None;
    }

    /// Current shape collection in draw order.
    pub fn shapes(&self) -> Arc<[ShapeDescriptor]> {
        self.builder.shapes()
    }

    /// Number of scene builds so far, the initial one included.
    pub fn generation(&self) -> u64 {
        self.builder.generation()
    }

    /// Advance the animation one frame. Returns `true` when the background fade bounced.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        self.anim.update(&self.settings)
    }

    /// Number of ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Index of the frame the next tick produces.
    pub fn next_frame(&self) -> FrameIndex {
        FrameIndex(self.ticks)
    }

    /// Tick without drawing until the next tick produces `frame`.
    pub fn skip_to(&mut self, frame: FrameIndex) -> ChromaResult<u64> {
        if frame.0 < self.ticks {
            return Err(ChromaError::validation(format!(
                "cannot rewind from frame {} to frame {}",
                self.ticks, frame.0
            )));
        }
        let skipped = frame.0 - self.ticks;
        for _ in 0..skipped {
            self.tick();
        }
        Ok(skipped)
    }

    /// Background gray and shadow offsets for the current animation state.
    pub fn frame_state(&self) -> FrameState {
        self.anim.frame_state()
    }

    /// Pointer press: select the first shape in draw order near `point`, or clear the selection.
    pub fn press(&mut self, point: Point) -> Option<usize> {
        self.selected = self.builder.pick(point);
        if let Some(i) = self.selected {
            tracing::debug!(index = i, x = point.x, y = point.y, "shape selected");
        }
        self.selected
    }

    /// Index of the selected shape, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<ShapeDescriptor> {
        let i = self.selected?;
        self.builder.shapes().get(i).copied()
    }

    /// Draw the current collection with the current frame state.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> ChromaResult<()> {
        draw_scene(surface, &self.builder.shapes(), &self.frame_state())
    }

    /// Tick once and rasterize the resulting frame.
    pub fn render_next(&mut self, surface: &mut CpuSurface) -> ChromaResult<FrameRGBA> {
        self.tick();
        surface.render(&self.builder.shapes(), &self.frame_state())
    }

    /// Render `range` into `sink`, one tick per frame.
    ///
    /// Frames before `range.start` that have not been produced yet are ticked without drawing.
    #[tracing::instrument(skip(self, surface, sink), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        surface: &mut CpuSurface,
        sink: &mut dyn FrameSink,
    ) -> ChromaResult<RenderStats> {
        if range.is_empty() {
            return Err(ChromaError::validation(
                "render_range range must be non-empty",
            ));
        }
        if surface.canvas() != self.canvas {
            return Err(ChromaError::validation(format!(
                "surface is {}x{}, session canvas is {}x{}",
                surface.canvas().width,
                surface.canvas().height,
                self.canvas.width,
                self.canvas.height
            )));
        }

        let mut stats = RenderStats {
            frames_total: range.len_frames(),
            frames_skipped: self.skip_to(range.start)?,
            ..RenderStats::default()
        };

        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        })?;
        for idx in range.start.0..range.end.0 {
            if self.tick() {
                stats.bounces += 1;
            }
            let frame = surface.render(&self.builder.shapes(), &self.frame_state())?;
            sink.push_frame(FrameIndex(idx), &frame)?;
            stats.frames_rendered += 1;
        }
        sink.end()?;

        tracing::debug!(
            rendered = stats.frames_rendered,
            skipped = stats.frames_skipped,
            bounces = stats.bounces,
            "range rendered"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sketch.rs"]
mod tests;
