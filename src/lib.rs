//! Chromaspiral is a parametric generative-art renderer.
//!
//! Shapes are placed along spiral or wave-grid layouts, colored in CIE LCh and drawn with a
//! pseudo-3D black/white drop shadow that drifts with a background fade cycle. The API is
//! session-oriented:
//!
//! - Load a [`SketchConfig`]
//! - Create a [`SketchSession`]
//! - Tick and draw onto any [`DrawSurface`], or stream a range into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Background fade and shadow phase.
pub mod animation;
/// LCh color mapping.
pub mod color;
/// JSON sketch configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Layout algorithms.
pub mod layout;
/// Drawing surfaces and scene drawing.
pub mod render;
/// Scene model and builder.
pub mod scene;
/// Session-oriented driver.
pub mod session;
/// Shadow side policy.
pub mod shadow;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rgb8, Vec2,
};
pub use crate::foundation::error::{ChromaError, ChromaResult};

pub use crate::animation::state::{AnimationSettings, AnimationState, FrameState};
pub use crate::color::lch::{GamutMapped, Lch, map_to_gamut, to_display_color};
pub use crate::config::sketch::SketchConfig;
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::layout::engine::{LayoutMode, LayoutSpec, Placement, layout};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::surface::{DrawSurface, FrameRGBA};
pub use crate::scene::builder::SceneBuilder;
pub use crate::scene::params::{FixedColor, GenerationParams};
pub use crate::scene::shape::{ShapeDescriptor, ShapeFilter, ShapeKind};
pub use crate::session::sketch::{RenderStats, SketchSession, WheelModifiers};
pub use crate::shadow::policy::{ShadowColor, ShadowMode, ShadowPair, assign_shadow_colors};
