//! JSON boundary configuration.

/// `SketchConfig`: canvas, timing, seed, generation and animation settings.
pub mod sketch;
